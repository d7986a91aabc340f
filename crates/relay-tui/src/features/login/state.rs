//! Login screen state.

use relay_core::prefs::LoginPrefs;

use crate::common::{StatusMessage, TextField};

/// Focusable elements of the login form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
    Remember,
    Submit,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Remember,
            LoginField::Remember => LoginField::Submit,
            LoginField::Submit => LoginField::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Username => LoginField::Submit,
            LoginField::Password => LoginField::Username,
            LoginField::Remember => LoginField::Password,
            LoginField::Submit => LoginField::Remember,
        }
    }
}

/// State of the login screen.
pub struct LoginScreen {
    pub username: TextField,
    pub password: TextField,
    pub remember: bool,
    pub focus: LoginField,
    /// Transient message shown under the form (rejection, connectivity).
    pub status: Option<StatusMessage>,
    /// Submissions awaiting a result. Display only; overlapping submits are
    /// allowed and each resolves independently.
    pub in_flight: usize,
}

impl LoginScreen {
    /// Creates the login screen, pre-populating the fields from the stored
    /// preference when remember-me was on.
    pub fn from_prefs(prefs: &LoginPrefs) -> Self {
        let (username, password, remember) = if prefs.save_login {
            (
                TextField::with_value(&prefs.username),
                TextField::with_value(&prefs.password),
                true,
            )
        } else {
            (TextField::default(), TextField::default(), false)
        };

        Self {
            username,
            password,
            remember,
            focus: LoginField::Username,
            status: None,
            in_flight: 0,
        }
    }

    /// Returns the focused text field, if the focus is on one.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            LoginField::Username => Some(&mut self.username),
            LoginField::Password => Some(&mut self.password),
            LoginField::Remember | LoginField::Submit => None,
        }
    }

    /// Drops any expired status message. Called on tick.
    pub fn expire_status(&mut self) {
        if self.status.as_ref().is_some_and(StatusMessage::is_expired) {
            self.status = None;
        }
    }
}
