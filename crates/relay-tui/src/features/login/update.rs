//! Login screen reducer logic.

use crossterm::event::{KeyCode, KeyEvent};
use relay_core::client::LoginOutcome;
use relay_core::session::Session;

use crate::common::{LONG_MESSAGE_DURATION, StatusMessage};
use crate::effects::UiEffect;

use super::state::{LoginField, LoginScreen};

/// Shown when the server rejects the credentials.
pub const MSG_INVALID_LOGIN: &str = "Invalid login or password";
/// Shown when the server cannot be reached.
pub const MSG_CANNOT_CONNECT: &str = "Cannot connect to server";

/// Handles a key press on the login screen.
pub fn handle_key(screen: &mut LoginScreen, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Enter => return submit(screen),
        KeyCode::Tab | KeyCode::Down => {
            screen.focus = screen.focus.next();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focus = screen.focus.prev();
            return vec![];
        }
        KeyCode::Char(' ') if screen.focus == LoginField::Remember => {
            screen.remember = !screen.remember;
            return vec![];
        }
        _ => {}
    }

    if let Some(field) = screen.focused_field_mut() {
        field.handle_key(key);
    }
    vec![]
}

/// Submits the form.
///
/// The remember-me choice is persisted first, unconditionally, matching the
/// stored-preference contract. The network call only goes out for a
/// non-empty username; credentials are sent exactly as typed.
fn submit(screen: &mut LoginScreen) -> Vec<UiEffect> {
    // Drop keyboard focus from the fields while the submission runs.
    screen.focus = LoginField::Submit;

    let username = screen.username.value().to_string();
    let password = screen.password.value().to_string();

    let mut effects = vec![UiEffect::PersistLogin {
        remember: screen.remember,
        username: username.clone(),
        password: password.clone(),
    }];

    if !username.is_empty() {
        screen.in_flight += 1;
        effects.push(UiEffect::SubmitLogin { username, password });
    }

    effects
}

/// Applies a login completion to the screen.
///
/// Returns the session to navigate with when the server accepted the
/// credentials. The session is built from `username` as it was submitted,
/// not from the field, which may have been edited while the request was in
/// flight. Rejection and transport failure keep the screen as it is, fields
/// included, and raise a transient status message.
pub fn handle_result(
    screen: &mut LoginScreen,
    username: &str,
    result: Result<LoginOutcome, String>,
) -> Option<Session> {
    screen.in_flight = screen.in_flight.saturating_sub(1);

    match result {
        Ok(LoginOutcome::Accepted) => Some(Session::new(username)),
        Ok(LoginOutcome::Rejected { status }) => {
            tracing::info!(status, "login rejected");
            screen.status = Some(StatusMessage::new(MSG_INVALID_LOGIN, LONG_MESSAGE_DURATION));
            None
        }
        Err(error) => {
            tracing::error!(error = %error, "login request failed");
            screen.status = Some(StatusMessage::new(
                MSG_CANNOT_CONNECT,
                LONG_MESSAGE_DURATION,
            ));
            None
        }
    }
}
