//! Signed-in session state.

/// The signed-in user, created after an accepted login.
///
/// Owned by whatever screen or command holds the session; there is no
/// process-wide current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
