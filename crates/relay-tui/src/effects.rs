//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Apply the remember-me choice to the stored login preference.
    ///
    /// With `remember` set the credentials are written; otherwise the whole
    /// preference file is removed. Failures are logged, not surfaced.
    PersistLogin {
        remember: bool,
        username: String,
        password: String,
    },

    /// Submit credentials to the results server.
    ///
    /// Resolves to a `UiEvent::LoginResult` on the inbox. Submissions are
    /// not deduplicated; each effect issues its own request.
    SubmitLogin { username: String, password: String },
}
