//! UI event types.
//!
//! Events are the inputs to the reducer. They come from the terminal,
//! the tick timer, and async handlers posting results to the inbox.

use relay_core::client::LoginOutcome;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick for animations and timed state (status message expiry).
    Tick,

    /// Raw terminal event (key press, resize).
    Terminal(crossterm::event::Event),

    /// Completion of a login submission.
    ///
    /// `Ok` means the server answered (accepted or rejected); `Err` carries
    /// a rendered transport error. Exactly one of these arrives per
    /// submission, possibly after the login screen is already gone.
    ///
    /// Carries the username that was actually submitted: the field may have
    /// been edited while the request was in flight, and the session must
    /// name the user the server authenticated.
    LoginResult {
        username: String,
        result: Result<LoginOutcome, String>,
    },
}
