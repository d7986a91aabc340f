//! Transient status messages.
//!
//! A status message is shown until its deadline passes; the tick handler
//! clears expired messages.

use std::time::{Duration, Instant};

/// How long attention-worthy messages stay visible.
pub const LONG_MESSAGE_DURATION: Duration = Duration::from_millis(3500);

/// A status line message with an expiry deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    expires_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
