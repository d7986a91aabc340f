//! Shared UI building blocks.

mod status;
mod text_field;

pub use status::{LONG_MESSAGE_DURATION, StatusMessage};
pub use text_field::TextField;
