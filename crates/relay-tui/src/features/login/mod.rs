//! Login screen feature.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{LoginField, LoginScreen};
pub use update::{MSG_CANNOT_CONNECT, MSG_INVALID_LOGIN, handle_key, handle_result};
