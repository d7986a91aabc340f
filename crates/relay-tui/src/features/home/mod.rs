//! Home screen feature (the post-login landing screen).

mod render;

pub use render::render_home;
use relay_core::session::Session;

/// State of the home screen.
pub struct HomeScreen {
    pub session: Session,
}

impl HomeScreen {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}
