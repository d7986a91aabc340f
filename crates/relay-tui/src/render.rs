//! Top-level render dispatch.

use ratatui::Frame;

use crate::features::{home, login};
use crate::state::{AppState, Screen};

/// Renders the current screen.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match &app.screen {
        Screen::Login(screen) => login::render_login(frame, screen, area),
        Screen::Home(screen) => home::render_home(frame, screen, area),
    }
}
