//! Application state composition.
//!
//! The TUI has two screens with no back navigation between them:
//!
//! ```text
//! AppState
//! ├── config: Config        (server address)
//! ├── should_quit: bool
//! └── screen: Screen
//!     ├── Login(LoginScreen)  (fields, checkbox, status message)
//!     └── Home(HomeScreen)    (signed-in session)
//! ```
//!
//! Navigating to the home screen replaces the `Screen` value, dropping the
//! login screen state entirely. A login completion arriving after that is
//! ignored by the reducer.

use relay_core::config::Config;
use relay_core::prefs::LoginPrefs;

use crate::features::home::HomeScreen;
use crate::features::login::LoginScreen;

/// The active screen.
pub enum Screen {
    Login(LoginScreen),
    Home(HomeScreen),
}

/// Top-level application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Loaded configuration (server address).
    pub config: Config,
    /// The screen currently shown.
    pub screen: Screen,
}

impl AppState {
    /// Creates the initial state on the login screen, pre-populated from the
    /// stored login preference.
    pub fn new(config: Config, prefs: &LoginPrefs) -> Self {
        Self {
            should_quit: false,
            config,
            screen: Screen::Login(LoginScreen::from_prefs(prefs)),
        }
    }
}
