//! Core functionality for Relay: configuration, stored login
//! preferences, the results-server client, and logging setup.

pub mod client;
pub mod config;
pub mod logging;
pub mod prefs;
pub mod session;
