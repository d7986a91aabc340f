//! Full-screen TUI implementation for Relay.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use relay_core::config::Config;
use relay_core::prefs::LoginPrefs;
pub use runtime::TuiRuntime;

/// Runs the interactive login flow.
pub async fn run_interactive(config: &Config) -> Result<()> {
    // The TUI needs a terminal to render into
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `relay login --username ... --password ...` for non-interactive login."
        );
    }

    let prefs_path = LoginPrefs::default_path();
    let prefs = LoginPrefs::load_from(&prefs_path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load stored login preference");
        LoginPrefs::default()
    });

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "Relay")?;
    writeln!(err, "Server: {}", config.server_url())?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config.clone(), &prefs)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
