//! Login/logout command handlers.

use anyhow::Result;
use relay_core::client::{self, LoginOutcome};
use relay_core::config::Config;
use relay_core::prefs::LoginPrefs;

/// Non-interactive login.
///
/// Same contract as the login screen: the remember-me choice is applied to
/// the stored preference first, then the credentials go to the server if the
/// username is non-empty.
pub async fn login(config: &Config, username: &str, password: &str, remember: bool) -> Result<()> {
    let prefs_path = LoginPrefs::default_path();
    if let Err(e) = LoginPrefs::store(&prefs_path, remember, username, password) {
        tracing::warn!(error = %e, "could not persist login preference");
    }

    if username.is_empty() {
        anyhow::bail!("Username must not be empty");
    }

    match client::submit_login(&config.server_url(), username, password).await {
        Ok(LoginOutcome::Accepted) => {
            println!("Logged in as {username}");
            Ok(())
        }
        Ok(LoginOutcome::Rejected { status }) => {
            tracing::info!(status, "login rejected");
            anyhow::bail!("Invalid login or password (HTTP {status})")
        }
        Err(e) => {
            tracing::error!(error = %e, "login request failed");
            Err(e.context("Cannot connect to server"))
        }
    }
}

/// Removes the stored login preference.
pub fn logout() -> Result<()> {
    let prefs_path = LoginPrefs::default_path();
    if LoginPrefs::clear_at(&prefs_path)? {
        println!("Logged out.");
    } else {
        println!("No stored login.");
    }
    Ok(())
}
