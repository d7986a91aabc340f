//! HTTP client for the results server login endpoint.

use anyhow::{Context, Result};

/// Path of the login endpoint (the "verify last result" call).
const LOGIN_PATH: &str = "/api/v1/results/last";

/// Outcome of a login submission that reached the server.
///
/// Transport failures (DNS, refused connection, timeout) are not outcomes;
/// they surface as the `Err` side of the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The server accepted the credentials (2xx).
    Accepted,
    /// The server rejected the credentials (any non-2xx status).
    Rejected { status: u16 },
}

/// Submits credentials to the results server.
///
/// Exactly one of three things happens: `Ok(Accepted)`, `Ok(Rejected)`, or
/// `Err` when the server could not be reached. The response body is ignored;
/// only the status class matters. Credentials are sent exactly as given, no
/// trimming or normalization.
///
/// # Errors
/// Returns an error if the request cannot be delivered.
pub async fn submit_login(base_url: &str, username: &str, password: &str) -> Result<LoginOutcome> {
    let url = format!("{}{LOGIN_PATH}", base_url.trim_end_matches('/'));

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .send()
        .await
        .with_context(|| format!("Failed to reach server at {url}"))?;

    let status = response.status();
    if status.is_success() {
        Ok(LoginOutcome::Accepted)
    } else {
        Ok(LoginOutcome::Rejected {
            status: status.as_u16(),
        })
    }
}
