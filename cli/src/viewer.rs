//! Remote desktop viewer lookup.

use std::time::Duration;

use frames::viewer::{ENV_INFO_PATH, endpoint, poll_until_ready};
use frames::{EnvInfo, Readiness, ReadinessPolicy};

use crate::CliError;

/// Fetch `/env_info` and build the viewer URL.
///
/// # Errors
///
/// Returns [`CliError::NoViewer`] when the backend does not advertise one.
pub async fn viewer_url(client: &reqwest::Client, base_url: &str) -> Result<String, CliError> {
    let info: EnvInfo = client
        .get(endpoint(base_url, ENV_INFO_PATH))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    info.viewer_url().ok_or(CliError::NoViewer)
}

/// `HEAD` the viewer; any transport error counts as not ready.
async fn ping(client: reqwest::Client, url: String, attempt: u32) -> bool {
    match client.head(&url).send().await {
        Ok(response) => {
            tracing::debug!(attempt, status = response.status().as_u16(), "viewer ping");
            response.status().is_success()
        }
        Err(error) => {
            tracing::debug!(attempt, error = %error, "viewer ping failed");
            false
        }
    }
}

/// Resolve the viewer URL and wait for it to answer.
///
/// # Errors
///
/// Fails only when the URL itself cannot be obtained; an unready viewer is
/// reported through the returned [`Readiness`].
pub async fn resolve(
    client: &reqwest::Client,
    base_url: &str,
    policy: ReadinessPolicy,
) -> Result<(String, Readiness), CliError> {
    let url = viewer_url(client, base_url).await?;
    let readiness = poll_until_ready(
        policy,
        |attempt| ping(client.clone(), url.clone(), attempt),
        tokio::time::sleep,
    )
    .await;
    Ok((url, readiness))
}

#[must_use]
pub fn policy(attempts: u32, delay_ms: u64) -> ReadinessPolicy {
    ReadinessPolicy { max_attempts: attempts.max(1), delay: Duration::from_millis(delay_ms) }
}
