//! Remote desktop viewer discovery.
//!
//! `GET /env_info` returns the sandbox base URL and a runtime token. The
//! viewer page lives next to the sandbox API, so the URL is derived by
//! swapping the `/fastapi` segment for the VNC page and passing the token as
//! the password. The viewer may take a moment to come up; readiness is
//! polled a bounded number of times and the URL is used either way.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "viewer_test.rs"]
mod tests;

/// Path of the chat-completions endpoint relative to the API base.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// Path of the environment info endpoint relative to the API base.
pub const ENV_INFO_PATH: &str = "/env_info";

const API_SEGMENT: &str = "/fastapi";
const VIEWER_PAGE: &str = "/vnc/vnc_lite.html";

/// Body of `GET /env_info`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvInfo {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub runtime_token: Option<String>,
}

impl EnvInfo {
    /// Viewer URL, or `None` when either field is missing or empty.
    #[must_use]
    pub fn viewer_url(&self) -> Option<String> {
        let base_url = self.base_url.as_deref().filter(|v| !v.is_empty())?;
        let token = self.runtime_token.as_deref().filter(|v| !v.is_empty())?;
        Some(viewer_url(base_url, token))
    }
}

/// Build the viewer URL from a sandbox base URL and runtime token.
#[must_use]
pub fn viewer_url(base_url: &str, token: &str) -> String {
    let page = base_url.replacen(API_SEGMENT, VIEWER_PAGE, 1);
    format!("{page}?password={}", urlencoding::encode(token))
}

/// Join an API base URL and an endpoint path.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Bounded retry schedule for readiness checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadinessPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self { max_attempts: 5, delay: Duration::from_secs(1) }
    }
}

/// Outcome of [`poll_until_ready`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Ready { attempts: u32 },
    GaveUp { attempts: u32 },
}

impl Readiness {
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Poll until `check` reports ready or the attempts run out.
///
/// `check` receives the 1-based attempt number. `sleep` runs between
/// attempts, never after the last one. Runtime-agnostic: the caller supplies
/// the timer (`tokio::time::sleep`, `gloo_timers::future::sleep`).
pub async fn poll_until_ready<P, PF, S, SF>(policy: ReadinessPolicy, mut check: P, mut sleep: S) -> Readiness
where
    P: FnMut(u32) -> PF,
    PF: Future<Output = bool>,
    S: FnMut(Duration) -> SF,
    SF: Future<Output = ()>,
{
    for attempt in 1..=policy.max_attempts {
        if check(attempt).await {
            return Readiness::Ready { attempts: attempt };
        }
        if attempt < policy.max_attempts {
            sleep(policy.delay).await;
        }
    }
    Readiness::GaveUp { attempts: policy.max_attempts }
}
