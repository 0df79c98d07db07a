//! REST helpers for the cookbook server and the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a missing
//! backend degrades the page (no viewer, error banner) without breaking
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use cookbook::Doc;
use frames::EnvInfo;
#[cfg(any(test, feature = "hydrate"))]
use frames::viewer::{ENV_INFO_PATH, endpoint};

/// Chat backend used when `CHAT_API_URL` was not set at build time.
pub const DEFAULT_CHAT_API_URL: &str = "http://localhost:8080";

/// Same-origin corpus endpoint served by the cookbook server.
pub const DOCS_ENDPOINT: &str = "/api/docs";

/// Base URL of the chat backend, fixed at build time.
#[must_use]
pub fn chat_api_base() -> &'static str {
    option_env!("CHAT_API_URL").unwrap_or(DEFAULT_CHAT_API_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn env_info_endpoint(base: &str) -> String {
    endpoint(base, ENV_INFO_PATH)
}

#[cfg(any(test, feature = "hydrate"))]
fn docs_failed_message(status: u16) -> String {
    format!("loading documents failed: {status}")
}

/// Fetch every document from `/api/docs`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server answers with a
/// non-OK status, or the body is not a document list.
pub async fn fetch_docs() -> Result<Vec<Doc>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DOCS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(docs_failed_message(resp.status()));
        }
        resp.json::<Vec<Doc>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch `{base}/env_info`. Returns `None` on any failure.
pub async fn fetch_env_info(base: &str) -> Option<EnvInfo> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&env_info_endpoint(base))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<EnvInfo>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        None
    }
}

/// `HEAD url`, true on a 2xx answer.
pub async fn ping(url: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        gloo_net::http::RequestBuilder::new(url)
            .method(gloo_net::http::Method::HEAD)
            .send()
            .await
            .is_ok_and(|resp| resp.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        false
    }
}

/// Resolve the viewer URL and wait (bounded) for it to answer.
///
/// Returns the URL and whether a ping succeeded; the URL is usable either
/// way. `None` when the backend has no complete env info.
pub async fn resolve_viewer(base: &str) -> Option<(String, bool)> {
    let url = fetch_env_info(base).await?.viewer_url()?;
    #[cfg(feature = "hydrate")]
    {
        let readiness = frames::viewer::poll_until_ready(
            frames::ReadinessPolicy::default(),
            |_attempt| ping(&url),
            gloo_timers::future::sleep,
        )
        .await;
        if !readiness.is_ready() {
            leptos::logging::warn!("viewer not ready after {readiness:?}, loading anyway");
        }
        Some((url, readiness.is_ready()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Some((url, false))
    }
}
