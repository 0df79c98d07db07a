use std::cell::{Cell, RefCell};

use super::*;

// =============================================================
// Viewer URL
// =============================================================

#[test]
fn viewer_url_swaps_api_segment_and_encodes_token() {
    let url = viewer_url("http://sandbox:8000/fastapi", "a b&c=d");
    assert_eq!(url, "http://sandbox:8000/vnc/vnc_lite.html?password=a%20b%26c%3Dd");
}

#[test]
fn viewer_url_replaces_first_segment_only() {
    let url = viewer_url("http://h/fastapi/x/fastapi", "t");
    assert_eq!(url, "http://h/vnc/vnc_lite.html/x/fastapi?password=t");
}

#[test]
fn env_info_parses_camel_case_body() {
    let info: EnvInfo =
        serde_json::from_str(r#"{"baseUrl":"http://s/fastapi","runtimeToken":"tok"}"#).unwrap();
    assert_eq!(info.viewer_url().as_deref(), Some("http://s/vnc/vnc_lite.html?password=tok"));
}

#[test]
fn env_info_without_token_has_no_viewer() {
    let info: EnvInfo = serde_json::from_str(r#"{"baseUrl":"http://s/fastapi"}"#).unwrap();
    assert_eq!(info.viewer_url(), None);

    let info = EnvInfo { base_url: Some(String::new()), runtime_token: Some("t".to_owned()) };
    assert_eq!(info.viewer_url(), None);
}

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://localhost:8080/", CHAT_COMPLETIONS_PATH), "http://localhost:8080/v1/chat/completions");
    assert_eq!(endpoint("http://localhost:8080", ENV_INFO_PATH), "http://localhost:8080/env_info");
}

// =============================================================
// Readiness polling
// =============================================================

#[test]
fn ready_on_third_attempt_sleeps_twice() {
    let sleeps = RefCell::new(Vec::new());
    let outcome = futures::executor::block_on(poll_until_ready(
        ReadinessPolicy::default(),
        |attempt| async move { attempt == 3 },
        |delay| {
            sleeps.borrow_mut().push(delay);
            async {}
        },
    ));
    assert_eq!(outcome, Readiness::Ready { attempts: 3 });
    assert_eq!(sleeps.borrow().as_slice(), &[Duration::from_secs(1); 2]);
}

#[test]
fn gives_up_after_max_attempts_without_trailing_sleep() {
    let checks = Cell::new(0);
    let sleeps = Cell::new(0);
    let policy = ReadinessPolicy { max_attempts: 5, delay: Duration::from_millis(10) };
    let outcome = futures::executor::block_on(poll_until_ready(
        policy,
        |_| {
            checks.set(checks.get() + 1);
            async { false }
        },
        |_| {
            sleeps.set(sleeps.get() + 1);
            async {}
        },
    ));
    assert_eq!(outcome, Readiness::GaveUp { attempts: 5 });
    assert!(!outcome.is_ready());
    assert_eq!(checks.get(), 5);
    assert_eq!(sleeps.get(), 4);
}

#[test]
fn ready_immediately_never_sleeps() {
    let sleeps = Cell::new(0);
    let outcome = futures::executor::block_on(poll_until_ready(
        ReadinessPolicy::default(),
        |_| async { true },
        |_| {
            sleeps.set(sleeps.get() + 1);
            async {}
        },
    ));
    assert!(outcome.is_ready());
    assert_eq!(sleeps.get(), 0);
}
