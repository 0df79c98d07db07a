use super::*;

#[test]
fn env_info_endpoint_joins_base() {
    assert_eq!(env_info_endpoint("http://localhost:8080/"), "http://localhost:8080/env_info");
}

#[test]
fn docs_failed_message_formats_status() {
    assert_eq!(docs_failed_message(503), "loading documents failed: 503");
}

#[test]
fn chat_api_base_has_a_value() {
    assert!(chat_api_base().starts_with("http"));
}

#[test]
fn native_build_has_no_network() {
    futures::executor::block_on(async {
        assert!(fetch_docs().await.is_err());
        assert!(fetch_env_info(DEFAULT_CHAT_API_URL).await.is_none());
        assert!(!ping("http://localhost:8080/vnc/vnc_lite.html").await);
        assert!(resolve_viewer(DEFAULT_CHAT_API_URL).await.is_none());
    });
}
