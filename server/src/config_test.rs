use super::*;

use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers hold `env_guard()` so tests in this module never race on env.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("DOCS_DIR");
        std::env::remove_var("HEADING_MAX_DEPTH");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_guard();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.heading_max_depth, 3);
    assert!(cfg.docs_dir.ends_with("docs"));
    assert_eq!(cfg.load_options(), LoadOptions::default());
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8081");
        std::env::set_var("DOCS_DIR", "/srv/cookbook");
        std::env::set_var("HEADING_MAX_DEPTH", "9");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.docs_dir, PathBuf::from("/srv/cookbook"));
    assert_eq!(cfg.heading_max_depth, 6);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });

    unsafe { clear_server_env() };
}
