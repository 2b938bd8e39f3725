use super::*;

use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()` so env mutations do not race.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("ASSETS_DIR");
        std::env::remove_var("ICON_MANIFEST");
        std::env::remove_var("ICON_CACHE_CAPACITY");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = env_guard();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    assert_eq!(cfg.icon_manifest, None);
    assert_eq!(cfg.icon_cache_capacity, IconRenderer::DEFAULT_CAPACITY);
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("ASSETS_DIR", "/srv/haven");
        std::env::set_var("ICON_MANIFEST", "/srv/haven/icons.json");
        std::env::set_var("ICON_CACHE_CAPACITY", " 32 ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/haven"));
    assert_eq!(cfg.icon_manifest, Some(PathBuf::from("/srv/haven/icons.json")));
    assert_eq!(cfg.icon_cache_capacity, 32);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: 'not-a-port'");

    unsafe { clear_server_env() };
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("ASSETS_DIR", "  ");
        std::env::set_var("ICON_MANIFEST", "");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    assert_eq!(cfg.icon_manifest, None);

    unsafe { clear_server_env() };
}
