//! Application directory paths for flowcanvas.
//!
//! Uses the [`dirs`] crate for platform-appropriate resolution.
//!
//! | Purpose | macOS | Linux |
//! |---------|-------|-------|
//! | Config | `~/Library/Application Support/flowcanvas/` | `~/.config/flowcanvas/` |
//!
//! Set `FLOWCANVAS_CONFIG_DIR` to override [`config_dir`] for tests or
//! custom deployments.

use std::path::PathBuf;

/// Environment variable overriding [`config_dir`].
pub const CONFIG_DIR_ENV: &str = "FLOWCANVAS_CONFIG_DIR";

/// Application config directory.
///
/// Holds `config.toml` and the default `nodes.json` catalog.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("flowcanvas"))
        .unwrap_or_else(|| PathBuf::from("/tmp/flowcanvas-config"))
}

/// Main config file path (`config_dir()/config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default nodes document path (`config_dir()/nodes.json`).
#[must_use]
pub fn nodes_file() -> PathBuf {
    config_dir().join("nodes.json")
}
