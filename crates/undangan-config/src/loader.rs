// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./undangan.toml` >
//! `~/.config/undangan/undangan.toml` > `/etc/undangan/undangan.toml`
//! with environment variable overrides via the `UNDANGAN_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::UndanganConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/undangan/undangan.toml` (system-wide)
/// 3. `~/.config/undangan/undangan.toml` (user XDG config)
/// 4. `./undangan.toml` (local directory)
/// 5. `UNDANGAN_*` environment variables
pub fn load_config() -> Result<UndanganConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(UndanganConfig::default()))
        .merge(Toml::file("/etc/undangan/undangan.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("undangan/undangan.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("undangan.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<UndanganConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(UndanganConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<UndanganConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(UndanganConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `UNDANGAN_STORAGE_DATABASE_PATH` must
/// map to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("UNDANGAN_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("templates_", "templates.", 1)
            .replacen("send_", "send.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.app.name, "undangan");
        assert!(config.storage.wal_mode);
    }

    #[test]
    fn toml_values_override_defaults() {
        let config = load_config_from_str(
            r#"
[app]
name = "bayu-shahya"
log_level = "debug"

[storage]
database_path = "/tmp/test.db"
wal_mode = false
"#,
        )
        .unwrap();
        assert_eq!(config.app.name, "bayu-shahya");
        assert_eq!(config.app.log_level, "debug");
        assert_eq!(config.storage.database_path, "/tmp/test.db");
        assert!(!config.storage.wal_mode);
    }
}
