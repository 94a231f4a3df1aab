// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Undangan invitation manager.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and diagnostic error rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use undangan_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("app name: {}", config.app.name);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::UndanganConfig;

/// Load configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that:
/// 1. Loads config from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to diagnostics with typo suggestions
pub fn load_and_validate() -> Result<UndanganConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<UndanganConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_and_validate() {
        let config = load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.app.name, "undangan");
        assert_eq!(config.app.log_level, "info");
        assert!(config.templates.seed_defaults);
    }

    #[test]
    fn unknown_key_is_rejected_with_suggestion() {
        let errors = load_and_validate_str(
            r#"
[app]
nmae = "salah"
"#,
        )
        .unwrap_err();
        assert!(!errors.is_empty());
        let rendered = format!("{:?}", errors[0]);
        assert!(rendered.contains("nmae"), "got: {rendered}");
    }

    #[test]
    fn link_style_parses_both_forms() {
        let config = load_and_validate_str(
            r#"
[send]
link_style = "wa-me"
"#,
        )
        .unwrap();
        assert_eq!(config.send.link_style, model::LinkStyle::WaMe);
    }
}
