// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic rendering for configuration errors.
//!
//! Figment errors are converted into miette diagnostics; unknown-key errors
//! get a "did you mean" suggestion computed over the known key set with
//! strsim.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error suitable for user-facing rendering.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum ConfigError {
    /// TOML parse / extraction errors from Figment.
    #[error("{message}")]
    #[diagnostic(code(undangan::config::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Post-deserialization validation errors.
    #[error("{message}")]
    #[diagnostic(code(undangan::config::validation))]
    Validation { message: String },
}

/// Every key that may appear in `undangan.toml`, for typo suggestions.
const KNOWN_KEYS: &[&str] = &[
    "app",
    "storage",
    "templates",
    "send",
    "name",
    "log_level",
    "database_path",
    "wal_mode",
    "seed_defaults",
    "link_style",
];

/// Convert an aggregated Figment error into renderable diagnostics.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| {
            let message = e.to_string();
            ConfigError::Parse {
                help: unknown_key_suggestion(&message),
                message,
            }
        })
        .collect()
}

/// For `unknown field \`x\`` messages, suggest the closest known key.
fn unknown_key_suggestion(message: &str) -> Option<String> {
    if !message.contains("unknown field") {
        return None;
    }
    let field = message.split('`').nth(1)?;

    let (best, distance) = KNOWN_KEYS
        .iter()
        .map(|k| (*k, strsim::levenshtein(field, k)))
        .min_by_key(|(_, d)| *d)?;

    if distance <= 2 {
        Some(format!("did you mean `{best}`?"))
    } else {
        None
    }
}

/// Render all collected errors to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    for err in errors {
        eprintln!("{:?}", miette::Report::new(err.clone()));
    }
}
