// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Undangan invitation manager.

use thiserror::Error;

use crate::traits::ContactError;

/// The primary error type used across the Undangan workspace.
#[derive(Debug, Error)]
pub enum UndanganError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database open, query failure, backup).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A stored collection contains JSON that no longer deserializes.
    ///
    /// Surfaced to the caller rather than silently read as empty; the CLI
    /// reports it and aborts the triggering action.
    #[error("corrupt data in `{collection}`: {source}")]
    Parse {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    /// User-input validation errors (empty name, malformed phone, bad CSV,
    /// import envelope schema mismatch). The operation is aborted with no
    /// partial state change.
    #[error("{0}")]
    Validation(String),

    /// Contact-picker errors. `ContactError::Cancelled` is suppressed by
    /// callers; the other variants surface as user messages.
    #[error(transparent)]
    Contacts(#[from] ContactError),

    /// Clipboard write failed or no clipboard is available.
    #[error("clipboard error: {message}")]
    Clipboard { message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl UndanganError {
    /// Wrap any error as a storage error.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            source: Box::new(source),
        }
    }
}
