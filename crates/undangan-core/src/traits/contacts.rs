// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact-picker adapter trait.

use async_trait::async_trait;
use thiserror::Error;

/// A contact record as returned by a picker: display name plus any number
/// of phone entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub tel: Vec<String>,
}

/// Named failure conditions of a contact picker.
///
/// `Cancelled` is part of normal operation and must be treated as a silent
/// no-op by callers (logged, never shown to the user). The remaining
/// variants are surfaced as user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// No picker is available in this environment.
    #[error("contact picker is not supported in this environment")]
    Unsupported,

    /// The user or platform denied access to contacts.
    #[error("permission to read contacts was denied")]
    PermissionDenied,

    /// A picker invocation is already in flight.
    #[error("contact picker is already open")]
    AlreadyOpen,

    /// The user dismissed the picker without choosing anything.
    #[error("contact selection was cancelled")]
    Cancelled,
}

/// Adapter for device contact pickers.
///
/// An invocation resolves exactly once: with the selected contacts (possibly
/// one, with `multiple = false`) or with a [`ContactError`]. There is no
/// cancellation handle; callers simply await the outcome.
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// Open the picker requesting name and telephone fields.
    async fn select(&self, multiple: bool) -> Result<Vec<Contact>, ContactError>;
}
