// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clipboard adapter trait.

use async_trait::async_trait;

use crate::error::UndanganError;

/// Adapter for writing text to the system clipboard.
///
/// A failed or unavailable clipboard surfaces as
/// [`UndanganError::Clipboard`]; callers present the message and leave the
/// triggering action otherwise untouched.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), UndanganError>;
}
