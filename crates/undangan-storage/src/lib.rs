// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Undangan invitation manager.
//!
//! Collections (templates, guests, settings) are stored as whole JSON values
//! under fixed keys in one key-value table, mirroring the original app's
//! local-storage layout. All access is serialized through a single
//! `tokio-rusqlite` connection; writers emit advisory change events.

pub mod backup;
pub mod database;
pub mod events;
pub mod migrate;
pub mod store;
pub mod transfer;

pub use database::Database;
pub use events::{Collection, StoreEvent};
pub use store::Store;
pub use transfer::{
    ImportMode, ImportOutcome, TemplateConfigExport, ValidationError, validate_template_config,
};
