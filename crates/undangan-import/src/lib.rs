// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Guest import for the Undangan invitation manager.
//!
//! Two sources: CSV files (header-sniffed name and phone columns) and the
//! device contact picker behind the [`undangan_core::ContactSource`] seam.
//! Both yield [`ParsedGuest`] records ready to append to the collection.

pub mod contacts;
pub mod csv;

pub use crate::contacts::pick_guests;
pub use crate::csv::{ParsedGuest, parse_guest_csv};
