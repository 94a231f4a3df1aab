// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CSV guest import.
//!
//! The first record is a header row. A column whose header contains
//! `nama`/`name` (case-insensitive) supplies the guest name and is required;
//! a column containing `whatsapp`/`wa`/`phone`/`telepon` supplies an
//! optional phone. Data rows are comma-split positionally with quoting
//! disabled -- the original app had no quote/escape support and files
//! written for it must keep importing the same way. Rows with an empty name
//! cell are skipped.

use ::csv::ReaderBuilder;
use undangan_core::{Guest, UndanganError, phone};

/// A guest parsed from an import source, not yet part of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGuest {
    pub name: String,
    /// Canonicalized (`+628...`) when present.
    pub whatsapp_number: Option<String>,
}

impl ParsedGuest {
    /// Promote to a full guest record with a fresh id.
    pub fn into_guest(self) -> Guest {
        Guest::new(self.name, self.whatsapp_number)
    }
}

const PHONE_HINTS: &[&str] = &["whatsapp", "wa", "phone", "telepon"];

fn missing_name_column() -> UndanganError {
    UndanganError::Validation(
        "name column not found -- the CSV needs a `Nama` or `Name` header".to_string(),
    )
}

/// Parse CSV text into guest records.
pub fn parse_guest_csv(contents: &str) -> Result<Vec<ParsedGuest>, UndanganError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(contents.trim().as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record.map_err(|e| UndanganError::Validation(e.to_string()))?,
        None => return Err(missing_name_column()),
    };
    let headers: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();

    let name_idx = headers
        .iter()
        .position(|h| h.contains("nama") || h.contains("name"))
        .ok_or_else(missing_name_column)?;
    let phone_idx = headers
        .iter()
        .position(|h| PHONE_HINTS.iter().any(|hint| h.contains(hint)));

    let mut guests = Vec::new();
    for record in records {
        let record = record.map_err(|e| UndanganError::Validation(e.to_string()))?;

        let name = record.get(name_idx).map(str::trim).unwrap_or("");
        if name.is_empty() {
            continue;
        }

        let number = phone_idx
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|n| !n.is_empty());

        guests.push(ParsedGuest {
            name: name.to_string(),
            whatsapp_number: phone::normalize_optional(number),
        });
    }

    Ok(guests)
}
