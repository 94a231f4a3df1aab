// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lazy upgrade of stored guest records to the current shape.
//!
//! Early versions of the app persisted guests without `sentStatus` and
//! `labels`. Those fields are patched in when the collection is read; the
//! caller writes the corrected collection back once, so re-reads are
//! byte-stable and trigger no further storage write.

use serde_json::{Value, json};

/// What a migration pass did to the raw records.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Records that gained a default `sentStatus`.
    pub patched_status: usize,
    /// Records that gained an empty `labels` array.
    pub patched_labels: usize,
}

impl MigrationReport {
    /// Whether anything changed and a write-back is needed.
    pub fn changed(&self) -> bool {
        self.patched_status > 0 || self.patched_labels > 0
    }
}

/// Patch missing fields on raw guest objects in place.
///
/// Only inserts what is absent; present values (including unknown extra
/// fields) are left untouched so the pass is idempotent.
pub fn migrate_guest_records(records: &mut [Value]) -> MigrationReport {
    let mut report = MigrationReport::default();

    for record in records.iter_mut() {
        let Some(obj) = record.as_object_mut() else {
            continue;
        };
        if !obj.contains_key("sentStatus") {
            obj.insert("sentStatus".to_string(), json!("not_sent"));
            report.patched_status += 1;
        }
        if !obj.contains_key("labels") {
            obj.insert("labels".to_string(), json!([]));
            report.patched_labels += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_guest() -> Value {
        json!({
            "id": "abc",
            "name": "John Doe",
            "whatsappNumber": "+628123456789",
            "createdAt": "2025-11-02T10:00:00.000Z"
        })
    }

    #[test]
    fn patches_missing_fields() {
        let mut records = vec![legacy_guest()];
        let report = migrate_guest_records(&mut records);

        assert!(report.changed());
        assert_eq!(report.patched_status, 1);
        assert_eq!(report.patched_labels, 1);
        assert_eq!(records[0]["sentStatus"], "not_sent");
        assert_eq!(records[0]["labels"], json!([]));
    }

    #[test]
    fn current_shape_records_are_untouched() {
        let mut record = legacy_guest();
        record["sentStatus"] = json!("sent");
        record["sentAt"] = json!("2025-11-03T08:00:00.000Z");
        record["labels"] = json!(["keluarga"]);
        let before = record.clone();

        let mut records = vec![record];
        let report = migrate_guest_records(&mut records);

        assert!(!report.changed());
        assert_eq!(records[0], before);
    }

    #[test]
    fn migration_is_idempotent() {
        let mut records = vec![legacy_guest(), legacy_guest()];
        let first = migrate_guest_records(&mut records);
        assert!(first.changed());

        let snapshot = records.clone();
        let second = migrate_guest_records(&mut records);
        assert!(!second.changed());
        assert_eq!(records, snapshot);
    }
}
