// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types for templates, guests, and app settings.
//!
//! Wire names (`whatsappNumber`, `sentStatus`, `type`, ...) match the JSON
//! the original web app wrote, so collections exported from it import
//! cleanly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The literal placeholder token templates embed for the guest name.
pub const GUEST_NAME_TOKEN: &str = "{nama_tamu}";

/// Register of a message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TemplateKind {
    Formal,
    Informal,
}

/// A reusable message body with a guest-name placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// Create a template with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>, kind: TemplateKind, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            content: content.into(),
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Whether an invitation has been sent to a guest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SentStatus {
    Sent,
    #[default]
    NotSent,
}

/// A recipient record with contact info, send status, and labels.
///
/// Invariant: `sent_at` is `Some` if and only if `sent_status` is [`SentStatus::Sent`].
/// Mutate status through [`Guest::mark_sent`] / [`Guest::mark_not_sent`] to keep it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub sent_status: SentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    /// Create an unsent guest with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>, whatsapp_number: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            whatsapp_number,
            labels: Vec::new(),
            sent_status: SentStatus::NotSent,
            sent_at: None,
            created_at: Utc::now(),
        }
    }

    /// Mark the invitation as sent at the given moment.
    pub fn mark_sent(&mut self, at: DateTime<Utc>) {
        self.sent_status = SentStatus::Sent;
        self.sent_at = Some(at);
    }

    /// Mark the invitation as not sent, clearing the sent timestamp.
    pub fn mark_not_sent(&mut self) {
        self.sent_status = SentStatus::NotSent;
        self.sent_at = None;
    }

    /// Union the given labels into this guest's label set.
    ///
    /// Keeps first-occurrence order and suppresses duplicates.
    pub fn add_labels<S: AsRef<str>>(&mut self, labels: &[S]) {
        for label in labels {
            let label = label.as_ref();
            if !self.labels.iter().any(|l| l == label) {
                self.labels.push(label.to_string());
            }
        }
    }

    /// Remove the given labels from this guest's label set.
    pub fn remove_labels<S: AsRef<str>>(&mut self, labels: &[S]) {
        self.labels
            .retain(|l| !labels.iter().any(|r| r.as_ref() == l));
    }

    /// Whether this guest carries the given label.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// Persisted application settings, read and written as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_template_id: Option<String>,
    #[serde(default = "default_auto_save")]
    pub auto_save: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            selected_template_id: None,
            auto_save: default_auto_save(),
        }
    }
}

fn default_auto_save() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sent_status_serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&SentStatus::Sent).unwrap(), "\"sent\"");
        assert_eq!(
            serde_json::to_string(&SentStatus::NotSent).unwrap(),
            "\"not_sent\""
        );
    }

    #[test]
    fn sent_status_round_trips_through_strum() {
        use std::str::FromStr;
        for status in [SentStatus::Sent, SentStatus::NotSent] {
            let parsed = SentStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn mark_sent_and_not_sent_keep_the_invariant() {
        let mut guest = Guest::new("Budi", None);
        assert_eq!(guest.sent_status, SentStatus::NotSent);
        assert!(guest.sent_at.is_none());

        let at = Utc::now();
        guest.mark_sent(at);
        assert_eq!(guest.sent_status, SentStatus::Sent);
        assert_eq!(guest.sent_at, Some(at));

        guest.mark_not_sent();
        assert_eq!(guest.sent_status, SentStatus::NotSent);
        assert!(guest.sent_at.is_none());
    }

    #[test]
    fn add_labels_is_duplicate_free_and_ordered() {
        let mut guest = Guest::new("Budi", None);
        guest.add_labels(&["keluarga", "kantor"]);
        guest.add_labels(&["kantor", "teman"]);
        assert_eq!(guest.labels, vec!["keluarga", "kantor", "teman"]);
    }

    #[test]
    fn remove_labels_leaves_others_untouched() {
        let mut guest = Guest::new("Budi", None);
        guest.add_labels(&["a", "b", "c"]);
        guest.remove_labels(&["b", "x"]);
        assert_eq!(guest.labels, vec!["a", "c"]);
    }

    #[test]
    fn guest_without_sent_at_parses_from_original_json() {
        let json = r#"{
            "id": "abc123",
            "name": "John Doe",
            "whatsappNumber": "+628123456789",
            "sentStatus": "not_sent",
            "createdAt": "2025-11-02T10:00:00.000Z"
        }"#;
        let guest: Guest = serde_json::from_str(json).unwrap();
        assert_eq!(guest.name, "John Doe");
        assert!(guest.sent_at.is_none());
        assert!(guest.labels.is_empty());
    }

    #[test]
    fn template_kind_rejects_unknown_tags() {
        let result = serde_json::from_str::<TemplateKind>("\"casual\"");
        assert!(result.is_err());
    }
}
