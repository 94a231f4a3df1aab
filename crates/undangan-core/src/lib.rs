// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Undangan invitation manager.
//!
//! This crate provides the domain types (templates, guests, settings), the
//! error taxonomy, phone-number handling, guest filtering, and the trait
//! seams for external collaborators (contact picker, clipboard). The
//! persistence and composition layers build on top of these.

pub mod error;
pub mod filter;
pub mod phone;
pub mod seed;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::UndanganError;
pub use filter::{GuestFilter, StatusFilter, default_selection};
pub use traits::{Clipboard, Contact, ContactError, ContactSource};
pub use types::{AppSettings, Guest, SentStatus, Template, TemplateKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_wire_format_matches_original_app() {
        let mut guest = Guest::new("Siti Rahayu", Some("+628123456789".to_string()));
        guest.id = "g-1".to_string();
        let json = serde_json::to_value(&guest).unwrap();

        assert_eq!(json["name"], "Siti Rahayu");
        assert_eq!(json["whatsappNumber"], "+628123456789");
        assert_eq!(json["sentStatus"], "not_sent");
        assert!(json.get("sentAt").is_none(), "sentAt must be absent while not sent");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn template_wire_format_uses_type_tag() {
        let template = Template::new("Formal", TemplateKind::Formal, "Halo {nama_tamu}");
        let json = serde_json::to_value(&template).unwrap();

        assert_eq!(json["type"], "formal");
        assert_eq!(json["content"], "Halo {nama_tamu}");
    }

    #[test]
    fn settings_default_enables_autosave() {
        let settings = AppSettings::default();
        assert!(settings.auto_save);
        assert!(settings.selected_template_id.is_none());

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["autoSave"], true);
        assert!(json.get("selectedTemplateId").is_none());
    }
}
