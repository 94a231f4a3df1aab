// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Guest import from the device contact picker.

use tracing::debug;
use undangan_core::{ContactError, ContactSource, UndanganError, phone};

use crate::csv::ParsedGuest;

/// Open the picker and map the selected contacts to guest records.
///
/// A cancelled selection is part of normal operation and yields an empty
/// list without surfacing anything to the user; the other picker errors
/// propagate. Contacts without a usable name are dropped; the first listed
/// phone number is canonicalized.
pub async fn pick_guests(
    source: &dyn ContactSource,
    multiple: bool,
) -> Result<Vec<ParsedGuest>, UndanganError> {
    let contacts = match source.select(multiple).await {
        Ok(contacts) => contacts,
        Err(ContactError::Cancelled) => {
            debug!("contact selection cancelled");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    Ok(contacts
        .into_iter()
        .filter_map(|contact| {
            let name = contact.name.trim().to_string();
            if name.is_empty() {
                return None;
            }
            let number = contact.tel.first().map(String::as_str);
            Some(ParsedGuest {
                name,
                whatsapp_number: phone::normalize_optional(number),
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use undangan_core::Contact;
    use undangan_test_utils::MockContactSource;

    #[tokio::test]
    async fn selected_contacts_become_parsed_guests() {
        let source = MockContactSource::with_contacts(vec![
            Contact {
                name: "Dewi Lestari".to_string(),
                tel: vec!["0812 3456 789".to_string(), "021555".to_string()],
            },
            Contact {
                name: "  ".to_string(),
                tel: vec!["08123".to_string()],
            },
            Contact {
                name: "Rudi".to_string(),
                tel: vec![],
            },
        ]);

        let guests = pick_guests(&source, true).await.unwrap();
        assert_eq!(guests.len(), 2);
        assert_eq!(guests[0].name, "Dewi Lestari");
        assert_eq!(guests[0].whatsapp_number, Some("+628123456789".to_string()));
        assert_eq!(guests[1].name, "Rudi");
        assert_eq!(guests[1].whatsapp_number, None);
    }

    #[tokio::test]
    async fn cancellation_is_a_silent_no_op() {
        let source = MockContactSource::failing(ContactError::Cancelled);
        let guests = pick_guests(&source, false).await.unwrap();
        assert!(guests.is_empty());
    }

    #[tokio::test]
    async fn permission_denied_surfaces_as_an_error() {
        let source = MockContactSource::failing(ContactError::PermissionDenied);
        let err = pick_guests(&source, false).await.unwrap_err();
        assert!(matches!(
            err,
            UndanganError::Contacts(ContactError::PermissionDenied)
        ));
    }

    #[tokio::test]
    async fn unsupported_environment_surfaces_as_an_error() {
        let source = MockContactSource::failing(ContactError::Unsupported);
        let err = pick_guests(&source, true).await.unwrap_err();
        assert!(matches!(
            err,
            UndanganError::Contacts(ContactError::Unsupported)
        ));
    }
}
