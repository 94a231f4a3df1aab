// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test fixtures and mocks for the Undangan workspace.
//!
//! Provides a scripted [`ContactSource`] plus small builders for guests and
//! templates with deterministic timestamps.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use undangan_core::{Contact, ContactError, ContactSource, Guest, Template, TemplateKind};

/// A scripted contact picker: returns a fixed contact list or a fixed error.
pub struct MockContactSource {
    outcome: Mutex<Result<Vec<Contact>, ContactError>>,
    /// How many times `select` was invoked.
    calls: Mutex<usize>,
}

impl MockContactSource {
    /// A picker that resolves with the given contacts.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            outcome: Mutex::new(Ok(contacts)),
            calls: Mutex::new(0),
        }
    }

    /// A picker that rejects with the given error.
    pub fn failing(error: ContactError) -> Self {
        Self {
            outcome: Mutex::new(Err(error)),
            calls: Mutex::new(0),
        }
    }

    /// Number of times the picker was opened.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ContactSource for MockContactSource {
    async fn select(&self, _multiple: bool) -> Result<Vec<Contact>, ContactError> {
        *self.calls.lock().unwrap() += 1;
        self.outcome.lock().unwrap().clone()
    }
}

/// A fixed timestamp for deterministic fixtures.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 2, 10, 0, 0).unwrap()
}

/// Guest fixture with a stable id and timestamp.
pub fn guest_fixture(id: &str, name: &str, number: Option<&str>) -> Guest {
    let mut guest = Guest::new(name, number.map(str::to_string));
    guest.id = id.to_string();
    guest.created_at = fixed_time();
    guest
}

/// Template fixture with a stable id and timestamp.
pub fn template_fixture(id: &str, name: &str, kind: TemplateKind, content: &str) -> Template {
    let mut template = Template::new(name, kind, content);
    template.id = id.to_string();
    template.created_at = fixed_time();
    template
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_source_counts_calls() {
        let source = MockContactSource::with_contacts(vec![]);
        let _ = source.select(true).await;
        let _ = source.select(false).await;
        assert_eq!(source.call_count(), 2);
    }

    #[test]
    fn fixtures_are_deterministic() {
        let a = guest_fixture("g-1", "Budi", None);
        let b = guest_fixture("g-1", "Budi", None);
        assert_eq!(a, b);
    }
}
