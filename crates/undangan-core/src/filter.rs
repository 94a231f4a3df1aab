// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure filtering over the guest collection and the default selection set.
//!
//! Filters are recomputed from the current collection on every use; nothing
//! here owns derived state beyond the filter selections themselves.

use std::collections::HashSet;

use strum::{Display, EnumString};

use crate::types::{Guest, SentStatus};

/// Send-status filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Sent,
    NotSent,
}

impl StatusFilter {
    fn matches(self, status: SentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Sent => status == SentStatus::Sent,
            StatusFilter::NotSent => status == SentStatus::NotSent,
        }
    }
}

/// A composed guest filter: status AND search AND label membership.
///
/// The label dimension is an OR across the selected labels -- a guest passes
/// if it carries at least one of them. An empty label selection passes
/// everyone.
#[derive(Debug, Clone, Default)]
pub struct GuestFilter {
    pub status: StatusFilter,
    pub search: Option<String>,
    pub labels: Vec<String>,
}

impl GuestFilter {
    /// Whether a single guest passes every filter dimension.
    pub fn matches(&self, guest: &Guest) -> bool {
        if !self.status.matches(guest.sent_status) {
            return false;
        }

        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            if !query.is_empty() {
                let name_hit = guest.name.to_lowercase().contains(&query);
                let phone_hit = guest
                    .whatsapp_number
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&query));
                if !name_hit && !phone_hit {
                    return false;
                }
            }
        }

        if !self.labels.is_empty() && !self.labels.iter().any(|l| guest.has_label(l)) {
            return false;
        }

        true
    }

    /// Apply the filter to a collection, preserving order.
    pub fn apply<'a>(&self, guests: &'a [Guest]) -> Vec<&'a Guest> {
        guests.iter().filter(|g| self.matches(g)).collect()
    }
}

/// The default working set: every guest whose invitation is not yet sent.
pub fn default_selection(guests: &[Guest]) -> HashSet<String> {
    guests
        .iter()
        .filter(|g| g.sent_status == SentStatus::NotSent)
        .map(|g| g.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn guest(name: &str, number: Option<&str>, labels: &[&str]) -> Guest {
        let mut g = Guest::new(name, number.map(str::to_string));
        g.add_labels(labels);
        g
    }

    #[test]
    fn status_filter_narrows_to_sent() {
        let mut sent = guest("Ani", None, &[]);
        sent.mark_sent(Utc::now());
        let unsent = guest("Budi", None, &[]);
        let guests = vec![sent, unsent];

        let filter = GuestFilter {
            status: StatusFilter::Sent,
            ..Default::default()
        };
        let hits = filter.apply(&guests);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ani");
    }

    #[test]
    fn search_matches_name_and_phone_case_insensitively() {
        let guests = vec![
            guest("Dewi Lestari", Some("+628111222333"), &[]),
            guest("Rudi", Some("+628999888777"), &[]),
        ];

        let by_name = GuestFilter {
            search: Some("dewi".to_string()),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&guests).len(), 1);

        let by_phone = GuestFilter {
            search: Some("8999".to_string()),
            ..Default::default()
        };
        let hits = by_phone.apply(&guests);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Rudi");
    }

    #[test]
    fn label_filter_is_an_or_across_selected_labels() {
        let guests = vec![
            guest("A", None, &["A"]),
            guest("B", None, &["B"]),
            guest("C", None, &[]),
        ];

        let filter = GuestFilter {
            labels: vec!["A".to_string(), "B".to_string()],
            ..Default::default()
        };
        let hits = filter.apply(&guests);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|g| g.name != "C"));
    }

    #[test]
    fn dimensions_compose_with_and() {
        let mut sent = guest("Ani", None, &["keluarga"]);
        sent.mark_sent(Utc::now());
        let guests = vec![sent, guest("Ani Kedua", None, &["keluarga"])];

        let filter = GuestFilter {
            status: StatusFilter::NotSent,
            search: Some("ani".to_string()),
            labels: vec!["keluarga".to_string()],
        };
        let hits = filter.apply(&guests);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ani Kedua");
    }

    #[test]
    fn default_selection_picks_unsent_guests() {
        let mut sent = guest("Ani", None, &[]);
        sent.mark_sent(Utc::now());
        let unsent = guest("Budi", None, &[]);
        let unsent_id = unsent.id.clone();
        let guests = vec![sent, unsent];

        let selection = default_selection(&guests);
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(&unsent_id));
    }
}
