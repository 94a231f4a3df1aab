// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Advisory change notification for store collections.
//!
//! Replaces the browser `storage` event the original app listened to. Every
//! successful write broadcasts one event naming the changed collection so
//! long-lived views (the shell) can refresh their cached copy. This is
//! best-effort refresh, not conflict resolution -- concurrent writers still
//! race and the last whole-collection write wins.

/// The three persisted collections and their fixed storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Templates,
    Guests,
    Settings,
}

impl Collection {
    /// The key the collection's JSON value is stored under.
    pub const fn key(self) -> &'static str {
        match self {
            Collection::Templates => "wedding_templates",
            Collection::Guests => "wedding_guests",
            Collection::Settings => "wedding_settings",
        }
    }
}

/// A change notification emitted after a collection write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreEvent {
    pub collection: Collection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_the_original_local_storage_layout() {
        assert_eq!(Collection::Templates.key(), "wedding_templates");
        assert_eq!(Collection::Guests.key(), "wedding_guests");
        assert_eq!(Collection::Settings.key(), "wedding_settings");
    }
}
