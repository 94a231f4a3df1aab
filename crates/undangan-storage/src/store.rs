// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-collection persistence for templates, guests, and settings.
//!
//! Each collection lives as one JSON value under a fixed key. Mutation
//! helpers follow the read-modify-write pattern over the full collection;
//! there are no partial updates and no transactions across collections.
//! Last writer wins.

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::debug;
use undangan_config::model::StorageConfig;
use undangan_core::{AppSettings, Guest, Template, UndanganError};

use crate::database::{Database, map_tr_err};
use crate::events::{Collection, StoreEvent};
use crate::migrate;
use crate::transfer::{self, ImportMode, ImportOutcome, TemplateConfigExport};

/// Persistent store over the single-writer database.
pub struct Store {
    db: Database,
    events: broadcast::Sender<StoreEvent>,
}

impl Store {
    /// Open the store at the configured database path.
    pub async fn open(config: &StorageConfig) -> Result<Self, UndanganError> {
        let db = Database::open(&config.database_path, config.wal_mode).await?;
        Ok(Self::with_database(db))
    }

    /// Wrap an already-open database.
    pub fn with_database(db: Database) -> Self {
        let (events, _) = broadcast::channel(32);
        Self { db, events }
    }

    /// Open an in-memory store. Used by tests and the dry-run paths.
    pub async fn in_memory() -> Result<Self, UndanganError> {
        Ok(Self::with_database(Database::open_in_memory().await?))
    }

    /// Subscribe to advisory change events.
    ///
    /// Every successful collection write emits one [`StoreEvent`]. Dropped
    /// receivers and lagged subscribers are fine -- this stream is refresh
    /// advice, not a consistency mechanism.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Checkpoint and close the underlying database.
    pub async fn close(self) -> Result<(), UndanganError> {
        self.db.close().await
    }

    // --- Templates ---

    /// Load the template collection; a missing key reads as empty.
    pub async fn templates(&self) -> Result<Vec<Template>, UndanganError> {
        match self.read_raw(Collection::Templates).await? {
            None => Ok(Vec::new()),
            Some(body) => serde_json::from_str(&body).map_err(parse_err(Collection::Templates)),
        }
    }

    /// Overwrite the whole template collection.
    pub async fn save_templates(&self, templates: &[Template]) -> Result<(), UndanganError> {
        let body = to_json(templates)?;
        self.write_raw(Collection::Templates, body).await
    }

    // --- Guests ---

    /// Load the guest collection, upgrading legacy records on the way.
    ///
    /// Records missing `sentStatus` or `labels` are patched to the current
    /// shape; if anything was patched the corrected collection is written
    /// back before returning, so the migration runs at most once per stored
    /// record set.
    pub async fn guests(&self) -> Result<Vec<Guest>, UndanganError> {
        let Some(body) = self.read_raw(Collection::Guests).await? else {
            return Ok(Vec::new());
        };

        let mut records: Vec<serde_json::Value> =
            serde_json::from_str(&body).map_err(parse_err(Collection::Guests))?;
        let report = migrate::migrate_guest_records(&mut records);

        let guests: Vec<Guest> = serde_json::from_value(serde_json::Value::Array(records))
            .map_err(parse_err(Collection::Guests))?;

        if report.changed() {
            debug!(
                patched_status = report.patched_status,
                patched_labels = report.patched_labels,
                "migrated legacy guest records"
            );
            self.save_guests(&guests).await?;
        }

        Ok(guests)
    }

    /// Overwrite the whole guest collection.
    pub async fn save_guests(&self, guests: &[Guest]) -> Result<(), UndanganError> {
        let body = to_json(guests)?;
        self.write_raw(Collection::Guests, body).await
    }

    /// Mark one guest's invitation as sent.
    ///
    /// An unknown id is a no-op returning the unchanged collection.
    pub async fn mark_guest_as_sent(&self, id: &str) -> Result<Vec<Guest>, UndanganError> {
        let now = Utc::now();
        self.update_guests(|guests| {
            let mut touched = false;
            for guest in guests.iter_mut() {
                if guest.id == id {
                    guest.mark_sent(now);
                    touched = true;
                }
            }
            touched
        })
        .await
    }

    /// Mark one guest's invitation as not sent, clearing its timestamp.
    pub async fn mark_guest_as_not_sent(&self, id: &str) -> Result<Vec<Guest>, UndanganError> {
        self.update_guests(|guests| {
            let mut touched = false;
            for guest in guests.iter_mut() {
                if guest.id == id {
                    guest.mark_not_sent();
                    touched = true;
                }
            }
            touched
        })
        .await
    }

    /// Mark every guest in `ids` as sent; all share one timestamp.
    pub async fn mark_guests_as_sent(&self, ids: &[String]) -> Result<Vec<Guest>, UndanganError> {
        let now = Utc::now();
        self.update_guests(|guests| {
            let mut touched = false;
            for guest in guests.iter_mut() {
                if ids.contains(&guest.id) {
                    guest.mark_sent(now);
                    touched = true;
                }
            }
            touched
        })
        .await
    }

    /// Mark every guest in `ids` as not sent.
    pub async fn mark_guests_as_not_sent(
        &self,
        ids: &[String],
    ) -> Result<Vec<Guest>, UndanganError> {
        self.update_guests(|guests| {
            let mut touched = false;
            for guest in guests.iter_mut() {
                if ids.contains(&guest.id) {
                    guest.mark_not_sent();
                    touched = true;
                }
            }
            touched
        })
        .await
    }

    /// Union `labels` into every targeted guest's label set.
    pub async fn add_labels(
        &self,
        ids: &[String],
        labels: &[String],
    ) -> Result<Vec<Guest>, UndanganError> {
        self.update_guests(|guests| {
            let mut touched = false;
            for guest in guests.iter_mut() {
                if ids.contains(&guest.id) {
                    guest.add_labels(labels);
                    touched = true;
                }
            }
            touched
        })
        .await
    }

    /// Remove `labels` from every targeted guest's label set.
    pub async fn remove_labels(
        &self,
        ids: &[String],
        labels: &[String],
    ) -> Result<Vec<Guest>, UndanganError> {
        self.update_guests(|guests| {
            let mut touched = false;
            for guest in guests.iter_mut() {
                if ids.contains(&guest.id) {
                    guest.remove_labels(labels);
                    touched = true;
                }
            }
            touched
        })
        .await
    }

    /// Distinct labels across all guests, first-occurrence order.
    pub async fn all_labels(&self) -> Result<Vec<String>, UndanganError> {
        let guests = self.guests().await?;
        let mut labels: Vec<String> = Vec::new();
        for guest in &guests {
            for label in &guest.labels {
                if !labels.contains(label) {
                    labels.push(label.clone());
                }
            }
        }
        Ok(labels)
    }

    // --- Settings ---

    /// Load settings; a missing key reads as the defaults.
    pub async fn settings(&self) -> Result<AppSettings, UndanganError> {
        match self.read_raw(Collection::Settings).await? {
            None => Ok(AppSettings::default()),
            Some(body) => serde_json::from_str(&body).map_err(parse_err(Collection::Settings)),
        }
    }

    /// Overwrite the settings record.
    pub async fn save_settings(&self, settings: &AppSettings) -> Result<(), UndanganError> {
        let body = to_json(settings)?;
        self.write_raw(Collection::Settings, body).await
    }

    // --- Export / import ---

    /// Build the versioned template export envelope.
    pub async fn export_template_config(
        &self,
        app_name: &str,
    ) -> Result<TemplateConfigExport, UndanganError> {
        Ok(transfer::build_export(app_name, self.templates().await?))
    }

    /// Validate and apply a template import file.
    pub async fn import_template_config(
        &self,
        contents: &str,
        mode: ImportMode,
    ) -> Result<ImportOutcome, UndanganError> {
        let incoming = transfer::validate_template_config(contents)?;
        let total = incoming.len();

        let added = match mode {
            ImportMode::Replace => {
                let n = incoming.len();
                self.save_templates(&incoming).await?;
                n
            }
            ImportMode::Merge => {
                let mut existing = self.templates().await?;
                let added = transfer::merge_templates(&mut existing, incoming);
                if added > 0 {
                    self.save_templates(&existing).await?;
                }
                added
            }
        };

        Ok(ImportOutcome { mode, total, added })
    }

    /// Remove all three collections.
    pub async fn clear_all(&self) -> Result<(), UndanganError> {
        self.db
            .connection()
            .call(|conn| {
                conn.execute(
                    "DELETE FROM collections WHERE key IN (?1, ?2, ?3)",
                    rusqlite::params![
                        Collection::Templates.key(),
                        Collection::Guests.key(),
                        Collection::Settings.key(),
                    ],
                )?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;

        for collection in [Collection::Templates, Collection::Guests, Collection::Settings] {
            self.emit(collection);
        }
        Ok(())
    }

    // --- Internals ---

    async fn update_guests<F>(&self, mutate: F) -> Result<Vec<Guest>, UndanganError>
    where
        F: FnOnce(&mut Vec<Guest>) -> bool,
    {
        let mut guests = self.guests().await?;
        if mutate(&mut guests) {
            self.save_guests(&guests).await?;
        }
        Ok(guests)
    }

    async fn read_raw(&self, collection: Collection) -> Result<Option<String>, UndanganError> {
        let key = collection.key();
        self.db
            .connection()
            .call(move |conn| {
                let result = conn.query_row(
                    "SELECT body FROM collections WHERE key = ?1",
                    rusqlite::params![key],
                    |row| row.get::<_, String>(0),
                );
                match result {
                    Ok(body) => Ok(Some(body)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(map_tr_err)
    }

    async fn write_raw(&self, collection: Collection, body: String) -> Result<(), UndanganError> {
        let key = collection.key();
        self.db
            .connection()
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO collections (key, body, updated_at)
                     VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
                     ON CONFLICT(key) DO UPDATE
                     SET body = excluded.body, updated_at = excluded.updated_at",
                    rusqlite::params![key, body],
                )?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;

        self.emit(collection);
        Ok(())
    }

    fn emit(&self, collection: Collection) {
        // No receivers is fine; the stream is advisory.
        let _ = self.events.send(StoreEvent { collection });
    }
}

fn parse_err(collection: Collection) -> impl FnOnce(serde_json::Error) -> UndanganError {
    move |source| UndanganError::Parse {
        collection: collection.key().to_string(),
        source,
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, UndanganError> {
    serde_json::to_string(value).map_err(|e| UndanganError::Internal(e.to_string()))
}
