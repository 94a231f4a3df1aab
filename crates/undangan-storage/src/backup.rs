// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Online backup and restore of the invitation database.
//!
//! Uses rusqlite's Backup API for consistent copies that work even while
//! the store is open in WAL mode. Restore stages a safety copy of the
//! current database before overwriting it.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};
use tracing::info;
use undangan_core::UndanganError;

fn storage_err(e: rusqlite::Error) -> UndanganError {
    UndanganError::Storage {
        source: Box::new(e),
    }
}

fn copy_database(src_path: &str, dst_path: &str) -> Result<(), UndanganError> {
    let src = Connection::open_with_flags(
        src_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(storage_err)?;
    let mut dst = Connection::open(dst_path).map_err(storage_err)?;

    let backup = rusqlite::backup::Backup::new(&src, &mut dst).map_err(storage_err)?;
    // 100 pages per step with a short pause keeps a live writer responsive.
    backup
        .run_to_completion(100, Duration::from_millis(10), None)
        .map_err(storage_err)
}

/// Copy the database at `db_path` to `backup_path`.
pub fn run_backup(db_path: &str, backup_path: &str) -> Result<(), UndanganError> {
    if !Path::new(db_path).exists() {
        return Err(UndanganError::Storage {
            source: format!("database not found: {db_path}").into(),
        });
    }

    copy_database(db_path, backup_path)?;
    info!(backup_path, "backup written");
    Ok(())
}

/// Replace the database at `db_path` with the backup at `restore_from`.
///
/// The backup file is validated first; if a current database exists it is
/// copied to `<db_path>.pre-restore` before being overwritten.
pub fn run_restore(db_path: &str, restore_from: &str) -> Result<(), UndanganError> {
    if !Path::new(restore_from).exists() {
        return Err(UndanganError::Storage {
            source: format!("backup file not found: {restore_from}").into(),
        });
    }

    // Quick validation: the source must open and answer a query.
    let check = Connection::open_with_flags(restore_from, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(storage_err)?;
    check.execute_batch("SELECT 1").map_err(storage_err)?;
    drop(check);

    if Path::new(db_path).exists() {
        let safety = format!("{db_path}.pre-restore");
        copy_database(db_path, &safety)?;
        info!(path = %safety, "safety copy of current database written");
    }

    copy_database(restore_from, db_path)?;
    info!(db_path, "database restored");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use tempfile::tempdir;
    use undangan_config::model::StorageConfig;
    use undangan_core::Guest;

    fn config(path: &std::path::Path) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string_lossy().into_owned(),
            wal_mode: true,
        }
    }

    #[tokio::test]
    async fn backup_then_restore_round_trips_guest_data() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("undangan.db");
        let backup_path = dir.path().join("undangan.backup.db");

        let store = Store::open(&config(&db_path)).await.unwrap();
        store
            .save_guests(&[Guest::new("Budi", None)])
            .await
            .unwrap();
        store.close().await.unwrap();

        run_backup(
            db_path.to_str().unwrap(),
            backup_path.to_str().unwrap(),
        )
        .unwrap();

        // Wipe the live database, then restore.
        let store = Store::open(&config(&db_path)).await.unwrap();
        store.clear_all().await.unwrap();
        store.close().await.unwrap();

        run_restore(
            db_path.to_str().unwrap(),
            backup_path.to_str().unwrap(),
        )
        .unwrap();

        let store = Store::open(&config(&db_path)).await.unwrap();
        let guests = store.guests().await.unwrap();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].name, "Budi");

        // The pre-restore safety copy exists alongside the database.
        assert!(dir.path().join("undangan.db.pre-restore").exists());
    }

    #[tokio::test]
    async fn backup_of_a_missing_database_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("tidak-ada.db");
        let result = run_backup(missing.to_str().unwrap(), "/tmp/unused.db");
        assert!(result.is_err());
    }
}
