// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup and schema bootstrap.
//!
//! All access goes through tokio-rusqlite's single background thread. Do NOT
//! create additional connections for writes; last writer wins on whole
//! collections and the single writer keeps that race within one process
//! ordered.

use std::path::Path;

use tokio_rusqlite::Connection;
use tracing::debug;
use undangan_core::UndanganError;

/// Current schema version, tracked via `PRAGMA user_version`.
const SCHEMA_VERSION: i64 = 1;

const SCHEMA_V1: &str = "
CREATE TABLE IF NOT EXISTS collections (
    key         TEXT PRIMARY KEY NOT NULL,
    body        TEXT NOT NULL,
    updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
PRAGMA user_version = 1;
";

/// Convert a tokio-rusqlite error into the workspace storage error.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> UndanganError {
    UndanganError::Storage {
        source: Box::new(e),
    }
}

/// Handle to the single-writer SQLite connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if needed) the database at `path` and bootstrap the schema.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, UndanganError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(UndanganError::storage)?;
            }
        }

        let conn = Connection::open(path.to_owned())
            .await
            .map_err(UndanganError::storage)?;
        Self::setup(&conn, wal_mode).await?;
        debug!(path, "database opened");
        Ok(Self { conn })
    }

    /// Open an in-memory database. Used by tests.
    pub async fn open_in_memory() -> Result<Self, UndanganError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(UndanganError::storage)?;
        Self::setup(&conn, false).await?;
        Ok(Self { conn })
    }

    async fn setup(conn: &Connection, wal_mode: bool) -> Result<(), UndanganError> {
        conn.call(move |conn| {
            if wal_mode {
                conn.execute_batch("PRAGMA journal_mode=WAL;")?;
            }
            conn.execute_batch("PRAGMA synchronous=NORMAL; PRAGMA foreign_keys=ON;")?;

            let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
            if version < SCHEMA_VERSION {
                conn.execute_batch(SCHEMA_V1)?;
            }
            Ok(())
        })
        .await
        .map_err(map_tr_err)
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Checkpoint the WAL and close the connection.
    pub async fn close(self) -> Result<(), UndanganError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        self.conn.close().await.map_err(map_tr_err)
    }
}
