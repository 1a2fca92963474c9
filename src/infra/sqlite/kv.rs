use std::path::{Path, PathBuf};

use anyhow::Context;
use rusqlite::{params, OptionalExtension};

use crate::infra::sqlite::schema::{init_db, open_connection};
use crate::usecase::ports::storage::{KeyValueStorage, StorageError};

/// Key-value storage backed by a single `kv_store` table.
pub struct SqliteStorage {
    pub db_path: PathBuf,
}

impl SqliteStorage {
    /// Creates the database file and schema if needed.
    pub fn open(db_path: &Path) -> anyhow::Result<Self> {
        init_db(db_path)?;
        Ok(Self {
            db_path: db_path.to_path_buf(),
        })
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = open_connection(&self.db_path)?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .with_context(|| format!("failed to read key: {key}"))?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = open_connection(&self.db_path)?;
        conn.execute(
            "INSERT INTO kv_store(key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )
        .with_context(|| format!("failed to write key: {key}"))?;
        Ok(())
    }
}
