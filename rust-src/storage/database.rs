//! SQLite-backed key-value store for dashboard state.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};


/// String-keyed persistence used for settings and widgets.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}


/// Key-value store in a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
}


impl SqliteStore {
    /// Open (or create) the database at `db_path`.
    pub fn open(db_path: &Path) -> Result<Self> {
        // Create parent directory if needed
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
        init_database(&conn)?;

        tracing::debug!("opened dashboard database at {}", db_path.display());
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        init_database(&conn)?;
        Ok(Self { conn })
    }

    /// Timestamp of the last write to `key`.
    #[cfg(test)]
    pub fn updated_at(&self, key: &str) -> Result<Option<String>> {
        let updated = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(updated)
    }
}


impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()
            .with_context(|| format!("Failed to read key: {key}"))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let timestamp = Utc::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, timestamp],
            )
            .with_context(|| format!("Failed to write key: {key}"))?;
        Ok(())
    }

}


/// Initialize the database with required tables.
fn init_database(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_database() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("nested").join("test.db");

        SqliteStore::open(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_set_and_get() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));
        assert!(store.updated_at("k").unwrap().is_some());

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("test.db");

        {
            let mut store = SqliteStore::open(&db_path).unwrap();
            store.set("dashboard-settings", "{}").unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(store.get("dashboard-settings").unwrap().as_deref(), Some("{}"));
    }
}
