//! SQLite cache store implementation
//!
//! A single keyed table holds one row per (subject id, content mode),
//! with the aggregated records serialized as JSON in the value column.

use crate::cache::traits::{CacheResult, CacheStore};
use crate::cache::{CacheKey, CachedFaves};
use crate::scrape::Favorite;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite cache backend
pub struct SqliteCache {
    conn: Connection,
}

impl SqliteCache {
    /// Opens or creates the cache database at the given path
    pub fn new(path: &Path) -> CacheResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> CacheResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

/// Creates the cache table if it does not exist yet
fn initialize_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS faves (
            subject_id   TEXT NOT NULL,
            content_mode TEXT NOT NULL,
            fetched_at   TEXT NOT NULL,
            records      TEXT NOT NULL,
            PRIMARY KEY (subject_id, content_mode)
        );
    ",
    )
}

impl CacheStore for SqliteCache {
    fn get(&self, key: &CacheKey) -> CacheResult<Option<CachedFaves>> {
        let row = self
            .conn
            .query_row(
                "SELECT fetched_at, records FROM faves
                 WHERE subject_id = ?1 AND content_mode = ?2",
                params![key.subject_id, key.mode.as_route_str()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        match row {
            Some((fetched_at, payload)) => {
                let records: Vec<Favorite> = serde_json::from_str(&payload)?;
                let fetched_at = DateTime::parse_from_rfc3339(&fetched_at)?.with_timezone(&Utc);
                Ok(Some(CachedFaves {
                    records,
                    fetched_at,
                }))
            }
            None => Ok(None),
        }
    }

    fn put(&mut self, key: &CacheKey, entry: &CachedFaves) -> CacheResult<()> {
        let payload = serde_json::to_string(&entry.records)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO faves (subject_id, content_mode, fetched_at, records)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                key.subject_id,
                key.mode.as_route_str(),
                entry.fetched_at.to_rfc3339(),
                payload
            ],
        )?;
        Ok(())
    }

    fn delete(&mut self, key: &CacheKey) -> CacheResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM faves WHERE subject_id = ?1 AND content_mode = ?2",
            params![key.subject_id, key.mode.as_route_str()],
        )?;
        Ok(changed > 0)
    }
}
