//! SQLite-backed key-value persistence.
//!
//! RULE: Only store.rs talks to the database.
//! The logbook reads and writes through the LogRepository port —
//! it never executes SQL directly.

use crate::error::SimResult;
use rusqlite::{params, Connection, OptionalExtension};

/// The single logical record holding the expedition log collection.
pub const LOG_STORE_KEY: &str = "zambezi-expedition-logs";

/// The persistence port the logbook is built against. `load` returns
/// the raw stored payload (None when nothing was ever saved); `save`
/// rewrites the full payload in place.
pub trait LogRepository {
    fn load(&self) -> SimResult<Option<String>>;
    fn save(&mut self, payload: &str) -> SimResult<()>;
}

pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Open (or create) the store database at `path`.
    pub fn open(path: &str) -> SimResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode: better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (used in tests).
    pub fn in_memory() -> SimResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> SimResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                 key   TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> SimResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> SimResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

impl LogRepository for KvStore {
    fn load(&self) -> SimResult<Option<String>> {
        self.get(LOG_STORE_KEY)
    }

    fn save(&mut self, payload: &str) -> SimResult<()> {
        self.set(LOG_STORE_KEY, payload)
    }
}

/// In-memory repository for unit tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryRepository {
    payload: Option<String>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with a pre-existing payload, as if a prior
    /// session had saved it.
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: Some(payload.to_string()),
        }
    }
}

impl LogRepository for MemoryRepository {
    fn load(&self) -> SimResult<Option<String>> {
        Ok(self.payload.clone())
    }

    fn save(&mut self, payload: &str) -> SimResult<()> {
        self.payload = Some(payload.to_string());
        Ok(())
    }
}
