//! Key-value persistence for the planner collections.
//!
//! Each collection is stored as one JSON array under a fixed key, the same
//! way a browser keeps it in local storage. Reading never fails because of
//! the stored *content*: a missing or unparseable value yields an empty
//! collection. Database errors still propagate.

use crate::core::state::{AppData, Change};
use crate::core::store::EventStore;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::CalendarEvent;
use chrono::Local;
use log::{debug, warn};
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const TASKS_KEY: &str = "zenplan_tasks";
pub const HABITS_KEY: &str = "zenplan_habits";
pub const EVENTS_KEY: &str = "zenplan_events";

pub struct KvStore {
    pool: DbPool,
}

impl KvStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open (and migrate) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open_initialized(path)?))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> AppResult<()> {
        self.pool.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Drop every stored key. The audit log is kept.
    pub fn clear(&self) -> AppResult<usize> {
        let n = self.pool.conn.execute("DELETE FROM kv", [])?;
        ttlog_quiet(&self.pool.conn, "reset", "", &format!("Cleared {} key(s)", n));
        Ok(n)
    }

    /// Deserialize the value under `key`, falling back to `T::default()`.
    pub fn load_or_default<T>(&self, key: &str) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.get(key)? else {
            debug!("storage: {} absent, using default", key);
            return Ok(T::default());
        };

        match serde_json::from_str(&raw) {
            Ok(v) => Ok(v),
            Err(e) => {
                warn!("storage: {} is unparseable ({}), using default", key, e);
                Ok(T::default())
            }
        }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    pub fn load_data(&self) -> AppResult<AppData> {
        let events: Vec<CalendarEvent> = self.load_or_default(EVENTS_KEY)?;
        Ok(AppData {
            tasks: self.load_or_default(TASKS_KEY)?,
            habits: self.load_or_default(HABITS_KEY)?,
            events: EventStore::from_events(events),
        })
    }

    /// Rewrite whatever a committed change touched.
    pub fn persist(&self, change: Change, data: &AppData) -> AppResult<()> {
        match change {
            Change::Events => self.save(EVENTS_KEY, data.events.events())?,
            Change::Tasks => self.save(TASKS_KEY, &data.tasks)?,
            Change::Habits => self.save(HABITS_KEY, &data.habits)?,
            Change::Cleared => {
                self.clear()?;
            }
            Change::SelectedDate => {}
        }
        Ok(())
    }

    /// Audit trail entry for a user-visible operation.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}
