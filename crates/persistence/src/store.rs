// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The key-value configuration store.

use diesel::prelude::*;
use std::collections::HashMap;
use tracing::debug;

use crate::backend::{enable_wal_mode, initialize_database};
use crate::error::PersistenceError;
use crate::schema::config_entries::dsl;

/// Key-value store of JSON-serialized settings, one row per key.
///
/// Reads populate a per-store cache on first miss; a successful write
/// updates the cached entry in the same operation, so a read immediately
/// after a write always observes the written value. A failed write leaves
/// the cache untouched, keeping it consistent with storage.
pub struct ConfigStore {
    conn: SqliteConnection,
    cache: HashMap<String, Option<String>>,
}

impl ConfigStore {
    /// Creates a store backed by an in-memory database.
    ///
    /// Each store gets its own private database; tests are fully isolated.
    ///
    /// # Errors
    ///
    /// Returns an error if connection or migration fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: SqliteConnection = initialize_database(":memory:")?;
        Ok(Self {
            conn,
            cache: HashMap::new(),
        })
    }

    /// Creates a store backed by a file database, with WAL enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if connection, WAL setup, or migration fails.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        let mut conn: SqliteConnection = initialize_database(path)?;
        enable_wal_mode(&mut conn)?;
        Ok(Self {
            conn,
            cache: HashMap::new(),
        })
    }

    /// Fetches the value for a key, `None` if the key is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails.
    pub fn get(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        if let Some(cached) = self.cache.get(key) {
            return Ok(cached.clone());
        }

        let value: Option<String> = dsl::config_entries
            .filter(dsl::key.eq(key))
            .select(dsl::value)
            .first::<String>(&mut self.conn)
            .optional()
            .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

        self.cache.insert(key.to_string(), value.clone());
        Ok(value)
    }

    /// Upserts the value for a key.
    ///
    /// The cache entry is updated only after the storage write succeeds; on
    /// failure the cache keeps its prior state.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        diesel::insert_into(dsl::config_entries)
            .values((dsl::key.eq(key), dsl::value.eq(value)))
            .on_conflict(dsl::key)
            .do_update()
            .set(dsl::value.eq(value))
            .execute(&mut self.conn)
            .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

        self.cache
            .insert(key.to_string(), Some(value.to_string()));
        debug!(key, "Stored configuration value");
        Ok(())
    }

    /// Fetches every `(key, value)` pair whose key starts with `prefix`.
    ///
    /// Bulk reads bypass the single-key cache; callers cache the decoded
    /// result themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails.
    pub fn get_by_prefix(
        &mut self,
        prefix: &str,
    ) -> Result<Vec<(String, String)>, PersistenceError> {
        // LIKE treats '_' as a single-character wildcard, so the pattern
        // over-matches; the exact prefix filter below settles it.
        let pattern: String = format!("{prefix}%");
        let rows: Vec<(String, String)> = dsl::config_entries
            .filter(dsl::key.like(pattern))
            .select((dsl::key, dsl::value))
            .load::<(String, String)>(&mut self.conn)
            .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

        Ok(rows
            .into_iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .collect())
    }

    /// Drops every cached entry.
    ///
    /// Callers that mutate storage through another path must call this, or
    /// reads go stale.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("cached_keys", &self.cache.len())
            .finish_non_exhaustive()
    }
}
