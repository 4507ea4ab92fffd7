// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-user search history over an injectable key-value backend.
//!
//! The store never throws: a backend that is unavailable (no writable disk,
//! corrupt payload, quota) turns every operation into a no-op or an empty
//! read. Collection invariants, enforced on EVERY write:
//!
//! - at most [`MAX_HISTORY`] items
//! - unique by case-insensitive query text
//! - ordered by descending timestamp, most recent first

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

use crate::types::SearchHistoryItem;

/// History cap. Enforced at every write, not eventually.
pub const MAX_HISTORY: usize = 20;

const STORAGE_KEY: &str = "search_history";

/// String key-value port, the per-browser-storage analog.
///
/// `set`/`remove` report success; callers treat `false` as "storage
/// unavailable" and move on. `get` returns `None` both for a missing key
/// and for an unreachable backend — the distinction does not matter here.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.map.lock().insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.map.lock().remove(key).is_some()
    }
}

/// File-backed backend: one JSON object mapping keys to string values.
/// I/O failures degrade silently, matching the storage-unavailable policy.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    fn read_map(&self) -> HashMap<String, String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write_map(&self, map: &HashMap<String, String>) -> bool {
        let Ok(raw) = serde_json::to_string(map) else {
            return false;
        };
        if let Some(parent) = self.path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return false;
            }
        }
        fs::write(&self.path, raw).is_ok()
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> bool {
        let mut map = self.read_map();
        if map.remove(key).is_none() {
            return false;
        }
        self.write_map(&map)
    }
}

/// The history store itself. All mutation of history items goes through
/// here; the query engine never touches this directly.
pub struct HistoryStore {
    backend: Box<dyn StorageBackend>,
}

impl HistoryStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        HistoryStore { backend }
    }

    /// Items sorted by descending timestamp. Missing or corrupt stored
    /// JSON reads as "no history", never as an error.
    pub fn list(&self) -> Vec<SearchHistoryItem> {
        let Some(raw) = self.backend.get(STORAGE_KEY) else {
            return Vec::new();
        };
        let mut items: Vec<SearchHistoryItem> =
            serde_json::from_str(&raw).unwrap_or_default();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items
    }

    /// Record a query with remove-then-prepend semantics: a repeated search
    /// moves to the front with a fresh timestamp instead of duplicating.
    pub fn record(&self, query: &str, result_count: Option<usize>) {
        self.record_at(query, result_count, now_millis());
    }

    /// [`HistoryStore::record`] with an explicit timestamp, so tests can
    /// pin ordering without sleeping.
    pub fn record_at(&self, query: &str, result_count: Option<usize>, timestamp: u64) {
        let query_lower = query.to_lowercase();
        let mut items = self.list();
        items.retain(|item| item.query.to_lowercase() != query_lower);
        items.insert(
            0,
            SearchHistoryItem {
                query: query.to_string(),
                timestamp,
                result_count,
            },
        );
        // Stable sort keeps the fresh entry in front of timestamp ties
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items.truncate(MAX_HISTORY);
        self.persist(&items);
    }

    /// Remove one entry by case-insensitive query match.
    pub fn remove(&self, query: &str) {
        let query_lower = query.to_lowercase();
        let mut items = self.list();
        let before = items.len();
        items.retain(|item| item.query.to_lowercase() != query_lower);
        if items.len() != before {
            self.persist(&items);
        }
    }

    /// Drop all history.
    pub fn clear(&self) {
        self.backend.remove(STORAGE_KEY);
    }

    fn persist(&self, items: &[SearchHistoryItem]) {
        if let Ok(raw) = serde_json::to_string(items) {
            // A failing backend makes this a no-op; nothing to surface
            let _ = self.backend.set(STORAGE_KEY, &raw);
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
