// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index loading with per-locale memoization.
//!
//! The index is write-once (at load) and read-many, so the cache hands out
//! `Arc<SearchIndex>` clones and never invalidates within a loader's
//! lifetime. A fetch failure degrades to an empty index instead of an
//! error — the query engine must answer "no results", not crash — and the
//! failure is NOT cached, so a later query can recover once the index
//! becomes reachable again.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::SearchIndex;

/// Where index documents come from. The production impl reads the build
/// output directory; tests substitute counting or failing fakes.
pub trait IndexSource: Send + Sync {
    fn fetch(&self, locale: &str) -> Result<SearchIndex, String>;
}

/// Filesystem source: `<dir>/<locale>.json`, exactly what the writer emits.
pub struct FsIndexSource {
    dir: PathBuf,
}

impl FsIndexSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsIndexSource { dir: dir.into() }
    }
}

impl IndexSource for FsIndexSource {
    fn fetch(&self, locale: &str) -> Result<SearchIndex, String> {
        let path = self.dir.join(format!("{locale}.json"));
        let raw = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&raw)
            .map_err(|e| format!("invalid index JSON in {}: {}", path.display(), e))
    }
}

/// Per-locale memoizing loader.
pub struct IndexLoader {
    source: Box<dyn IndexSource>,
    cache: Mutex<HashMap<String, Arc<SearchIndex>>>,
}

impl IndexLoader {
    pub fn new(source: Box<dyn IndexSource>) -> Self {
        IndexLoader {
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Load the index for a locale, fetching at most once per locale for
    /// the life of this loader. Concurrent first loads serialize on the
    /// cache lock, so the underlying source sees a single fetch.
    pub fn load(&self, locale: &str) -> Arc<SearchIndex> {
        let mut cache = self.cache.lock();
        if let Some(index) = cache.get(locale) {
            return Arc::clone(index);
        }

        match self.source.fetch(locale) {
            Ok(index) => {
                let index = Arc::new(index);
                cache.insert(locale.to_string(), Arc::clone(&index));
                index
            }
            Err(err) => {
                eprintln!("⚠️  search index unavailable for '{locale}': {err}");
                Arc::new(SearchIndex::empty(locale))
            }
        }
    }

    /// Number of locales currently cached.
    pub fn cached_locales(&self) -> usize {
        self.cache.lock().len()
    }
}
