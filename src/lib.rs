//! Multilingual site-search: an offline index builder and a client-side
//! fuzzy query engine over its output.
//!
//! The site's content lives in per-locale translation dictionaries. At
//! build time the extractor flattens them into one JSON index per locale;
//! at request time the engine loads that index (once per locale, cached)
//! and answers free-text queries with weighted fuzzy matching, filters,
//! history, and suggestions.
//!
//! # Architecture
//!
//! ```text
//! build time                          request time
//! ┌───────────┐   ┌───────────┐       ┌───────────┐   ┌────────────┐
//! │ extract   │──▶│ build     │──────▶│ loader    │──▶│ search     │
//! │ (records) │   │ (writer)  │ JSON  │ (cache)   │   │ (engine)   │
//! └───────────┘   └───────────┘       └───────────┘   └────────────┘
//!                                          │               │
//!                                          ▼               ▼
//!                                     ┌───────────┐   ┌────────────┐
//!                                     │ suggest   │   │ history    │
//!                                     └───────────┘   └────────────┘
//! ```
//!
//! Everything downstream of the index fetch is synchronous, in-memory
//! computation sized for a corpus of tens of documents per locale. The
//! engine and its satellites degrade instead of erroring: a missing index
//! means zero results, an unavailable storage backend means no-op history.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use sitesearch::{FsIndexSource, IndexLoader, SearchEngine};
//!
//! let loader = Arc::new(IndexLoader::new(Box::new(FsIndexSource::new(
//!     "public/search-index",
//! ))));
//! let engine = SearchEngine::new(loader);
//! let response = engine.search("nexus", "en", None);
//! for result in &response.results {
//!     println!("{:.2} {} -> {}", result.relevance, result.title, result.url);
//! }
//! ```

// Module declarations
pub mod build;
pub mod extract;
mod fuzzy;
pub mod history;
mod loader;
mod scoring;
mod search;
mod session;
mod suggest;
mod types;
mod utils;

// Re-exports for public API
pub use build::{run_build, BuildManifest, BuildSummary, LocaleSummary, MANIFEST_VERSION};
pub use extract::{extract_index, ContentSource, ExtractorConfig, FsContentSource, PageSpec};
pub use fuzzy::levenshtein_bounded;
pub use history::{
    FileStorage, HistoryStore, MemoryStorage, StorageBackend, MAX_HISTORY,
};
pub use loader::{FsIndexSource, IndexLoader, IndexSource};
pub use scoring::{score_fields, FieldSet, FieldWeights, ScoringParams};
pub use search::{SearchEngine, MAX_RESULTS};
pub use session::{Debouncer, RequestSequence, DEBOUNCE_WINDOW};
pub use suggest::{SuggestConfig, SuggestionEngine};
pub use types::{
    ArticleRecord, AssociatedContent, Category, ContentType, ImageKind, ImageRecord,
    PageRecord, ProductRecord, ResolvedFilters, SearchFilters, SearchHistoryItem,
    SearchIndex, SearchResponse, SearchResult, SortMode,
};
pub use utils::normalize;
