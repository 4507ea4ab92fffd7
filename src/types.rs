// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! One `SearchIndex` exists per locale, built offline and treated as
//! immutable: a rebuild replaces the whole file, never patches it. Field
//! names serialize in camelCase because the index JSON is a wire contract
//! consumed by existing clients — additive changes are safe, renames are not.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ProductRecord**: `id == slug` for current usage; `locale` matches the
//!   containing index's locale.
//! - **ArticleRecord**: `content` is a flattened plain-text excerpt capped at
//!   500 characters; `category` is derived once at extraction time from the
//!   configured human-article set, nowhere else.
//! - **ImageRecord**: `associated_content` is a back-reference only, never an
//!   ownership edge.
//! - **SearchFilters**: an absent field means "no restriction", not "empty
//!   set". Resolution to concrete allow-sets happens in exactly one place,
//!   [`SearchFilters::resolve`].

use serde::{Deserialize, Serialize};

// =============================================================================
// RECORD TAXONOMY
// =============================================================================

/// The four kinds of searchable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Product,
    Article,
    Image,
    Page,
}

impl ContentType {
    /// Every content type, in the order candidates are emitted.
    pub const ALL: [ContentType; 4] = [
        ContentType::Product,
        ContentType::Article,
        ContentType::Image,
        ContentType::Page,
    ];
}

/// Article classification. Everything not explicitly marked human is
/// veterinary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Human,
    Veterinary,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Human, Category::Veterinary];
}

/// Where an indexed image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Product,
    Article,
    About,
    Banner,
}

// =============================================================================
// INDEX RECORDS
// =============================================================================

/// A product from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub locale: String,
}

/// An FAQ article with a flattened text excerpt for matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub image: String,
    pub alt: String,
    pub category: Category,
    pub locale: String,
}

/// A well-known top-level route (home, about, contact, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub id: String,
    pub path: String,
    pub title: String,
    pub description: String,
    pub locale: String,
}

/// Back-reference from an image to the content item it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedContent {
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub id: String,
    pub title: String,
    pub url: String,
}

/// An indexed image with its alt text and owning content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: ImageKind,
    pub associated_content: AssociatedContent,
    pub locale: String,
}

/// The complete searchable snapshot for one locale.
///
/// Built once per build per locale, replaced wholesale on rebuild. At
/// request time the loader hands out shared read-only references; nothing
/// mutates an index after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    pub products: Vec<ProductRecord>,
    pub articles: Vec<ArticleRecord>,
    pub pages: Vec<PageRecord>,
    pub images: Vec<ImageRecord>,
    pub locale: String,
}

impl SearchIndex {
    /// The degradation value: a valid index with nothing in it.
    pub fn empty(locale: &str) -> Self {
        SearchIndex {
            products: Vec::new(),
            articles: Vec::new(),
            pages: Vec::new(),
            images: Vec::new(),
            locale: locale.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
            && self.articles.is_empty()
            && self.pages.is_empty()
            && self.images.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.products.len() + self.articles.len() + self.pages.len() + self.images.len()
    }
}

// =============================================================================
// QUERY-TIME TYPES
// =============================================================================

/// What users see when they get a search result. Created fresh per query,
/// discarded after render — never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub result_type: ContentType,
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Normalized match quality: 1.0 is a perfect match, 0.0 the weakest.
    pub relevance: f64,
}

/// How results get ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Relevance,
    Title,
}

/// Request-scoped filters. All fields optional; `None` means unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<ContentType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortMode>,
}

impl SearchFilters {
    /// Normalize into concrete allow-sets. An absent field becomes "all
    /// allowed", so `resolve(None)` and `resolve(Some(&default))` agree.
    pub fn resolve(filters: Option<&SearchFilters>) -> ResolvedFilters {
        let filters = filters.cloned().unwrap_or_default();
        ResolvedFilters {
            types: filters.types.unwrap_or_else(|| ContentType::ALL.to_vec()),
            categories: filters.categories.unwrap_or_else(|| Category::ALL.to_vec()),
            sort_by: filters.sort_by.unwrap_or_default(),
        }
    }
}

/// Filters after normalization: no optionality left, just allow-sets.
#[derive(Debug, Clone)]
pub struct ResolvedFilters {
    pub types: Vec<ContentType>,
    pub categories: Vec<Category>,
    pub sort_by: SortMode,
}

impl ResolvedFilters {
    pub fn allows_type(&self, t: ContentType) -> bool {
        self.types.contains(&t)
    }

    pub fn allows_category(&self, c: Category) -> bool {
        self.categories.contains(&c)
    }
}

/// The query engine's answer. `total` is the true pre-cap candidate count,
/// which can exceed `results.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total: usize,
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,
}

impl SearchResponse {
    /// A zero-result success. Distinct from a failed search: this is a
    /// well-formed response, not an error path.
    pub fn empty(query: &str, locale: &str, filters: Option<&SearchFilters>) -> Self {
        SearchResponse {
            query: query.to_string(),
            results: Vec::new(),
            total: 0,
            locale: locale.to_string(),
            filters: filters.cloned(),
        }
    }
}

/// One persisted past query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryItem {
    pub query: String,
    /// Epoch milliseconds at creation; ordering key for the history list.
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_count: Option<usize>,
}
