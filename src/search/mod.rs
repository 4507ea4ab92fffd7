// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: free text in, ranked [`SearchResult`]s out.
//!
//! Pipeline per query:
//!
//! ```text
//! query ──trim──▶ short-circuit empty ──▶ load index (cached)
//!        ──▶ flatten candidates (type/category filters)
//!        ──▶ weighted fuzzy scoring
//!        ──▶ substring fallback (only if fuzzy found nothing)
//!        ──▶ sort ──▶ cap at 50, report true total
//! ```
//!
//! Everything after the index load is pure, synchronous computation over
//! in-memory records. The engine never errors: a missing index degrades to
//! an empty response, which keeps "no matches" and "search broke" as
//! distinct states at the caller (an error there is a bug here).

mod candidates;

use std::sync::Arc;

use crate::loader::IndexLoader;
use crate::scoring::{score_fields, ScoringParams};
use crate::types::{SearchFilters, SearchResponse, SortMode};
use crate::utils::normalize;

/// Hard cap on returned results. `total` still reports the pre-cap count.
pub const MAX_RESULTS: usize = 50;

/// Minimum query length for the substring fallback path.
const FALLBACK_MIN_CHARS: usize = 2;

/// The search engine. Cheap to clone; shares the loader's index cache.
#[derive(Clone)]
pub struct SearchEngine {
    loader: Arc<IndexLoader>,
    params: ScoringParams,
}

impl SearchEngine {
    pub fn new(loader: Arc<IndexLoader>) -> Self {
        SearchEngine {
            loader,
            params: ScoringParams::default(),
        }
    }

    /// Override the scoring knobs. Mostly for tests and tuning runs.
    pub fn with_params(loader: Arc<IndexLoader>, params: ScoringParams) -> Self {
        SearchEngine { loader, params }
    }

    /// Execute a query against one locale's index.
    pub fn search(
        &self,
        query: &str,
        locale: &str,
        filters: Option<&SearchFilters>,
    ) -> SearchResponse {
        let trimmed = query.trim();
        let query_norm = normalize(trimmed);
        if query_norm.is_empty() {
            // Cheap short-circuit, and no index fetch. Covers whitespace
            // queries and ones that normalization strips to nothing (e.g.
            // bare combining marks), which would otherwise prefix-match
            // every title in the fallback.
            return SearchResponse::empty(query, locale, filters);
        }

        let index = self.loader.load(locale);
        let resolved = SearchFilters::resolve(filters);
        let candidates = candidates::collect(&index, &resolved);
        let mut results: Vec<_> = candidates
            .iter()
            .filter_map(|candidate| {
                score_fields(&self.params, &query_norm, &candidate.fields())
                    .map(|relevance| (candidate, relevance))
            })
            .map(|(candidate, relevance)| candidate.clone().into_result(relevance))
            .collect();

        // Fuzzy found nothing: fall back to plain containment so short
        // exact queries against short fields still surface results.
        if results.is_empty() && trimmed.chars().count() >= FALLBACK_MIN_CHARS {
            for candidate in &candidates {
                let title_norm = normalize(&candidate.title);
                let relevance = if title_norm.starts_with(&query_norm) {
                    self.params.fallback_title_prefix
                } else if title_norm.contains(&query_norm) {
                    self.params.fallback_title_contains
                } else if normalize(&candidate.haystack()).contains(&query_norm) {
                    self.params.fallback_body
                } else {
                    continue;
                };
                results.push(candidate.clone().into_result(relevance));
            }
        }

        match resolved.sort_by {
            SortMode::Title => {
                results.sort_by(|a, b| normalize(&a.title).cmp(&normalize(&b.title)));
            }
            SortMode::Relevance => {
                results.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
            }
        }

        let total = results.len();
        results.truncate(MAX_RESULTS);

        SearchResponse {
            query: trimmed.to_string(),
            results,
            total,
            locale: locale.to_string(),
            filters: filters.cloned(),
        }
    }
}
