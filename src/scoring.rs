// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Each candidate is matched across four fields — title, description,
//! content, alt text — with descending weights. Per-field matching is
//! position-insensitive: a hit at the end of a description costs the same
//! as one at the start. The per-field cost is 0.0 for a perfect match and
//! 1.0 for no match; costs combine into a weighted geometric mean, and
//! `relevance = 1 - min(cost, 1)` flips that into the [0,1] score the
//! response contract exposes.
//!
//! Every constant here is a tuning knob, not a contract. The defaults are
//! carried over from the previous engine's configuration; nothing
//! downstream may assume their exact values.

use crate::fuzzy::levenshtein_bounded;
use crate::utils::normalize;

/// Relative field weights. Must sum to 1.0 for the combined cost to stay
/// within [0,1]; [`ScoringParams::default`] guarantees that.
#[derive(Debug, Clone, Copy)]
pub struct FieldWeights {
    pub title: f64,
    pub description: f64,
    pub content: f64,
    pub alt: f64,
}

/// Tunable scoring parameters.
#[derive(Debug, Clone, Copy)]
pub struct ScoringParams {
    pub weights: FieldWeights,
    /// A candidate is a fuzzy match iff some field cost is ≤ this.
    pub threshold: f64,
    /// Substring-fallback relevance when the query is a title prefix.
    pub fallback_title_prefix: f64,
    /// Substring-fallback relevance when the title contains the query.
    pub fallback_title_contains: f64,
    /// Substring-fallback relevance for a hit anywhere else.
    pub fallback_body: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        ScoringParams {
            weights: FieldWeights {
                title: 0.4,
                description: 0.3,
                content: 0.2,
                alt: 0.1,
            },
            threshold: 0.3,
            fallback_title_prefix: 0.9,
            fallback_title_contains: 0.8,
            fallback_body: 0.5,
        }
    }
}

impl ScoringParams {
    /// Edit budget for a query: the threshold expressed in whole edits.
    /// Short queries get zero tolerance, which is what keeps two-letter
    /// queries from matching everything (the substring fallback covers them).
    fn max_edits(&self, query_chars: usize) -> usize {
        (query_chars as f64 * self.threshold).floor() as usize
    }
}

/// The searchable text of one candidate, already pulled out of its record.
/// Absent fields carry no weight at all rather than counting as misses.
#[derive(Debug, Clone, Default)]
pub struct FieldSet<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub content: Option<&'a str>,
    pub alt: Option<&'a str>,
}

/// Score a candidate against a pre-normalized query.
///
/// Returns `Some(relevance)` when at least one field is within the fuzzy
/// threshold, `None` otherwise. Relevance is clamped to [0,1].
pub fn score_fields(params: &ScoringParams, query_norm: &str, fields: &FieldSet<'_>) -> Option<f64> {
    let w = params.weights;
    let present: [(Option<&str>, f64); 4] = [
        (Some(fields.title), w.title),
        (fields.description, w.description),
        (fields.content, w.content),
        (fields.alt, w.alt),
    ];

    let mut total_weight = 0.0;
    let mut costs: Vec<(f64, f64)> = Vec::with_capacity(4);
    let mut matched = false;

    for (field, weight) in present {
        let Some(text) = field else { continue };
        let cost = field_cost(params, query_norm, text);
        if cost <= params.threshold {
            matched = true;
        }
        total_weight += weight;
        costs.push((cost, weight));
    }

    if !matched || total_weight <= 0.0 {
        return None;
    }

    // Weighted geometric mean: one perfect field pulls the whole cost to
    // zero, mirroring how the previous engine promoted exact hits.
    let mut combined = 1.0_f64;
    for (cost, weight) in costs {
        combined *= cost.powf(weight / total_weight);
    }

    Some((1.0 - combined.min(1.0)).clamp(0.0, 1.0))
}

/// Cost of matching `query_norm` against one field, in [0,1].
///
/// Exact normalized equality is free; substring containment costs a sliver
/// proportional to how much of the field the query leaves uncovered;
/// otherwise the best bounded edit distance over word windows of the
/// query's own word count, normalized by query length.
fn field_cost(params: &ScoringParams, query_norm: &str, field: &str) -> f64 {
    let field_norm = normalize(field);
    if query_norm.is_empty() || field_norm.is_empty() {
        return 1.0;
    }
    if field_norm == query_norm {
        return 0.0;
    }

    let query_chars = query_norm.chars().count();
    if field_norm.contains(query_norm) {
        let field_chars = field_norm.chars().count();
        let coverage = query_chars as f64 / field_chars as f64;
        return 0.1 * (1.0 - coverage);
    }

    let max = params.max_edits(query_chars);
    if max == 0 {
        return 1.0;
    }

    let query_words = query_norm.split(' ').count();
    let field_words: Vec<&str> = field_norm.split(' ').collect();

    let mut best: Option<usize> = None;
    if field_words.len() >= query_words {
        for window in field_words.windows(query_words) {
            let joined = window.join(" ");
            if let Some(dist) = levenshtein_bounded(query_norm, &joined, max) {
                best = Some(best.map_or(dist, |b: usize| b.min(dist)));
                if best == Some(1) {
                    break; // distance 0 would have been a substring hit
                }
            }
        }
    } else if let Some(dist) = levenshtein_bounded(query_norm, &field_norm, max) {
        best = Some(dist);
    }

    match best {
        Some(dist) => (dist as f64 / query_chars as f64).min(1.0),
        None => 1.0,
    }
}
