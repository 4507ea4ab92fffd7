// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete suggestions and "popular searches".
//!
//! Suggestions are derived live from the locale's index: full product names
//! and article titles on containment, individual long words of descriptions
//! and subtitles on prefix. Popular searches are corpus-derived (product
//! names first, then a few human-category article titles) topped up from a
//! static per-locale keyword list, so the UI never renders a dead empty
//! panel even when the index cannot be loaded.

use std::collections::HashMap;
use std::sync::Arc;

use crate::loader::IndexLoader;
use crate::types::Category;
use crate::utils::normalize;

/// Words shorter than this never become prefix suggestions.
const MIN_WORD_CHARS: usize = 4;

/// Minimum typed characters before suggestions kick in.
const MIN_QUERY_CHARS: usize = 2;

/// How many human-category article titles feed the popular list.
const POPULAR_ARTICLE_SAMPLE: usize = 3;

/// Static per-locale popular-search defaults.
pub struct SuggestConfig {
    pub defaults: HashMap<String, Vec<String>>,
    pub fallback_locale: String,
}

impl SuggestConfig {
    fn owned(entries: &[&str]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    /// The default keywords per locale when the index has nothing better.
    pub fn defaults_for(&self, locale: &str) -> Vec<String> {
        self.defaults
            .get(locale)
            .or_else(|| self.defaults.get(&self.fallback_locale))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert(
            "en".to_string(),
            Self::owned(&[
                "Nexus Dx1",
                "CASA system",
                "WHO 6th Edition",
                "Semen analysis",
                "Sperm morphology",
                "MSQA-100",
                "SQA-6100Vet",
                "Human andrology",
            ]),
        );
        defaults.insert(
            "es".to_string(),
            Self::owned(&[
                "Nexus Dx1",
                "Sistema CASA",
                "OMS 6ª Edición",
                "Análisis de semen",
                "Morfología espermática",
                "MSQA-100",
                "SQA-6100Vet",
                "Andrología humana",
            ]),
        );
        defaults.insert(
            "de".to_string(),
            Self::owned(&[
                "Nexus Dx1",
                "CASA-System",
                "WHO 6. Auflage",
                "Spermaanalyse",
                "Spermienmorphologie",
                "MSQA-100",
                "SQA-6100Vet",
                "Humane Andrologie",
            ]),
        );
        defaults.insert(
            "fr".to_string(),
            Self::owned(&[
                "Nexus Dx1",
                "Système CASA",
                "OMS 6ème édition",
                "Analyse du sperme",
                "Morphologie des spermatozoïdes",
                "MSQA-100",
                "SQA-6100Vet",
                "Andrologie humaine",
            ]),
        );
        defaults.insert(
            "ja".to_string(),
            Self::owned(&[
                "Nexus Dx1",
                "CASAシステム",
                "WHO第6版",
                "精液分析",
                "精子形態",
                "MSQA-100",
                "SQA-6100Vet",
                "ヒト男性学",
            ]),
        );
        defaults.insert(
            "ko".to_string(),
            Self::owned(&[
                "Nexus Dx1",
                "CASA 시스템",
                "WHO 6판",
                "정액 분석",
                "정자 형태",
                "MSQA-100",
                "SQA-6100Vet",
                "인간 남성학",
            ]),
        );
        SuggestConfig {
            defaults,
            fallback_locale: "en".to_string(),
        }
    }
}

/// Derives suggestions and popular searches from the loaded index.
pub struct SuggestionEngine {
    loader: Arc<IndexLoader>,
    config: SuggestConfig,
}

impl SuggestionEngine {
    pub fn new(loader: Arc<IndexLoader>) -> Self {
        SuggestionEngine {
            loader,
            config: SuggestConfig::default(),
        }
    }

    pub fn with_config(loader: Arc<IndexLoader>, config: SuggestConfig) -> Self {
        SuggestionEngine { loader, config }
    }

    /// Autocomplete candidates for a partial query. Requires at least two
    /// typed characters; the verbatim input never suggests itself.
    pub fn suggest(&self, query: &str, locale: &str, limit: usize) -> Vec<String> {
        let query_norm = normalize(query);
        if query_norm.chars().count() < MIN_QUERY_CHARS || limit == 0 {
            return Vec::new();
        }

        let index = self.loader.load(locale);
        let mut suggestions: Vec<String> = Vec::new();

        for product in &index.products {
            if normalize(&product.name).contains(&query_norm) {
                suggestions.push(product.name.clone());
            }
            push_prefix_words(&mut suggestions, &product.description, &query_norm);
        }

        for article in &index.articles {
            if normalize(&article.title).contains(&query_norm) {
                suggestions.push(article.title.clone());
            }
            push_prefix_words(&mut suggestions, &article.subtitle, &query_norm);
        }

        dedup_keeping_order(suggestions)
            .into_iter()
            .filter(|s| normalize(s) != query_norm)
            .take(limit)
            .collect()
    }

    /// Popular searches: product names, a sample of human-category article
    /// titles, then the static defaults. Never empty for a known locale,
    /// even when the index fails to load.
    pub fn popular(&self, locale: &str, limit: usize) -> Vec<String> {
        let index = self.loader.load(locale);

        let mut popular: Vec<String> = Vec::new();
        popular.extend(index.products.iter().map(|p| p.name.clone()));
        popular.extend(
            index
                .articles
                .iter()
                .filter(|a| a.category == Category::Human)
                .take(POPULAR_ARTICLE_SAMPLE)
                .map(|a| a.title.clone()),
        );
        popular.extend(self.config.defaults_for(locale));

        dedup_keeping_order(popular).into_iter().take(limit).collect()
    }
}

/// Long words of `text` that start with the query, in document order.
fn push_prefix_words(out: &mut Vec<String>, text: &str, query_norm: &str) {
    for word in text.split_whitespace() {
        if word.chars().count() >= MIN_WORD_CHARS && normalize(word).starts_with(query_norm) {
            out.push(word.to_string());
        }
    }
}

/// Deduplicate by normalized form, keeping first occurrence order.
fn dedup_keeping_order(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|v| !v.is_empty() && seen.insert(normalize(v)))
        .collect()
}
