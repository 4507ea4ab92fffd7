//! Suggestion engine behavior over loaded and failing indexes.

use std::sync::Arc;

use crate::common::{loader_with, sample_index, FailingSource};
use sitesearch::{IndexLoader, SuggestConfig, SuggestionEngine};

fn engine() -> SuggestionEngine {
    SuggestionEngine::new(loader_with(sample_index()))
}

#[test]
fn product_names_suggested_on_containment() {
    let suggestions = engine().suggest("nex", "en", 8);
    assert!(suggestions.contains(&"Nexus Dx1".to_string()));
}

#[test]
fn article_titles_suggested_on_containment() {
    let suggestions = engine().suggest("canine", "en", 8);
    assert!(suggestions.contains(&"Canine semen analysis".to_string()));
}

#[test]
fn description_words_suggested_on_prefix() {
    // "Compact semen quality analyzer" carries the word
    let suggestions = engine().suggest("anal", "en", 8);
    assert!(suggestions.iter().any(|s| s.to_lowercase() == "analyzer"));
}

#[test]
fn single_character_queries_suggest_nothing() {
    assert!(engine().suggest("n", "en", 8).is_empty());
    assert!(engine().suggest("", "en", 8).is_empty());
}

#[test]
fn verbatim_query_never_suggests_itself() {
    let suggestions = engine().suggest("Nexus Dx1", "en", 8);
    assert!(!suggestions.iter().any(|s| s == "Nexus Dx1"));
}

#[test]
fn limit_is_respected() {
    let suggestions = engine().suggest("semen", "en", 2);
    assert!(suggestions.len() <= 2);
    assert!(engine().suggest("semen", "en", 0).is_empty());
}

#[test]
fn popular_leads_with_product_names() {
    let popular = engine().popular("en", 10);
    assert_eq!(popular[0], "Nexus Dx1");
    assert!(popular.contains(&"MSQA-100".to_string()));
    // human article sampled, veterinary ones not ahead of defaults
    assert!(popular.contains(&"Human semen standards".to_string()));
}

#[test]
fn popular_never_empty_when_index_fails() {
    let loader = Arc::new(IndexLoader::new(Box::new(FailingSource)));
    let engine = SuggestionEngine::new(loader);

    let popular = engine.popular("en", 8);
    assert_eq!(popular.len(), 8);
    assert!(popular.contains(&"CASA system".to_string()));

    // unknown locale falls back to the English defaults
    let unknown = engine.popular("xx", 8);
    assert_eq!(unknown, popular);
}

#[test]
fn locale_defaults_are_localized() {
    let loader = Arc::new(IndexLoader::new(Box::new(FailingSource)));
    let engine = SuggestionEngine::new(loader);
    let de = engine.popular("de", 8);
    assert!(de.contains(&"Spermaanalyse".to_string()));
}

#[test]
fn custom_config_overrides_defaults() {
    let config = SuggestConfig {
        defaults: [("en".to_string(), vec!["only this".to_string()])]
            .into_iter()
            .collect(),
        fallback_locale: "en".to_string(),
    };
    let loader = Arc::new(IndexLoader::new(Box::new(FailingSource)));
    let engine = SuggestionEngine::with_config(loader, config);
    assert_eq!(engine.popular("en", 8), vec!["only this".to_string()]);
}

#[test]
fn failing_loader_yields_no_suggestions() {
    let loader = Arc::new(IndexLoader::new(Box::new(FailingSource)));
    let engine = SuggestionEngine::new(loader);
    assert!(engine.suggest("nexus", "en", 8).is_empty());
}
