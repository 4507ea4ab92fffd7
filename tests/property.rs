//! Property-based tests using proptest.
//!
//! Randomized inputs against the invariants the search surface promises:
//! history stays capped and deduplicated, relevance stays in [0,1], and
//! absent filters behave exactly like default filters.

mod common;

use common::{engine_with, sample_index};
use proptest::prelude::*;
use sitesearch::{
    levenshtein_bounded, normalize, HistoryStore, MemoryStorage, SearchFilters,
    MAX_HISTORY, MAX_RESULTS,
};

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 ]{0,24}").unwrap()
}

fn unicode_query_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "qualité du sperme".to_string(),
        "análisis".to_string(),
        "精子".to_string(),
        "정자 분석".to_string(),
        "über".to_string(),
        "  nexus  ".to_string(),
        "\u{feff}casa".to_string(),
    ])
}

proptest! {
    #[test]
    fn history_never_exceeds_cap(
        entries in prop::collection::vec(("[a-zA-Z ]{1,12}", 0u64..1_000_000), 0..60)
    ) {
        let store = HistoryStore::new(Box::new(MemoryStorage::new()));
        for (query, timestamp) in &entries {
            store.record_at(query, None, *timestamp);
            let items = store.list();
            prop_assert!(items.len() <= MAX_HISTORY);
            // unique by case-insensitive query text
            let mut lowered: Vec<String> =
                items.iter().map(|i| i.query.to_lowercase()).collect();
            lowered.sort();
            lowered.dedup();
            prop_assert_eq!(lowered.len(), items.len());
            // descending timestamps
            for pair in items.windows(2) {
                prop_assert!(pair[0].timestamp >= pair[1].timestamp);
            }
        }
    }

    #[test]
    fn recording_a_repeat_moves_it_to_the_front(query in "[a-zA-Z]{1,12}") {
        let store = HistoryStore::new(Box::new(MemoryStorage::new()));
        store.record_at(&query, None, 100);
        store.record_at("something else", None, 200);
        store.record_at(&query.to_uppercase(), Some(2), 300);

        let items = store.list();
        prop_assert_eq!(items.len(), 2);
        prop_assert_eq!(items[0].query.to_lowercase(), query.to_lowercase());
        prop_assert_eq!(items[0].timestamp, 300);
    }

    #[test]
    fn relevance_always_in_unit_interval(query in query_strategy()) {
        let engine = engine_with(sample_index());
        let response = engine.search(&query, "en", None);
        prop_assert!(response.results.len() <= MAX_RESULTS);
        prop_assert!(response.total >= response.results.len());
        for result in &response.results {
            prop_assert!((0.0..=1.0).contains(&result.relevance));
        }
    }

    #[test]
    fn default_filters_match_absent_filters(query in query_strategy()) {
        let engine = engine_with(sample_index());
        let bare = engine.search(&query, "en", None);
        let defaulted = engine.search(&query, "en", Some(&SearchFilters::default()));

        let bare_ids: Vec<&str> = bare.results.iter().map(|r| r.id.as_str()).collect();
        let def_ids: Vec<&str> = defaulted.results.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(bare_ids, def_ids);
        prop_assert_eq!(bare.total, defaulted.total);
    }

    #[test]
    fn search_never_panics_on_unicode(query in unicode_query_strategy()) {
        let engine = engine_with(sample_index());
        let response = engine.search(&query, "en", None);
        prop_assert!(response.results.len() <= MAX_RESULTS);
    }

    #[test]
    fn normalize_is_idempotent(text in "[a-zA-Z0-9 àéîöçñÀÉÎÖÇÑ가-힣ぁ-ん一-鿿\\t]{0,32}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn bounded_levenshtein_is_symmetric(
        a in "[a-z]{0,10}",
        b in "[a-z]{0,10}",
        max in 0usize..6
    ) {
        prop_assert_eq!(
            levenshtein_bounded(&a, &b, max),
            levenshtein_bounded(&b, &a, max)
        );
    }

    #[test]
    fn bounded_levenshtein_zero_for_equal(a in "[a-z]{0,10}", max in 0usize..6) {
        prop_assert_eq!(levenshtein_bounded(&a, &a, max), Some(0));
    }
}
