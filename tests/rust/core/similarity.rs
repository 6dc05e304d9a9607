//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Cix.
//! The Cix project belongs to the Dunimd Team.

use std::collections::HashSet;

use cix::{
    CiBigramJaccard, CiExhaustiveSearch, CiJaroWinkler, CiMatchStrategy, CiMetricKind,
    CiNormalizedLevenshtein, CiSimilarityCache, CiSimilarityMetric, CiWord,
};

fn words(items: &[&str]) -> HashSet<CiWord> {
    items.iter().filter_map(|w| CiWord::parse(w)).collect()
}

fn word(text: &str) -> CiWord {
    CiWord::parse(text).unwrap()
}

#[test]
fn test_metric_values() {
    assert!((CiNormalizedLevenshtein.similarity("damn", "darn") - 0.75).abs() < 1e-9);
    assert!((CiNormalizedLevenshtein.similarity("damn", "dang") - 0.5).abs() < 1e-9);
    assert!((CiBigramJaccard.similarity("damn", "darn") - 3.0 / 7.0).abs() < 1e-9);
    assert_eq!(CiJaroWinkler.similarity("damn", "damn"), 1.0);
}

#[test]
fn test_levenshtein_prefers_darn() {
    let search = CiExhaustiveSearch::default();
    let cache = CiSimilarityCache::new();
    let best = search
        .find_best_match(&word("damn"), &words(&["darn", "dang"]), &cache)
        .unwrap();
    assert_eq!(best.as_str(), "darn");
    assert_eq!(cache.get("damn").unwrap().as_str(), "darn");
}

#[test]
fn test_equal_scores_pick_smallest_word() {
    // both candidates share three letters and the "da" prefix with "damn"
    let search = CiExhaustiveSearch::with_kind(CiMetricKind::JaroWinkler);
    let cache = CiSimilarityCache::new();
    let best = search
        .find_best_match(&word("damn"), &words(&["darn", "dang"]), &cache)
        .unwrap();
    assert_eq!(best.as_str(), "dang");
}

#[test]
fn test_cache_hit_skips_scan() {
    let search = CiExhaustiveSearch::with_kind(CiMetricKind::BigramJaccard);
    let cache = CiSimilarityCache::new();
    let appropriate = words(&["darn", "dang", "heck"]);
    for _ in 0..5 {
        search
            .find_best_match(&word("damn"), &appropriate, &cache)
            .unwrap();
    }
    assert_eq!(search.scan_count(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_empty_vocabulary_error() {
    let search = CiExhaustiveSearch::default();
    let cache = CiSimilarityCache::new();
    let err = search
        .find_best_match(&word("damn"), &HashSet::new(), &cache)
        .unwrap_err();
    assert!(err.is_recoverable());
    assert!(cache.is_empty());
}

#[test]
fn test_metric_kind_parsing() {
    assert_eq!(
        "levenshtein".parse::<CiMetricKind>().unwrap(),
        CiMetricKind::NormalizedLevenshtein
    );
    assert_eq!(
        "jaro-winkler".parse::<CiMetricKind>().unwrap(),
        CiMetricKind::JaroWinkler
    );
    assert!("cosine".parse::<CiMetricKind>().is_err());
    assert_eq!(CiMetricKind::default().as_str(), "normalized_levenshtein");
}
