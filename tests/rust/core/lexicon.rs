//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Cix.
//! The Cix project belongs to the Dunimd Team.

use std::sync::Arc;
use std::thread;

use cix::{
    build_from_texts, CiClass, CiError, CiExhaustiveSearch, CiLexicon, CiLexiconMetrics,
    CiMetricKind,
};

fn lexicon() -> CiLexicon {
    CiLexicon::from_words(&["damn", "hell"], &["darn", "dang", "heck", "well"]).unwrap()
}

#[test]
fn test_classify_is_case_and_punctuation_insensitive() {
    let lex = lexicon();
    assert_eq!(lex.classify("DAMN"), CiClass::Explicit);
    assert_eq!(lex.classify("hell,"), CiClass::Explicit);
    assert_eq!(lex.classify("Heck"), CiClass::Appropriate);
    assert_eq!(lex.classify("sunshine"), CiClass::Unknown);
    assert!(lex.is_explicit("Damn"));
}

#[test]
fn test_resolve_substitute_fills_cache() {
    let lex = lexicon();
    assert_eq!(lex.resolve_substitute("Damn").unwrap().as_str(), "darn");
    assert_eq!(lex.resolve_substitute("hell").unwrap().as_str(), "well");
    assert_eq!(lex.cache().len(), 2);
    assert_eq!(CiLexiconMetrics::compute(&lex).cached_substitutes, 2);
}

#[test]
fn test_resolve_substitute_rejects_non_explicit_words() {
    let lex = lexicon();
    assert!(matches!(
        lex.resolve_substitute("darn"),
        Err(CiError::Validation { .. })
    ));
    assert!(matches!(
        lex.resolve_substitute("!!"),
        Err(CiError::Validation { .. })
    ));
    assert!(lex.cache().is_empty());
}

#[test]
fn test_repeated_lookups_scan_once() {
    let probe = Arc::new(CiExhaustiveSearch::with_kind(CiMetricKind::NormalizedLevenshtein));
    let lex = lexicon().with_strategy(probe.clone());
    for _ in 0..10 {
        assert_eq!(lex.resolve_substitute("damn").unwrap().as_str(), "darn");
    }
    assert_eq!(probe.scan_count(), 1);
}

#[test]
fn test_concurrent_lookups_agree() {
    let probe = Arc::new(CiExhaustiveSearch::default());
    let lex = lexicon().with_strategy(probe.clone());
    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..50 {
                    assert_eq!(lex.resolve_substitute("damn").unwrap().as_str(), "darn");
                }
            });
        }
    });
    assert_eq!(lex.cache().get("damn").unwrap().as_str(), "darn");
    // racing misses may each scan, but never more than once per thread
    assert!(probe.scan_count() >= 1 && probe.scan_count() <= 8);
}

#[test]
fn test_state_round_trip_through_json() {
    let lex = lexicon();
    lex.resolve_substitute("damn").unwrap();
    let json = lex.to_json().unwrap();
    let restored = CiLexicon::from_json(&json).unwrap();
    assert_eq!(restored.to_state(), lex.to_state());
    assert_eq!(restored.classify("hell"), CiClass::Explicit);
}

#[test]
fn test_invalid_states_are_malformed() {
    let cases = [
        r#"{"explicit": ["damn"], "appropriate": ["damn"], "sim_cache": {}}"#,
        r#"{"explicit": ["damn"], "appropriate": ["darn"], "sim_cache": {"hell": "darn"}}"#,
        r#"{"explicit": ["damn"], "appropriate": ["darn"], "sim_cache": {"damn": "dang"}}"#,
        r#"{"explicit": ["Damn"], "appropriate": ["darn"], "sim_cache": {}}"#,
        r#"{"explicit": ["damn"], "appropriate": ["darn"]}"#,
    ];
    for case in cases {
        let err = CiLexicon::from_json(case).unwrap_err();
        assert!(
            matches!(err, CiError::MalformedPersistedState { .. }),
            "{case}: {err:?}"
        );
    }
}

#[test]
fn test_built_lexicon_with_case_expanding_letters_reloads() {
    let lex = build_from_texts([("damn İstanbul", true), ("good night", false)], 1.0, 0.6).unwrap();
    assert_eq!(lex.classify("İSTANBUL"), CiClass::Explicit);
    let restored = CiLexicon::from_json(&lex.to_json().unwrap()).unwrap();
    assert_eq!(restored.to_state(), lex.to_state());
    assert!(restored.to_state().explicit.contains("istanbul"));
}

#[test]
fn test_words_with_vowel_signs_are_single_entries() {
    let lex = build_from_texts([("हिंदी गाना", true), ("good night", false)], 1.0, 0.6).unwrap();
    assert_eq!(lex.explicit_len(), 2);
    assert_eq!(lex.classify("हिंदी"), CiClass::Explicit);
    assert_eq!(lex.classify("गाना"), CiClass::Explicit);
}
