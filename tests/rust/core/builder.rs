//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Cix.
//! The Cix project belongs to the Dunimd Team.

use cix::{
    build, build_from_texts, CiClass, CiConfig, CiDocument, CiError, CiLexiconBuilder,
    CiMetricKind, CiWord,
};

fn corpus() -> Vec<CiDocument> {
    vec![
        CiDocument::from_text("damn this is good", true),
        CiDocument::from_text("this is good", false),
    ]
}

#[test]
fn test_build_partitions_scenario_corpus() {
    let lexicon = build(&corpus(), 1.0, 0.6).unwrap();
    assert_eq!(lexicon.explicit_len(), 1);
    assert_eq!(lexicon.appropriate_len(), 3);
    assert_eq!(lexicon.classify("damn"), CiClass::Explicit);
    assert_eq!(lexicon.classify("Good"), CiClass::Appropriate);
    assert_eq!(lexicon.classify("missing"), CiClass::Unknown);
}

#[test]
fn test_every_word_is_classified_exactly_once() {
    let lexicon = build_from_texts(
        [
            ("Damn, this is good!", true),
            ("Oh darn, this is fine", false),
            ("Hell no, damn it", true),
        ],
        1.0,
        0.6,
    )
    .unwrap();
    let mut seen: Vec<&CiWord> = lexicon
        .explicit_words()
        .chain(lexicon.appropriate_words())
        .collect();
    let total = seen.len();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), total);
    assert_eq!(total, 10);
}

#[test]
fn test_empty_corpus_is_rejected() {
    let err = build(&[], 1.0, 0.6).unwrap_err();
    assert!(matches!(err, CiError::EmptyCorpus { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_threshold_one_only_keeps_certain_words() {
    let lexicon = build(&corpus(), 0.0, 1.0).unwrap();
    assert_eq!(lexicon.classify("damn"), CiClass::Explicit);
    assert_eq!(lexicon.classify("this"), CiClass::Appropriate);
}

#[test]
fn test_builder_from_config_carries_metric() {
    let config = CiConfig {
        metric: CiMetricKind::JaroWinkler,
        ..CiConfig::default()
    };
    let lexicon = CiLexiconBuilder::from_config(&config)
        .unwrap()
        .build(&corpus())
        .unwrap();
    assert_eq!(lexicon.classify("damn"), CiClass::Explicit);
    // no candidate shares a letter with "damn", so the smallest word wins the tie
    assert_eq!(lexicon.resolve_substitute("damn").unwrap().as_str(), "good");
}

#[cfg(feature = "parallel")]
#[test]
fn test_build_parallel_matches_sequential() {
    let docs: Vec<CiDocument> = (0..64)
        .map(|i| {
            let text = format!("song {} damn word{} chorus", i, i % 7);
            CiDocument::from_text(&text, i % 3 == 0)
        })
        .collect();
    let builder = CiLexiconBuilder::default();
    let sequential = builder.build(&docs).unwrap();
    let parallel = builder.build_parallel(&docs).unwrap();
    assert_eq!(sequential.to_state(), parallel.to_state());
}

#[test]
fn test_build_calibrated_keeps_most_explicit_words() {
    let docs = vec![
        CiDocument::from_text("damn damn damn hell", true),
        CiDocument::from_text("night night", true),
        CiDocument::from_text("night good", false),
    ];
    // leaning scores: night 0.6, hell 2/3, damn 0.8
    let lexicon = CiLexiconBuilder::default().build_calibrated(&docs, 50.0).unwrap();
    assert_eq!(lexicon.classify("damn"), CiClass::Explicit);
    assert_eq!(lexicon.classify("hell"), CiClass::Explicit);
    assert_eq!(lexicon.classify("night"), CiClass::Appropriate);
    assert_eq!(lexicon.classify("good"), CiClass::Appropriate);

    let everything = CiLexiconBuilder::default().build_calibrated(&docs, 0.0).unwrap();
    assert_eq!(everything.classify("night"), CiClass::Explicit);
    assert!(CiLexiconBuilder::default().build_calibrated(&[], 5.0).is_err());
}
