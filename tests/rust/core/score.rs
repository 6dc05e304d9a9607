//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Cix.
//! The Cix project belongs to the Dunimd Team.

use cix::{smoothed_score, CiScoreModel, CiSmoothedRatio, CiWordStats};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_smoothed_score_examples() {
    assert!(close(smoothed_score(1, 1, 1.0), 2.0 / 3.0));
    assert!(close(smoothed_score(1, 2, 1.0), 0.5));
    assert!(close(smoothed_score(0, 4, 1.0), 1.0 / 6.0));
    assert!(close(smoothed_score(3, 3, 0.0), 1.0));
}

#[test]
fn test_unseen_word_never_divides_by_zero() {
    assert!(close(smoothed_score(0, 0, 1.0), 0.5));
    assert_eq!(smoothed_score(0, 0, 0.0), 0.0);
}

#[test]
fn test_smoothing_pulls_toward_half() {
    let raw = smoothed_score(2, 2, 0.0);
    let light = smoothed_score(2, 2, 1.0);
    let heavy = smoothed_score(2, 2, 10.0);
    assert!(raw > light && light > heavy && heavy > 0.5);
}

#[test]
fn test_word_stats_reject_impossible_counts() {
    assert!(CiWordStats::new(3, 2).is_err());
    let stats = CiWordStats::new(1, 4).unwrap();
    assert_eq!(stats.appropriate_occurrences(), 3);
    assert_eq!(stats.ratio(), Some(0.25));
    assert_eq!(CiWordStats::default().ratio(), None);
}

#[test]
fn test_record_and_merge_count_occurrences() {
    let mut a = CiWordStats::default();
    a.record(true);
    a.record(false);
    let mut b = CiWordStats::default();
    b.record(true);
    a.merge(&b);
    assert_eq!(a, CiWordStats::new(2, 3).unwrap());
}

#[test]
fn test_smoothed_ratio_model() {
    assert!(CiSmoothedRatio::new(-0.5).is_err());
    assert!(CiSmoothedRatio::new(f64::NAN).is_err());
    let model = CiSmoothedRatio::new(1.0).unwrap();
    assert!(close(model.score(&CiWordStats::new(1, 1).unwrap()), 2.0 / 3.0));
    assert_eq!(model.alpha(), 1.0);
}
