//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Cix.
//! The Cix project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Cix Lexicon Builder
//!
//! One-shot construction of a lexicon from a labeled corpus.
//!
//! ## Algorithm
//!
//! 1. Accumulate [`CiWordStats`] for every distinct word: each occurrence
//!    bumps `total_occurrences`, occurrences in explicit documents also bump
//!    `explicit_occurrences`.
//! 2. Score every word with the configured [`CiScoreModel`].
//! 3. A word is explicit when its score reaches the threshold *and* it was
//!    seen at least once in an explicit document; everything else is
//!    appropriate. The second condition keeps words that only occur in clean
//!    songs appropriate no matter how the smoothing behaves.
//!
//! An empty corpus, or one without a single word, is rejected with
//! [`CiError::EmptyCorpus`].
//!
//! ## Parallel Building
//!
//! With the `parallel` feature, [`CiLexiconBuilder::build_parallel`] shards
//! the documents across the Rayon pool and merges the per-shard statistics
//! by summation. The merge is commutative, so the result equals the
//! sequential build.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::config::CiConfig;
use crate::errors::{CiError, Result};
use crate::lexicon::CiLexicon;
use crate::score::{CiScoreModel, CiSmoothedRatio, CiWordStats};
use crate::similarity::CiMetricKind;
use crate::word::{CiDocument, CiWord};

/// Default score a word needs to be classified explicit.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

const NEUTRAL_SCORE: f64 = 0.5;

/// Per-word statistics for a whole corpus.
pub type CiVocabularyStats = HashMap<CiWord, CiWordStats>;

/// A vocabulary entry with its counts and score.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CiScoredWord {
    pub word: CiWord,
    pub stats: CiWordStats,
    pub score: f64,
    pub explicit: bool,
}

#[derive(Debug)]
pub struct CiLexiconBuilder {
    model: Box<dyn CiScoreModel>,
    threshold: f64,
    metric: CiMetricKind,
}

impl CiLexiconBuilder {
    pub fn new(alpha: f64, threshold: f64) -> Result<Self> {
        validate_threshold(threshold)?;
        Ok(CiLexiconBuilder {
            model: Box::new(CiSmoothedRatio::new(alpha)?),
            threshold,
            metric: CiMetricKind::default(),
        })
    }

    pub fn from_config(config: &CiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.alpha, config.threshold)?.with_metric(config.metric))
    }

    /// Replaces the score model. The model must stay bounded in `[0, 1]`.
    pub fn with_model(mut self, model: Box<dyn CiScoreModel>) -> Self {
        self.model = model;
        self
    }

    /// Metric used by the built lexicon's similarity search.
    pub fn with_metric(mut self, metric: CiMetricKind) -> Self {
        self.metric = metric;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        validate_threshold(threshold)?;
        self.threshold = threshold;
        Ok(self)
    }

    /// Threshold at the given percentile of the explicit-leaning scores.
    ///
    /// Only words seen in an explicit document that score at least the
    /// neutral `0.5` take part. Interpolates linearly between the closest
    /// ranks, so `percentile = 5.0` keeps the most explicit 95 percent of
    /// them above the returned threshold.
    pub fn percentile_threshold(&self, stats: &CiVocabularyStats, percentile: f64) -> Result<f64> {
        if !(0.0..=100.0).contains(&percentile) {
            return Err(CiError::validation(format!(
                "percentile must be in [0,100] (got {percentile})"
            )));
        }
        let mut scores: Vec<f64> = stats
            .values()
            .filter(|s| s.explicit_occurrences > 0)
            .map(|s| self.model.score(s))
            .filter(|score| *score >= NEUTRAL_SCORE)
            .collect();
        if scores.is_empty() {
            return Err(CiError::validation(
                "no explicit-leaning words to calibrate a threshold from",
            ));
        }
        scores.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let rank = percentile / 100.0 * (scores.len() - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        let threshold = scores[lo] + (scores[hi] - scores[lo]) * (rank - lo as f64);
        log::debug!(
            "calibrated threshold {:.4} at percentile {} over {} words",
            threshold,
            percentile,
            scores.len()
        );
        Ok(threshold.clamp(0.0, 1.0))
    }

    /// Builds with the threshold taken from [`Self::percentile_threshold`].
    pub fn build_calibrated(&self, documents: &[CiDocument], percentile: f64) -> Result<CiLexicon> {
        if documents.is_empty() {
            return Err(CiError::empty_corpus("no documents supplied"));
        }
        let stats = Self::accumulate(documents);
        if stats.is_empty() {
            return Err(CiError::empty_corpus("corpus contains no words"));
        }
        let threshold = self.percentile_threshold(&stats, percentile)?;
        self.partition(&stats, threshold)
    }

    pub fn model(&self) -> &dyn CiScoreModel {
        self.model.as_ref()
    }

    /// Counts every word occurrence in `documents`.
    pub fn accumulate(documents: &[CiDocument]) -> CiVocabularyStats {
        let mut stats = CiVocabularyStats::new();
        for doc in documents {
            for word in doc.words() {
                stats
                    .entry(word.clone())
                    .or_default()
                    .record(doc.is_explicit());
            }
        }
        stats
    }

    /// Folds `other` into `into` by adding counts word by word.
    pub fn merge_stats(into: &mut CiVocabularyStats, other: CiVocabularyStats) {
        for (word, stats) in other {
            into.entry(word).or_default().merge(&stats);
        }
    }

    fn classify_stats(&self, stats: &CiWordStats, threshold: f64) -> (f64, bool) {
        let score = self.model.score(stats);
        let explicit = stats.explicit_occurrences > 0 && score >= threshold;
        (score, explicit)
    }

    /// Scores the vocabulary, most explicit first (ties by word).
    pub fn score_all(&self, stats: &CiVocabularyStats) -> Vec<CiScoredWord> {
        let mut scored: Vec<CiScoredWord> = stats
            .iter()
            .map(|(word, s)| {
                let (score, explicit) = self.classify_stats(s, self.threshold);
                CiScoredWord {
                    word: word.clone(),
                    stats: *s,
                    score,
                    explicit,
                }
            })
            .collect();
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        scored
    }

    /// Partitions already-accumulated statistics into a lexicon.
    pub fn build_from_stats(&self, stats: &CiVocabularyStats) -> Result<CiLexicon> {
        self.partition(stats, self.threshold)
    }

    fn partition(&self, stats: &CiVocabularyStats, threshold: f64) -> Result<CiLexicon> {
        if stats.is_empty() {
            return Err(CiError::empty_corpus("corpus contains no words"));
        }

        let mut explicit = HashSet::new();
        let mut appropriate = HashSet::new();
        for (word, s) in stats {
            let (_, is_explicit) = self.classify_stats(s, threshold);
            if is_explicit {
                explicit.insert(word.clone());
            } else {
                appropriate.insert(word.clone());
            }
        }

        log::info!(
            "built lexicon: {} words, {} explicit, {} appropriate (model {}, threshold {})",
            stats.len(),
            explicit.len(),
            appropriate.len(),
            self.model.name(),
            threshold
        );
        Ok(CiLexicon::from_partition(explicit, appropriate).with_metric(self.metric))
    }

    pub fn build(&self, documents: &[CiDocument]) -> Result<CiLexicon> {
        if documents.is_empty() {
            return Err(CiError::empty_corpus("no documents supplied"));
        }
        self.build_from_stats(&Self::accumulate(documents))
    }

    /// Same result as [`CiLexiconBuilder::build`], accumulated on the Rayon pool.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(&self, documents: &[CiDocument]) -> Result<CiLexicon> {
        if documents.is_empty() {
            return Err(CiError::empty_corpus("no documents supplied"));
        }
        let shard = (documents.len() / rayon::current_num_threads().max(1)).max(1);
        let stats = documents
            .par_chunks(shard)
            .map(Self::accumulate)
            .reduce(CiVocabularyStats::new, |mut acc, part| {
                Self::merge_stats(&mut acc, part);
                acc
            });
        self.build_from_stats(&stats)
    }
}

impl Default for CiLexiconBuilder {
    fn default() -> Self {
        CiLexiconBuilder {
            model: Box::new(CiSmoothedRatio::default()),
            threshold: DEFAULT_THRESHOLD,
            metric: CiMetricKind::default(),
        }
    }
}

/// Builds a lexicon with the smoothed-ratio model.
pub fn build(documents: &[CiDocument], alpha: f64, threshold: f64) -> Result<CiLexicon> {
    CiLexiconBuilder::new(alpha, threshold)?.build(documents)
}

/// Builds a lexicon straight from `(text, is_explicit)` pairs.
pub fn build_from_texts<'a>(
    texts: impl IntoIterator<Item = (&'a str, bool)>,
    alpha: f64,
    threshold: f64,
) -> Result<CiLexicon> {
    let documents: Vec<CiDocument> = texts
        .into_iter()
        .map(|(text, explicit)| CiDocument::from_text(text, explicit))
        .collect();
    build(&documents, alpha, threshold)
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(CiError::validation(format!(
            "threshold must be in [0,1] (got {threshold})"
        )));
    }
    Ok(())
}
