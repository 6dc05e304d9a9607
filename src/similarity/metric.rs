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

use std::collections::HashSet;
use std::fmt::Debug;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CiError, Result};

/// Lexical similarity between two normalized words.
///
/// Scores lie in `[0, 1]`; higher means more similar and identical words
/// score `1.0`.
pub trait CiSimilarityMetric: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// `1 - levenshtein(a, b) / max(len(a), len(b))`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CiNormalizedLevenshtein;

impl CiSimilarityMetric for CiNormalizedLevenshtein {
    fn name(&self) -> &'static str {
        "normalized_levenshtein"
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b)
    }
}

/// Jaro-Winkler similarity, which rewards a shared prefix.
#[derive(Clone, Copy, Debug, Default)]
pub struct CiJaroWinkler;

impl CiSimilarityMetric for CiJaroWinkler {
    fn name(&self) -> &'static str {
        "jaro_winkler"
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b)
    }
}

/// Jaccard overlap of boundary-padded character bigrams.
#[derive(Clone, Copy, Debug, Default)]
pub struct CiBigramJaccard;

fn bigrams(word: &str) -> HashSet<(char, char)> {
    let padded: Vec<char> = std::iter::once('^')
        .chain(word.chars())
        .chain(std::iter::once('$'))
        .collect();
    padded.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

impl CiSimilarityMetric for CiBigramJaccard {
    fn name(&self) -> &'static str {
        "bigram_jaccard"
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let sa = bigrams(a);
        let sb = bigrams(b);
        let intersection = sa.intersection(&sb).count() as f64;
        let union = (sa.len() + sb.len()) as f64 - intersection;
        if union == 0.0 {
            0.0
        } else {
            intersection / union
        }
    }
}

/// Configurable choice of shipped metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CiMetricKind {
    #[default]
    NormalizedLevenshtein,
    JaroWinkler,
    BigramJaccard,
}

impl CiMetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CiMetricKind::NormalizedLevenshtein => "normalized_levenshtein",
            CiMetricKind::JaroWinkler => "jaro_winkler",
            CiMetricKind::BigramJaccard => "bigram_jaccard",
        }
    }

    pub fn metric(&self) -> Box<dyn CiSimilarityMetric> {
        match self {
            CiMetricKind::NormalizedLevenshtein => Box::new(CiNormalizedLevenshtein),
            CiMetricKind::JaroWinkler => Box::new(CiJaroWinkler),
            CiMetricKind::BigramJaccard => Box::new(CiBigramJaccard),
        }
    }
}

impl FromStr for CiMetricKind {
    type Err = CiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "normalized_levenshtein" | "levenshtein" => Ok(CiMetricKind::NormalizedLevenshtein),
            "jaro_winkler" => Ok(CiMetricKind::JaroWinkler),
            "bigram_jaccard" | "jaccard" => Ok(CiMetricKind::BigramJaccard),
            other => Err(CiError::validation(format!(
                "unknown similarity metric '{other}'"
            ))),
        }
    }
}
