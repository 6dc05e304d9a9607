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

//! # Cix Score Module
//!
//! Explicitness scoring for single words.
//!
//! A word's score estimates how strongly it is associated with explicit
//! documents. The shipped model is a Laplace-smoothed ratio
//!
//! ```text
//! score = (explicit_occurrences + alpha) / (total_occurrences + 2 * alpha)
//! ```
//!
//! which is bounded in `[0, 1]`, increases with the explicit ratio for a
//! fixed total, and pulls rare words towards `0.5`.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::errors::{CiError, Result};

/// Default Laplace smoothing constant.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Occurrence counts for one word across the corpus.
///
/// `explicit_occurrences <= total_occurrences` holds for every value built
/// through [`CiWordStats::record`] and [`CiWordStats::merge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiWordStats {
    pub explicit_occurrences: u64,
    pub total_occurrences: u64,
}

impl CiWordStats {
    pub fn new(explicit_occurrences: u64, total_occurrences: u64) -> Result<Self> {
        if explicit_occurrences > total_occurrences {
            return Err(CiError::validation(format!(
                "explicit occurrences ({explicit_occurrences}) exceed total occurrences ({total_occurrences})"
            )));
        }
        Ok(CiWordStats {
            explicit_occurrences,
            total_occurrences,
        })
    }

    /// Counts one occurrence in a document with the given label.
    pub fn record(&mut self, explicit: bool) {
        self.total_occurrences += 1;
        if explicit {
            self.explicit_occurrences += 1;
        }
    }

    /// Adds another shard's counts into this one.
    pub fn merge(&mut self, other: &CiWordStats) {
        self.explicit_occurrences += other.explicit_occurrences;
        self.total_occurrences += other.total_occurrences;
    }

    pub fn appropriate_occurrences(&self) -> u64 {
        self.total_occurrences - self.explicit_occurrences
    }

    /// Unsmoothed explicit ratio, `None` for an unseen word.
    pub fn ratio(&self) -> Option<f64> {
        if self.total_occurrences == 0 {
            None
        } else {
            Some(self.explicit_occurrences as f64 / self.total_occurrences as f64)
        }
    }
}

/// Smoothed explicitness score.
///
/// Never divides by zero: an unseen word scores `0.5` when `alpha > 0` and
/// `0.0` when `alpha == 0`.
pub fn smoothed_score(explicit_occurrences: u64, total_occurrences: u64, alpha: f64) -> f64 {
    let denominator = total_occurrences as f64 + 2.0 * alpha;
    if denominator <= 0.0 {
        return 0.0;
    }
    ((explicit_occurrences as f64 + alpha) / denominator).clamp(0.0, 1.0)
}

/// Scoring strategy consulted by the lexicon builder.
///
/// Implementations must be bounded in `[0, 1]` and non-decreasing in the
/// explicit ratio so that a single threshold partitions the vocabulary.
pub trait CiScoreModel: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn score(&self, stats: &CiWordStats) -> f64;
}

/// Laplace-smoothed explicit ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CiSmoothedRatio {
    alpha: f64,
}

impl CiSmoothedRatio {
    pub fn new(alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;
        Ok(CiSmoothedRatio { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for CiSmoothedRatio {
    fn default() -> Self {
        CiSmoothedRatio {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl CiScoreModel for CiSmoothedRatio {
    fn name(&self) -> &'static str {
        "score.smoothed_ratio"
    }

    fn score(&self, stats: &CiWordStats) -> f64 {
        smoothed_score(stats.explicit_occurrences, stats.total_occurrences, self.alpha)
    }
}

pub(crate) fn validate_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() || alpha < 0.0 {
        return Err(CiError::validation(format!(
            "alpha must be a finite, non-negative number (got {alpha})"
        )));
    }
    Ok(())
}
