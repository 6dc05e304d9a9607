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
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::cache::CiSimilarityCache;
use crate::errors::{CiError, Result};
use crate::similarity::metric::{CiMetricKind, CiSimilarityMetric};
use crate::word::CiWord;

/// Strategy resolving an explicit word to its closest appropriate word.
///
/// Implementations consult `cache` first and record every fresh result in
/// it before returning. An empty `appropriate` set yields
/// [`CiError::EmptyVocabulary`].
pub trait CiMatchStrategy: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn find_best_match(
        &self,
        explicit: &CiWord,
        appropriate: &HashSet<CiWord>,
        cache: &CiSimilarityCache,
    ) -> Result<CiWord>;
}

/// Scores every appropriate word on a cache miss.
///
/// Cost on a miss is `O(|appropriate| * cost(metric))`. Ties on the best
/// score go to the lexicographically smallest candidate, so the result does
/// not depend on hash-set iteration order.
#[derive(Debug)]
pub struct CiExhaustiveSearch {
    metric: Box<dyn CiSimilarityMetric>,
    scans: AtomicUsize,
}

impl CiExhaustiveSearch {
    pub fn new(metric: Box<dyn CiSimilarityMetric>) -> Self {
        CiExhaustiveSearch {
            metric,
            scans: AtomicUsize::new(0),
        }
    }

    pub fn with_kind(kind: CiMetricKind) -> Self {
        Self::new(kind.metric())
    }

    pub fn metric_name(&self) -> &'static str {
        self.metric.name()
    }

    /// Number of full scans performed, i.e. cache misses served.
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::Relaxed)
    }

    fn scan<'a>(&self, explicit: &str, appropriate: &'a HashSet<CiWord>) -> Option<&'a CiWord> {
        self.scans.fetch_add(1, Ordering::Relaxed);
        let mut best: Option<(f64, &CiWord)> = None;
        for candidate in appropriate {
            let mut score = self.metric.similarity(explicit, candidate.as_str());
            if score.is_nan() {
                score = f64::NEG_INFINITY;
            }
            best = match best {
                None => Some((score, candidate)),
                Some((best_score, best_word)) => {
                    if score > best_score || (score == best_score && candidate < best_word) {
                        Some((score, candidate))
                    } else {
                        Some((best_score, best_word))
                    }
                }
            };
        }
        best.map(|(_, word)| word)
    }
}

impl Default for CiExhaustiveSearch {
    fn default() -> Self {
        Self::with_kind(CiMetricKind::default())
    }
}

impl CiMatchStrategy for CiExhaustiveSearch {
    fn name(&self) -> &'static str {
        "search.exhaustive"
    }

    fn find_best_match(
        &self,
        explicit: &CiWord,
        appropriate: &HashSet<CiWord>,
        cache: &CiSimilarityCache,
    ) -> Result<CiWord> {
        if let Some(hit) = cache.get(explicit.as_str()) {
            log::debug!("similarity cache hit: {} -> {}", explicit, hit);
            return Ok(hit);
        }

        let best = self
            .scan(explicit.as_str(), appropriate)
            .cloned()
            .ok_or_else(|| CiError::empty_vocabulary(explicit.as_str()))?;

        log::debug!(
            "similarity cache miss: {} -> {} ({} candidates, metric {})",
            explicit,
            best,
            appropriate.len(),
            self.metric.name()
        );
        cache.put(explicit.clone(), best.clone());
        Ok(best)
    }
}
