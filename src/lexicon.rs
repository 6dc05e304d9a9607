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

//! # Cix Lexicon Module
//!
//! The classified vocabulary and its similarity cache.
//!
//! A [`CiLexicon`] holds two disjoint word sets, `explicit` and
//! `appropriate`, plus the [`CiSimilarityCache`] of resolved substitutes.
//! Words in neither set are [`CiClass::Unknown`].
//!
//! ## Invariants
//!
//! - `explicit ∩ appropriate = ∅`
//! - every cache key is explicit, every cache value is appropriate
//! - set membership never changes after construction; the only mutation is
//!   appending cache entries through [`CiLexicon::resolve_substitute`]
//!
//! ## Persistence
//!
//! [`CiLexiconState`] is the serialized form:
//!
//! ```json
//! {
//!   "explicit": ["damn"],
//!   "appropriate": ["dang", "darn"],
//!   "sim_cache": {"damn": "darn"}
//! }
//! ```
//!
//! Loading validates every invariant and fails with
//! [`CiError::MalformedPersistedState`] rather than producing a partially
//! valid lexicon.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cache::CiSimilarityCache;
use crate::errors::{CiError, Result};
use crate::similarity::{CiExhaustiveSearch, CiMatchStrategy, CiMetricKind};
use crate::word::CiWord;

/// Classification of a single word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CiClass {
    Explicit,
    Appropriate,
    Unknown,
}

/// Serialized lexicon record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiLexiconState {
    pub explicit: BTreeSet<String>,
    pub appropriate: BTreeSet<String>,
    pub sim_cache: BTreeMap<String, String>,
}

impl CiLexiconState {
    /// Checks every lexicon invariant on the raw record.
    pub fn validate(&self) -> Result<()> {
        for word in self.explicit.iter().chain(self.appropriate.iter()) {
            if !CiWord::is_normalized(word) {
                return Err(CiError::malformed(format!(
                    "'{word}' is not a normalized word"
                )));
            }
        }
        if let Some(shared) = self.explicit.intersection(&self.appropriate).next() {
            return Err(CiError::malformed(format!(
                "'{shared}' is both explicit and appropriate"
            )));
        }
        for (key, value) in &self.sim_cache {
            if !self.explicit.contains(key) {
                return Err(CiError::malformed(format!(
                    "cache key '{key}' is not an explicit word"
                )));
            }
            if !self.appropriate.contains(value) {
                return Err(CiError::malformed(format!(
                    "cache value '{value}' for '{key}' is not an appropriate word"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct CiLexicon {
    explicit: HashSet<CiWord>,
    appropriate: HashSet<CiWord>,
    cache: CiSimilarityCache,
    strategy: Arc<dyn CiMatchStrategy>,
}

impl CiLexicon {
    /// Builds a lexicon from two word sets, rejecting any overlap.
    pub fn from_parts(
        explicit: impl IntoIterator<Item = CiWord>,
        appropriate: impl IntoIterator<Item = CiWord>,
    ) -> Result<Self> {
        let explicit: HashSet<CiWord> = explicit.into_iter().collect();
        let appropriate: HashSet<CiWord> = appropriate.into_iter().collect();
        if let Some(shared) = explicit.intersection(&appropriate).min() {
            return Err(CiError::validation(format!(
                "'{shared}' cannot be both explicit and appropriate"
            )));
        }
        Ok(Self::from_partition(explicit, appropriate))
    }

    /// Convenience over [`CiLexicon::from_parts`] for string literals.
    pub fn from_words(explicit: &[&str], appropriate: &[&str]) -> Result<Self> {
        let parse = |words: &[&str]| -> Result<Vec<CiWord>> {
            words
                .iter()
                .map(|w| {
                    CiWord::parse(w)
                        .ok_or_else(|| CiError::validation(format!("'{w}' contains no word")))
                })
                .collect()
        };
        Self::from_parts(parse(explicit)?, parse(appropriate)?)
    }

    pub(crate) fn from_partition(explicit: HashSet<CiWord>, appropriate: HashSet<CiWord>) -> Self {
        CiLexicon {
            explicit,
            appropriate,
            cache: CiSimilarityCache::new(),
            strategy: Arc::new(CiExhaustiveSearch::default()),
        }
    }

    /// Swaps the strategy used on cache misses.
    ///
    /// Cached substitutes are kept and still take precedence over the new
    /// strategy. Use [`CiLexicon::with_metric`] to start from an empty cache.
    pub fn with_strategy(mut self, strategy: Arc<dyn CiMatchStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Uses an exhaustive scan under the given metric.
    ///
    /// Substitutes resolved under the previous metric are dropped.
    pub fn with_metric(self, kind: CiMetricKind) -> Self {
        let mut lexicon = self.with_strategy(Arc::new(CiExhaustiveSearch::with_kind(kind)));
        if !lexicon.cache.is_empty() {
            log::debug!(
                "dropping {} cached substitutes for metric {}",
                lexicon.cache.len(),
                kind.as_str()
            );
            lexicon.cache = CiSimilarityCache::new();
        }
        lexicon
    }

    /// Classifies a surface token. Pure lookup; never fails.
    pub fn classify(&self, token: &str) -> CiClass {
        match CiWord::parse(token) {
            Some(word) => self.classify_word(&word),
            None => CiClass::Unknown,
        }
    }

    pub fn classify_word(&self, word: &CiWord) -> CiClass {
        if self.explicit.contains(word) {
            CiClass::Explicit
        } else if self.appropriate.contains(word) {
            CiClass::Appropriate
        } else {
            CiClass::Unknown
        }
    }

    pub fn is_explicit(&self, token: &str) -> bool {
        self.classify(token) == CiClass::Explicit
    }

    /// Resolves the closest appropriate word for an explicit token, caching it.
    ///
    /// Tokens that are not explicit are rejected so the cache only ever maps
    /// explicit words.
    pub fn resolve_substitute(&self, token: &str) -> Result<CiWord> {
        let word = CiWord::parse(token)
            .ok_or_else(|| CiError::validation(format!("'{token}' contains no word")))?;
        if !self.explicit.contains(&word) {
            return Err(CiError::validation(format!(
                "'{word}' is not an explicit word"
            )));
        }
        self.strategy
            .find_best_match(&word, &self.appropriate, &self.cache)
    }

    pub fn explicit_words(&self) -> impl Iterator<Item = &CiWord> {
        self.explicit.iter()
    }

    pub fn appropriate_words(&self) -> impl Iterator<Item = &CiWord> {
        self.appropriate.iter()
    }

    pub fn explicit_len(&self) -> usize {
        self.explicit.len()
    }

    pub fn appropriate_len(&self) -> usize {
        self.appropriate.len()
    }

    pub fn cache(&self) -> &CiSimilarityCache {
        &self.cache
    }

    pub fn strategy(&self) -> &dyn CiMatchStrategy {
        self.strategy.as_ref()
    }

    pub fn to_state(&self) -> CiLexiconState {
        CiLexiconState {
            explicit: self.explicit.iter().map(|w| w.as_str().to_string()).collect(),
            appropriate: self
                .appropriate
                .iter()
                .map(|w| w.as_str().to_string())
                .collect(),
            sim_cache: self
                .cache
                .snapshot()
                .into_iter()
                .map(|(k, v)| (k.into_inner(), v.into_inner()))
                .collect(),
        }
    }

    /// Rebuilds a lexicon from persisted state after validating it.
    pub fn from_state(state: CiLexiconState) -> Result<Self> {
        state.validate()?;
        let to_word = |text: String| {
            CiWord::parse(&text).ok_or_else(|| CiError::malformed(format!("'{text}' is empty")))
        };
        let explicit = state
            .explicit
            .into_iter()
            .map(to_word)
            .collect::<Result<HashSet<_>>>()?;
        let appropriate = state
            .appropriate
            .into_iter()
            .map(to_word)
            .collect::<Result<HashSet<_>>>()?;
        let entries = state
            .sim_cache
            .into_iter()
            .map(|(k, v)| Ok((to_word(k)?, to_word(v)?)))
            .collect::<Result<Vec<_>>>()?;

        let mut lexicon = Self::from_partition(explicit, appropriate);
        lexicon.cache = CiSimilarityCache::from_entries(entries);
        Ok(lexicon)
    }

    /// Pretty-printed JSON with sorted word lists.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_state())?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let state: CiLexiconState =
            serde_json::from_str(json).map_err(|e| CiError::malformed(e.to_string()))?;
        Self::from_state(state)
    }
}
