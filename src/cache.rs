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

//! # Cix Similarity Cache
//!
//! Memoized explicit -> appropriate substitutions.
//!
//! Every access takes the same mutex, so a lexicon can be shared by several
//! sanitizing threads. Lookups and inserts lock separately; the similarity
//! scan between them runs unlocked. The search is deterministic, so two
//! threads missing on the same word insert the same value.
//!
//! Entries are never evicted: the cache is bounded by the explicit
//! vocabulary.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::word::CiWord;

#[derive(Debug, Default)]
pub struct CiSimilarityCache {
    entries: Mutex<HashMap<CiWord, CiWord>>,
}

impl CiSimilarityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (CiWord, CiWord)>) -> Self {
        CiSimilarityCache {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CiWord, CiWord>> {
        // A panic while holding the guard cannot leave a half-written entry.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, word: &str) -> Option<CiWord> {
        self.lock().get(word).cloned()
    }

    /// Stores a mapping, returning the one it replaced (last write wins).
    pub fn put(&self, explicit: CiWord, appropriate: CiWord) -> Option<CiWord> {
        self.lock().insert(explicit, appropriate)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lock().contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Sorted copy of every entry.
    pub fn snapshot(&self) -> BTreeMap<CiWord, CiWord> {
        self.lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl Clone for CiSimilarityCache {
    fn clone(&self) -> Self {
        CiSimilarityCache {
            entries: Mutex::new(self.lock().clone()),
        }
    }
}
