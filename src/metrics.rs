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

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lexicon::CiLexicon;

/// Size summary of a lexicon.
#[derive(Clone, Debug, Serialize, Default, PartialEq)]
pub struct CiLexiconMetrics {
    pub explicit_words: usize,
    pub appropriate_words: usize,
    pub vocabulary_size: usize,
    pub explicit_share: f64,
    pub cached_substitutes: usize,
}

impl CiLexiconMetrics {
    pub fn compute(lexicon: &CiLexicon) -> Self {
        let explicit_words = lexicon.explicit_len();
        let appropriate_words = lexicon.appropriate_len();
        let vocabulary_size = explicit_words + appropriate_words;
        CiLexiconMetrics {
            explicit_words,
            appropriate_words,
            vocabulary_size,
            explicit_share: if vocabulary_size > 0 {
                explicit_words as f64 / vocabulary_size as f64
            } else {
                0.0
            },
            cached_substitutes: lexicon.cache().len(),
        }
    }

    pub fn as_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Counters collected while sanitizing one text.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CiSanitizeReport {
    pub tokens: usize,
    pub words: usize,
    pub explicit: usize,
    pub masked: usize,
    pub replaced: usize,
    /// Replacements that degraded to a mask.
    pub fallbacks: usize,
}

impl CiSanitizeReport {
    pub fn merge(&mut self, other: &CiSanitizeReport) {
        self.tokens += other.tokens;
        self.words += other.words;
        self.explicit += other.explicit;
        self.masked += other.masked;
        self.replaced += other.replaced;
        self.fallbacks += other.fallbacks;
    }

    /// Whether anything in the text was changed.
    pub fn is_clean(&self) -> bool {
        self.explicit == 0
    }

    pub fn as_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
