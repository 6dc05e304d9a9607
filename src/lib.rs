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

//! # Cix Core Library
//!
//! Cix learns which words of a song-lyric corpus are explicit and uses that
//! vocabulary to clean up arbitrary text, either by masking explicit words or
//! by replacing them with the most similar appropriate word.
//!
//! ## Module Overview
//!
//! - **word**: normalized words and labeled documents
//! - **score**: per-word occurrence statistics and the smoothed explicitness score
//! - **builder**: one-shot construction of a lexicon from a labeled corpus
//! - **lexicon**: the explicit/appropriate partition plus its similarity cache
//! - **similarity**: string metrics and the nearest-appropriate-word search
//! - **cache**: thread-safe memo of resolved substitutes
//! - **sanitizer**: mask and replace modes over token streams and free text
//! - **tokenize**: lossless tokenizer and display line wrapping
//! - **ingest**: lyric cleanup and song table loading
//! - **io**: lexicon file persistence
//! - **config**: tunable parameters from JSON or YAML
//! - **metrics**: lexicon and sanitize run statistics
//!
//! ## Feature Flags
//!
//! - `csv`: song table loading through [`CiCorpusLoader`]
//! - `parallel`: Rayon-backed building and line-parallel sanitizing
//! - `full`: all of the above (default)
//!
//! ## Quick Start
//!
//! ```rust
//! use cix::{build_from_texts, sanitize_text, CiMode};
//!
//! let lexicon = build_from_texts(
//!     [("damn this is good", true), ("this is good", false), ("darn dang", false)],
//!     1.0,
//!     0.6,
//! )
//! .unwrap();
//!
//! assert_eq!(sanitize_text("Damn it", &lexicon, CiMode::Mask), "**** it");
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, CiError>`](errors::Result). Only an
//! empty replacement vocabulary is recoverable; the sanitizer masks the token
//! and carries on.

pub mod builder;
pub mod cache;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod io;
pub mod lexicon;
pub mod metrics;
pub mod sanitizer;
pub mod score;
pub mod similarity;
pub mod tokenize;
pub mod word;

pub use builder::{build, build_from_texts, CiLexiconBuilder, CiScoredWord, CiVocabularyStats};
pub use cache::CiSimilarityCache;
pub use config::CiConfig;
pub use errors::{CiError, Result};
pub use io::CiLexiconStore;
pub use lexicon::{CiClass, CiLexicon, CiLexiconState};
pub use metrics::{CiLexiconMetrics, CiSanitizeReport};
pub use sanitizer::{sanitize, sanitize_text, CiMode, CiTextSanitizer};
pub use score::{smoothed_score, CiScoreModel, CiSmoothedRatio, CiWordStats};
pub use similarity::{
    CiBigramJaccard, CiExhaustiveSearch, CiJaroWinkler, CiMatchStrategy, CiMetricKind,
    CiNormalizedLevenshtein, CiSimilarityMetric,
};
pub use tokenize::{tokenize, words, wrap_words, CiToken, CiTokenKind};
pub use word::{normalize_word, CiDocument, CiWord};

pub use ingest::preprocess_lyrics;
#[cfg(feature = "csv")]
pub use ingest::{CiCorpus, CiCorpusLoader, CiCorpusOptions, CiSong};
