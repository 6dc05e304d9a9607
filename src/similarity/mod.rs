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

//! # Similarity Module
//!
//! Finding the appropriate word closest to an explicit one.
//!
//! - **metric**: pluggable lexical similarity functions ([`CiSimilarityMetric`])
//! - **search**: match strategies ([`CiMatchStrategy`]); the shipped
//!   [`CiExhaustiveSearch`] scans every appropriate word on a cache miss
//!
//! The strategy trait is the seam for indexed search: a BK-tree or an
//! embedding index can replace the exhaustive scan without touching the
//! lexicon or the sanitizer.

pub mod metric;
pub mod search;

pub use metric::{
    CiBigramJaccard, CiJaroWinkler, CiMetricKind, CiNormalizedLevenshtein, CiSimilarityMetric,
};
pub use search::{CiExhaustiveSearch, CiMatchStrategy};
