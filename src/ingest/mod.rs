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

//! # Ingest Module
//!
//! Turning song tables into labeled documents.
//!
//! - **lyrics**: cleanup of raw lyric fields (section tags, escaped breaks)
//! - **corpus**: joining song metadata with lyrics on `song_id` (feature `csv`)

#[cfg(feature = "csv")]
pub mod corpus;
pub mod lyrics;

#[cfg(feature = "csv")]
pub use corpus::{CiCorpus, CiCorpusLoader, CiCorpusOptions, CiSong};
pub use lyrics::preprocess_lyrics;
