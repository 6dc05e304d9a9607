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

//! # Corpus Loader
//!
//! Builds labeled documents from two tab-separated song tables:
//!
//! - metadata: `song_id`, `song_name`, `explicit` (`true`/`false`/`1`/`0`)
//! - lyrics: `song_id`, `lyrics`
//!
//! Rows are joined on `song_id`. Songs without lyrics are skipped, song
//! names are lowercased, and unreadable rows are logged at warn level and
//! skipped. Column names and the delimiter are configurable through
//! [`CiCorpusOptions`].

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

use crate::errors::{CiError, Result};
use crate::ingest::lyrics::preprocess_lyrics;
use crate::word::CiDocument;

/// Column layout of the song tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiCorpusOptions {
    pub delimiter: u8,
    pub id_column: String,
    pub name_column: String,
    pub explicit_column: String,
    pub lyrics_column: String,
}

impl Default for CiCorpusOptions {
    fn default() -> Self {
        CiCorpusOptions {
            delimiter: b'\t',
            id_column: "song_id".to_string(),
            name_column: "song_name".to_string(),
            explicit_column: "explicit".to_string(),
            lyrics_column: "lyrics".to_string(),
        }
    }
}

/// One song with its raw lyric field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiSong {
    pub song_id: String,
    pub song_name: String,
    pub is_explicit: bool,
    pub lyrics: String,
}

impl CiSong {
    /// Lyrics after [`preprocess_lyrics`].
    pub fn clean_lyrics(&self) -> String {
        preprocess_lyrics(&self.lyrics)
    }

    pub fn to_document(&self) -> CiDocument {
        CiDocument::from_text(&self.clean_lyrics(), self.is_explicit)
    }
}

/// Joined songs in metadata order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CiCorpus {
    songs: Vec<CiSong>,
}

impl CiCorpus {
    pub fn new(songs: Vec<CiSong>) -> Self {
        CiCorpus { songs }
    }

    pub fn songs(&self) -> &[CiSong] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn documents(&self) -> Vec<CiDocument> {
        self.songs.iter().map(CiSong::to_document).collect()
    }

    /// `(clean lyrics, is_explicit)` pairs.
    pub fn pairs(&self) -> Vec<(String, bool)> {
        self.songs
            .iter()
            .map(|s| (s.clean_lyrics(), s.is_explicit))
            .collect()
    }

    /// Clean lyrics of the single song titled `title` (case-insensitive).
    pub fn find_lyrics(&self, title: &str) -> Result<String> {
        let wanted = title.trim().to_lowercase();
        let mut matches = self.songs.iter().filter(|s| s.song_name == wanted);
        match (matches.next(), matches.next()) {
            (Some(song), None) => Ok(song.clean_lyrics()),
            (None, _) => Err(CiError::validation(format!("no song titled '{title}'"))),
            (Some(_), Some(_)) => Err(CiError::validation(format!(
                "more than one song titled '{title}'"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CiCorpusLoader {
    options: CiCorpusOptions,
}

impl CiCorpusLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CiCorpusOptions) -> Self {
        CiCorpusLoader { options }
    }

    pub fn options(&self) -> &CiCorpusOptions {
        &self.options
    }

    pub fn load(
        &self,
        metadata_path: impl AsRef<Path>,
        lyrics_path: impl AsRef<Path>,
    ) -> Result<CiCorpus> {
        let metadata = File::open(metadata_path.as_ref())?;
        let lyrics = File::open(lyrics_path.as_ref())?;
        self.load_readers(metadata, lyrics)
    }

    pub fn load_readers<M: Read, L: Read>(&self, metadata: M, lyrics: L) -> Result<CiCorpus> {
        let lyrics_by_id = self.read_lyrics(lyrics)?;
        let mut reader = self.reader(metadata);
        let headers = reader.headers()?.clone();
        let id_idx = column(&headers, &self.options.id_column)?;
        let name_idx = column(&headers, &self.options.name_column)?;
        let explicit_idx = column(&headers, &self.options.explicit_column)?;

        let mut songs = Vec::new();
        let mut missing = 0usize;
        for (idx, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("Skipping invalid metadata row {}: {}", idx, e);
                    continue;
                }
            };
            let (Some(song_id), Some(name), Some(flag)) = (
                record.get(id_idx),
                record.get(name_idx),
                record.get(explicit_idx),
            ) else {
                log::warn!("Skipping short metadata row {}", idx);
                continue;
            };
            let Some(is_explicit) = parse_flag(flag) else {
                log::warn!("Skipping metadata row {}: bad explicit flag '{}'", idx, flag);
                continue;
            };
            let Some(lyrics) = lyrics_by_id.get(song_id.trim()) else {
                missing += 1;
                continue;
            };
            songs.push(CiSong {
                song_id: song_id.trim().to_string(),
                song_name: name.trim().to_lowercase(),
                is_explicit,
                lyrics: lyrics.clone(),
            });
        }

        log::info!(
            "loaded {} songs ({} without lyrics skipped)",
            songs.len(),
            missing
        );
        Ok(CiCorpus::new(songs))
    }

    fn reader<R: Read>(&self, input: R) -> csv::Reader<R> {
        ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(input)
    }

    fn read_lyrics<R: Read>(&self, input: R) -> Result<HashMap<String, String>> {
        let mut reader = self.reader(input);
        let headers = reader.headers()?.clone();
        let id_idx = column(&headers, &self.options.id_column)?;
        let lyrics_idx = column(&headers, &self.options.lyrics_column)?;

        let mut lyrics = HashMap::new();
        for (idx, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    let (Some(id), Some(text)) = (record.get(id_idx), record.get(lyrics_idx))
                    else {
                        log::warn!("Skipping short lyrics row {}", idx);
                        continue;
                    };
                    if text.trim().is_empty() {
                        continue;
                    }
                    lyrics
                        .entry(id.trim().to_string())
                        .or_insert_with(|| text.to_string());
                }
                Err(e) => log::warn!("Skipping invalid lyrics row {}: {}", idx, e),
            }
        }
        Ok(lyrics)
    }
}

fn column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| CiError::validation(format!("missing column '{name}'")))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
