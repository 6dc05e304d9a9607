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

use std::sync::OnceLock;

use regex::Regex;

static SECTION_RE: OnceLock<Regex> = OnceLock::new();
static ESCAPED_NEWLINE_RE: OnceLock<Regex> = OnceLock::new();

fn section_re() -> &'static Regex {
    SECTION_RE.get_or_init(|| Regex::new(r"\[[^\]]*?\]").expect("section pattern is valid"))
}

fn escaped_newline_re() -> &'static Regex {
    ESCAPED_NEWLINE_RE.get_or_init(|| Regex::new(r"(?:\\n)+").expect("newline pattern is valid"))
}

/// Cleans a raw lyric field from the song tables.
///
/// Lyric fields are stored as list literals with escaped line breaks, e.g.
/// `['[Verse 1]\nThought I\'d end up with Sean ...']`. This strips the
/// enclosing brackets, drops `[Chorus]`-style section tags, turns escaped
/// `\n` runs into real line breaks and removes leftover backslashes. Case is
/// kept; classification normalizes on its own.
pub fn preprocess_lyrics(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('[').trim_end_matches(']');
    let without_sections = section_re().replace_all(trimmed, "");
    let with_breaks = escaped_newline_re().replace_all(&without_sections, "\n");
    with_breaks.replace('\\', "")
}
