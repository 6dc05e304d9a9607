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

//! # Cix Word Module
//!
//! Words and labeled documents, the units the lexicon is learned from.
//!
//! A [`CiWord`] is the normalized form of a surface token: lowercased, with
//! every character that is not a letter, a digit or an inner apostrophe
//! removed. Two surface forms that differ only in case or punctuation
//! (`"Damn!"`, `"damn"`) are the same word. Tokens that normalize to nothing
//! (`"***"`, `","`) are not words at all, which is what keeps masked output
//! out of the lexicon.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tokenize;

/// Normalized vocabulary entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CiWord(String);

impl CiWord {
    /// Normalizes a surface token, returning `None` when nothing word-like remains.
    pub fn parse(surface: &str) -> Option<Self> {
        let normalized = normalize_word(surface);
        if normalized.is_empty() {
            None
        } else {
            Some(CiWord(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether `text` is already in normalized form.
    pub fn is_normalized(text: &str) -> bool {
        !text.is_empty() && normalize_word(text) == text
    }
}

impl fmt::Display for CiWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CiWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CiWord {
    fn borrow(&self) -> &str {
        &self.0
    }
}

fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2018}' | '\u{2019}')
}

/// Case-folds `surface` and strips punctuation, keeping apostrophes only
/// between word characters (`"Don't"` -> `"don't"`, `"freakin'"` -> `"freakin"`).
pub fn normalize_word(surface: &str) -> String {
    let kept: Vec<char> = surface
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_alphanumeric() || is_apostrophe(*ch))
        .map(|ch| if is_apostrophe(ch) { '\'' } else { ch })
        .collect();

    let mut out = String::with_capacity(kept.len());
    for (idx, ch) in kept.iter().enumerate() {
        if *ch == '\'' {
            let inner = idx > 0
                && kept[idx - 1].is_alphanumeric()
                && kept.get(idx + 1).is_some_and(|next| next.is_alphanumeric());
            if !inner {
                continue;
            }
        }
        out.push(*ch);
    }
    out
}

/// A labeled document: the words of one song and whether it is explicit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiDocument {
    words: Vec<CiWord>,
    is_explicit: bool,
}

impl CiDocument {
    pub fn new(words: Vec<CiWord>, is_explicit: bool) -> Self {
        CiDocument { words, is_explicit }
    }

    /// Tokenizes free text and keeps its words.
    pub fn from_text(text: &str, is_explicit: bool) -> Self {
        CiDocument::new(tokenize::words(text), is_explicit)
    }

    pub fn words(&self) -> &[CiWord] {
        &self.words
    }

    pub fn is_explicit(&self) -> bool {
        self.is_explicit
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
