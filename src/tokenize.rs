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

//! # Cix Tokenizer
//!
//! Lossless splitting of free text into word, whitespace and punctuation
//! tokens. Concatenating the tokens of a text always reproduces it exactly,
//! which is what lets the sanitizer keep line and spacing structure intact.
//!
//! Word tokens take letters, digits and combining marks, so words written
//! with vowel signs or accents stay in one piece and map to a single
//! [`CiWord`].

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::word::CiWord;

const TOKEN_PATTERN: &str = r"[\p{Alphabetic}\p{N}\p{M}]+(?:['\x{2019}][\p{Alphabetic}\p{N}\p{M}]+)*|\s+|[^\p{Alphabetic}\p{N}\p{M}\s]+";

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CiTokenKind {
    Word,
    Space,
    Punct,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CiToken<'a> {
    pub text: &'a str,
    pub kind: CiTokenKind,
}

impl<'a> CiToken<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == CiTokenKind::Word
    }
}

fn kind_of(text: &str) -> CiTokenKind {
    if text.chars().any(char::is_alphanumeric) {
        CiTokenKind::Word
    } else if text.starts_with(char::is_whitespace) {
        CiTokenKind::Space
    } else {
        CiTokenKind::Punct
    }
}

/// Splits `text` into tokens covering every byte of the input.
pub fn tokenize(text: &str) -> Vec<CiToken<'_>> {
    token_re()
        .find_iter(text)
        .map(|m| CiToken {
            text: m.as_str(),
            kind: kind_of(m.as_str()),
        })
        .collect()
}

/// Token texts only.
pub fn token_strings(text: &str) -> Vec<&str> {
    tokenize(text).into_iter().map(|t| t.text).collect()
}

/// Normalized words of `text`, in order, duplicates kept.
pub fn words(text: &str) -> Vec<CiWord> {
    tokenize(text)
        .into_iter()
        .filter(CiToken::is_word)
        .filter_map(|t| CiWord::parse(t.text))
        .collect()
}

/// Breaks text for display after every `words_per_line` words.
///
/// The space that would follow the last word of a line becomes a newline;
/// existing newlines reset the count. `0` leaves the text unchanged.
pub fn wrap_words(text: &str, words_per_line: usize) -> String {
    if words_per_line == 0 {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut spaces = 0usize;
    for ch in text.chars() {
        match ch {
            '\n' => {
                spaces = 0;
                out.push(ch);
            }
            ' ' if spaces + 1 >= words_per_line => {
                spaces = 0;
                out.push('\n');
            }
            ' ' => {
                spaces += 1;
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
