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

//! # Cix Text Sanitizer
//!
//! Rewrites a token stream so explicit words no longer appear.
//!
//! ## Modes
//!
//! - [`CiMode::Mask`]: an explicit token becomes a run of asterisks with the
//!   same number of characters as the original token
//! - [`CiMode::Replace`]: an explicit token becomes the closest appropriate
//!   word, following the capitalization of the original (`Damn` -> `Darn`,
//!   `DAMN` -> `DARN`)
//!
//! Tokens are normalized only to classify them; appropriate, unknown and
//! non-word tokens are emitted byte for byte. When no substitute exists
//! ([`CiError::EmptyVocabulary`]) the token is masked instead and the rest of
//! the text is still processed.
//!
//! ## Usage
//!
//! ```rust
//! use cix::{CiLexicon, CiMode, sanitize_text};
//!
//! let lexicon = CiLexicon::from_words(&["damn"], &["darn", "dang"]).unwrap();
//! assert_eq!(sanitize_text("damn it", &lexicon, CiMode::Mask), "**** it");
//! assert_eq!(sanitize_text("Damn it", &lexicon, CiMode::Replace), "Darn it");
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{CiError, Result};
use crate::lexicon::{CiClass, CiLexicon};
use crate::metrics::CiSanitizeReport;
use crate::tokenize;
use crate::word::CiWord;

/// Substitution policy for explicit tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CiMode {
    Mask,
    #[default]
    Replace,
}

impl CiMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CiMode::Mask => "mask",
            CiMode::Replace => "replace",
        }
    }
}

impl fmt::Display for CiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CiMode {
    type Err = CiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mask" => Ok(CiMode::Mask),
            "replace" => Ok(CiMode::Replace),
            other => Err(CiError::validation(format!(
                "unknown sanitize mode '{other}' (expected 'mask' or 'replace')"
            ))),
        }
    }
}

/// Asterisk run with one `*` per character of `token`.
pub fn mask_token(token: &str) -> String {
    "*".repeat(token.chars().count())
}

/// Applies the capitalization pattern of `original` to `replacement`.
pub fn match_case(original: &str, replacement: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    let all_upper = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());
    if all_upper {
        return replacement.to_uppercase();
    }
    match letters.first() {
        Some(first) if first.is_uppercase() => {
            let mut chars = replacement.chars();
            match chars.next() {
                Some(head) => head.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => replacement.to_string(),
    }
}

/// Sanitizes tokens against a borrowed lexicon.
#[derive(Clone, Copy, Debug)]
pub struct CiTextSanitizer<'a> {
    lexicon: &'a CiLexicon,
    mode: CiMode,
}

impl<'a> CiTextSanitizer<'a> {
    pub fn new(lexicon: &'a CiLexicon, mode: CiMode) -> Self {
        CiTextSanitizer { lexicon, mode }
    }

    pub fn mode(&self) -> CiMode {
        self.mode
    }

    fn sanitize_token(&self, token: &str, report: &mut CiSanitizeReport) -> String {
        report.tokens += 1;
        let Some(word) = CiWord::parse(token) else {
            return token.to_string();
        };
        report.words += 1;
        if self.lexicon.classify_word(&word) != CiClass::Explicit {
            return token.to_string();
        }
        report.explicit += 1;

        match self.mode {
            CiMode::Mask => {
                report.masked += 1;
                mask_token(token)
            }
            CiMode::Replace => match self.lexicon.resolve_substitute(word.as_str()) {
                Ok(substitute) => {
                    report.replaced += 1;
                    match_case(token, substitute.as_str())
                }
                Err(err) => {
                    log::debug!("masking '{}' instead of replacing: {}", token, err);
                    report.fallbacks += 1;
                    mask_token(token)
                }
            },
        }
    }

    pub fn sanitize_with_report<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> (Vec<String>, CiSanitizeReport) {
        let mut report = CiSanitizeReport::default();
        let out: Vec<String> = tokens
            .iter()
            .map(|t| self.sanitize_token(t.as_ref(), &mut report))
            .collect();
        (out, report)
    }

    pub fn sanitize<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        self.sanitize_with_report(tokens).0
    }

    pub fn sanitize_text_with_report(&self, text: &str) -> (String, CiSanitizeReport) {
        let tokens = tokenize::token_strings(text);
        let (out, report) = self.sanitize_with_report(&tokens);
        (out.concat(), report)
    }

    /// Tokenizes, sanitizes and reassembles `text`, keeping its layout.
    pub fn sanitize_text(&self, text: &str) -> String {
        self.sanitize_text_with_report(text).0
    }

    /// Sanitizes each line on the Rayon pool; the text equals [`Self::sanitize_text`].
    #[cfg(feature = "parallel")]
    pub fn sanitize_lines_parallel(&self, text: &str) -> (String, CiSanitizeReport) {
        let lines: Vec<&str> = text.split('\n').collect();
        let results: Vec<(String, CiSanitizeReport)> = lines
            .par_iter()
            .map(|line| self.sanitize_text_with_report(line))
            .collect();

        let mut report = CiSanitizeReport::default();
        let mut out = Vec::with_capacity(results.len());
        for (line, part) in results {
            report.merge(&part);
            out.push(line);
        }
        (out.join("\n"), report)
    }
}

/// Sanitizes a token sequence, preserving order and non-word tokens.
pub fn sanitize<S: AsRef<str>>(tokens: &[S], lexicon: &CiLexicon, mode: CiMode) -> Vec<String> {
    CiTextSanitizer::new(lexicon, mode).sanitize(tokens)
}

/// Sanitizes free text, preserving its line and token structure.
pub fn sanitize_text(text: &str, lexicon: &CiLexicon, mode: CiMode) -> String {
    CiTextSanitizer::new(lexicon, mode).sanitize_text(text)
}
