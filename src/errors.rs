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

//! # Cix Error Module
//!
//! This module defines the error type shared by every Cix component.
//!
//! ## Error Categories
//!
//! - **EmptyCorpus**: lexicon construction found no documents or no words.
//!   Fatal to the build; a lexicon with two empty sets is never produced.
//! - **EmptyVocabulary**: a substitute was requested but the lexicon holds no
//!   appropriate words. Recoverable; the sanitizer masks the token instead.
//! - **MalformedPersistedState**: a persisted lexicon is missing fields or
//!   violates the set / cache invariants. Fatal to the load.
//! - **Validation**: invalid parameters (alpha, threshold, unknown metric...)
//! - **Io / Serde / Csv**: wrapped failures from the boundary modules
//! - **Internal**: unexpected situations
//!
//! Classification and cache lookups never fail. Only construction, loading
//! and substitution return errors, and those errors are surfaced to the
//! caller rather than logged and swallowed.
//!
//! ## Usage
//!
//! ```rust
//! use cix::errors::{CiError, Result};
//!
//! fn checked_threshold(threshold: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&threshold) {
//!         return Err(CiError::validation("threshold must be in [0,1]"));
//!     }
//!     Ok(threshold)
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Cix.
pub type Result<T> = std::result::Result<T, CiError>;

/// Canonical error enumeration for Cix.
#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum CiError {
    /// The corpus handed to the builder has no usable documents or words.
    #[error("empty corpus: {message}")]
    EmptyCorpus { message: String },

    /// No appropriate word exists to stand in for `word`.
    #[error("no appropriate words available to replace '{word}'")]
    EmptyVocabulary { word: String },

    /// Persisted lexicon state is incomplete or inconsistent.
    #[error("malformed persisted lexicon: {message}")]
    MalformedPersistedState { message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors raised while reading corpus tables.
    #[error("csv error: {0}")]
    Csv(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for CiError {
    fn from(err: io::Error) -> Self {
        CiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CiError {
    fn from(err: serde_json::Error) -> Self {
        CiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for CiError {
    fn from(err: serde_yaml::Error) -> Self {
        CiError::Serde(err.to_string())
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for CiError {
    fn from(err: csv::Error) -> Self {
        CiError::Csv(err.to_string())
    }
}

impl CiError {
    /// Helper to construct empty corpus errors.
    pub fn empty_corpus<T: Into<String>>(message: T) -> Self {
        CiError::EmptyCorpus {
            message: message.into(),
        }
    }

    /// Helper to construct empty vocabulary errors.
    pub fn empty_vocabulary<T: Into<String>>(word: T) -> Self {
        CiError::EmptyVocabulary { word: word.into() }
    }

    /// Helper to construct malformed persisted state errors.
    pub fn malformed<T: Into<String>>(message: T) -> Self {
        CiError::MalformedPersistedState {
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        CiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        CiError::Internal(message.into())
    }

    /// Whether a caller can degrade gracefully instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CiError::EmptyVocabulary { .. })
    }
}
