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

//! # Cix Configuration
//!
//! Tunable parameters for building and applying a lexicon.
//!
//! | key         | default                    | meaning                              |
//! |-------------|----------------------------|--------------------------------------|
//! | `alpha`     | `1.0`                      | Laplace smoothing constant           |
//! | `threshold` | `0.6`                      | minimum score for an explicit word   |
//! | `metric`    | `"normalized_levenshtein"` | similarity metric for replacements   |
//! | `mode`      | `"replace"`                | `"mask"` or `"replace"`              |
//!
//! Missing keys fall back to their defaults; unknown keys are rejected.
//! Configuration can be read from a `serde_json::Value` or from `.json`,
//! `.yaml` and `.yml` files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builder::{validate_threshold, DEFAULT_THRESHOLD};
use crate::errors::{CiError, Result};
use crate::sanitizer::CiMode;
use crate::score::{validate_alpha, DEFAULT_ALPHA};
use crate::similarity::CiMetricKind;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CiConfig {
    pub alpha: f64,
    pub threshold: f64,
    pub metric: CiMetricKind,
    pub mode: CiMode,
}

impl Default for CiConfig {
    fn default() -> Self {
        CiConfig {
            alpha: DEFAULT_ALPHA,
            threshold: DEFAULT_THRESHOLD,
            metric: CiMetricKind::default(),
            mode: CiMode::default(),
        }
    }
}

impl CiConfig {
    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.alpha)?;
        validate_threshold(self.threshold)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(CiError::validation("config must be an object"));
        }
        let config: CiConfig = serde_json::from_value(value.clone())
            .map_err(|e| CiError::validation(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: CiConfig = serde_json::from_str(text)
            .map_err(|e| CiError::validation(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: CiConfig = serde_yaml::from_str(text)
            .map_err(|e| CiError::validation(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, choosing the parser from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let text = fs::read_to_string(path)?;
        match ext.as_str() {
            "json" => Self::from_json_str(&text),
            "yaml" | "yml" => Self::from_yaml_str(&text),
            _ => Err(CiError::validation(format!(
                "unable to detect config format for {}",
                path.display()
            ))),
        }
    }
}
