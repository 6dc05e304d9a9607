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

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::errors::{CiError, Result};
use crate::lexicon::{CiLexicon, CiLexiconState};
use crate::similarity::CiMetricKind;

/// File persistence for lexicons.
///
/// The on-disk form is the pretty-printed JSON of [`CiLexiconState`]. Any
/// content that does not parse or violates the lexicon invariants is reported
/// as [`CiError::MalformedPersistedState`]; filesystem failures stay
/// [`CiError::Io`].
pub struct CiLexiconStore;

impl CiLexiconStore {
    pub fn save(path: impl AsRef<Path>, lexicon: &CiLexicon) -> Result<()> {
        let file = File::create(path.as_ref())?;
        Self::save_writer(BufWriter::new(file), lexicon)?;
        log::debug!("saved lexicon to {}", path.as_ref().display());
        Ok(())
    }

    pub fn save_writer<W: Write>(mut writer: W, lexicon: &CiLexicon) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, &lexicon.to_state())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<CiLexicon> {
        let file = File::open(path.as_ref())?;
        let lexicon = Self::load_reader(BufReader::new(file))?;
        log::debug!(
            "loaded lexicon from {}: {} explicit, {} appropriate, {} cached",
            path.as_ref().display(),
            lexicon.explicit_len(),
            lexicon.appropriate_len(),
            lexicon.cache().len()
        );
        Ok(lexicon)
    }

    /// Loads a lexicon and searches it with `metric` instead of the default.
    ///
    /// The persisted substitutes are discarded, since they were resolved
    /// under another metric.
    pub fn load_with_metric(path: impl AsRef<Path>, metric: CiMetricKind) -> Result<CiLexicon> {
        Ok(Self::load(path)?.with_metric(metric))
    }

    pub fn load_reader<R: Read>(reader: R) -> Result<CiLexicon> {
        let state: CiLexiconState = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                CiError::Io(e.to_string())
            } else {
                CiError::malformed(e.to_string())
            }
        })?;
        CiLexicon::from_state(state)
    }
}
