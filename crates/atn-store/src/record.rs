use std::path::Path;

use atn_core::errors::AtnError;
use serde::{Deserialize, Serialize};

use crate::layout::SEQUENCE_RECORD_FILE;
use crate::serde::{read_json, write_json_atomic};

/// Pointers from one completed pipeline run to the artifacts of its stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub food_web: String,
    pub initial_set: u64,
    pub initial_batch: u64,
    pub sustaining_set: u64,
    pub sustaining_batch: u64,
    pub cvg_set: u64,
    pub cvg_batch: u64,
}

impl SequenceRecord {
    pub fn write_to(&self, sequence_dir: &Path) -> Result<(), AtnError> {
        write_json_atomic(&sequence_dir.join(SEQUENCE_RECORD_FILE), self)
    }

    /// Reads the record of a sequence directory. `Ok(None)` means the
    /// sequence never reached completion.
    pub fn read_from(sequence_dir: &Path) -> Result<Option<Self>, AtnError> {
        match read_json(&sequence_dir.join(SEQUENCE_RECORD_FILE)) {
            Ok(record) => Ok(Some(record)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}
