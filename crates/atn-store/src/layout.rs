//! Directory naming for the data root.
//!
//! ```text
//! <data_home>/sets/set-<N>/descriptor.json
//! <data_home>/sets/set-<N>/node-configs.txt
//! <data_home>/sets/set-<N>/batch-<M>/node-configs.txt
//! <data_home>/sets/set-<N>/batch-<M>/biomass-data/ATN.h5, ATN_1.h5, ...
//! <data_home>/sequences/sequence-<K>/sequence-info.json
//! ```

use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DESCRIPTOR_FILE: &str = "descriptor.json";
pub const NODE_CONFIGS_FILE: &str = "node-configs.txt";
pub const BIOMASS_DATA_DIR: &str = "biomass-data";
pub const SEQUENCE_RECORD_FILE: &str = "sequence-info.json";

/// Kind of numbered artifact; the kind fixes the directory prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Set,
    Batch,
    Sequence,
}

impl ArtifactKind {
    pub fn prefix(self) -> &'static str {
        match self {
            ArtifactKind::Set => "set",
            ArtifactKind::Batch => "batch",
            ArtifactKind::Sequence => "sequence",
        }
    }

    /// Directory name for an id, e.g. `set-12`.
    pub fn dir_name(self, id: u64) -> String {
        format!("{}-{}", self.prefix(), id)
    }

    /// Parses a directory name of this kind back into its id. Names with
    /// signs, leading `+` or trailing text are not numbered artifacts.
    pub fn parse_dir_name(self, name: &str) -> Option<u64> {
        let digits = name.strip_prefix(self.prefix())?.strip_prefix('-')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A directory holding numbered artifacts of a single kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub root: PathBuf,
    pub kind: ArtifactKind,
}

impl Scope {
    pub fn new(root: impl Into<PathBuf>, kind: ArtifactKind) -> Self {
        Self {
            root: root.into(),
            kind,
        }
    }

    pub fn path_of(&self, id: u64) -> PathBuf {
        self.root.join(self.kind.dir_name(id))
    }
}

/// Root of all campaign data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRoot {
    home: PathBuf,
}

impl DataRoot {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn sets(&self) -> Scope {
        Scope::new(self.home.join("sets"), ArtifactKind::Set)
    }

    /// Batches live inside their set directory.
    pub fn batches(&self, set: u64) -> Scope {
        Scope::new(self.sets().path_of(set), ArtifactKind::Batch)
    }

    pub fn sequences(&self) -> Scope {
        Scope::new(self.home.join("sequences"), ArtifactKind::Sequence)
    }

    pub fn set_dir(&self, set: u64) -> PathBuf {
        self.sets().path_of(set)
    }

    pub fn batch_dir(&self, set: u64, batch: u64) -> PathBuf {
        self.batches(set).path_of(batch)
    }

    pub fn sequence_dir(&self, sequence: u64) -> PathBuf {
        self.sequences().path_of(sequence)
    }
}

/// File name of a trial's trajectory: `ATN.h5` for trial 0, `ATN_<i>.h5` after.
pub fn trial_file_name(index: usize) -> String {
    trial_name(index, "h5")
}

/// File name of a trial's trajectory plot.
pub fn trial_plot_name(index: usize) -> String {
    trial_name(index, "png")
}

fn trial_name(index: usize, extension: &str) -> String {
    if index == 0 {
        format!("ATN.{extension}")
    } else {
        format!("ATN_{index}.{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_names_round_trip() {
        assert_eq!(ArtifactKind::Batch.dir_name(3), "batch-3");
        assert_eq!(ArtifactKind::Set.parse_dir_name("set-12"), Some(12));
        assert_eq!(ArtifactKind::Set.parse_dir_name("set-"), None);
        assert_eq!(ArtifactKind::Set.parse_dir_name("set-+4"), None);
        assert_eq!(ArtifactKind::Set.parse_dir_name("set-4a"), None);
        assert_eq!(ArtifactKind::Set.parse_dir_name("batch-4"), None);
        assert_eq!(ArtifactKind::Sequence.parse_dir_name("sequences-1"), None);
    }

    #[test]
    fn trial_names_follow_engine_convention() {
        assert_eq!(trial_file_name(0), "ATN.h5");
        assert_eq!(trial_file_name(7), "ATN_7.h5");
        assert_eq!(trial_plot_name(1), "ATN_1.png");
    }

    #[test]
    fn batches_nest_under_sets() {
        let root = DataRoot::new("/data");
        assert_eq!(root.batch_dir(2, 5), PathBuf::from("/data/sets/set-2/batch-5"));
        assert_eq!(root.sequence_dir(0), PathBuf::from("/data/sequences/sequence-0"));
    }
}
