//! Append-only store of numbered artifacts: sets of generated configs,
//! batches of runner output nested under sets, and sequence records chaining
//! pipeline stages.

pub mod descriptor;
pub mod layout;
pub mod ledger;
pub mod record;
pub mod repository;
pub mod serde;

pub use descriptor::Descriptor;
pub use layout::{
    trial_file_name, trial_plot_name, ArtifactKind, DataRoot, Scope, BIOMASS_DATA_DIR,
    DESCRIPTOR_FILE, NODE_CONFIGS_FILE, SEQUENCE_RECORD_FILE,
};
pub use ledger::{append_ledger_line, read_ledger, write_ledger};
pub use record::SequenceRecord;
pub use repository::{ArtifactHandle, ArtifactRepository, DirScanRepository};
pub use self::serde::{
    from_json_slice, read_json, stable_hash_string, to_canonical_json_bytes, write_json, write_json_atomic,
};
