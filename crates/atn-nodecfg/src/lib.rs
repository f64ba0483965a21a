//! Food-web node configurations: the in-memory model, the comma-separated
//! text codec, registered parameter ranges and the species catalog used to
//! build template configurations.

pub mod catalog;
pub mod codec;
pub mod node;
pub mod ranges;

pub use catalog::{SpeciesCatalog, SpeciesRecord, DEFAULT_BIOMASS, PLANT};
pub use codec::{decode, encode, format_sig6, ParseError, ParseErrorKind};
pub use node::{
    food_web_key, Node, NodeConfig, INITIAL_BIOMASS, PER_UNIT_BIOMASS, TRACKED_ATTRIBUTES,
};
pub use ranges::{clip_to_registered, registered_range, ParamRange};
