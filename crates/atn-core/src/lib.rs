#![deny(missing_docs)]
#![doc = "Core error and randomness types shared by the ATN experiment-management crates."]

pub mod errors;
pub mod rng;

pub use errors::{AtnError, ErrorInfo};
pub use rng::{derive_substream_seed, RngHandle};
