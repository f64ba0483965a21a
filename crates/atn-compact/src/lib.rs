//! Food-web compaction of convergence batches.

pub mod compact;
pub mod foodweb;
pub mod render;

pub use compact::{
    link_trajectory, reference_path, CompactionReport, Compactor, SlotLink, TrajectoryRef,
    PLOTS_DIR, REPORT_FILE,
};
pub use foodweb::{FoodWebGraph, Link, SubWeb, SubWebNode, SUBWEB_ATTEMPTS};
pub use render::{LogRenderer, Renderer};
