//! Campaign configuration and the convergence pipeline driving the external
//! simulation engine.

pub mod config;
pub mod pipeline;
pub mod runner;

pub use config::{CampaignConfig, GeneratorTemplate, RunnerConfig, DATA_HOME_ENV, MAX_TIMESTEPS};
pub use pipeline::{Pipeline, SequenceSettings, Stage, SUSTAINING_GENERATOR, WINDOW_ARG};
pub use runner::{BatchRequest, ProcessRunner, SimulationRunner};
