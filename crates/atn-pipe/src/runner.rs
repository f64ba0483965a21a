//! The seam between the pipeline and the external simulation engine.

use std::path::PathBuf;
use std::process::Command;

use atn_core::errors::{AtnError, ErrorInfo};
use atn_store::{ArtifactRepository, DataRoot, Descriptor, DirScanRepository};
use serde_json::json;
use tracing::{debug, info};

use crate::config::RunnerConfig;

/// One blocking execution of every config in a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub set: u64,
    pub set_dir: PathBuf,
    /// Timestep ceiling, or the exact count when early stopping is off.
    pub timesteps: u64,
    /// Persist per-trial trajectory data into `biomass-data/`.
    pub record_biomass: bool,
    /// Let the engine end a trial once it reaches steady state.
    pub stop_on_steady_state: bool,
}

impl BatchRequest {
    pub fn new(set: u64, set_dir: impl Into<PathBuf>, timesteps: u64) -> Self {
        Self {
            set,
            set_dir: set_dir.into(),
            timesteps,
            record_biomass: true,
            stop_on_steady_state: true,
        }
    }

    pub fn without_biomass(mut self) -> Self {
        self.record_biomass = false;
        self
    }

    pub fn without_early_stop(mut self) -> Self {
        self.stop_on_steady_state = false;
        self
    }
}

/// Executes a batch and returns its batch id within the set.
pub trait SimulationRunner {
    fn run_batch(&mut self, request: &BatchRequest) -> Result<u64, AtnError>;
}

/// Runs the configured engine program as a child process.
///
/// The batch directory is allocated before launch and handed to the engine
/// with `--batch-dir`; a failed launch leaves that directory in place.
#[derive(Debug, Clone)]
pub struct ProcessRunner<A = DirScanRepository> {
    config: RunnerConfig,
    root: DataRoot,
    repository: A,
}

impl ProcessRunner<DirScanRepository> {
    pub fn new(config: RunnerConfig, root: DataRoot) -> Self {
        Self::with_repository(config, root, DirScanRepository)
    }
}

impl<A: ArtifactRepository> ProcessRunner<A> {
    pub fn with_repository(config: RunnerConfig, root: DataRoot, repository: A) -> Self {
        Self {
            config,
            root,
            repository,
        }
    }

    fn command(&self, request: &BatchRequest, batch_dir: &std::path::Path) -> Command {
        let mut command = Command::new(&self.config.program);
        command
            .args(&self.config.args)
            .arg("--set-dir")
            .arg(&request.set_dir)
            .arg("--batch-dir")
            .arg(batch_dir)
            .arg("--timesteps")
            .arg(request.timesteps.to_string());
        if !request.record_biomass {
            command.arg("--no-record-biomass");
        }
        if !request.stop_on_steady_state {
            command.arg("--no-stop-on-steady-state");
        }
        command
    }
}

impl<A: ArtifactRepository> SimulationRunner for ProcessRunner<A> {
    fn run_batch(&mut self, request: &BatchRequest) -> Result<u64, AtnError> {
        let descriptor = Descriptor::new(
            "simulate-batch",
            json!({
                "timesteps": request.timesteps,
                "record_biomass": request.record_biomass,
                "stop_on_steady_state": request.stop_on_steady_state,
            }),
        )?;
        let batch = self
            .repository
            .create_next(&self.root.batches(request.set), &descriptor)?;

        let mut command = self.command(request, &batch.path);
        debug!(?command, "launching engine");
        info!(set = request.set, batch = batch.id, timesteps = request.timesteps, "simulating batch");

        let status = command.status().map_err(|err| {
            AtnError::Runner(
                ErrorInfo::new("runner-spawn", err.to_string())
                    .with_context("program", self.config.program.clone())
                    .with_context("set", request.set.to_string()),
            )
        })?;
        if !status.success() {
            return Err(AtnError::Runner(
                ErrorInfo::new("runner-exit", "engine exited unsuccessfully")
                    .with_context("program", self.config.program.clone())
                    .with_context("set", request.set.to_string())
                    .with_context("batch", batch.id.to_string())
                    .with_context(
                        "status",
                        status.code().map_or_else(|| "signal".to_string(), |code| code.to_string()),
                    )
                    .with_hint("inspect the batch directory; completed stages are kept"),
            ));
        }
        Ok(batch.id)
    }
}
