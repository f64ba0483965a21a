//! Three-stage convergence pipeline for one food web.
//!
//! ```text
//! InitialRunning -> SustainingRunning -> ConvergenceRunning -> Done
//! ```
//!
//! Each transition creates a set and runs one batch of it. The sequence
//! record is written only on reaching `Done`, so a sequence directory without
//! `sequence-info.json` marks an aborted run.

use std::path::Path;

use atn_core::errors::AtnError;
use atn_store::{
    ArtifactHandle, ArtifactRepository, DataRoot, Descriptor, DirScanRepository, SequenceRecord,
    BIOMASS_DATA_DIR,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::config::{CampaignConfig, GeneratorTemplate};
use crate::runner::{BatchRequest, SimulationRunner};

/// Generator the engine applies to keep only sustaining trials.
pub const SUSTAINING_GENERATOR: &str = "filter-sustaining";

/// Convergence template argument holding the recorded window length.
pub const WINDOW_ARG: &str = "timesteps_to_analyze";

/// Inputs for one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSettings {
    pub food_web: String,
    pub initial_template: GeneratorTemplate,
    pub cvg_template: GeneratorTemplate,
    pub max_timesteps: u64,
    /// Used when the convergence template does not name its own window.
    pub analysis_window: u64,
}

impl SequenceSettings {
    pub fn from_config(
        config: &CampaignConfig,
        food_web: impl Into<String>,
        initial_template: GeneratorTemplate,
        cvg_template: GeneratorTemplate,
    ) -> Self {
        Self {
            food_web: food_web.into(),
            initial_template,
            cvg_template,
            max_timesteps: config.max_timesteps,
            analysis_window: config.analysis_window,
        }
    }

    /// Window length: the template's `timesteps_to_analyze` when it is a
    /// positive integer, the configured default otherwise.
    pub fn convergence_window(&self) -> u64 {
        self.cvg_template
            .args
            .get(WINDOW_ARG)
            .and_then(Value::as_u64)
            .filter(|window| *window > 0)
            .unwrap_or(self.analysis_window)
    }
}

/// Where a sequence currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    InitialRunning,
    SustainingRunning {
        initial_set: u64,
        initial_batch: u64,
    },
    ConvergenceRunning {
        initial_set: u64,
        initial_batch: u64,
        sustaining_set: u64,
        sustaining_batch: u64,
    },
    Done(SequenceRecord),
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::InitialRunning => "initial",
            Stage::SustainingRunning { .. } => "sustaining",
            Stage::ConvergenceRunning { .. } => "convergence",
            Stage::Done(_) => "done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Stage::Done(_))
    }
}

/// One running sequence. Stages are strictly sequential; a failed step
/// leaves the stage unchanged and returns the error.
pub struct Pipeline<R, A = DirScanRepository> {
    settings: SequenceSettings,
    root: DataRoot,
    repository: A,
    runner: R,
    sequence: ArtifactHandle,
    stage: Stage,
}

impl<R: SimulationRunner> Pipeline<R, DirScanRepository> {
    pub fn start(settings: SequenceSettings, root: DataRoot, runner: R) -> Result<Self, AtnError> {
        Self::start_with(settings, root, DirScanRepository, runner)
    }
}

impl<R: SimulationRunner, A: ArtifactRepository> Pipeline<R, A> {
    /// Allocates the sequence directory and enters `InitialRunning`.
    pub fn start_with(
        settings: SequenceSettings,
        root: DataRoot,
        repository: A,
        runner: R,
    ) -> Result<Self, AtnError> {
        let descriptor = Descriptor::new("sequence", json!({ "food_web": settings.food_web }))?
            .with_food_web(settings.food_web.clone());
        let sequence = repository.create_next(&root.sequences(), &descriptor)?;
        info!(sequence = sequence.id, food_web = %settings.food_web, "created sequence");
        Ok(Self {
            settings,
            root,
            repository,
            runner,
            sequence,
            stage: Stage::InitialRunning,
        })
    }

    pub fn sequence_id(&self) -> u64 {
        self.sequence.id
    }

    pub fn sequence_dir(&self) -> &Path {
        &self.sequence.path
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Advances exactly one stage. Stepping a finished pipeline is a no-op.
    pub fn step(&mut self) -> Result<&Stage, AtnError> {
        let next = match self.stage.clone() {
            Stage::InitialRunning => self.run_initial(),
            Stage::SustainingRunning {
                initial_set,
                initial_batch,
            } => self.run_sustaining(initial_set, initial_batch),
            Stage::ConvergenceRunning {
                initial_set,
                initial_batch,
                sustaining_set,
                sustaining_batch,
            } => self.run_convergence(initial_set, initial_batch, sustaining_set, sustaining_batch),
            Stage::Done(_) => return Ok(&self.stage),
        };
        match next {
            Ok(stage) => {
                self.stage = stage;
                Ok(&self.stage)
            }
            Err(err) => {
                warn!(
                    sequence = self.sequence.id,
                    stage = self.stage.name(),
                    error = %err,
                    "sequence aborted"
                );
                Err(err)
            }
        }
    }

    /// Drives the sequence to `Done` and returns its record.
    pub fn run(&mut self) -> Result<SequenceRecord, AtnError> {
        loop {
            if let Stage::Done(record) = self.step()? {
                return Ok(record.clone());
            }
        }
    }

    fn create_set(&self, generator: &str, args: Value) -> Result<u64, AtnError> {
        let descriptor =
            Descriptor::new(generator, args)?.with_food_web(self.settings.food_web.clone());
        let handle = self.repository.create_next(&self.root.sets(), &descriptor)?;
        Ok(handle.id)
    }

    fn run_initial(&mut self) -> Result<Stage, AtnError> {
        let template = &self.settings.initial_template;
        let set = self.create_set(&template.generator, Value::Object(template.args.clone()))?;
        info!(sequence = self.sequence.id, set, "created initial set");

        let request = BatchRequest::new(set, self.root.set_dir(set), self.settings.max_timesteps)
            .without_biomass();
        let batch = self.runner.run_batch(&request)?;
        info!(sequence = self.sequence.id, set, batch, "initial batch finished");
        Ok(Stage::SustainingRunning {
            initial_set: set,
            initial_batch: batch,
        })
    }

    fn run_sustaining(&mut self, initial_set: u64, initial_batch: u64) -> Result<Stage, AtnError> {
        let input_dir = self.root.batch_dir(initial_set, initial_batch).join(BIOMASS_DATA_DIR);
        let set = self.create_set(
            SUSTAINING_GENERATOR,
            json!({ "input_dir": input_dir.display().to_string() }),
        )?;
        info!(sequence = self.sequence.id, set, "created sustaining set");

        let request = BatchRequest::new(set, self.root.set_dir(set), self.settings.max_timesteps);
        let batch = self.runner.run_batch(&request)?;
        info!(sequence = self.sequence.id, set, batch, "sustaining batch finished");
        Ok(Stage::ConvergenceRunning {
            initial_set,
            initial_batch,
            sustaining_set: set,
            sustaining_batch: batch,
        })
    }

    fn run_convergence(
        &mut self,
        initial_set: u64,
        initial_batch: u64,
        sustaining_set: u64,
        sustaining_batch: u64,
    ) -> Result<Stage, AtnError> {
        let window = self.settings.convergence_window();
        let template = &self.settings.cvg_template;
        let mut args = template.args.clone();
        args.insert("input_set".into(), sustaining_set.into());
        args.insert("input_batch".into(), sustaining_batch.into());
        args.insert(WINDOW_ARG.into(), window.into());
        let set = self.create_set(&template.generator, Value::Object(args))?;
        info!(sequence = self.sequence.id, set, window, "created convergence set");

        let request = BatchRequest::new(set, self.root.set_dir(set), window).without_early_stop();
        let batch = self.runner.run_batch(&request)?;

        let record = SequenceRecord {
            food_web: self.settings.food_web.clone(),
            initial_set,
            initial_batch,
            sustaining_set,
            sustaining_batch,
            cvg_set: set,
            cvg_batch: batch,
        };
        record.write_to(&self.sequence.path)?;
        info!(sequence = self.sequence.id, cvg_set = set, cvg_batch = batch, "sequence done");
        Ok(Stage::Done(record))
    }
}
