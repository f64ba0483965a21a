use std::error::Error;
use std::path::PathBuf;

use atn_pipe::{GeneratorTemplate, Pipeline, ProcessRunner, SequenceSettings};
use atn_store::DataRoot;
use clap::Args;

use super::load_config;

#[derive(Args, Debug)]
pub struct SequenceArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Food-web identity recorded with every set of the sequence.
    #[arg(long)]
    pub food_web: String,
    /// Generator template JSON for the initial stage.
    #[arg(long)]
    pub initial_template: PathBuf,
    /// Generator template JSON for the convergence stage.
    #[arg(long)]
    pub cvg_template: PathBuf,
}

pub fn run(args: &SequenceArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let settings = SequenceSettings::from_config(
        &config,
        args.food_web.clone(),
        GeneratorTemplate::load(&args.initial_template)?,
        GeneratorTemplate::load(&args.cvg_template)?,
    );
    let root = DataRoot::new(&config.data_home);
    let runner = ProcessRunner::new(config.runner.clone(), root.clone());
    let mut pipeline = Pipeline::start(settings, root, runner)?;
    pipeline.run()?;
    println!("{}", pipeline.sequence_id());
    Ok(())
}
