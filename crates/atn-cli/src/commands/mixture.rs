use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use atn_core::rng::RngHandle;
use atn_nodecfg::{decode, encode};
use atn_vary::parse_report_file;
use clap::Args;
use tracing::debug;

#[derive(Args, Debug)]
pub struct SampleMixtureArgs {
    /// File whose first line is the template node config.
    #[arg(long)]
    pub template: PathBuf,
    /// EM clusterer report holding the fitted mixture.
    #[arg(long)]
    pub weka: PathBuf,
    #[arg(long, default_value_t = 100)]
    pub count: usize,
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &SampleMixtureArgs) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(&args.template)?;
    let line = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| format!("no node config in {}", args.template.display()))?;
    let template = decode(line)?;
    let mixture = parse_report_file(&args.weka)?;
    debug!(components = mixture.components().len(), "loaded mixture");

    let mut rng = args.seed.map_or_else(RngHandle::from_entropy, RngHandle::from_seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for config in mixture.sample(&template, args.count, &mut rng)? {
        writeln!(out, "{}", encode(&config))?;
    }
    out.flush()?;
    Ok(())
}
