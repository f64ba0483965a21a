use std::error::Error;
use std::path::PathBuf;

use atn_compact::{Compactor, FoodWebGraph, LogRenderer};
use atn_store::DataRoot;
use clap::Args;

use super::load_config;

#[derive(Args, Debug)]
pub struct CompactArgs {
    /// Output directory; must not exist.
    #[arg(long)]
    pub out: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Species table of the full food web.
    #[arg(long, requires = "foodweb_consume")]
    pub foodweb_species: Option<PathBuf>,
    /// Consume (prey/predator) table of the full food web.
    #[arg(long, requires = "foodweb_species")]
    pub foodweb_consume: Option<PathBuf>,
    /// Sequence numbers to compact.
    #[arg(required = true)]
    pub sequences: Vec<u64>,
}

pub fn run(args: &CompactArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let root = DataRoot::new(&config.data_home);
    let graph = match (&args.foodweb_species, &args.foodweb_consume) {
        (Some(species), Some(consume)) => Some(FoodWebGraph::from_csv_paths(species, consume)?),
        _ => None,
    };

    let mut compactor = Compactor::new(&root, LogRenderer);
    if let Some(graph) = graph.as_ref() {
        compactor = compactor.with_graph(graph);
    }
    let report = compactor.compact(&args.sequences, &args.out)?;

    println!("Trials by food web:");
    for (food_web, count) in &report.trials_by_food_web {
        println!("  {food_web}: {count}");
    }
    println!("Trials by food-web size:");
    for (size, count) in &report.trials_by_size {
        println!("  {size}: {count}");
    }
    println!("{} distinct food webs", report.distinct_food_webs);
    println!("{} trials total", report.total_trials);
    if !report.skipped_sequences.is_empty() {
        println!("{} sequences skipped", report.skipped_sequences.len());
    }
    Ok(())
}
