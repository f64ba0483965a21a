use std::error::Error;
use std::path::PathBuf;

use atn_compact::FoodWebGraph;
use atn_core::rng::RngHandle;
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub struct SubwebArgs {
    /// Species table of the full food web.
    #[arg(long)]
    pub foodweb_species: PathBuf,
    /// Consume (prey/predator) table of the full food web.
    #[arg(long)]
    pub foodweb_consume: PathBuf,
    /// Number of species in the sub-web.
    #[arg(long)]
    pub size: usize,
    /// Number of basal species to start from.
    #[arg(long, default_value_t = 2)]
    pub basal: usize,
    /// Basal species never used as a starting point.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &SubwebArgs) -> Result<(), Box<dyn Error>> {
    let graph = FoodWebGraph::from_csv_paths(&args.foodweb_species, &args.foodweb_consume)?;
    let seeds: Vec<u32> = graph
        .basal_species()
        .into_iter()
        .filter(|id| !args.exclude.contains(id))
        .collect();
    let mut rng = match args.seed {
        Some(seed) => RngHandle::from_seed(seed),
        None => RngHandle::from_entropy(),
    };
    info!(size = args.size, basal = args.basal, candidates = seeds.len(), "selecting sub-web");
    let web = graph.predator_complete_subweb(args.size, &seeds, args.basal, &mut rng)?;
    let ids: Vec<String> = web.iter().map(u32::to_string).collect();
    println!("{}", ids.join(" "));
    Ok(())
}
