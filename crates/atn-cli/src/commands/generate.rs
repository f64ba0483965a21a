use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use atn_core::rng::{derive_substream_seed, RngHandle};
use atn_nodecfg::{encode, SpeciesCatalog};
use atn_store::{write_ledger, ArtifactRepository, DataRoot, Descriptor, DirScanRepository, NODE_CONFIGS_FILE};
use atn_vary::{GenContext, GeneratorTable};
use clap::Args;
use tracing::info;

use super::load_config;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Registered set number.
    pub set: u32,
    /// Seed for randomized generators; omitted means entropy.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Species table for sets built from species ids.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Also store the configs as a new set in the data root.
    #[arg(long)]
    pub store: bool,
    /// Campaign config locating the data root.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let catalog = args
        .catalog
        .as_deref()
        .map(SpeciesCatalog::from_csv_path)
        .transpose()?;
    let rng = match args.seed {
        Some(seed) => RngHandle::from_seed(derive_substream_seed(seed, u64::from(args.set))),
        None => RngHandle::from_entropy(),
    };
    let table = GeneratorTable::builtin();
    let mut ctx = GenContext::new(catalog.as_ref(), rng);
    let configs = table.generate(args.set, &mut ctx)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for config in &configs {
        writeln!(out, "{}", encode(config))?;
    }
    out.flush()?;

    if args.store {
        let config = load_config(args.config.as_deref())?;
        let root = DataRoot::new(&config.data_home);
        let mut generator_args = table
            .get(args.set)
            .map(|entry| entry.args())
            .unwrap_or_default();
        if let (Some(seed), Some(map)) = (args.seed, generator_args.as_object_mut()) {
            map.insert("seed".into(), seed.into());
        }
        let mut descriptor = Descriptor::new("variation", generator_args)?;
        if let Some(first) = configs.first() {
            descriptor = descriptor.with_food_web(first.food_web_id());
        }
        let handle = DirScanRepository.create_next(&root.sets(), &descriptor)?;
        write_ledger(&handle.path.join(NODE_CONFIGS_FILE), &configs)?;
        info!(set = handle.id, configs = configs.len(), path = %handle.path.display(), "stored set");
    }
    Ok(())
}

pub fn list() -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for entry in GeneratorTable::builtin().entries() {
        writeln!(out, "{:>4}  {:<12} {}", entry.set, entry.recipe.name(), entry.description)?;
    }
    Ok(())
}
