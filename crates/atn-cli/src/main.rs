use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    compact::{self, CompactArgs},
    generate::{self, GenerateArgs},
    mixture::{self, SampleMixtureArgs},
    sequence::{self, SequenceArgs},
    subweb::{self, SubwebArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "atn", about = "ATN food-web experiment tooling")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the node configs of a registered set, one per line.
    Generate(GenerateArgs),
    /// List registered set numbers.
    Generators,
    /// Sample node configs from a fitted Gaussian mixture.
    SampleMixture(SampleMixtureArgs),
    /// Run one initial/sustaining/convergence sequence.
    Sequence(SequenceArgs),
    /// Regroup convergence trials of finished sequences by food web.
    Compact(CompactArgs),
    /// Pick a random connected sub-web grown from basal species.
    Subweb(SubwebArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Generators => generate::list(),
        Command::SampleMixture(args) => mixture::run(&args),
        Command::Sequence(args) => sequence::run(&args),
        Command::Compact(args) => compact::run(&args),
        Command::Subweb(args) => subweb::run(&args),
    }
}
