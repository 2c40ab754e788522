//! Fold gathered per-validator genesis files into a target genesis file.

use std::path::PathBuf;

use clap::Parser;
use genesis_ops::merge_genesis;

/// Merge gathered genesis files (accounts, balances, supply) into a target
/// genesis file, rewriting it in place.
#[derive(Parser, Debug)]
#[command(name = "genesis_merger")]
#[command(about = "Merge gathered genesis files into a target genesis file")]
struct Args {
    /// Path to the target genesis file (rewritten in place)
    genesis_file: PathBuf,

    /// Directory holding the gathered per-validator genesis files
    gathered_genesis_directory: PathBuf,
}

fn main() {
    genesis_cli::init_tracing();
    let args = Args::parse();

    if let Err(e) = merge_genesis(&args.genesis_file, &args.gathered_genesis_directory) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
