//! Print the peer addresses embedded in a genesis document.

use std::path::PathBuf;

use clap::Parser;
use genesis_ops::extract_peers;

/// Extract peer addresses from the memos of a genesis file's transactions.
#[derive(Parser, Debug)]
#[command(name = "genesis_extract_peers")]
#[command(about = "Print the comma-joined peer list from a genesis file")]
struct Args {
    /// Path to the genesis file
    genesis_file: PathBuf,
}

fn main() {
    genesis_cli::init_tracing();
    let args = Args::parse();

    match extract_peers(&args.genesis_file) {
        Ok(peers) => println!("{}", peers.join(",")),
        Err(e) => {
            // The bootstrap scripts read this tool's stdout, errors included.
            println!("Error: {e}");
            std::process::exit(1);
        }
    }
}
