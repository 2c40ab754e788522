//! # Genesis CLI
//!
//! Command-line entry points invoked by the network bootstrap scripts:
//!
//! - `genesis_extract_peers` prints the peer list embedded in a genesis
//!   document's transaction memos.
//! - `genesis_merger` folds gathered per-validator genesis files into the
//!   published genesis document.

use tracing_subscriber::EnvFilter;

/// Initialize logging for a CLI run.
///
/// Diagnostics go to stderr so stdout stays reserved for tool output. The
/// filter comes from `RUST_LOG`, defaulting to warnings only; it never
/// affects what the tools write or print.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
