//! Peer extraction from genesis transactions.

use std::path::Path;

use crate::document::GenesisDocument;
use crate::error::{GenesisOpsError, Result};

/// Collect the memo of every genesis transaction, in document order.
///
/// Each validator's self-registration transaction carries that validator's
/// peer address in its memo, so the collected list seeds the persistent
/// peer set of a freshly bootstrapped network.
///
/// # Errors
///
/// [`GenesisOpsError::FileNotFound`] if the file does not exist,
/// [`GenesisOpsError::InvalidFormat`] if it is not valid JSON, and
/// [`GenesisOpsError::MissingField`] if the `app_state.genutil.gen_txs`
/// path is absent or a transaction lacks `body.memo`.
pub fn extract_peers(genesis_file: &Path) -> Result<Vec<String>> {
    let document = GenesisDocument::load(genesis_file)?;

    let missing = |field: String| GenesisOpsError::MissingField {
        path: genesis_file.to_path_buf(),
        field,
    };

    let gen_txs = document
        .app_state
        .ok_or_else(|| missing("app_state".into()))?
        .genutil
        .ok_or_else(|| missing("app_state.genutil".into()))?
        .gen_txs
        .ok_or_else(|| missing("app_state.genutil.gen_txs".into()))?;

    let mut peers = Vec::with_capacity(gen_txs.len());
    for (index, tx) in gen_txs.into_iter().enumerate() {
        let memo = tx
            .body
            .and_then(|body| body.memo)
            .ok_or_else(|| missing(format!("app_state.genutil.gen_txs[{index}].body.memo")))?;
        peers.push(memo);
    }

    tracing::debug!(
        file = %genesis_file.display(),
        count = peers.len(),
        "extracted peers from genesis transactions"
    );

    Ok(peers)
}

// =============================================================================
// Tests
// =============================================================================
