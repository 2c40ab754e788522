//! Gathered-genesis merging.
//!
//! During an all-validators-at-once bootstrap, every validator produces its
//! own genesis fragment (its account, its balance, its share of the
//! supply). Those fragments are gathered into one directory and folded into
//! the coordinator's target genesis document here.
//!
//! The target file is rewritten in place with no backup and no locking, so
//! concurrent invocations against the same target are unsafe. That is
//! acceptable for the one-shot bootstrap context this runs in.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::document::{AppState, Auth, Bank, Coin, GenesisDocument};
use crate::error::{GenesisOpsError, Result};
use crate::supply::merge_supply;

/// Conventional target genesis path inside the bootstrap container.
pub const DEFAULT_TARGET_GENESIS: &str = "/workdir/config/genesis.json";

/// Conventional gathered-fragments directory inside the bootstrap container.
pub const DEFAULT_GATHERED_DIR: &str = "/workdir/gathered";

/// Paths for one merge run.
///
/// `Default` points at the conventional bootstrap container layout; the CLI
/// always supplies both paths explicitly.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Genesis file to merge into (rewritten in place).
    pub target_genesis: PathBuf,
    /// Directory holding the gathered per-validator genesis files.
    pub gathered_dir: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            target_genesis: PathBuf::from(DEFAULT_TARGET_GENESIS),
            gathered_dir: PathBuf::from(DEFAULT_GATHERED_DIR),
        }
    }
}

impl MergeConfig {
    /// Run the merge described by this config.
    ///
    /// # Errors
    ///
    /// Same conditions as [`merge_genesis`].
    pub fn run(&self) -> Result<MergeReport> {
        merge_genesis(&self.target_genesis, &self.gathered_dir)
    }
}

/// What a merge run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Gathered files parsed and folded in.
    pub gathered_files: usize,
    /// Account entries appended to the target.
    pub accounts_appended: usize,
    /// Balance entries appended to the target.
    pub balances_appended: usize,
    /// Distinct denominations in the merged supply.
    pub denoms: usize,
}

/// Fold every gathered genesis file into the target genesis file.
///
/// Gathered files are the `*.json` regular files directly inside
/// `gathered_dir`, processed in sorted file-name order so the merge output
/// is deterministic. For each one, its `app_state.auth.accounts` and
/// `app_state.bank.balances` are appended to the target's lists (target
/// entries first) and its `app_state.bank.supply` joins the supply pool;
/// an absent section contributes nothing. The pooled supply is then summed
/// per denomination and replaces the target's supply, and the target is
/// rewritten pretty-printed.
///
/// # Errors
///
/// [`GenesisOpsError::FileNotFound`] if the target is not an existing
/// regular file (nothing is written), [`GenesisOpsError::MissingField`] if
/// the target lacks one of the merged sections,
/// [`GenesisOpsError::InvalidFormat`] naming the offending file if the
/// target or any gathered file fails to parse, and the amount errors of
/// [`merge_supply`]. A failure while reading or merging aborts the run with
/// the target untouched on disk.
pub fn merge_genesis(target_genesis: &Path, gathered_dir: &Path) -> Result<MergeReport> {
    let mut target = GenesisDocument::load(target_genesis)?;

    let missing = |field: &str| GenesisOpsError::MissingField {
        path: target_genesis.to_path_buf(),
        field: field.to_string(),
    };

    // The target must already carry the sections being merged into; a
    // fragment may omit sections, the published genesis may not.
    let AppState { auth, bank, .. } = target
        .app_state
        .as_mut()
        .ok_or_else(|| missing("app_state"))?;
    let Auth { accounts, .. } = auth.as_mut().ok_or_else(|| missing("app_state.auth"))?;
    let accounts = accounts
        .as_mut()
        .ok_or_else(|| missing("app_state.auth.accounts"))?;
    let Bank {
        balances, supply, ..
    } = bank.as_mut().ok_or_else(|| missing("app_state.bank"))?;
    let balances = balances
        .as_mut()
        .ok_or_else(|| missing("app_state.bank.balances"))?;
    let mut supply_pool: Vec<Coin> = supply
        .as_ref()
        .ok_or_else(|| missing("app_state.bank.supply"))?
        .clone();

    let mut report = MergeReport::default();

    for path in gathered_files(gathered_dir)? {
        let fragment = GenesisDocument::load(&path)?;
        let part = Contribution::from(fragment);

        debug!(
            file = %path.display(),
            accounts = part.accounts.len(),
            balances = part.balances.len(),
            supply_entries = part.supply.len(),
            "folding gathered genesis file"
        );

        report.gathered_files += 1;
        report.accounts_appended += part.accounts.len();
        report.balances_appended += part.balances.len();

        accounts.extend(part.accounts);
        balances.extend(part.balances);
        supply_pool.extend(part.supply);
    }

    let merged = merge_supply(&supply_pool)?;
    report.denoms = merged.len();
    *supply = Some(merged);

    target.save(target_genesis)?;

    info!(
        file = %target_genesis.display(),
        files = report.gathered_files,
        accounts = report.accounts_appended,
        balances = report.balances_appended,
        denoms = report.denoms,
        "merged gathered genesis files into target"
    );

    Ok(report)
}

/// The `*.json` regular files directly inside `dir`, sorted by file name.
fn gathered_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| GenesisOpsError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| GenesisOpsError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// What one gathered fragment adds to the target. Absent sections
/// contribute nothing.
struct Contribution {
    accounts: Vec<Value>,
    balances: Vec<Value>,
    supply: Vec<Coin>,
}

impl From<GenesisDocument> for Contribution {
    fn from(document: GenesisDocument) -> Self {
        let app_state = document.app_state.unwrap_or_default();
        let accounts = app_state
            .auth
            .and_then(|auth| auth.accounts)
            .unwrap_or_default();
        let (balances, supply) = match app_state.bank {
            Some(bank) => (
                bank.balances.unwrap_or_default(),
                bank.supply.unwrap_or_default(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Self {
            accounts,
            balances,
            supply,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
