//! Typed view of a genesis document.
//!
//! A genesis document is a large JSON object of which these tools touch a
//! handful of fields. The touched fields get schema structs below; every
//! other field is captured by a flattened map and rewritten verbatim, so a
//! merged document differs from its input only where the merge actually
//! changed it.
//!
//! All modeled fields are optional. Which absences are tolerated and which
//! become [`GenesisOpsError::MissingField`] is decided per operation: the
//! merge target and the extractor's input must carry the sections they are
//! asked to work on, while gathered documents simply contribute nothing for
//! an absent section.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GenesisOpsError, Result};

/// One `{denom, amount}` supply entry.
///
/// Amounts stay decimal strings at this level; arithmetic happens in
/// [`crate::supply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Token denomination identifier.
    pub denom: String,
    /// Decimal-encoded non-negative integer.
    pub amount: String,
}

impl Coin {
    /// Build a coin from anything stringly.
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// Body of a genesis transaction. Only the memo is modeled; it carries the
/// validator's peer address by convention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A genesis-embedded transaction, typically a validator self-registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenTx {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<TxBody>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The `genutil` module state: the genesis transaction list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Genutil {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gen_txs: Option<Vec<GenTx>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The `auth` module state: the account list. Account entries are opaque
/// and pass through the merge verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Auth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Value>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The `bank` module state: per-account balances (opaque) and the
/// per-denomination total supply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bank {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<Vec<Coin>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The `app_state` object holding per-module genesis state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genutil: Option<Genutil>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A whole genesis document: the modeled `app_state` plus everything else
/// (chain id, consensus params, ...) passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenesisDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_state: Option<AppState>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl GenesisDocument {
    /// Load a genesis document from disk.
    ///
    /// # Errors
    ///
    /// [`GenesisOpsError::FileNotFound`] if `path` is not an existing
    /// regular file, [`GenesisOpsError::Io`] if it cannot be read, and
    /// [`GenesisOpsError::InvalidFormat`] if it is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(GenesisOpsError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| GenesisOpsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| GenesisOpsError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the document to `path` as pretty-printed JSON (2-space
    /// indentation), overwriting whatever is there.
    ///
    /// # Errors
    ///
    /// [`GenesisOpsError::Encode`] if serialization fails and
    /// [`GenesisOpsError::Io`] if the write does.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| GenesisOpsError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, json).map_err(|source| GenesisOpsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
