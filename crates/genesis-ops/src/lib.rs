//! # Genesis Ops
//!
//! Document model and transformations for blockchain network bootstrap.
//!
//! Both operations are one-shot, synchronous passes over Cosmos-SDK-style
//! genesis documents:
//!
//! - [`extract_peers`] collects the `body.memo` of every genesis
//!   transaction, in document order. Validators conventionally put their
//!   peer address (`node_id@host:port`) in the memo of their
//!   self-registration transaction, so the memo list is the seed peer list
//!   for the network.
//! - [`merge_genesis`] folds a directory of gathered per-validator genesis
//!   files into a target genesis document: accounts and balances are
//!   concatenated, supply is summed per denomination, and the target file
//!   is rewritten in place.
//!
//! Only the fields the operations touch are modeled; everything else in a
//! document passes through to the output untouched.

pub mod document;
pub mod error;
pub mod merge;
pub mod peers;
pub mod supply;

pub use document::{AppState, Auth, Bank, Coin, GenTx, GenesisDocument, Genutil, TxBody};
pub use error::GenesisOpsError;
pub use merge::{merge_genesis, MergeConfig, MergeReport, DEFAULT_GATHERED_DIR, DEFAULT_TARGET_GENESIS};
pub use peers::extract_peers;
pub use supply::merge_supply;
