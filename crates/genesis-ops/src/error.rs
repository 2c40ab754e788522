//! Error taxonomy for the bootstrap transformations.
//!
//! Two failure families reach the user: a referenced file that does not
//! exist, and a document that cannot be used as a genesis document (bad
//! JSON, a missing expected field, a malformed amount). Every error aborts
//! the whole run; there is no recovery or partial application.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, transforming, or writing genesis
/// documents.
#[derive(Debug, Error)]
pub enum GenesisOpsError {
    /// The referenced genesis file does not exist (or is not a regular
    /// file).
    #[error("genesis file '{path}' does not exist")]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Reading a file or directory, or writing the target, failed.
    #[error("failed to access '{path}': {source}")]
    Io {
        /// Path of the file or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file's content is not parseable as a genesis document.
    #[error("'{path}' is not valid JSON: {source}")]
    InvalidFormat {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A document parses as JSON but lacks a field the operation needs.
    #[error("'{path}' is missing expected field '{field}'")]
    MissingField {
        /// Path of the document.
        path: PathBuf,
        /// Dotted path of the absent field.
        field: String,
    },

    /// A supply amount is not a decimal-encoded non-negative integer.
    #[error("supply amount '{amount}' for denom '{denom}' is not a decimal integer")]
    InvalidAmount {
        /// Denomination the entry belongs to.
        denom: String,
        /// The rejected amount string.
        amount: String,
    },

    /// Summing supply amounts for one denomination exceeded 256 bits.
    #[error("supply overflow while summing denom '{denom}'")]
    AmountOverflow {
        /// Denomination whose sum overflowed.
        denom: String,
    },

    /// Re-encoding the updated target document failed.
    #[error("failed to encode '{path}' as JSON: {source}")]
    Encode {
        /// Path the document was being written to.
        path: PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GenesisOpsError>;
