//! # Genesis Tools Test Suite
//!
//! Unified test crate exercising both bootstrap tools end-to-end against
//! on-disk fixtures.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── peers.rs    # peer extraction: ordering, error exits
//!     └── merge.rs    # merging: ordering, supply sums, pass-through
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p genesis-tests
//!
//! # By tool
//! cargo test -p genesis-tests integration::peers
//! cargo test -p genesis-tests integration::merge
//! ```

pub mod integration;
