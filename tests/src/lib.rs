//! # Collection Registry Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── lifecycle.rs           # create → lookup → update → delete → reset over RPC
//!     └── get_or_create_race.rs  # concurrent get-or-create on a new name
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p registry-tests
//! RUST_LOG=collection_registry=debug cargo test -p registry-tests -- --nocapture
//! ```

pub mod integration;
