//! Integration test suite for gitignore-workflow
//!
//! End-to-end tests that run the binary against a local `file://` template
//! repository, so no test needs the network.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **update**: cloning, pulling and catalog storage
//! - **input**: launcher JSON items
//! - **build**: artifact output, caching and errors
//! - **clean**: cache removal

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod build;
mod clean;
mod input;
mod update;
