//! Shared test fixtures for ScrimForge crates.
//!
//! This crate provides roster builders and result checks for testing.
//! It depends only on `scrimforge-core` to avoid circular dependencies.
//!
//! - [`roster`] - Ready-made rosters for balancing scenarios
//! - [`check`] - Invariant checks over balancing results
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! scrimforge-test = { workspace = true }
//! ```

pub mod check;
pub mod roster;

pub use check::{assert_partition, assert_totals_consistent};
pub use roster::{diamond_iron_roster, gold_roster, mixed_roster, tiered};
