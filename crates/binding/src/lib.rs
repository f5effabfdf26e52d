//! Contract bindings for the Compound v2 → v3 migrator.
//!
//! This crate consolidates the contract interfaces the network configuration hands out:
//! - CometMigrator as a typed `sol!` binding, for consumers that encode calls and to check
//!   the JSON ABI against
//! - CometMigrator as its raw JSON ABI, passed to consumers as an opaque descriptor

pub mod migrator;

pub use migrator::{ICometMigrator, COMET_MIGRATOR_ABI};
