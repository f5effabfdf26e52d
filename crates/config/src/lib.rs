//! Network configuration for the Compound v2 → v3 migrator.
//!
//! This crate provides:
//! - The closed set of supported networks and their identifiers
//! - Per-network cToken symbol lists
//! - Fixture loading (v2/v3 address roots, v2 ABIs, migrator ABI)
//! - Assembly of a [`NetworkConfig`] record for a requested network

pub mod error;
pub mod fixtures;
pub mod migrator;
pub mod network;
pub mod resolver;
pub mod token;

pub use error::ConfigError;
pub use fixtures::{
    root_address, AbiTable, BundledFixtures, ContractInterface, FixtureDir, FixtureJson,
    FixtureSource, NetworkFixtures, RootTable,
};
pub use migrator::{MigratorAddresses, GOERLI_MIGRATOR_ENV, MAINNET_MIGRATOR_ENV};
pub use network::{get_network, is_network, show_network, Network, NETWORKS};
pub use resolver::{
    goerli_config, mainnet_config, network_config, AnyNetworkConfig, CTokenEntry, NetworkConfig,
};
pub use token::{CTokenSymbol, GoerliCToken, MainnetCToken};
