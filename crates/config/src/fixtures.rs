//! Fixture tables a network configuration is assembled from.
//!
//! Each network has three JSON fixtures:
//! - `<network>.json`: compound-config network file, whose `Contracts` section is the v2 roots
//! - `<network>-abi.json`: v2 ABI table, keyed like the v2 roots
//! - `<network>-usdc-roots.json`: Comet USDC deployment roots (v3)
//!
//! The migrator ABI is shared by all networks and comes from the [`binding`] crate.

use crate::{ConfigError, Network};
use alloy_primitives::Address;
use serde::{de::DeserializeOwned, Deserialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key → deployed contract address, exactly as written in the fixture.
///
/// Values are kept raw; use [`root_address`] to read one as an [`Address`].
pub type RootTable = serde_json::Map<String, serde_json::Value>;

/// Opaque ABI descriptor of a contract.
pub type ContractInterface = serde_json::Value;

/// Key → ABI descriptor, in fixture order.
pub type AbiTable = serde_json::Map<String, ContractInterface>;

/// Fixture tables of a single network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkFixtures {
    /// Compound v2 roots
    pub roots_v2: RootTable,
    /// Comet (v3) roots
    pub roots_v3: RootTable,
    /// Compound v2 ABIs
    pub v2_abi: AbiTable,
    /// CometMigrator ABI
    pub migrator_abi: ContractInterface,
}

/// Raw JSON contents of a network's fixture files.
#[derive(Debug, Clone, Copy)]
pub struct FixtureJson<'a> {
    pub network_file: &'a str,
    pub v2_abi: &'a str,
    pub v3_roots: &'a str,
}

#[derive(Deserialize)]
struct CompoundNetworkFile {
    #[serde(rename = "Contracts")]
    contracts: RootTable,
}

/// Address stored under `key`, if present and well formed.
pub fn root_address(roots: &RootTable, key: &str) -> Option<Address> {
    roots.get(key)?.as_str()?.trim().parse().ok()
}

impl NetworkFixtures {
    /// Parse a network's fixture files.
    pub fn from_json(network: Network, json: FixtureJson<'_>) -> Result<Self, ConfigError> {
        let file: CompoundNetworkFile = parse(network_file_name(network), json.network_file)?;
        let migrator_abi = binding::COMET_MIGRATOR_ABI;
        let fixtures = Self {
            roots_v2: file.contracts,
            roots_v3: parse(v3_roots_file_name(network), json.v3_roots)?,
            v2_abi: parse(abi_file_name(network), json.v2_abi)?,
            migrator_abi: parse("CometMigrator.json".to_string(), migrator_abi)?,
        };

        debug!(
            %network,
            roots_v2 = fixtures.roots_v2.len(),
            roots_v3 = fixtures.roots_v3.len(),
            v2_abi = fixtures.v2_abi.len(),
            "Loaded fixtures"
        );

        Ok(fixtures)
    }
}

fn parse<T: DeserializeOwned>(name: String, contents: &str) -> Result<T, ConfigError> {
    serde_json::from_str(contents).map_err(|source| ConfigError::Fixture { name, source })
}

fn network_file_name(network: Network) -> String {
    format!("{network}.json")
}

fn abi_file_name(network: Network) -> String {
    format!("{network}-abi.json")
}

fn v3_roots_file_name(network: Network) -> String {
    format!("{network}-usdc-roots.json")
}

/// Source of per-network fixture tables.
pub trait FixtureSource {
    /// Load the fixtures of `network`.
    fn load(&self, network: Network) -> Result<NetworkFixtures, ConfigError>;
}

/// Fixture snapshots compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledFixtures;

impl FixtureSource for BundledFixtures {
    fn load(&self, network: Network) -> Result<NetworkFixtures, ConfigError> {
        let json = match network {
            Network::Mainnet => FixtureJson {
                network_file: include_str!("../fixtures/mainnet.json"),
                v2_abi: include_str!("../fixtures/mainnet-abi.json"),
                v3_roots: include_str!("../fixtures/mainnet-usdc-roots.json"),
            },
            Network::Goerli => FixtureJson {
                network_file: include_str!("../fixtures/goerli.json"),
                v2_abi: include_str!("../fixtures/goerli-abi.json"),
                v3_roots: include_str!("../fixtures/goerli-usdc-roots.json"),
            },
        };

        NetworkFixtures::from_json(network, json)
    }
}

/// Fixtures read from a directory at load time.
#[derive(Debug, Clone)]
pub struct FixtureDir {
    root: PathBuf,
}

impl FixtureDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, name: String) -> Result<String, ConfigError> {
        let path = self.root.join(name);
        std::fs::read_to_string(&path).map_err(|source| ConfigError::Io { path, source })
    }
}

impl FixtureSource for FixtureDir {
    fn load(&self, network: Network) -> Result<NetworkFixtures, ConfigError> {
        let network_file = self.read(network_file_name(network))?;
        let v2_abi = self.read(abi_file_name(network))?;
        let v3_roots = self.read(v3_roots_file_name(network))?;

        NetworkFixtures::from_json(
            network,
            FixtureJson {
                network_file: &network_file,
                v2_abi: &v2_abi,
                v3_roots: &v3_roots,
            },
        )
    }
}
