//! Network configuration assembly.
//!
//! A [`NetworkConfig`] bundles everything a frontend needs to talk to one network's
//! deployment: Comptroller and migrator addresses, the migrator ABI, the supported
//! cTokens with their addresses and ABIs, and the raw v2/v3 root tables.

use crate::{
    root_address, AbiTable, CTokenSymbol, ConfigError, ContractInterface, FixtureSource,
    GoerliCToken, MainnetCToken, MigratorAddresses, Network, NetworkFixtures, RootTable,
};
use alloy_primitives::Address;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

/// A supported cToken joined with its deployed address and ABI.
///
/// Serializes as a `[symbol, address, abi]` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct CTokenEntry<T> {
    pub symbol: T,
    pub address: Address,
    pub abi: ContractInterface,
}

impl<T: Serialize> Serialize for CTokenEntry<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.symbol, &self.address, &self.abi).serialize(serializer)
    }
}

/// Configuration of a single network.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig<T> {
    pub network: Network,
    /// Compound v2 Comptroller
    pub comptroller_address: Address,
    /// CometMigrator deployment, if configured
    pub migrator_address: Option<Address>,
    pub migrator_abi: ContractInterface,
    /// Supported cTokens, in declaration order
    pub c_token_names: Vec<T>,
    /// Supported cTokens with both a v2 root and an ABI, in ABI table order
    pub c_token_abi: Vec<CTokenEntry<T>>,
    pub roots_v2: RootTable,
    pub roots_v3: RootTable,
}

impl<T: CTokenSymbol> NetworkConfig<T> {
    /// Joined entry for `symbol`, if it has both a root and an ABI.
    pub fn c_token(&self, symbol: T) -> Option<&CTokenEntry<T>> {
        self.c_token_abi.iter().find(|entry| entry.symbol == symbol)
    }

    /// Comet proxy of the USDC market.
    pub fn comet(&self) -> Option<Address> {
        root_address(&self.roots_v3, "comet")
    }
}

/// Configuration of any supported network.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyNetworkConfig {
    Mainnet(NetworkConfig<MainnetCToken>),
    Goerli(NetworkConfig<GoerliCToken>),
}

impl AnyNetworkConfig {
    pub const fn network(&self) -> Network {
        match self {
            Self::Mainnet(config) => config.network,
            Self::Goerli(config) => config.network,
        }
    }

    pub const fn migrator_address(&self) -> Option<Address> {
        match self {
            Self::Mainnet(config) => config.migrator_address,
            Self::Goerli(config) => config.migrator_address,
        }
    }

    /// `(symbol, address)` of every joined cToken, in ABI table order.
    pub fn c_token_addresses(&self) -> Vec<(&'static str, Address)> {
        match self {
            Self::Mainnet(config) => symbol_addresses(&config.c_token_abi),
            Self::Goerli(config) => symbol_addresses(&config.c_token_abi),
        }
    }
}

fn symbol_addresses<T: CTokenSymbol>(entries: &[CTokenEntry<T>]) -> Vec<(&'static str, Address)> {
    entries
        .iter()
        .map(|entry| (entry.symbol.symbol(), entry.address))
        .collect()
}

/// Join the v2 ABI table with the v2 roots, keeping supported symbols only.
///
/// Entries without a matching symbol or a v2 root that reads as an address are skipped,
/// so fixture drift never fails the join.
fn join_c_token_abi<T: CTokenSymbol>(
    v2_abi: &AbiTable,
    roots_v2: &RootTable,
) -> Vec<CTokenEntry<T>> {
    let network = T::NETWORK;
    let mut entries = Vec::new();

    for (key, abi) in v2_abi {
        let Some(symbol) = T::from_symbol(key) else {
            trace!(%network, key = key.as_str(), "Skipping ABI entry: not a supported cToken");
            continue;
        };
        let Some(address) = root_address(roots_v2, key) else {
            trace!(%network, key = key.as_str(), "Skipping ABI entry: no usable v2 root");
            continue;
        };

        entries.push(CTokenEntry {
            symbol,
            address,
            abi: abi.clone(),
        });
    }

    entries
}

fn resolve<T, S>(
    source: &S,
    migrators: &MigratorAddresses,
) -> Result<NetworkConfig<T>, ConfigError>
where
    T: CTokenSymbol,
    S: FixtureSource + ?Sized,
{
    let network = T::NETWORK;
    let NetworkFixtures {
        roots_v2,
        roots_v3,
        v2_abi,
        migrator_abi,
    } = source.load(network)?;

    let c_token_abi = join_c_token_abi::<T>(&v2_abi, &roots_v2);
    let migrator_address = migrators.for_network(network);

    debug!(
        %network,
        c_tokens = c_token_abi.len(),
        migrator = ?migrator_address,
        "Assembled network config"
    );

    Ok(NetworkConfig {
        network,
        comptroller_address: network.comptroller_address(),
        migrator_address,
        migrator_abi,
        c_token_names: T::ALL.to_vec(),
        c_token_abi,
        roots_v2,
        roots_v3,
    })
}

/// Assemble the mainnet configuration.
pub fn mainnet_config<S>(
    source: &S,
    migrators: &MigratorAddresses,
) -> Result<NetworkConfig<MainnetCToken>, ConfigError>
where
    S: FixtureSource + ?Sized,
{
    resolve(source, migrators)
}

/// Assemble the goerli configuration.
pub fn goerli_config<S>(
    source: &S,
    migrators: &MigratorAddresses,
) -> Result<NetworkConfig<GoerliCToken>, ConfigError>
where
    S: FixtureSource + ?Sized,
{
    resolve(source, migrators)
}

/// Assemble the configuration of `network`.
pub fn network_config<S>(
    network: Network,
    source: &S,
    migrators: &MigratorAddresses,
) -> Result<AnyNetworkConfig, ConfigError>
where
    S: FixtureSource + ?Sized,
{
    let config = match network {
        Network::Mainnet => AnyNetworkConfig::Mainnet(mainnet_config(source, migrators)?),
        Network::Goerli => AnyNetworkConfig::Goerli(goerli_config(source, migrators)?),
    };

    Ok(config)
}
