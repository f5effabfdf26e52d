//! Supported networks.
//!
//! A network selects which deployment's fixtures and hard-coded addresses are used.

use crate::ConfigError;
use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Network with a Compound v2 → v3 migration deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Goerli,
    Mainnet,
}

/// All supported networks, in canonical order.
pub const NETWORKS: [Network; 2] = [Network::Goerli, Network::Mainnet];

impl Network {
    /// Canonical identifier of the network.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Goerli => "goerli",
            Self::Mainnet => "mainnet",
        }
    }

    /// EVM chain id.
    pub const fn chain_id(&self) -> u64 {
        match self {
            Self::Goerli => 5,
            Self::Mainnet => 1,
        }
    }

    /// Look up the network deployed on `chain_id`.
    ///
    /// Unknown chains are not an error, they simply have no network.
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(Self::Mainnet),
            5 => Some(Self::Goerli),
            _ => None,
        }
    }

    pub const fn is_mainnet(&self) -> bool {
        matches!(self, Self::Mainnet)
    }

    pub const fn is_goerli(&self) -> bool {
        matches!(self, Self::Goerli)
    }

    /// Compound v2 Comptroller (Unitroller proxy) address.
    pub const fn comptroller_address(&self) -> Address {
        match self {
            // https://etherscan.io/address/0x3d9819210A31b4961b30EF54bE2aeD79B9c9Cd3B
            Self::Mainnet => address!("0x3d9819210A31b4961b30EF54bE2aeD79B9c9Cd3B"),
            Self::Goerli => address!("0x3cBe63aAcF6A064D32072a630A3eab7545C54d78"),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NETWORKS
            .iter()
            .copied()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| ConfigError::UnrecognizedNetwork(s.to_string()))
    }
}

/// Returns true iff `network` is a supported network identifier.
pub fn is_network(network: &str) -> bool {
    NETWORKS.iter().any(|n| n.as_str() == network)
}

/// Parse a network identifier, failing on anything unsupported.
pub fn get_network(network: &str) -> Result<Network, ConfigError> {
    network.parse()
}

/// Display string of a network.
pub fn show_network(network: Network) -> String {
    network.to_string()
}
