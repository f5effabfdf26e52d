//! Migrator contract addresses.
//!
//! Migrator deployments are not hard-coded; their addresses are supplied by the
//! environment (or a config file) at startup. Values are stored as given and only
//! read as an address for the network being resolved. A missing or malformed address
//! becomes `None` and is left for consumers to handle.

use crate::Network;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable holding the mainnet migrator address.
pub const MAINNET_MIGRATOR_ENV: &str = "MAINNET_EXT_ADDRESS";

/// Environment variable holding the goerli migrator address.
pub const GOERLI_MIGRATOR_ENV: &str = "GOERLI_EXT_ADDRESS";

/// Migrator contract address per network, as configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigratorAddresses {
    pub mainnet: Option<String>,
    pub goerli: Option<String>,
}

impl MigratorAddresses {
    /// Read addresses from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read addresses through `lookup`, which maps a variable name to its value.
    ///
    /// Unset and empty variables yield `None`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var| lookup(var).filter(|value: &String| !value.trim().is_empty());

        Self {
            mainnet: read(MAINNET_MIGRATOR_ENV),
            goerli: read(GOERLI_MIGRATOR_ENV),
        }
    }

    /// Configured value for `network`, unparsed.
    pub fn raw(&self, network: Network) -> Option<&str> {
        match network {
            Network::Mainnet => self.mainnet.as_deref(),
            Network::Goerli => self.goerli.as_deref(),
        }
    }

    /// Migrator address for `network`.
    ///
    /// Values that are not an address are logged and treated as absent.
    pub fn for_network(&self, network: Network) -> Option<Address> {
        let value = self.raw(network)?.trim();
        if value.is_empty() {
            return None;
        }

        value
            .parse()
            .map_err(|_| warn!(%network, value, "Ignoring malformed migrator address"))
            .ok()
    }

    /// Set the mainnet migrator address.
    pub fn with_mainnet(mut self, address: Address) -> Self {
        self.mainnet = Some(address.to_string());
        self
    }

    /// Set the goerli migrator address.
    pub fn with_goerli(mut self, address: Address) -> Self {
        self.goerli = Some(address.to_string());
        self
    }

    /// Combine with `overrides`, whose configured values take precedence.
    pub fn overridden_by(self, overrides: Self) -> Self {
        Self {
            mainnet: overrides.mainnet.or(self.mainnet),
            goerli: overrides.goerli.or(self.goerli),
        }
    }
}
