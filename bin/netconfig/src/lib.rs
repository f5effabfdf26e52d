pub mod config;

use config::Config;
use eyre::eyre;
use network_config::{get_network, network_config, AnyNetworkConfig, Network};
use tracing::{info, warn};

/// Pick the network named on the command line, falling back to the config file.
pub fn select_network(requested: Option<&str>, config: &Config) -> eyre::Result<Network> {
    match requested {
        Some(name) => Ok(get_network(name)?),
        None => config
            .network
            .ok_or_else(|| eyre!("no network given and none set in config")),
    }
}

/// Resolve the configuration of `network` using the fixtures and migrators in `config`.
pub fn resolve(network: Network, config: &Config) -> eyre::Result<AnyNetworkConfig> {
    let source = config.fixture_source();
    let resolved = network_config(network, source.as_ref(), &config.migrators)?;

    if resolved.migrator_address().is_none() {
        warn!(%network, "Migrator address not configured");
    }
    info!(
        %network,
        c_tokens = resolved.c_token_addresses().len(),
        "Resolved network config"
    );

    Ok(resolved)
}

/// One `symbol address` line per joined cToken.
pub fn token_lines(config: &AnyNetworkConfig) -> Vec<String> {
    config
        .c_token_addresses()
        .into_iter()
        .map(|(symbol, address)| format!("{symbol:<6} {address}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use network_config::MigratorAddresses;

    #[test]
    fn test_select_network() {
        let config = Config {
            network: Some(Network::Goerli),
            ..Default::default()
        };

        assert_eq!(
            select_network(Some("mainnet"), &config).unwrap(),
            Network::Mainnet
        );
        assert_eq!(select_network(None, &config).unwrap(), Network::Goerli);
        assert!(select_network(Some("kovan"), &config).is_err());
        assert!(select_network(None, &Config::default()).is_err());
    }

    #[test]
    fn test_resolve_bundled() {
        let config = Config {
            migrators: MigratorAddresses::default(),
            ..Default::default()
        };

        let resolved = resolve(Network::Goerli, &config).unwrap();
        assert_eq!(resolved.network(), Network::Goerli);
        assert_eq!(resolved.migrator_address(), None);

        let lines = token_lines(&resolved);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("cCOMP "));
    }
}
