//! CLI to inspect the migrator network configuration.
//!
//! - `show`: print the full configuration of a network as JSON
//! - `tokens`: list the supported cTokens and their addresses
//! - `chain`: map a chain id to its network

use clap::{Parser, Subcommand};
use eyre::eyre;
use netconfig::{config::Config, resolve, select_network, token_lines};
use network_config::{MigratorAddresses, Network, GOERLI_MIGRATOR_ENV, MAINNET_MIGRATOR_ENV};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "netconfig")]
#[command(about = "Inspect Compound migrator network configuration")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with fixture JSON files (overrides the config file)
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Mainnet migrator address (overrides the config file)
    #[arg(long, env = MAINNET_MIGRATOR_ENV)]
    mainnet_migrator: Option<String>,

    /// Goerli migrator address (overrides the config file)
    #[arg(long, env = GOERLI_MIGRATOR_ENV)]
    goerli_migrator: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved configuration as JSON
    Show {
        /// Network identifier (goerli, mainnet)
        network: Option<String>,
    },

    /// List supported cTokens with their addresses
    Tokens {
        /// Network identifier (goerli, mainnet)
        network: Option<String>,
    },

    /// Print the network deployed on a chain id
    Chain {
        /// EVM chain id
        chain_id: u64,
    },
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading config: {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    // Command line flags and environment take precedence over the file
    if let Some(dir) = cli.fixtures {
        config.fixtures_dir = Some(dir);
    }
    let overrides = MigratorAddresses::from_lookup(|var| match var {
        MAINNET_MIGRATOR_ENV => cli.mainnet_migrator.clone(),
        GOERLI_MIGRATOR_ENV => cli.goerli_migrator.clone(),
        _ => None,
    });
    config.migrators = config.migrators.overridden_by(overrides);

    match cli.command {
        Command::Show { network } => {
            let network = select_network(network.as_deref(), &config)?;
            let resolved = resolve(network, &config)?;
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        Command::Tokens { network } => {
            let network = select_network(network.as_deref(), &config)?;
            let resolved = resolve(network, &config)?;
            for line in token_lines(&resolved) {
                println!("{line}");
            }
        }
        Command::Chain { chain_id } => {
            let network = Network::from_chain_id(chain_id)
                .ok_or_else(|| eyre!("no network for chain id {chain_id}"))?;
            println!("{network}");
        }
    }

    Ok(())
}
