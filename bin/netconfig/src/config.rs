use network_config::{BundledFixtures, FixtureDir, FixtureSource, MigratorAddresses, Network};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level netconfig configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Network used when a command does not name one
    pub network: Option<Network>,

    /// Directory holding fixture JSON files (bundled snapshots when unset)
    pub fixtures_dir: Option<PathBuf>,

    /// Migrator contract addresses
    pub migrators: MigratorAddresses,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Fixture source selected by this configuration.
    pub fn fixture_source(&self) -> Box<dyn FixtureSource> {
        match &self.fixtures_dir {
            Some(dir) => Box::new(FixtureDir::new(dir)),
            None => Box::new(BundledFixtures),
        }
    }
}
