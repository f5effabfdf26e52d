use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// String is not one of the supported network identifiers
    #[error("not a network: {0}")]
    UnrecognizedNetwork(String),

    /// Fixture contents could not be parsed
    #[error("malformed fixture {name}: {source}")]
    Fixture {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Fixture file could not be read
    #[error("failed to read fixture {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
