//! Common test setup utilities shared across integration tests.
#![allow(dead_code)]

use netconfig::config::Config;

pub const TEST_CONFIG: &str = "tests/test-config.toml";

/// Load test configuration. Panics if not found or invalid.
pub fn load_test_config() -> Config {
    Config::from_file(TEST_CONFIG).expect("Failed to load tests/test-config.toml.")
}
