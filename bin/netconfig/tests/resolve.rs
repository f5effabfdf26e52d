//! Integration tests for resolving network configs from a config file.
//!
//! Uses `tests/test-config.toml`, which points at the fixture directory of the
//! `network-config` crate.

#[path = "setup.rs"]
mod setup;

use alloy_primitives::address;
use netconfig::{config::Config, resolve, select_network, token_lines};
use network_config::{AnyNetworkConfig, GoerliCToken, Network};
use setup::load_test_config;

#[test]
fn test_load_config_file() {
    let config = load_test_config();

    assert_eq!(config.network, Some(Network::Goerli));
    assert!(config.fixtures_dir.is_some());
    assert_eq!(
        config.migrators.for_network(Network::Goerli),
        Some(address!("0x1111111111111111111111111111111111111111"))
    );
    assert_eq!(config.migrators.mainnet, None);
}

#[test]
fn test_missing_config_file() {
    assert!(Config::from_file("tests/does-not-exist.toml").is_err());
}

#[test]
fn test_resolve_default_network_from_dir() {
    let config = load_test_config();
    let network = select_network(None, &config).unwrap();

    let resolved = resolve(network, &config).expect("Failed to resolve goerli config");

    let AnyNetworkConfig::Goerli(goerli) = &resolved else {
        panic!("expected goerli config, got {:?}", resolved.network());
    };
    assert_eq!(
        goerli.migrator_address,
        Some(address!("0x1111111111111111111111111111111111111111"))
    );
    assert!(goerli.c_token(GoerliCToken::CUsdc).is_some());
    assert_eq!(token_lines(&resolved).len(), goerli.c_token_abi.len());
}

#[test]
fn test_resolve_other_network_without_migrator() {
    let config = load_test_config();
    let network = select_network(Some("mainnet"), &config).unwrap();

    let resolved = resolve(network, &config).expect("Failed to resolve mainnet config");

    assert_eq!(resolved.network(), Network::Mainnet);
    assert_eq!(resolved.migrator_address(), None);
}

#[test]
fn test_bad_fixture_dir() {
    let mut config = load_test_config();
    config.fixtures_dir = Some("tests/no-fixtures-here".into());

    let err = resolve(Network::Goerli, &config).unwrap_err();
    assert!(
        err.to_string().contains("goerli.json"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_bad_migrator_value_only_affects_its_network() {
    let config: Config = toml::from_str(
        r#"
        [migrators]
        mainnet = "0x2222222222222222222222222222222222222222"
        goerli = "0xnot-an-address"
        "#,
    )
    .expect("Config with a bad migrator value should still load");

    let mainnet = resolve(Network::Mainnet, &config).expect("Failed to resolve mainnet config");
    assert_eq!(
        mainnet.migrator_address(),
        Some(address!("0x2222222222222222222222222222222222222222"))
    );

    let goerli = resolve(Network::Goerli, &config).expect("Failed to resolve goerli config");
    assert_eq!(goerli.migrator_address(), None);
    assert!(!goerli.c_token_addresses().is_empty());
}
