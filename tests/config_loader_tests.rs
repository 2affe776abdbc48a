use std::io::Write;
use std::path::PathBuf;

use lnm_smoke::config_loader::{AppConfig, ConfigError};
use lnm_smoke::{Network, TakeProfitPolicy};
use tempfile::NamedTempFile;

fn write_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_yaml_credentials_and_defaults() {
    let file = write_config(".yml", "key: abc\nsecret: def\npassphrase: ghi\n");
    let config = AppConfig::from_file(file.path()).unwrap();

    let creds = config.credentials_with(|_| None).unwrap();
    assert_eq!(creds.key, "abc");
    assert_eq!(creds.secret, "def");
    assert_eq!(creds.passphrase, "ghi");
    assert_eq!(config.network().unwrap(), Network::Mainnet);
    assert_eq!(config.smoke.policy(), TakeProfitPolicy::Direct);
    assert_eq!(config.smoke.usd_amount, 5.0);
}

#[test]
fn test_yaml_smoke_section() {
    let file = write_config(
        ".yaml",
        "network: testnet\nsmoke:\n  usd_amount: 10\n  direct_take_profit: false\n  log_file: run.log\n",
    );
    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.network().unwrap(), Network::Testnet);
    assert_eq!(config.smoke.usd_amount, 10.0);
    assert_eq!(config.smoke.policy(), TakeProfitPolicy::Deferred);
    assert_eq!(config.smoke.log_file, PathBuf::from("run.log"));
    assert_eq!(config.smoke.leverage, 1);
}

#[test]
fn test_toml_config() {
    let file = write_config(
        ".toml",
        "key = \"abc\"\nsecret = \"def\"\npassphrase = \"ghi\"\n\n[smoke]\nleverage = 2\n",
    );
    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.key.as_deref(), Some("abc"));
    assert_eq!(config.smoke.leverage, 2);
}

#[test]
fn test_empty_file_relies_on_env() {
    let file = write_config(".yml", "");
    let config = AppConfig::from_file(file.path()).unwrap();

    let creds = config
        .credentials_with(|name| Some(format!("from-{}", name)))
        .unwrap();
    assert_eq!(creds.key, "from-LN_KEY");
    assert_eq!(creds.secret, "from-LN_SECRET");
    assert_eq!(creds.passphrase, "from-LN_PASSPHRASE");

    assert!(matches!(
        config.credentials_with(|_| None),
        Err(ConfigError::MissingCredential { field: "key", .. })
    ));
}

#[test]
fn test_missing_file_is_error() {
    let err = AppConfig::from_file("/definitely/not/here/configuration.yml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_yaml_is_error() {
    let file = write_config(".yml", "key: [unclosed\n");
    assert!(matches!(AppConfig::from_file(file.path()), Err(ConfigError::Yaml { .. })));
}
