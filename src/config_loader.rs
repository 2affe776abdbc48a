use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::constants::{ENV_KEY, ENV_PASSPHRASE, ENV_SECRET};
use crate::domain::enums::Network;
use crate::infrastructure::exchange::lnmarkets::LnmCredentials;
use crate::strategies::smoke_test::SmokeSettings;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config '{path}': {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse TOML config '{path}': {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Missing API credential '{field}': set it in the config file or via {env_var}")]
    MissingCredential {
        field: &'static str,
        env_var: &'static str,
    },

    #[error("Invalid network '{0}', expected mainnet or testnet")]
    InvalidNetwork(String),
}

/// Contents of the credentials document (`configuration.yml`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub secret: Option<String>,

    #[serde(default)]
    pub passphrase: Option<String>,

    #[serde(default)]
    pub network: Option<String>,

    #[serde(default)]
    pub smoke: SmokeSettings,
}

impl AppConfig {
    /// Load configuration from a YAML file, or TOML when the extension says so
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if content.trim().is_empty() {
            AppConfig::default()
        } else if is_toml {
            toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        };

        info!("Loaded configuration from {}", path.display());
        debug!("Smoke settings: {:?}", config.smoke);

        Ok(config)
    }

    /// Credentials from the file, falling back to the process environment
    pub fn credentials(&self) -> Result<LnmCredentials, ConfigError> {
        self.credentials_with(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::credentials`] with a custom environment lookup
    pub fn credentials_with<F>(&self, env: F) -> Result<LnmCredentials, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |value: &Option<String>, field: &'static str, env_var: &'static str| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .or_else(|| env(env_var).filter(|v| !v.trim().is_empty()))
                .ok_or(ConfigError::MissingCredential { field, env_var })
        };

        Ok(LnmCredentials {
            key: pick(&self.key, "key", ENV_KEY)?,
            secret: pick(&self.secret, "secret", ENV_SECRET)?,
            passphrase: pick(&self.passphrase, "passphrase", ENV_PASSPHRASE)?,
        })
    }

    pub fn network(&self) -> Result<Network, ConfigError> {
        match self.network.as_deref() {
            None => Ok(Network::Mainnet),
            Some(name) => {
                Network::from_str(name).map_err(|_| ConfigError::InvalidNetwork(name.to_string()))
            }
        }
    }
}
