use crate::config::networks::{self, NetworkParameters};
use crate::error::{KeycoreError, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::env;
use std::path::Path;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

static DEFAULT_NETWORK: &str = "mainnet";

const NETWORK_KEY: &str = "KEYCORE_NETWORK";
const COMPRESSED_KEYS_KEY: &str = "KEYCORE_COMPRESSED_KEYS";

/// Defaults handed to collaborators that do not pick a network themselves.
///
/// Nothing in this crate reads the config implicitly: network-dependent
/// operations always take a `NetworkParameters` argument.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_network: String,
    pub compressed_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_network: String::from(DEFAULT_NETWORK),
            compressed_keys: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        let mut config = Config::default();
        if let Ok(name) = env::var(NETWORK_KEY) {
            config.default_network = name;
        }
        if let Ok(flag) = env::var(COMPRESSED_KEYS_KEY) {
            match flag.to_lowercase().as_str() {
                "true" | "1" | "yes" => config.compressed_keys = true,
                "false" | "0" | "no" => config.compressed_keys = false,
                _ => log::warn!("Ignoring {COMPRESSED_KEYS_KEY}={flag}: expected true or false"),
            }
        }
        config
    }

    pub fn from_toml_str(contents: &str) -> Result<Config> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Fails unless `default_network` names a registered network
    pub fn validate(&self) -> Result<()> {
        self.network().map(|_| ())
    }

    pub fn network(&self) -> Result<&'static NetworkParameters> {
        networks::lookup(&self.default_network).map_err(|e| {
            log::debug!("configured network {} is not registered", self.default_network);
            e
        })
    }

    pub fn compressed_keys(&self) -> bool {
        self.compressed_keys
    }
}

impl std::str::FromStr for Config {
    type Err = KeycoreError;

    fn from_str(s: &str) -> Result<Self> {
        Config::from_toml_str(s)
    }
}
