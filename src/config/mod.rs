//! Configuration management
//!
//! This module holds the static per-network parameter table and the small
//! set of defaults (network name, key compression) collaborators may load
//! from the environment or a TOML file.

pub mod networks;
pub mod settings;

pub use networks::{lookup, NetworkParameters, MAINNET, PRIVNET, TESTNET};
pub use settings::{Config, GLOBAL_CONFIG};
