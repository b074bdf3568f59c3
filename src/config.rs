//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Secrets (the mnemonic seed phrase, the node URL) are referenced by
//! env-var name in the config and resolved at runtime via `std::env::var`.

use alloy::primitives::Address;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use crate::types::Token;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub wallet: WalletConfig,
    pub gas: GasConfig,
    pub farm: FarmConfig,
    pub pool: PoolConfig,
    pub tokens: TokensConfig,
    pub router: RouterConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NetworkConfig {
    /// Env var holding the JSON-RPC endpoint URL.
    pub node_url_env: String,
    pub chain_id: u64,
    /// Block explorer base for transaction links (no trailing slash).
    pub explorer_tx_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WalletConfig {
    /// Env var holding the mnemonic seed phrase.
    pub mnemonic_env: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GasConfig {
    /// Fixed gas price in gwei, applied to every transaction.
    pub price_gwei: u64,
    /// Fixed gas limit, applied to every transaction.
    pub limit: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FarmConfig {
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PoolConfig {
    pub name: String,
    /// The farm's registration index for this pool.
    pub pid: u64,
    pub lp_token: Address,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokensConfig {
    /// The token the farm pays rewards in.
    pub reward: Token,
    /// The other side of the liquidity pair.
    pub paired: Token,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RouterConfig {
    pub name: String,
    pub address: Address,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Resolve an environment variable name to its value.
    /// Useful for loading secrets referenced in the config.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }
}
