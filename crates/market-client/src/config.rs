//! Client configuration.
//!
//! Settings come from a TOML file, with environment variables taking
//! precedence over the file:
//!
//! - `MARKET_NODE_ADDR` node address (host:port)
//! - `MARKET_CONTRACT`  marketplace contract address
//! - `MARKET_ACCOUNT`   account address used as seller/offerer/bidder
//! - `MARKET_MAX_GAS`   gas budget attached to calls
//! - `MARKET_FEE`       flat fee attached to submitted calls

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Settings for one client invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Node address (host:port) accepting call/read frames.
    pub node_addr: String,

    /// Address of the marketplace contract.
    pub contract: String,

    /// Address acting as seller/offerer/bidder in submitted records.
    pub account: String,

    /// Gas budget attached to every call.
    pub max_gas: u64,

    /// Flat fee attached to submitted calls.
    pub fee: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            node_addr: "127.0.0.1:33035".to_string(),
            contract: String::new(),
            account: String::new(),
            max_gas: 4_294_167_295,
            fee: 10_000_000,
        }
    }
}

impl ClientConfig {
    /// Load from a TOML file if it exists, then apply env overrides.
    ///
    /// The contract and account addresses have no usable defaults, so a
    /// configuration that leaves either empty is rejected here, before
    /// any network activity.
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path))?;
            toml::from_str(&raw).with_context(|| format!("parsing config file {}", path))?
        } else {
            ClientConfig::default()
        };

        if let Ok(v) = env::var("MARKET_NODE_ADDR") {
            config.node_addr = v;
        }
        if let Ok(v) = env::var("MARKET_CONTRACT") {
            config.contract = v;
        }
        if let Ok(v) = env::var("MARKET_ACCOUNT") {
            config.account = v;
        }
        config.max_gas = read_env_or("MARKET_MAX_GAS", config.max_gas)?;
        config.fee = read_env_or("MARKET_FEE", config.fee)?;

        if config.contract.is_empty() {
            bail!(
                "no marketplace contract configured (set MARKET_CONTRACT or `contract` in {})",
                path
            );
        }
        if config.account.is_empty() {
            bail!(
                "no account address configured (set MARKET_ACCOUNT or `account` in {})",
                path
            );
        }

        Ok(config)
    }
}

fn read_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .with_context(|| format!("parsing {} from environment", key)),
        Err(_) => Ok(default),
    }
}
