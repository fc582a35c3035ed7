// Copyright 2026, Soltools Contributors
// Licensed under MIT OR Apache-2.0

//! Resolution of the toolchain configuration record.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::{
    constants::{MNEMONIC_VAR, SEPOLIA, SEPOLIA_RPC_URL_VAR, SOLIDITY_VERSION, TYPECHAIN_OUT_DIR},
    env::{EnvSource, ProcessEnv},
    error::{Error, Result},
};

/// Binding flavors the external TypeChain generator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypechainTarget {
    #[serde(rename = "ethers-v5")]
    EthersV5,
    #[serde(rename = "ethers-v6")]
    EthersV6,
    #[serde(rename = "web3-v1")]
    Web3V1,
}

/// Settings for the external type-binding generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypechainConfig {
    pub out_dir: String,
    pub target: TypechainTarget,
}

/// Remote network endpoint and signing credential.
///
/// Both fields mirror their environment variables verbatim: `None` when the
/// variable is unset, `Some("")` when it is set but empty. No trimming, no
/// shape validation; judging the values is the external toolchain's
/// business, at the point each one is actually used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointConfig {
    pub url: Option<String>,
    /// Deployment account mnemonic. Sensitive; only ever sourced from the
    /// environment, never from this crate's literals.
    pub mnemonic: Option<String>,
}

/// The project configuration handed to the external toolchain.
///
/// Built exactly once per invocation by [`resolve`] (or [`load`]) and
/// immutable afterwards; the consumer reads it and discards it at process
/// exit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolchainConfig {
    pub solidity: String,
    pub typechain: TypechainConfig,
    pub networks: HashMap<String, EndpointConfig>,
}

impl ToolchainConfig {
    /// Endpoint settings for `network`.
    ///
    /// Fails only for a network this project never configured; a configured
    /// network with missing fields is returned as-is.
    pub fn network(&self, network: &str) -> Result<&EndpointConfig> {
        self.networks
            .get(network)
            .ok_or_else(|| Error::UnknownNetwork(network.to_string()))
    }

    /// RPC url for `network`, required at the point a connection is opened.
    pub fn rpc_url(&self, network: &str) -> Result<&str> {
        self.network(network)?
            .url
            .as_deref()
            .ok_or_else(|| Error::MissingEndpoint(network.to_string()))
    }

    /// Signing mnemonic for `network`, required at the point a transaction
    /// must be signed.
    pub fn mnemonic(&self, network: &str) -> Result<&str> {
        self.network(network)?
            .mnemonic
            .as_deref()
            .ok_or_else(|| Error::MissingMnemonic(network.to_string()))
    }

    /// Serialize the record for an external consumer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Assemble the configuration from static literals and `env` lookups.
///
/// Never fails: an unset variable leaves the corresponding field `None`,
/// and whether that matters is decided by the external operation that later
/// needs the value.
pub fn resolve_from(env: &impl EnvSource) -> ToolchainConfig {
    let url = env.var(SEPOLIA_RPC_URL_VAR);
    let mnemonic = env.var(MNEMONIC_VAR);
    if url.is_none() {
        debug!("{SEPOLIA_RPC_URL_VAR} is unset; {SEPOLIA} endpoint left unconfigured");
    }
    if mnemonic.is_none() {
        debug!("{MNEMONIC_VAR} is unset; {SEPOLIA} transactions cannot be signed");
    }

    ToolchainConfig {
        solidity: SOLIDITY_VERSION.to_string(),
        typechain: TypechainConfig {
            out_dir: TYPECHAIN_OUT_DIR.to_string(),
            target: TypechainTarget::EthersV6,
        },
        networks: HashMap::from([(SEPOLIA.to_string(), EndpointConfig { url, mnemonic })]),
    }
}

/// [`resolve_from`] over the real process environment.
pub fn resolve() -> ToolchainConfig {
    resolve_from(&ProcessEnv)
}

/// Populate the process environment from a local `.env` file, then resolve.
///
/// The file is read by the unmodified external mechanism (`dotenvy`); a
/// missing file is not an error, the variables are then simply absent and
/// handled uniformly with the unset case.
pub fn load() -> ToolchainConfig {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            debug!("skipping .env: {e}");
        }
    }
    resolve()
}
