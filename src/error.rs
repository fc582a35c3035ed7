// Copyright 2026, Soltools Contributors
// Licensed under MIT OR Apache-2.0

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("network {0:?} is not configured for this project")]
    UnknownNetwork(String),
    #[error("no RPC endpoint configured for network {0:?}")]
    MissingEndpoint(String),
    #[error("no signing mnemonic configured for network {0:?}")]
    MissingMnemonic(String),
}
