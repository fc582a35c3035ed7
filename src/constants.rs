// Copyright 2026, Soltools Contributors
// Licensed under MIT OR Apache-2.0

//! Authoring-time literals baked into the project configuration.

/// Solidity compiler version the toolchain builds with. Whether the
/// external compiler supports it is checked by the compiler, not here.
pub const SOLIDITY_VERSION: &str = "0.8.28";

/// Directory the TypeChain generator writes bindings to, relative to the
/// project root. Created by the generator if absent.
pub const TYPECHAIN_OUT_DIR: &str = "typechain";

/// Name of the single remote network this project is configured for.
pub const SEPOLIA: &str = "sepolia";

/// Environment variable holding the sepolia RPC endpoint url.
pub const SEPOLIA_RPC_URL_VAR: &str = "SEPOLIA_RPC_URL";

/// Environment variable holding the deployment account mnemonic.
pub const MNEMONIC_VAR: &str = "MNEMONIC";
