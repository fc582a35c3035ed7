// Copyright 2026, Soltools Contributors
// Licensed under MIT OR Apache-2.0

//! Project configuration for a Solidity contract-development toolchain.
//!
//! The toolchain itself (compiler, deployment runner, TypeChain binding
//! generator) is external; this crate only assembles the immutable
//! [`ToolchainConfig`] record it consumes. Static literals (compiler
//! version, binding generator settings, network names) are combined with
//! environment-variable lookups at the moment of construction. Missing
//! variables never fail resolution; presence is checked by whichever
//! operation later needs the value.

pub mod config;
pub mod constants;
pub mod env;
pub(crate) mod error;

pub use config::{
    load, resolve, resolve_from, EndpointConfig, ToolchainConfig, TypechainConfig, TypechainTarget,
};
pub use env::{EnvSource, ProcessEnv};
pub use error::{Error, Result};
