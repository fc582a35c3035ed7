// Copyright 2026, Soltools Contributors
// Licensed under MIT OR Apache-2.0

//! Environment access as an explicit, injected input.
//!
//! [`crate::resolve_from`] takes any [`EnvSource`] rather than reading the
//! process environment directly, so resolution stays pure and tests never
//! mutate real process state.

use std::{collections::HashMap, env};

/// A name -> optional-value lookup over environment variables.
///
/// Absent (`None`) and set-but-empty (`Some("")`) are distinct states;
/// implementations must preserve that distinction.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_distinguishes_unset_from_empty() {
        let env: HashMap<String, String> =
            HashMap::from([("SET_EMPTY".to_string(), String::new())]);
        assert_eq!(env.var("SET_EMPTY"), Some(String::new()));
        assert_eq!(env.var("UNSET"), None);
    }

    #[test]
    fn process_env_reads_live_variables() {
        env::set_var("SOLTOOLS_CONFIG_TEST_VAR", "on");
        assert_eq!(
            ProcessEnv.var("SOLTOOLS_CONFIG_TEST_VAR"),
            Some("on".to_string())
        );
        assert_eq!(ProcessEnv.var("SOLTOOLS_CONFIG_NEVER_SET_VAR"), None);
    }
}
