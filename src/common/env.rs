//! Trait for accessing environment variables in a testable way
//!
//! Configuration defaults (snapshot path, list limits) are read through this
//! trait so tests can inject values without touching process-global state.

#[cfg(test)]
use std::collections::HashMap;

use crate::common::Limit;

pub const FILE_VAR: &str = "COMMENT_RANK_FILE";
pub const TOP_LEVEL_LIMIT_VAR: &str = "COMMENT_RANK_TOP_LEVEL_LIMIT";
pub const REPLIES_LIMIT_VAR: &str = "COMMENT_RANK_REPLIES_LIMIT";

pub const DEFAULT_FILE: &str = "comments.json";

pub trait EnvProvider {
    /// Get the value of an environment variable
    fn get_var(&self, key: &str) -> Option<String>;

    /// Read a limit, treating unset or invalid values as unlimited
    fn get_limit(&self, key: &str) -> Limit {
        Limit::from_param(self.get_var(key).as_deref())
    }
}

/// Production implementation that uses the system environment
pub struct SystemEnvProvider;

impl EnvProvider for SystemEnvProvider {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test-only mock implementation for environment variables
#[cfg(test)]
pub struct MockEnvProvider {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvProvider {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn remove_var(&mut self, key: &str) -> &mut Self {
        self.vars.remove(key);
        self
    }

    /// Create a mock with both default limits set
    pub fn with_limits(top_level: impl Into<String>, replies: impl Into<String>) -> Self {
        let mut mock = Self::new();
        mock.set_var(TOP_LEVEL_LIMIT_VAR, top_level);
        mock.set_var(REPLIES_LIMIT_VAR, replies);
        mock
    }
}

#[cfg(test)]
impl EnvProvider for MockEnvProvider {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
