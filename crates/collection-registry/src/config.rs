//! Registry configuration with validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const ENV_TOPIC_PREFIX: &str = "REGISTRY_TOPIC_PREFIX";
pub const ENV_RETRY_LOOKUP_ON_CONFLICT: &str = "REGISTRY_RETRY_LOOKUP_ON_CONFLICT";
pub const ENV_MAX_NAME_LENGTH: &str = "REGISTRY_MAX_NAME_LENGTH";

/// Collection Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Prefix for topics assigned by the in-memory backend
    pub topic_prefix: String,
    /// When a get-or-create loses the creation race, look the name up again
    /// and return the winner instead of surfacing the conflict
    pub retry_lookup_on_conflict: bool,
    /// Longest collection name the in-memory backend accepts
    pub max_name_length: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            topic_prefix: "persistent://default/default/".to_string(),
            retry_lookup_on_conflict: false,
            max_name_length: 512,
        }
    }
}

impl RegistryConfig {
    /// Configuration for tests
    pub fn for_testing() -> Self {
        Self {
            topic_prefix: "test/".to_string(),
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topic_prefix.is_empty() {
            return Err(ConfigError::EmptyTopicPrefix);
        }
        if self.max_name_length == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_name_length cannot be 0".into(),
            ));
        }
        Ok(())
    }

    /// Defaults overridden by `REGISTRY_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(prefix) = lookup(ENV_TOPIC_PREFIX) {
            config.topic_prefix = prefix;
        }
        if let Some(val) = lookup(ENV_RETRY_LOOKUP_ON_CONFLICT) {
            config.retry_lookup_on_conflict = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Some(val) = lookup(ENV_MAX_NAME_LENGTH) {
            match val.parse() {
                Ok(len) => config.max_name_length = len,
                Err(_) => warn!(
                    value = %val,
                    "{} is not a number, keeping default",
                    ENV_MAX_NAME_LENGTH
                ),
            }
        }

        config
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("topic_prefix cannot be empty")]
    EmptyTopicPrefix,

    #[error("invalid limit: {0}")]
    InvalidLimit(String),
}
