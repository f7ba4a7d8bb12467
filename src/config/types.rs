//! Configuration types for the Compensation Status Engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::retry::RetryOptions;

/// Top-level engine configuration.
///
/// Deserialized from `engine.yaml`. Both sections are optional; a missing
/// section takes its defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cache layer settings.
    #[serde(default)]
    pub cache: CacheSettings,
    /// Retry budget for record-store calls.
    #[serde(default)]
    pub retry: RetrySettings,
}

/// Settings for the cache layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Whether the cache performs real reads and writes. When false the
    /// cache layer starts permanently degraded.
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Default time-to-live for cached status reports, in seconds.
    #[serde(default = "default_cache_ttl_seconds")]
    pub default_ttl_seconds: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            default_ttl_seconds: default_cache_ttl_seconds(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_ttl_seconds() -> u64 {
    3600
}

/// Settings for the retry executor guarding record-store calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Total number of attempts, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the first retry, in milliseconds.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Factor applied to the delay after each failed attempt.
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: u32,
    /// Upper bound on the delay between attempts, in milliseconds.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    500
}

fn default_backoff_multiplier() -> u32 {
    2
}

fn default_max_delay_ms() -> u64 {
    10_000
}

impl RetrySettings {
    /// Converts the settings into executor options.
    pub fn to_options(&self) -> RetryOptions {
        RetryOptions {
            max_attempts: self.max_attempts,
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            backoff_multiplier: self.backoff_multiplier,
            max_delay: Duration::from_millis(self.max_delay_ms),
        }
    }
}
