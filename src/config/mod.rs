//! Configuration loading and management for the Compensation Status Engine.
//!
//! This module provides functionality to load engine tuning from a YAML
//! file: cache enablement and TTL, and the retry budget for record-store
//! calls. Every field is defaulted, so a missing section falls back to the
//! engine's built-in values.
//!
//! # Example
//!
//! ```no_run
//! use compensation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Cache TTL: {}s", config.cache().default_ttl_seconds);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CacheSettings, EngineConfig, RetrySettings};
