//! Configuration module for fixture-media.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Reference matching mode selection
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, FixturesConfig, MediaConfig, DEFAULT_CONFIG_FILE};
pub use modes::ReferenceMode;
pub use validation::validate_config;
