//! Configuration module for the erome-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration and album URL validation

pub mod loader;
pub mod validation;

pub use loader::{Config, OptionsConfig};
pub use validation::{validate_album_url, validate_config, validate_user_agent};
