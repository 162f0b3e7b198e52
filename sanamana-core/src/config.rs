//! Application settings.
//!
//! Provides two loading methods:
//! - `default_config()` - The settings embedded in the binary
//! - `AppConfig::from_toml_str()` - Parses an override document

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default settings embedded at compile time from `config/defaults.toml`.
const DEFAULT_CONFIG: &str = include_str!("../config/defaults.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub limits: Limits,
    pub logging: LoggingConfig,
}

/// Local storage keys for the two persisted records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub session_key: String,
    pub profile_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub min_password_len: usize,
    /// Cosmetic pause before the mock sign-in completes.
    pub mock_delay_ms: u64,
}

/// Inclusive `[min, max]` bounds for every questionnaire field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub age: [u32; 2],
    pub height: [f64; 2],
    pub weight: [f64; 2],
    pub waist: [f64; 2],
    pub goal_weight: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"sanamana_core=debug"`.
    pub filter: String,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        default_config()
    }
}

/// Get the settings embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_config() -> AppConfig {
    toml::from_str(DEFAULT_CONFIG).expect("embedded defaults.toml must be valid TOML")
}
