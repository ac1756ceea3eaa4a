//! TOML configuration file support for repeated runs.
//!
//! Instead of passing the four binding flags and two parameters on every
//! invocation, users can keep them in a config file:
//!
//! ```toml
//! # pharmasim.toml
//! [binding]
//! id = "ID"
//! time = "DATE_TIME"
//! concentration = "C_INLET"
//! velocity = "VELOCITY"
//!
//! [parameters]
//! distance = 100.0
//! decay_rate = 0.01
//! ```
//!
//! CLI flags always take precedence over config file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use pharmasim::mapping::FieldBinding;

/// Root configuration structure for pharmasim.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Field selections per role.
    #[serde(default)]
    pub binding: FieldBinding,

    /// Run parameters.
    #[serde(default)]
    pub parameters: ParametersConfig,
}

/// The `[parameters]` section.
#[derive(Debug, Default, Deserialize)]
pub struct ParametersConfig {
    /// Travel distance from inlet to outlet, meters.
    pub distance: Option<f64>,

    /// First-order decay rate coefficient k, 1/s.
    pub decay_rate: Option<f64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
