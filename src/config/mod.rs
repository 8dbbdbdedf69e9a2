// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for check-env.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. check-env.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. CHECK_ENV_<SECTION>__<KEY> env vars
//! 5. CLI overrides (--set, then --endpoint, --log-level, ...)
//! ```
//!
//! See [`loader`] for how each layer is recorded.
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CHECK_ENV_SOURCE__ENDPOINT=http://host/x.json → source.endpoint
//! CHECK_ENV_GLOBAL__OUTPUT_LOG_LEVEL=4          → global.output_log_level
//! CHECK_ENV_DISPLAY__FORMAT=json                → display.format
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

use loader::ConfigLoader;
use types::{DisplayConfig, GlobalConfig, SourceConfig};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "check-env.toml";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "CHECK_ENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Report source.
    pub source: SourceConfig,
    /// Presentation defaults.
    pub display: DisplayConfig,
}

impl Config {
    /// Start a layered load.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use check_env::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
    ///
    /// let config = Config::builder()
    ///     .default_file(DEFAULT_CONFIG_FILE)
    ///     .file("team.toml")
    ///     .environment(ENV_PREFIX)
    ///     .set("display.format", "json")?
    ///     .build()?;
    /// # Ok::<(), check_env::error::ConfigError>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, is not valid TOML, or does
    /// not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::builder().file(path).build()
    }

    /// Load configuration from a TOML string on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::builder().inline(content).build()
    }

    /// Validate values that deserialization alone cannot check.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `source.endpoint` is not an
    /// absolute `http` or `https` URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            section: "source".to_string(),
            key: "endpoint".to_string(),
            message,
        };

        let url = reqwest::Url::parse(&self.source.endpoint)
            .map_err(|e| invalid(format!("'{}' is not a valid URL: {e}", self.source.endpoint)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.log_json", self.global.log_json.to_string());
        options.insert("source.endpoint", self.source.endpoint.clone());
        options.insert("display.format", self.display.format.to_string());
        options.insert(
            "display.missing_only",
            self.display.missing_only.to_string(),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
