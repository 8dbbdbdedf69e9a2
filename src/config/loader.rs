// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! Each call on [`ConfigLoader`] adds one layer on top of the previous ones
//! and records it, so `check-env sources` can list exactly what fed the
//! resolved [`Config`].
//!
//! ```text
//! layer          added by            sources line
//! defaults       Config::default()   (not listed)
//! DefaultFile    default_file()      1. [default] check-env.toml
//! File           file()              2. [file] team.toml
//! Inline         inline()            3. [inline] <inline>
//! Environment    environment()       4. [env] CHECK_ENV_SOURCE__ENDPOINT
//! Override       set()               5. [override] source.endpoint
//!                    |
//!                    v
//!               build() --> Config (validated)
//! ```
//!
//! Overrides always win. Files, inline TOML and environment variables win
//! over whatever was added before them.

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};

use super::Config;
use crate::error::ConfigError;

/// One recorded configuration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer {
    /// `check-env.toml` from the working directory; only recorded if present.
    DefaultFile(PathBuf),
    /// A file passed with `--config`; must exist.
    File(PathBuf),
    /// TOML given as a string.
    Inline,
    /// One environment variable carrying the prefix.
    Environment(String),
    /// A dotted key set from the command line.
    Override(String),
}

impl Layer {
    const fn tag(&self) -> &'static str {
        match self {
            Self::DefaultFile(_) => "default",
            Self::File(_) => "file",
            Self::Inline => "inline",
            Self::Environment(_) => "env",
            Self::Override(_) => "override",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.tag())?;
        match self {
            Self::DefaultFile(path) | Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline => f.write_str("<inline>"),
            Self::Environment(name) | Self::Override(name) => f.write_str(name),
        }
    }
}

/// Collects configuration layers and resolves them into a [`Config`].
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    layers: Vec<Layer>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            layers: Vec::new(),
        }
    }

    /// Adds the working-directory config file if it exists.
    #[must_use]
    pub fn default_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.is_file() {
            self.builder = self
                .builder
                .add_source(File::from(path).format(FileFormat::Toml));
            self.layers.push(Layer::DefaultFile(path.to_path_buf()));
        }
        self
    }

    /// Adds a TOML file that must exist when [`build`](Self::build) runs.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.layers.push(Layer::File(path.to_path_buf()));
        self
    }

    #[must_use]
    pub fn inline(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self.layers.push(Layer::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables, e.g.
    /// `CHECK_ENV_SOURCE__ENDPOINT`.
    #[must_use]
    pub fn environment(mut self, prefix: &str) -> Self {
        let marker = format!("{prefix}_");
        let mut names: Vec<String> = std::env::vars_os()
            .filter_map(|(name, _)| name.into_string().ok())
            .filter(|name| name.starts_with(&marker))
            .collect();
        names.sort();

        self.builder = self.builder.add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        self.layers
            .extend(names.into_iter().map(Layer::Environment));
        self
    }

    /// Overrides a dotted `section.key`, winning over every other layer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the key is not a valid path.
    pub fn set(
        mut self,
        key: &str,
        value: impl Into<config::Value>,
    ) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value).map_err(|e| {
            let (section, name) = key.split_once('.').unwrap_or(("", key));
            ConfigError::InvalidValue {
                section: section.to_string(),
                key: name.to_string(),
                message: e.to_string(),
            }
        })?;
        self.layers.push(Layer::Override(key.to_string()));
        Ok(self)
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Numbered `[kind] origin` lines for the `sources` command.
    #[must_use]
    pub fn describe_layers(&self) -> Vec<String> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, layer)| format!("{}. {layer}", i + 1))
            .collect()
    }

    /// Resolves all layers into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotFound` for a missing `--config` file.
    /// - `ConfigError::ParseError` for a file that is not valid TOML.
    /// - `ConfigError::Load` if the merged values do not fit [`Config`].
    /// - `ConfigError::InvalidValue` if validation fails.
    pub fn build(self) -> Result<Config, ConfigError> {
        if let Some(missing) = self.layers.iter().find_map(|layer| match layer {
            Layer::File(path) if !path.is_file() => Some(path),
            _ => None,
        }) {
            return Err(ConfigError::NotFound(missing.display().to_string()));
        }

        let merged = self.builder.build().map_err(load_error)?;
        let config: Config = merged.try_deserialize().map_err(load_error)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_error(err: config::ConfigError) -> ConfigError {
    match err {
        config::ConfigError::FileParse { uri, cause } => ConfigError::ParseError {
            path: uri.unwrap_or_else(|| "<inline>".to_string()),
            message: cause.to_string(),
        },
        other => ConfigError::Load(other.to_string()),
    }
}
