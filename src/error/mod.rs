// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!       CheckEnvError (16 bytes)
//!              |
//!        +-----+-----+
//!        |           |
//!        v           v
//!       Net         Cfg
//!       Box         Box
//!
//! Sub-errors (unboxed internally):
//!   Network HttpError, Parse, Reqwest, InvalidUrl
//!   Config  ParseError, InvalidValue, NotFound, Load
//!
//! All variants boxed => CheckEnvError stays two words wide.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`CheckEnvError`].
pub type CheckEnvResult<T> = std::result::Result<T, CheckEnvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum CheckEnvError {
    /// Fetching the report failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for CheckEnvError {
                fn from(err: $error) -> Self {
                    CheckEnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
}

// --- Network Errors ---

/// Errors raised while fetching the environment report.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Server answered with a non-success status.
    #[error("http error {status} {reason}: {url}")]
    HttpError {
        status: u16,
        reason: String,
        url: String,
    },

    /// Body is not valid JSON or does not match the report shape.
    #[error("failed to parse report from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl NetworkError {
    /// HTTP status code, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            Self::Reqwest(e) => e.status().map(|status| status.as_u16()),
            Self::Parse { .. } | Self::InvalidUrl(_) => None,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file is not valid TOML.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A file passed with `--config` does not exist.
    #[error("config file not found: {0}")]
    NotFound(String),

    /// The merged layers do not fit the configuration schema.
    #[error("failed to load configuration: {0}")]
    Load(String),
}
