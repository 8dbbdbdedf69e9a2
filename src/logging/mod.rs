// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostics for the command layer.
//!
//! ```text
//! [global] --> LogConfig --> init_logging --> registry + Vec<layer>
//!                                              |            |
//!                                            stderr     LogFile (optional)
//!                                          no timestamps  appended, text | json
//!                                                           |
//!                                                     LogGuard (flush on drop)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO
//!            4=DEBUG  5=TRACE  6=DUMP(+reqwest/hyper)
//! ```
//!
//! Everything goes to stderr; stdout carries only the rendered report so that
//! `show --format json` can be piped.

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::types::GlobalConfig;
use crate::error::{ConfigError, Result};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Verbosity from 0 (silent) to 6 (dump), as written in `[global]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogLevel(u8);

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the level is greater than 6.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        if level <= Self::DUMP.0 {
            Ok(Self(level))
        } else {
            Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_level".to_string(),
                message: format!("log level must be 0-6, got {level}"),
            })
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// `EnvFilter` directives for this level.
    ///
    /// Below DUMP, dependencies stay at `warn` and only this crate gets
    /// louder, so HTTP plumbing does not bury the fetch diagnostics.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "warn,check_env=info",
            4 => "warn,check_env=debug",
            5 => "warn,check_env=trace",
            _ => "trace",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::new(self.to_filter_string())
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Where and how the optional log file is written.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct LogFile {
    #[builder(into)]
    pub path: PathBuf,
    #[builder(default = LogLevel::TRACE)]
    pub level: LogLevel,
    /// JSON lines instead of plain text.
    #[builder(default)]
    pub json: bool,
}

/// Logging setup for one run.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct LogConfig {
    #[builder(default = LogLevel::WARN)]
    pub console: LogLevel,
    pub file: Option<LogFile>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&GlobalConfig> for LogConfig {
    fn from(global: &GlobalConfig) -> Self {
        let file = global.log_file.as_ref().map(|path| {
            LogFile::builder()
                .path(path.clone())
                .level(global.file_log_level)
                .json(global.log_json)
                .build()
        });
        Self::builder()
            .console(global.output_log_level)
            .maybe_file(file)
            .build()
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be opened.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let mut layers = vec![console_layer(config.console)];

    let file_guard = match &config.file {
        Some(file) => {
            let (layer, guard) = file_layer(file)?;
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry().with(layers).init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn console_layer(level: LogLevel) -> BoxedLayer {
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(level >= LogLevel::DEBUG)
        .with_filter(level.filter())
        .boxed()
}

fn file_layer(file: &LogFile) -> Result<(BoxedLayer, WorkerGuard)> {
    let (directory, file_name) = split_log_path(&file.path)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .with_context(|| format!("failed to open log file {}", file.path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = if file.json {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_filter(file.level.filter())
            .boxed()
    } else {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(file.level.filter())
            .boxed()
    };
    Ok((layer, guard))
}

/// Directory and file name of a log path; a bare name lives in `.`.
fn split_log_path(path: &Path) -> Result<(&Path, &str)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("log file path {} has no usable file name", path.display()))?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((directory, file_name))
}
