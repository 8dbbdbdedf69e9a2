// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for check-env using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! check-env [global options] <command>
//! show [--tab ID].. [--service ID].. [--missing | --all] [--format text|json]
//! options
//! sources
//! version
//! ```

pub mod global;
pub mod show;


use crate::cli::global::GlobalOptions;
use crate::cli::show::ShowArgs;
use clap::{Parser, Subcommand};

/// Environment configuration checker.
///
/// Compares configuration keys of every service across the development,
/// staging and production environments.
#[derive(Debug, Parser)]
#[command(
    name = "check-env",
    author,
    version,
    about = "Check environment variables across dev, staging and production",
    long_about = "check-env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Fetches the environment report and lists, for every tab and\n\
                  service, which configuration keys are set in development,\n\
                  staging and production. `-` marks a key that is not\n\
                  configured, `\"\"` one configured with an empty value.",
    after_help = "CONFIG FILES:\n\n\
                  check-env reads `check-env.toml` from the current directory\n\
                  if present. Additional files can be given with --config, later\n\
                  files override earlier ones. CHECK_ENV_<SECTION>__<KEY>\n\
                  environment variables and command-line flags override files.\n\
                  Use --no-default-config to skip `check-env.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their resolved values.
    Options,

    /// Lists the configuration layers that were applied, in order.
    Sources,

    /// Fetches the report and displays variables per environment.
    Show(ShowArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
