// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command arguments.

use clap::{ArgAction, Args};

use crate::config::types::OutputFormat;
use crate::report::Filter;

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Only show these tabs (e.g. ai, backend). Can be repeated.
    #[arg(short = 't', long = "tab", value_name = "ID", action = ArgAction::Append)]
    pub tabs: Vec<String>,

    /// Only show these services (e.g. auth-svc). Can be repeated.
    #[arg(short = 'S', long = "service", value_name = "ID", action = ArgAction::Append)]
    pub services: Vec<String>,

    /// Only show variables that are missing or empty in some environment.
    #[arg(short = 'm', long = "missing", conflicts_with = "all")]
    pub missing: bool,

    /// Show every variable, even when `display.missing_only` is set.
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Output format, defaults to `display.format`.
    #[arg(short = 'f', long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ShowArgs {
    /// Build the display filter; `missing_default` comes from `display.missing_only`.
    #[must_use]
    pub fn filter(&self, missing_default: bool) -> Filter {
        Filter {
            tabs: self.tabs.clone(),
            services: self.services.clone(),
            missing_only: !self.all && (self.missing || missing_default),
        }
    }
}
