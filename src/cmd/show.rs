// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command implementation.
//!
//! ```text
//! Fetcher::fetch() --> transform() --> filter_tabs() --> render_*() --> stdout
//!     (spinner)
//! ```

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;
use tracing::{debug, info};

use crate::cli::show::ShowArgs;
use crate::config::Config;
use crate::config::types::OutputFormat;
use crate::error::Result;
use crate::net::Fetcher;
use crate::report::render::{render_json, render_text};
use crate::report::{Tab, filter_tabs, transform};

/// Main handler for the show command.
///
/// # Errors
///
/// Returns an error if fetching or decoding the report fails, or if the
/// output cannot be rendered.
pub async fn run_show_command(args: &ShowArgs, config: &Config) -> Result<()> {
    let format = args.format.unwrap_or(config.display.format);
    let spinner = (format == OutputFormat::Text && std::io::stderr().is_terminal())
        .then(|| fetch_spinner(&config.source.endpoint));

    let fetched = load_tabs(config).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let tabs = filter_tabs(fetched?, &args.filter(config.display.missing_only));
    debug!(tabs = tabs.len(), "tabs after filtering");

    print!("{}", render(&tabs, format)?);
    Ok(())
}

/// Fetch the configured endpoint and transform the report.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a
/// non-success status, or the body is not a valid report.
pub async fn load_tabs(config: &Config) -> Result<Vec<Tab>> {
    let fetcher = Fetcher::new().url(&config.source.endpoint);
    info!(endpoint = fetcher.endpoint(), "fetching environment report");

    let raw = fetcher
        .fetch()
        .await
        .with_context(|| format!("failed to load environment report from {}", fetcher.endpoint()))?;
    let tabs = transform(raw);

    info!(
        tabs = tabs.len(),
        services = tabs.iter().map(|t| t.services.len()).sum::<usize>(),
        "environment report loaded"
    );
    Ok(tabs)
}

/// Render tabs in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(tabs: &[Tab], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(tabs)),
        OutputFormat::Json => {
            let mut json = render_json(tabs).context("failed to serialize report")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn fetch_spinner(endpoint: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    pb.set_message(format!("fetching {endpoint}"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
