// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use check_env::cli::show::ShowArgs;
use check_env::cli::{Cli, Command};
use check_env::config::types::OutputFormat;
use clap::Parser;

fn show_args(args: &[&str]) -> ShowArgs {
    let cli = Cli::try_parse_from(std::iter::once("check-env").chain(args.iter().copied()))
        .unwrap();
    match cli.command {
        Some(Command::Show(args)) => args,
        other => panic!("expected show command, got {other:?}"),
    }
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["check-env", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["check-env", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_options_and_sources() {
    let cli = Cli::try_parse_from(["check-env", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
    let cli = Cli::try_parse_from(["check-env", "sources"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Sources)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["check-env"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["check-env", "deploy"]).is_err());
}

// =============================================================================
// Show
// =============================================================================

#[test]
fn cli_show_defaults() {
    let args = show_args(&["show"]);
    assert!(args.tabs.is_empty());
    assert!(args.services.is_empty());
    assert!(!args.missing);
    assert!(args.format.is_none());
}

#[test]
fn cli_show_short_flags() {
    let args = show_args(&["show", "-t", "devops", "-S", "ci-runner", "-m", "-f", "text"]);
    assert_eq!(args.tabs, ["devops"]);
    assert_eq!(args.services, ["ci-runner"]);
    assert!(args.missing);
    assert_eq!(args.format, Some(OutputFormat::Text));
}

#[test]
fn cli_show_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["check-env", "show", "--format", "yaml"]).is_err());
}

// =============================================================================
// Global options
// =============================================================================

#[test]
fn cli_global_logging_flags() {
    let cli = Cli::try_parse_from([
        "check-env",
        "--log-level",
        "1",
        "--file-log-level",
        "6",
        "--log-file",
        "out/check-env.log",
        "--log-json",
        "--no-default-config",
        "options",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(1));
    assert_eq!(cli.global.file_log_level, Some(6));
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("out/check-env.log"))
    );
    assert!(cli.global.log_json);
    assert!(cli.global.no_default_config);

    let overrides = cli.global.to_config_overrides().unwrap();
    assert!(overrides.contains(&("global.file_log_level".to_string(), "6".to_string())));
    assert!(overrides.contains(&("global.log_file".to_string(), "out/check-env.log".to_string())));
}

#[test]
fn cli_global_set_options() {
    let cli = Cli::try_parse_from([
        "check-env",
        "-s",
        "display.format=json",
        "--set",
        "source.endpoint=http://h/x.json",
        "show",
    ])
    .unwrap();

    assert_eq!(
        cli.global.to_config_overrides().unwrap(),
        [
            ("display.format".to_string(), "json".to_string()),
            ("source.endpoint".to_string(), "http://h/x.json".to_string()),
        ]
    );
}
