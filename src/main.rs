// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Show | Options | Sources | Version
//! ```

use std::process::ExitCode;

use check_env::cli::global::GlobalOptions;
use check_env::cli::{self, Command};
use check_env::cmd::config::{run_options_command, run_sources_command};
use check_env::cmd::show::run_show_command;
use check_env::config::loader::ConfigLoader;
use check_env::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use check_env::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let (config, sources) = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match start_logging(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &sources).await
}

fn start_logging(config: &Config) -> check_env::error::Result<LogGuard> {
    init_logging(&LogConfig::from(&config.global))
}

async fn dispatch_command(cli: &cli::Cli, config: &Config, sources: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Sources) => {
            run_sources_command(sources);
            Ok(())
        }
        Some(Command::Show(args)) => run_show_command(args, config).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Resolve configuration and keep the layer list for `sources`.
fn load_config(global: &GlobalOptions) -> check_env::error::Result<(Config, Vec<String>)> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.default_file(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.file(path);
    }
    loader = loader.environment(ENV_PREFIX);
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }

    let sources = loader.describe_layers();
    Ok((loader.build()?, sources))
}
