//! elasticsearch-archive - snapshot every index whose name contains an expression.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Install the process-wide tracing subscriber.
//! - Run one snapshot and translate the outcome into an exit code.
//!
//! Does NOT handle:
//! - Index resolution or the snapshot request itself (see `crates/client`).
//! - Waiting for the snapshot to finish on the cluster.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can feed clap's env fallbacks.
//! - A successful run writes nothing to stdout or stderr at the default log level.

mod args;
mod commands;
mod error;

use std::io::IsTerminal;
use std::time::Duration;

use archive_config::{Config, ConfigError, ConfigLoader, RequiredSetting};
use args::{Cli, present};
use clap::builder::styling::{AnsiColor, Style};
use clap::{CommandFactory, Parser};
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match build_config(cli) {
        Ok(config) => config,
        Err(ConfigError::Missing(settings)) => {
            let _ = Cli::command().print_help();
            println!();
            let color = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
            for setting in settings {
                eprintln!("{}", missing_setting_line(setting, color));
            }
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match commands::snapshot::run(&config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Guidance line for a missing setting, red when `color` is set.
fn missing_setting_line(setting: RequiredSetting, color: bool) -> String {
    let style = if color {
        AnsiColor::Red.on_default()
    } else {
        Style::new()
    };
    format!("{style}{setting}{style:#}")
}

/// Layer explicit flags over the environment. Values are trimmed and blank ones count as unset,
/// so a blank expression still falls back to yesterday's date.
fn build_config(cli: Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(expression) = present(cli.expression) {
        loader = loader.with_expression(expression);
    }
    if let Some(repository) = present(cli.repository) {
        loader = loader.with_repository(repository);
    }
    if let Some(uri) = present(cli.uri) {
        loader = loader.with_uri(uri);
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build()
}
