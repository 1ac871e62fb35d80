//! auth-env-check
//!
//! Command-line front end for the startup configuration checks of the
//! authentication service.

#![allow(clippy::print_stdout)]

mod report;

use std::path::PathBuf;
use std::sync::Arc;

use application::{ApplicationError, ConfigSourcePort, StartupValidationService};
use clap::{Parser, Subcommand, ValueEnum};
use domain::{RULE_SET, find_rule};
use infrastructure::{
    CheckerConfig, EnvConfigSource, FileConfigSource, JsonMapParser, TracingValidationReporter,
    init_logging,
};
use tracing::debug;

use crate::report::{CheckReport, render_rules, render_summary};

/// auth-env-check
#[derive(Parser)]
#[command(name = "auth-env-check")]
#[command(author, version, about = "Startup configuration checks for the auth service", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration
    ///
    /// Reads the process environment unless a settings file is given.
    /// Exits with status 1 if startup would be refused.
    Check {
        /// Settings file to check instead of the environment (TOML, JSON or YAML)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Read `{PREFIX}_{KEY}` environment variables instead of `{KEY}`
        ///
        /// Ignored when a settings file is given.
        #[arg(short, long, env = "AUTH_ENV_CHECK_PREFIX")]
        prefix: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the rules that are checked
    Rules {
        /// Show a single rule by code (e.g. CFG008)
        code: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Log findings and print a summary
    Text,
    /// Print a JSON report to stdout
    Json,
}

/// Log filter override for a verbosity count, if any
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Pick the configuration source for a `check` run
///
/// A settings file takes precedence over an environment prefix.
fn config_source(
    file: Option<PathBuf>,
    prefix: Option<String>,
) -> anyhow::Result<Arc<dyn ConfigSourcePort>> {
    let source: Arc<dyn ConfigSourcePort> = match (file, prefix) {
        (Some(path), _) => Arc::new(FileConfigSource::load(path)?),
        (None, Some(prefix)) => Arc::new(EnvConfigSource::with_prefix(prefix)),
        (None, None) => Arc::new(EnvConfigSource::new()),
    };
    Ok(source)
}

/// Rule catalogue, or the single rule named by `code`
fn rules_listing(code: Option<&str>) -> anyhow::Result<String> {
    match code {
        Some(code) => find_rule(code)
            .map(|rule| render_rules(std::slice::from_ref(rule)))
            .ok_or_else(|| anyhow::anyhow!("Unknown rule code: {code}")),
        None => Ok(render_rules(RULE_SET)),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CheckerConfig::load()?;
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.log_filter = filter.to_string();
    }
    init_logging(&config)?;
    debug!(log_filter = %config.log_filter, log_format = %config.log_format, "Logging initialized");

    match cli.command {
        Commands::Check {
            file,
            prefix,
            format,
        } => {
            let service = StartupValidationService::new(
                config_source(file, prefix)?,
                Arc::new(JsonMapParser::new()),
                Arc::new(TracingValidationReporter::new()),
            );

            match format {
                OutputFormat::Text => {
                    let outcome = service.run()?;
                    println!("{}", render_summary(&outcome));
                },
                OutputFormat::Json => {
                    let report = CheckReport::from_diagnostics(service.diagnostics());
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    if report.fatal {
                        return Err(ApplicationError::InvalidConfiguration.into());
                    }
                },
            }
        },

        Commands::Rules { code } => {
            println!("{}", rules_listing(code.as_deref())?);
        },
    }

    Ok(())
}
