//! RustStack QuickSight inspector - developer CLI for the QuickSight model.
//!
//! Parses enum values with the same strict rules the model applies, and loads
//! JSON payloads into named request, response or nested shapes to show how they
//! deserialize and render.
//!
//! # Usage
//!
//! ```text
//! rustack-quicksight-inspect enum DataSourceType REDSHIFT
//! rustack-quicksight-inspect shape CreateDashboardInput request.json
//! rustack-quicksight-inspect operation ListDashboards
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |
//! | `INSPECT_PRETTY` | `false` | Pretty-print JSON output |

mod config;
mod registry;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rustack_quicksight_model::{QuickSightErrorCode, QuickSightOperation};

use crate::config::InspectConfig;

/// Inspect QuickSight model enums, shapes and operations.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level filter, overrides `LOG_LEVEL`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the registered closed enums.
    Enums,
    /// Parse a value strictly, or list the values of an enum.
    Enum {
        /// Enum type name, e.g. `DataSourceType`.
        type_name: String,
        /// Value to parse. Lists every value when omitted.
        value: Option<String>,
    },
    /// List the registered shapes.
    Shapes,
    /// Load a JSON payload into a shape and render it.
    Shape {
        /// Shape name, e.g. `CreateDashboardInput`.
        name: String,
        /// JSON file to load, `-` for stdin.
        path: PathBuf,
        /// Print the re-serialized JSON instead of the `Display` rendering.
        #[arg(long)]
        json: bool,
    },
    /// Show the error kinds an operation may raise.
    Operation {
        /// Operation name, e.g. `CreateDataSet`. Lists every operation when omitted.
        name: Option<String>,
    },
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn read_payload(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("failed to read stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn run_enum(type_name: &str, value: Option<&str>) -> Result<()> {
    let entry = registry::find_enum(type_name)?;
    match value {
        Some(value) => {
            let canonical = entry.parse(value)?;
            println!("{canonical}");
        }
        None => {
            for value in entry.values() {
                println!("{value}");
            }
        }
    }
    Ok(())
}

fn run_shape(name: &str, path: &Path, json: bool, pretty: bool) -> Result<()> {
    let raw = read_payload(path)?;
    debug!(shape = name, bytes = raw.len(), "loaded payload");
    let rendered = registry::render_shape(name, &raw)?;
    if !json {
        println!("{}", rendered.display);
        return Ok(());
    }
    let out = if pretty {
        serde_json::to_string_pretty(&rendered.json)
    } else {
        serde_json::to_string(&rendered.json)
    }
    .context("failed to encode JSON output")?;
    println!("{out}");
    Ok(())
}

fn run_operation(name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        for op in QuickSightOperation::ALL {
            println!("{op}");
        }
        return Ok(());
    };
    let op = QuickSightOperation::from_name(name)
        .with_context(|| format!("unknown operation {name:?}"))?;
    for code in op.errors() {
        println!("{}", describe_error(*code));
    }
    Ok(())
}

fn describe_error(code: QuickSightErrorCode) -> String {
    if code.carries_resource_type() {
        format!("{code} (carries resource type)")
    } else {
        code.to_string()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = InspectConfig::from_env().with_overrides(cli.log_level, cli.pretty);

    init_tracing(&config.log_level)?;
    debug!(?config, "starting inspector");

    match cli.command {
        Command::Enums => {
            for entry in registry::enums() {
                println!("{}", entry.name);
            }
            Ok(())
        }
        Command::Enum { type_name, value } => run_enum(&type_name, value.as_deref()),
        Command::Shapes => {
            for name in registry::shape_names() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Shape { name, path, json } => run_shape(&name, &path, json, config.pretty),
        Command::Operation { name } => run_operation(name.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_should_have_valid_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_should_parse_enum_subcommand() {
        let cli = Cli::try_parse_from(["inspect", "enum", "JoinType", "LEFT"]).expect("parse args");
        match cli.command {
            Command::Enum { type_name, value } => {
                assert_eq!(type_name, "JoinType");
                assert_eq!(value.as_deref(), Some("LEFT"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_should_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["inspect", "shape", "Tag", "-", "--json", "--pretty"])
            .expect("parse args");
        assert!(cli.pretty);
        assert!(matches!(cli.command, Command::Shape { json: true, .. }));
    }

    #[test]
    fn test_should_fail_on_non_canonical_enum_value() {
        assert!(run_enum("JoinType", Some("left")).is_err());
        assert!(run_enum("JoinType", Some("")).is_err());
        assert!(run_enum("NoSuchEnum", Some("LEFT")).is_err());
    }

    #[test]
    fn test_should_describe_resource_type_carriers() {
        assert_eq!(
            describe_error(QuickSightErrorCode::LimitExceededException),
            "LimitExceededException (carries resource type)"
        );
        assert_eq!(
            describe_error(QuickSightErrorCode::ThrottlingException),
            "ThrottlingException"
        );
    }

    #[test]
    fn test_should_reject_unknown_operation() {
        assert!(run_operation(Some("DeleteEverything")).is_err());
    }
}
