//! Command line interface
//!
//! Argument definitions for the `wirekit` binary and the command runner.
//! Commands write their report to any `Write` sink so they can be driven
//! from tests.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

pub use commands::{load_config, run};

/// Command line interface for wirekit
#[derive(Parser, Debug)]
#[command(name = "wirekit")]
#[command(about = "wirekit - Validate and inspect dependency resolution plans")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolution plan of one service
    Plan(PlanArgs),
    /// Plan every bound service and report failures
    Check(CheckArgs),
}

/// Arguments of `wirekit plan`
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Binding manifest
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Service identifier to resolve
    #[arg(short, long)]
    pub service: String,

    /// Named tag on the root target
    #[arg(long, conflicts_with = "all")]
    pub named: Option<String>,

    /// Tag on the root target, as KEY=VALUE (VALUE is parsed as JSON when possible)
    #[arg(long, value_parser = parse_tag, conflicts_with = "all")]
    pub tagged: Vec<(String, Value)>,

    /// Plan every binding of the service, one plan each
    #[arg(long)]
    pub all: bool,

    /// Print plans as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `wirekit check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Binding manifest
    #[arg(short, long)]
    pub manifest: PathBuf,
}

/// Parse a `KEY=VALUE` tag
pub fn parse_tag(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty tag key in `{raw}`"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
