// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod script;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use repair_desk_api::{tickets_csv, weekly_reports_csv};
use tracing::info;

use crate::config::ConsoleConfig;
use crate::script::ConsoleReport;

/// Repair Desk console - runs a scripted demo session against in-memory stores
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Username to log in with
    #[arg(short, long, default_value = "admin")]
    username: String,

    /// Password to log in with
    #[arg(short, long, default_value = "password")]
    password: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Report on this many trailing weeks, including empty ones
    #[arg(short, long)]
    weeks: Option<usize>,

    /// Start with an empty ticket store
    #[arg(long)]
    no_fixtures: bool,

    /// Simulated login and ticket creation latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

/// Overlays command-line flags on the loaded configuration.
fn apply_overrides(mut config: ConsoleConfig, args: &Args) -> ConsoleConfig {
    if args.no_fixtures {
        config.seed_fixtures = false;
    }
    if let Some(weeks) = args.weeks {
        config.report_weeks = Some(weeks);
    }
    if let Some(latency_ms) = args.latency_ms {
        config.session.simulated_latency_ms = latency_ms;
        config.session.simulated_create_latency_ms = latency_ms;
    }
    config
}

fn render(report: &ConsoleReport, format: Format) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(report)?),
        Format::Csv => {
            let tickets: String = tickets_csv(&report.tickets)?;
            let reports: String = weekly_reports_csv(&report.weekly_reports)?;
            Ok(format!("{tickets}\n{reports}"))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Initializing Repair Desk console");

    let config: ConsoleConfig = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            ConsoleConfig::load(path)?
        }
        None => {
            info!("Using default configuration");
            ConsoleConfig::default()
        }
    };
    let config: ConsoleConfig = apply_overrides(config, &args);

    let report: ConsoleReport = script::run(&config, &args.username, &args.password).await?;
    println!("{}", render(&report, args.format)?);

    Ok(())
}
