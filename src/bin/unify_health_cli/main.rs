// ABOUTME: unify-health CLI - drives the health service over fixture-backed platform stores
// ABOUTME: Availability checks, permission flow, ranged reads and per-provider type listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 unify-health contributors
//!
//! Usage:
//! ```bash
//! # Check whether the store connects
//! unify-health --provider samsung --fixture samsung.json available
//!
//! # Run the permission flow for two types
//! unify-health --provider health_connect permissions --types STEPS,HEART_RATE
//!
//! # Read the last 7 days of steps as JSON
//! unify-health --fixture hc.json read STEPS --days 7 --json
//!
//! # List record types supported by HealthKit
//! unify-health --provider healthkit types
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use unify_health::config::{ProviderKind, ServiceConfig};
use unify_health::constants::defaults;
use unify_health::fixtures::build_provider;
use unify_health::logging::LoggingConfig;
use unify_health::models::HealthRecordType;
use unify_health::HealthService;

#[derive(Parser)]
#[command(
    name = "unify-health",
    about = "Unified health data reader",
    long_about = "Reads Health Connect, HealthKit and Samsung Health data through one record model, backed by JSON fixtures of native records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Provider to use (defaults to UNIFY_HEALTH_PROVIDER or the platform default)
    #[arg(long, global = true)]
    provider: Option<ProviderKind>,

    /// JSON fixture of native records for the chosen provider
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether the provider's store is available
    Available,

    /// Request read authorization and report the permission state
    Permissions {
        /// Record types to request (comma-separated, defaults to all)
        #[arg(long, value_delimiter = ',')]
        types: Vec<HealthRecordType>,
    },

    /// Read recent records of one type
    Read {
        /// Record type, e.g. STEPS or HEART_RATE
        record_type: HealthRecordType,

        /// Days to look back, 1 to 365 (defaults to UNIFY_HEALTH_LOOKBACK_DAYS)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(defaults::MAX_LOOKBACK_DAYS)))]
        days: Option<u32>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// List record types and whether the provider supports them
    Types,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = ServiceConfig::from_env()?;
    if let Some(provider) = cli.provider {
        config.provider = provider;
    }
    debug!(?config, "Resolved CLI configuration");

    let provider = build_provider(config.provider, cli.fixture.as_deref())?;
    let service = HealthService::with_config(provider, &config);

    match cli.command {
        Command::Available => commands::status::available(&service).await,
        Command::Permissions { types } => {
            commands::permissions::run(&service, &config, types).await?;
        }
        Command::Read {
            record_type,
            days,
            json,
        } => commands::read::run(&service, record_type, days, json).await?,
        Command::Types => commands::status::types(&service),
    }

    Ok(())
}
