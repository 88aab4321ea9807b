// ABOUTME: Command-line interface for fetching and syncing daily health snapshots
// ABOUTME: Drives the grant, collect, and upload flow against a synthetic provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fetch and sync daily health metrics from the command line.
//!
//! Usage:
//! ```bash
//! # Aggregate the trailing 7 days and print them
//! cargo run --bin vitalsync -- fetch --days 7
//!
//! # Aggregate and upload, one POST per day
//! cargo run --bin vitalsync -- sync --days 3 --user someone@example.com
//!
//! # Show the read scopes the engine requires
//! cargo run --bin vitalsync -- permissions
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;
use vitalsync::aggregator::RangeCollector;
use vitalsync::config::SyncConfig;
use vitalsync::models::{DailyCollection, UploadStatus};
use vitalsync::permissions::{required_scopes, InMemoryPermissionGate, PermissionGate};
use vitalsync::providers::synthetic::SyntheticHealthProvider;
use vitalsync::sync::SyncBatchUploader;

#[derive(Parser)]
#[command(name = "vitalsync")]
#[command(about = "Collect and upload daily health metric snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate the trailing days and print each snapshot
    Fetch {
        /// Number of trailing local calendar days to collect
        #[arg(long)]
        days: Option<u32>,
    },
    /// Aggregate the trailing days and upload them, one POST per day
    Sync {
        /// Number of trailing local calendar days to collect
        #[arg(long)]
        days: Option<u32>,

        /// User identifier (email) attached to every upload
        #[arg(long)]
        user: Option<String>,
    },
    /// Show the read scopes the engine requires
    Permissions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    vitalsync::logging::init_from_env()?;

    let config = SyncConfig::from_env();

    match cli.command {
        Commands::Fetch { days } => {
            let collection = collect(&config, days).await?;
            print_collection(&collection);
        }
        Commands::Sync { days, user } => {
            let user_id = user
                .or_else(|| config.user_id.clone())
                .ok_or_else(|| anyhow!("no user id: pass --user or set VITALSYNC_USER_ID"))?;

            let collection = collect(&config, days).await?;
            print_collection(&collection);

            let uploader = SyncBatchUploader::new(&config)?;
            let tally = uploader.upload_all(&collection, &user_id).await;

            println!(
                "upload: {} attempted, {} succeeded, {} failed",
                tally.attempted, tally.succeeded, tally.failed
            );
            for outcome in &tally.outcomes {
                match &outcome.error {
                    None => println!("  {}  ok", outcome.date),
                    Some(error) => println!("  {}  FAILED: {error}", outcome.date),
                }
            }
            match tally.status() {
                UploadStatus::Complete => println!("status: complete"),
                UploadStatus::Partial => println!("status: partial"),
                UploadStatus::TotalFailure => {
                    return Err(anyhow!("every day failed to upload"));
                }
            }
        }
        Commands::Permissions => {
            for scope in required_scopes() {
                println!("{scope}");
            }
        }
    }

    Ok(())
}

/// Build the demo provider, grant scopes, and collect the trailing window
async fn collect(config: &SyncConfig, days: Option<u32>) -> Result<DailyCollection> {
    let days = days.unwrap_or(config.default_days);

    let newest = chrono::Local::now().date_naive();
    let provider = Arc::new(SyntheticHealthProvider::with_records(
        SyntheticHealthProvider::generate_demo_records(days, newest),
    ));
    let gate = Arc::new(InMemoryPermissionGate::new());

    // Grant flow: request every required read scope before collecting
    let granted = gate.request_scopes(&required_scopes()).await;
    info!(days, granted = granted.len(), "permissions granted; collecting");

    let collector = RangeCollector::new(provider, gate);
    let collection = collector.collect(days).await?;
    Ok(collection)
}

fn print_collection(collection: &DailyCollection) {
    for snapshot in collection {
        println!(
            "{}  sleep {:>5.0} min  steps {:>6.0}  dist {:>6.2} km  kcal {:>5.0}/{:>5.0}  hr {:>3.0}  rhr {:>3.0}  spo2 {:>5.1}  cadence {:>3.0}  wt {:>5.1} kg  ht {:>4.2} m",
            snapshot.date_string(),
            snapshot.sleep_minutes,
            snapshot.steps,
            snapshot.distance_km,
            snapshot.active_calories_kcal,
            snapshot.total_calories_kcal,
            snapshot.heart_rate_bpm,
            snapshot.resting_heart_rate_bpm,
            snapshot.oxygen_saturation_pct,
            snapshot.steps_cadence,
            snapshot.weight_kg,
            snapshot.height_m,
        );
    }
}
