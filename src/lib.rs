//! Aggregate analytics over taxi trip records.
//!
//! The pipeline is strictly one-way: a JSONL trip file is loaded into typed
//! records, narrowed by the user's filter predicates, reduced to a set of
//! derived tables, and written out as a JSON bundle for the dashboard
//! renderer. Every stage below the load boundary is a pure function over
//! borrowed records, so the same loaded set can serve any number of filter
//! combinations.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod filters;
pub mod loader;
pub mod model;
pub mod report;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::report::InsightsBundle;

/// CLI entry point: parse flags, wire config defaults, dispatch.
pub fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    let Some(input) = cli.input.clone().or_else(|| config.input.clone()) else {
        bail!("no trip file given: pass --input or set `input` in the config file");
    };

    match cli.command {
        Command::Report { out, filters } => {
            let filter = filters.to_filter()?;
            let out = out
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from("insights"));

            let records = loader::load_trips(&input)?;
            let filtered = filter.apply(&records);
            info!(
                total = records.len(),
                kept = filtered.len(),
                "filters applied"
            );

            let bundle = InsightsBundle::compute(&filtered);
            bundle.write_to_dir(&out)?;
        }
        Command::Summary { filters, robot } => {
            let filter = filters.to_filter()?;
            let records = loader::load_trips(&input)?;
            let filtered = filter.apply(&records);
            let metrics = aggregate::summarize(&filtered);

            if robot {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&metrics)
                        .context("Failed to serialize summary metrics")?
                );
            } else {
                println!("{}", "Trip Insights".bold());
                print!("{}", metrics.render_overview());
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
