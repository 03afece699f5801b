//! Command-line surface: the filter control boundary.
//!
//! The CLI validates filter parameters before they reach the core (hour
//! bounds, range order), so the core can apply predicates literally. Dates
//! deliberately pass through unvalidated: a reversed date range is a legal
//! request whose answer is the empty set.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::filters::TripFilter;
use crate::model::PaymentKind;

#[derive(Debug, Parser)]
#[command(
    name = "trips",
    version,
    about = "Pre-computed dashboard analytics over taxi trip records"
)]
pub struct Cli {
    /// Trip file (JSON Lines). Falls back to the configured default.
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute every aggregate table and write the JSON bundle.
    Report {
        /// Output directory for the bundle files.
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print headline metrics for the (optionally filtered) trips.
    Summary {
        #[command(flatten)]
        filters: FilterArgs,

        /// Emit machine-readable JSON instead of the text overview.
        #[arg(long)]
        robot: bool,
    },
}

/// Filter flags shared by every subcommand.
#[derive(Debug, Args, Default)]
pub struct FilterArgs {
    /// Keep trips picked up on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Keep trips picked up on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Closed pickup-hour range, e.g. 7-19.
    #[arg(long, value_name = "LO-HI")]
    pub hours: Option<String>,

    /// Payment label to keep (repeatable). Omit to keep all labels.
    #[arg(long = "payment", value_name = "LABEL")]
    pub payments: Vec<String>,
}

impl FilterArgs {
    /// Turn the raw flags into the explicit filter parameter set.
    pub fn to_filter(&self) -> Result<TripFilter> {
        let dates = match (self.from, self.to) {
            (None, None) => None,
            (from, to) => Some((
                from.unwrap_or(NaiveDate::MIN),
                to.unwrap_or(NaiveDate::MAX),
            )),
        };

        let hours = self.hours.as_deref().map(parse_hour_range).transpose()?;

        let payments = if self.payments.is_empty() {
            None
        } else {
            for label in &self.payments {
                if !PaymentKind::ALL.iter().any(|kind| kind.label() == label) {
                    warn!(label = %label, "payment label matches no known category");
                }
            }
            Some(self.payments.iter().cloned().collect::<HashSet<_>>())
        };

        Ok(TripFilter {
            dates,
            hours,
            payments,
        })
    }
}

/// Parse `LO-HI` into a closed hour interval, enforcing the boundary
/// preconditions `0 <= lo <= hi <= 23`.
fn parse_hour_range(raw: &str) -> Result<(u32, u32)> {
    let Some((lo, hi)) = raw.split_once('-') else {
        bail!("invalid hour range {raw:?}: expected LO-HI, e.g. 7-19");
    };
    let lo: u32 = lo
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid hour range {raw:?}: {lo:?} is not an hour"))?;
    let hi: u32 = hi
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid hour range {raw:?}: {hi:?} is not an hour"))?;
    if lo > 23 || hi > 23 {
        bail!("invalid hour range {raw:?}: hours must be within 0-23");
    }
    if lo > hi {
        bail!("invalid hour range {raw:?}: lower bound exceeds upper bound");
    }
    Ok((lo, hi))
}
