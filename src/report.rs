//! Pre-computed insights bundle for the dashboard renderer.
//!
//! One JSON file per aggregate table, written in a single pass so the
//! browser side can render every chart without recomputing anything:
//!
//! - `summary.json` - headline metrics (counts, means, revenue)
//! - `top_zones.json` - busiest pickup zones (bar)
//! - `hourly_fare.json` - mean fare by dropoff hour (line)
//! - `distance_histogram.json` - clipped distance distribution (histogram)
//! - `payment_breakdown.json` - trips per payment label (pie)
//! - `weekly_heatmap.json` - trips per (weekday, hour) pair (heatmap)

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregate::{
    self, DistanceBin, HeatmapCell, HourlyFare, PaymentSlice, SummaryMetrics, ZoneCount,
};
use crate::model::TripRecord;

/// Bundle of every derived table, plus the canonical weekday ordering the
/// heatmap renderer lays its y-axis out in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsBundle {
    pub summary: SummaryMetrics,
    pub top_zones: Vec<ZoneCount>,
    pub hourly_fare: Vec<HourlyFare>,
    pub distance_histogram: Vec<DistanceBin>,
    pub payment_breakdown: Vec<PaymentSlice>,
    pub weekly_heatmap: Vec<HeatmapCell>,
    pub day_order: Vec<String>,
    /// RFC3339 timestamp
    pub computed_at: String,
}

impl InsightsBundle {
    /// Compute every table over one filtered record slice.
    ///
    /// Each aggregation is a pure read-only reduction, so the six run
    /// concurrently against the same borrow with no shared state.
    pub fn compute(records: &[TripRecord]) -> Self {
        let ((summary, top_zones), ((hourly_fare, distance_histogram), (payments, heatmap))) =
            rayon::join(
                || {
                    rayon::join(
                        || aggregate::summarize(records),
                        || aggregate::top_zones(records),
                    )
                },
                || {
                    rayon::join(
                        || {
                            rayon::join(
                                || aggregate::hourly_fare(records),
                                || aggregate::distance_histogram(records),
                            )
                        },
                        || {
                            rayon::join(
                                || aggregate::payment_breakdown(records),
                                || aggregate::weekly_heatmap(records),
                            )
                        },
                    )
                },
            );

        debug!(
            trips = summary.total_trips,
            zones = top_zones.len(),
            hours = hourly_fare.len(),
            bins = distance_histogram.len(),
            labels = payments.len(),
            cells = heatmap.len(),
            "aggregations complete"
        );

        Self {
            summary,
            top_zones,
            hourly_fare,
            distance_histogram,
            payment_breakdown: payments,
            weekly_heatmap: heatmap,
            day_order: aggregate::DAY_ORDER.iter().map(|d| d.to_string()).collect(),
            computed_at: Utc::now().to_rfc3339(),
        }
    }

    /// Write all insight files to a directory.
    pub fn write_to_dir(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir).context("Failed to create insights directory")?;

        let summary_json = serde_json::to_string_pretty(&self.summary)
            .context("Failed to serialize summary")?;
        std::fs::write(dir.join("summary.json"), summary_json)
            .context("Failed to write summary.json")?;

        let zones_json = serde_json::to_string_pretty(&self.top_zones)
            .context("Failed to serialize top zones")?;
        std::fs::write(dir.join("top_zones.json"), zones_json)
            .context("Failed to write top_zones.json")?;

        let hourly_json = serde_json::to_string_pretty(&self.hourly_fare)
            .context("Failed to serialize hourly fares")?;
        std::fs::write(dir.join("hourly_fare.json"), hourly_json)
            .context("Failed to write hourly_fare.json")?;

        let histogram_json = serde_json::to_string_pretty(&self.distance_histogram)
            .context("Failed to serialize distance histogram")?;
        std::fs::write(dir.join("distance_histogram.json"), histogram_json)
            .context("Failed to write distance_histogram.json")?;

        let payments_json = serde_json::to_string_pretty(&self.payment_breakdown)
            .context("Failed to serialize payment breakdown")?;
        std::fs::write(dir.join("payment_breakdown.json"), payments_json)
            .context("Failed to write payment_breakdown.json")?;

        let heatmap_json = serde_json::to_string_pretty(&HeatmapFile {
            day_order: &self.day_order,
            cells: &self.weekly_heatmap,
        })
        .context("Failed to serialize weekly heatmap")?;
        std::fs::write(dir.join("weekly_heatmap.json"), heatmap_json)
            .context("Failed to write weekly_heatmap.json")?;

        info!(
            "Insights written to {:?}: summary.json, top_zones.json, hourly_fare.json, distance_histogram.json, payment_breakdown.json, weekly_heatmap.json",
            dir
        );

        Ok(())
    }
}

/// On-disk shape of `weekly_heatmap.json`: the cells plus the day ordering
/// the renderer needs alongside them.
#[derive(Serialize)]
struct HeatmapFile<'a> {
    day_order: &'a [String],
    cells: &'a [HeatmapCell],
}
