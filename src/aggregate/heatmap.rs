//! Trip counts per (weekday, hour) pair (heatmap table).

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::model::TripRecord;

/// Canonical weekday ordering for the presentation side. The table itself
/// is hour-major; renderers lay the y-axis out in this order.
pub const DAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One cell of the weekly heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    /// Calendar day name of the pickup, as stored (no timezone conversion).
    pub day: String,
    /// Pickup hour of day in `[0, 23]`.
    pub hour: u32,
    pub trips: usize,
}

/// Count trips per (pickup weekday, pickup hour) pair.
///
/// Only observed combinations are emitted. Rows are ordered by hour
/// ascending, then by [`DAY_ORDER`] within the hour.
pub fn weekly_heatmap(records: &[TripRecord]) -> Vec<HeatmapCell> {
    let mut cells: BTreeMap<(u32, usize), usize> = BTreeMap::new();
    for record in records {
        let day_idx = record.pickup_datetime.weekday().num_days_from_monday() as usize;
        *cells.entry((record.pickup_hour, day_idx)).or_insert(0) += 1;
    }

    cells
        .into_iter()
        .map(|((hour, day_idx), trips)| HeatmapCell {
            day: DAY_ORDER[day_idx].to_string(),
            hour,
            trips,
        })
        .collect()
}
