//! Mean fare by hour of dropoff (line chart table).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::TripRecord;

/// One row of the hourly-fare table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyFare {
    /// Hour of day in `[0, 23]`.
    pub hour: u32,
    /// Arithmetic mean of `fare_amount` over trips dropped off that hour.
    pub mean_fare: f64,
}

/// Average the fare per *dropoff* hour.
///
/// This buckets on the dropoff timestamp, not the pickup hour the filter
/// stage uses. Only hours with at least one trip are emitted, ascending, so
/// every mean has a non-zero divisor by construction.
pub fn hourly_fare(records: &[TripRecord]) -> Vec<HourlyFare> {
    let mut buckets: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = buckets.entry(record.dropoff_hour()).or_insert((0.0, 0));
        entry.0 += record.fare_amount;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(hour, (sum, count))| HourlyFare {
            hour,
            mean_fare: sum / count as f64,
        })
        .collect()
}
