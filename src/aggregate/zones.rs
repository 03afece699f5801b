//! Top pickup zones by trip count (bar chart table).

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::TripRecord;

/// How many zones the table keeps.
pub const TOP_ZONE_LIMIT: usize = 10;

/// One row of the top-zones table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCount {
    pub zone: String,
    pub trips: usize,
}

/// Count trips per pickup zone and keep the busiest [`TOP_ZONE_LIMIT`].
///
/// Rows are ordered by count descending; equal counts break ties by zone
/// name ascending so the output is deterministic. Fewer distinct zones than
/// the limit means every zone is returned.
pub fn top_zones(records: &[TripRecord]) -> Vec<ZoneCount> {
    let mut rows: Vec<ZoneCount> = records
        .iter()
        .map(|r| r.pickup_zone.as_str())
        .counts()
        .into_iter()
        .map(|(zone, trips)| ZoneCount {
            zone: zone.to_string(),
            trips,
        })
        .collect();

    rows.sort_by(|a, b| b.trips.cmp(&a.trips).then_with(|| a.zone.cmp(&b.zone)));
    rows.truncate(TOP_ZONE_LIMIT);
    rows
}
