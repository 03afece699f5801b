//! Trip-distance histogram with outlier clipping.
//!
//! Distances above the 99th percentile are clipped before binning so a
//! handful of cross-state outliers cannot flatten the display range. The
//! clip is local to this table; other aggregations still see every record.

use serde::{Deserialize, Serialize};

use crate::model::TripRecord;

/// Fixed bin count of the distance histogram.
pub const DISTANCE_BINS: usize = 285;

/// Quantile above which distances are treated as display outliers.
pub const CLIP_QUANTILE: f64 = 0.99;

/// One histogram bin. Bins are contiguous and non-overlapping; each is
/// half-open `[lower, upper)` except the last, which is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Linear-interpolation percentile over an already sorted slice.
///
/// Rank is `q * (n - 1)`; a fractional rank interpolates between the two
/// neighbouring values.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

/// Build the fixed-width distance histogram over the clipped record set.
///
/// Empty input yields an empty table. A zero-width domain (every clipped
/// distance equal) collapses to a single `[v, v]` bin holding all records
/// rather than dividing by a zero range.
pub fn distance_histogram(records: &[TripRecord]) -> Vec<DistanceBin> {
    let mut distances: Vec<f64> = records.iter().map(|r| r.trip_distance).collect();
    if distances.is_empty() {
        return Vec::new();
    }
    distances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let threshold = percentile(&distances, CLIP_QUANTILE);
    // Sorted order survives the clip, so min/max are the ends.
    let clipped: Vec<f64> = distances.into_iter().filter(|&d| d <= threshold).collect();
    let (Some(&min), Some(&max)) = (clipped.first(), clipped.last()) else {
        return Vec::new();
    };

    if max <= min {
        return vec![DistanceBin {
            lower: min,
            upper: max,
            count: clipped.len(),
        }];
    }

    let width = (max - min) / DISTANCE_BINS as f64;
    let mut counts = vec![0usize; DISTANCE_BINS];
    for d in &clipped {
        let idx = (((d - min) / width) as usize).min(DISTANCE_BINS - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| DistanceBin {
            lower: min + width * i as f64,
            // Pin the final edge to the observed maximum so accumulated
            // rounding in `min + width * n` cannot leave it outside.
            upper: if i + 1 == DISTANCE_BINS {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}
