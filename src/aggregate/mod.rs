//! Aggregation stage: five independent derived tables plus headline
//! metrics, each a pure function over an already-filtered record slice.
//!
//! No aggregation feeds another and none mutates its input, so the whole
//! stage fans out across threads (see [`crate::report::InsightsBundle`]).

pub mod distances;
pub mod heatmap;
pub mod hourly;
pub mod payments;
pub mod summary;
pub mod zones;

pub use distances::{DISTANCE_BINS, DistanceBin, distance_histogram};
pub use heatmap::{DAY_ORDER, HeatmapCell, weekly_heatmap};
pub use hourly::{HourlyFare, hourly_fare};
pub use payments::{PaymentSlice, payment_breakdown};
pub use summary::{SummaryMetrics, summarize};
pub use zones::{TOP_ZONE_LIMIT, ZoneCount, top_zones};
