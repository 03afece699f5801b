//! Headline scalar metrics over a record set.

use serde::{Deserialize, Serialize};

use crate::model::TripRecord;

/// Scalar reductions shown above the charts. Computed over whichever record
/// set the caller passes — filtered or unfiltered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_trips: usize,
    pub avg_fare: f64,
    /// Sum of `total_amount` in dollars.
    pub total_revenue: f64,
    /// Same figure scaled to millions for display.
    pub total_revenue_millions: f64,
    pub avg_distance_miles: f64,
    pub avg_duration_minutes: f64,
}

/// Reduce a record set to its headline metrics. Empty input produces zeros
/// throughout — means are guarded so no NaN reaches the output boundary.
pub fn summarize(records: &[TripRecord]) -> SummaryMetrics {
    let total_trips = records.len();
    let mut fare_sum = 0.0;
    let mut revenue = 0.0;
    let mut distance_sum = 0.0;
    let mut duration_sum = 0.0;
    for record in records {
        fare_sum += record.fare_amount;
        revenue += record.total_amount;
        distance_sum += record.trip_distance;
        duration_sum += record.duration_minutes();
    }

    let mean = |sum: f64| if total_trips == 0 { 0.0 } else { sum / total_trips as f64 };

    SummaryMetrics {
        total_trips,
        avg_fare: mean(fare_sum),
        total_revenue: revenue,
        total_revenue_millions: revenue / 1_000_000.0,
        avg_distance_miles: mean(distance_sum),
        avg_duration_minutes: mean(duration_sum),
    }
}

impl SummaryMetrics {
    /// Render a plain-text overview for the terminal.
    pub fn render_overview(&self) -> String {
        let mut output = String::new();
        output.push_str("KEY METRICS\n");
        output.push_str("-----------\n");
        output.push_str(&format!("Total Trips:   {}\n", self.total_trips));
        output.push_str(&format!("Avg Fare:      ${:.2}\n", self.avg_fare));
        output.push_str(&format!(
            "Total Revenue: ${:.2} M\n",
            self.total_revenue_millions
        ));
        output.push_str(&format!("Avg Distance:  {:.2} mi\n", self.avg_distance_miles));
        output.push_str(&format!(
            "Avg Duration:  {:.2} min\n",
            self.avg_duration_minutes
        ));
        output
    }
}
