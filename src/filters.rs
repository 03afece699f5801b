//! Filter stage: pure projections of a record set.
//!
//! Each filter takes the records and a constraint explicitly and returns a
//! new `Vec` of the matching records, so one loaded set can be re-filtered
//! with different predicates. Predicates are applied literally: a date range
//! with start after end, or an empty payment selection, yields an empty
//! result rather than an error. The three filters read disjoint fields, so
//! applying them in any order produces the same final set.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::model::TripRecord;

/// Keep trips whose pickup *date* falls in the closed interval
/// `[start, end]`. Time-of-day is ignored.
pub fn filter_date_range(
    records: &[TripRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<TripRecord> {
    records
        .iter()
        .filter(|r| {
            let date = r.pickup_date();
            date >= start && date <= end
        })
        .cloned()
        .collect()
}

/// Keep trips whose derived pickup hour falls in the closed interval
/// `[lo, hi]`.
pub fn filter_hour_range(records: &[TripRecord], lo: u32, hi: u32) -> Vec<TripRecord> {
    records
        .iter()
        .filter(|r| r.pickup_hour >= lo && r.pickup_hour <= hi)
        .cloned()
        .collect()
}

/// Keep trips whose payment label is one of `selected`. An empty selection
/// keeps nothing — "select all" is expressed by not applying this filter.
pub fn filter_payment_labels(
    records: &[TripRecord],
    selected: &HashSet<String>,
) -> Vec<TripRecord> {
    records
        .iter()
        .filter(|r| selected.contains(r.payment.label()))
        .cloned()
        .collect()
}

/// The full set of user-chosen constraints, passed explicitly from the
/// control boundary. A `None` constraint means that filter is skipped, which
/// is how the boundary expresses its everything-selected default.
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    /// Closed pickup-date interval.
    pub dates: Option<(NaiveDate, NaiveDate)>,
    /// Closed pickup-hour interval.
    pub hours: Option<(u32, u32)>,
    /// Selected payment labels.
    pub payments: Option<HashSet<String>>,
}

impl TripFilter {
    /// Apply every active constraint. Order does not affect the result.
    pub fn apply(&self, records: &[TripRecord]) -> Vec<TripRecord> {
        let mut current = records.to_vec();
        if let Some((start, end)) = self.dates {
            current = filter_date_range(&current, start, end);
        }
        if let Some((lo, hi)) = self.hours {
            current = filter_hour_range(&current, lo, hi);
        }
        if let Some(selected) = &self.payments {
            current = filter_payment_labels(&current, selected);
        }
        current
    }

    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.dates.is_none() && self.hours.is_none() && self.payments.is_none()
    }
}
