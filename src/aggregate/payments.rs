//! Trip counts per payment label (pie chart table).

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::TripRecord;

/// One slice of the payment breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSlice {
    pub label: String,
    pub trips: usize,
}

/// Count trips per payment label. Every label present in the input appears
/// exactly once, with no truncation; rows default to count descending with
/// label-ascending tie-break (the presentation side may re-sort).
pub fn payment_breakdown(records: &[TripRecord]) -> Vec<PaymentSlice> {
    let mut rows: Vec<PaymentSlice> = records
        .iter()
        .map(|r| r.payment.label())
        .counts()
        .into_iter()
        .map(|(label, trips)| PaymentSlice {
            label: label.to_string(),
            trips,
        })
        .collect();

    rows.sort_by(|a, b| b.trips.cmp(&a.trips).then_with(|| a.label.cmp(&b.label)));
    rows
}
