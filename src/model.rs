//! Typed trip records and derived categorical fields.
//!
//! A [`TripRecord`] is immutable once constructed: the derived fields
//! (`payment` label, `pickup_hour`) are computed exactly once, up front, so
//! the filter and aggregation stages can treat every field as plain data.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Payment category attached to a trip, derived from the raw integer code.
///
/// The code mapping is fixed: 1 → Credit Card, 2 → Cash, 3 → No Charge,
/// 4 → Dispute. Every other code — including a missing one — is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentKind {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Cash")]
    Cash,
    #[serde(rename = "No Charge")]
    NoCharge,
    #[serde(rename = "Dispute")]
    Dispute,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl PaymentKind {
    /// Map a raw payment code onto its category.
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => PaymentKind::CreditCard,
            Some(2) => PaymentKind::Cash,
            Some(3) => PaymentKind::NoCharge,
            Some(4) => PaymentKind::Dispute,
            _ => PaymentKind::Unknown,
        }
    }

    /// Display label for the category.
    pub fn label(self) -> &'static str {
        match self {
            PaymentKind::CreditCard => "Credit Card",
            PaymentKind::Cash => "Cash",
            PaymentKind::NoCharge => "No Charge",
            PaymentKind::Dispute => "Dispute",
            PaymentKind::Unknown => "Unknown",
        }
    }

    /// All categories, in display order.
    pub const ALL: [PaymentKind; 5] = [
        PaymentKind::CreditCard,
        PaymentKind::Cash,
        PaymentKind::NoCharge,
        PaymentKind::Dispute,
        PaymentKind::Unknown,
    ];
}

/// One row of the trip table.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// When the passenger was picked up, as stored (no timezone conversion).
    pub pickup_datetime: NaiveDateTime,
    /// When the passenger was dropped off, as stored.
    pub dropoff_datetime: NaiveDateTime,
    /// Categorical pickup location identifier.
    pub pickup_zone: String,
    /// Metered fare in dollars.
    pub fare_amount: f64,
    /// Total charged in dollars, surcharges and tips included.
    pub total_amount: f64,
    /// Trip distance in miles.
    pub trip_distance: f64,
    /// Derived payment category.
    pub payment: PaymentKind,
    /// Derived pickup hour-of-day in `[0, 23]`.
    pub pickup_hour: u32,
}

impl TripRecord {
    /// Build a record from raw fields, computing the derived ones.
    pub fn new(
        pickup_datetime: NaiveDateTime,
        dropoff_datetime: NaiveDateTime,
        pickup_zone: impl Into<String>,
        fare_amount: f64,
        total_amount: f64,
        trip_distance: f64,
        payment_code: Option<i64>,
    ) -> Self {
        Self {
            pickup_hour: pickup_datetime.hour(),
            payment: PaymentKind::from_code(payment_code),
            pickup_datetime,
            dropoff_datetime,
            pickup_zone: pickup_zone.into(),
            fare_amount,
            total_amount,
            trip_distance,
        }
    }

    /// Calendar date of the pickup (time-of-day discarded).
    pub fn pickup_date(&self) -> NaiveDate {
        self.pickup_datetime.date()
    }

    /// Hour-of-day of the dropoff, distinct from the pickup hour used by
    /// the hour filter.
    pub fn dropoff_hour(&self) -> u32 {
        self.dropoff_datetime.hour()
    }

    /// Trip duration in minutes. Negative if the source data is inconsistent.
    pub fn duration_minutes(&self) -> f64 {
        (self.dropoff_datetime - self.pickup_datetime).num_seconds() as f64 / 60.0
    }
}
