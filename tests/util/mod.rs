//! Shared fixtures for the end-to-end tests.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// One fixture trip, written as a JSONL row in the upstream column names.
pub struct FixtureTrip {
    pub pickup: &'static str,
    pub dropoff: &'static str,
    pub zone: &'static str,
    pub fare: f64,
    pub total: f64,
    pub distance: f64,
    pub payment_type: Option<i64>,
}

impl FixtureTrip {
    fn to_line(&self) -> String {
        let mut line = String::new();
        write!(
            line,
            r#"{{"tpep_pickup_datetime":"{}","tpep_dropoff_datetime":"{}","PU_Zone":"{}","fare_amount":{},"total_amount":{},"trip_distance":{},"payment_type":"#,
            self.pickup, self.dropoff, self.zone, self.fare, self.total, self.distance
        )
        .unwrap();
        match self.payment_type {
            Some(code) => write!(line, "{code}}}").unwrap(),
            None => line.push_str("null}"),
        }
        line
    }
}

/// Write a trip file into `dir` and return its path.
pub fn write_trip_file(dir: &Path, trips: &[FixtureTrip]) -> PathBuf {
    let path = dir.join("trips.jsonl");
    let contents: Vec<String> = trips.iter().map(|t| t.to_line()).collect();
    fs::write(&path, contents.join("\n")).unwrap();
    path
}

/// A small January 2024 data set covering several zones, hours, days and
/// payment labels. 2024-01-08 is a Monday.
pub fn january_trips() -> Vec<FixtureTrip> {
    vec![
        FixtureTrip {
            pickup: "2024-01-08 08:15:00",
            dropoff: "2024-01-08 08:40:00",
            zone: "Midtown Center",
            fare: 14.0,
            total: 18.0,
            distance: 2.4,
            payment_type: Some(1),
        },
        FixtureTrip {
            pickup: "2024-01-08 08:50:00",
            dropoff: "2024-01-08 09:10:00",
            zone: "Midtown Center",
            fare: 16.0,
            total: 20.0,
            distance: 3.1,
            payment_type: Some(1),
        },
        FixtureTrip {
            pickup: "2024-01-09 13:05:00",
            dropoff: "2024-01-09 13:20:00",
            zone: "Harlem",
            fare: 10.0,
            total: 12.0,
            distance: 1.8,
            payment_type: Some(2),
        },
        FixtureTrip {
            pickup: "2024-01-13 22:40:00",
            dropoff: "2024-01-13 23:05:00",
            zone: "JFK Airport",
            fare: 55.0,
            total: 70.0,
            distance: 15.2,
            payment_type: Some(2),
        },
        FixtureTrip {
            pickup: "2024-01-20 02:10:00",
            dropoff: "2024-01-20 02:25:00",
            zone: "Harlem",
            fare: 9.0,
            total: 11.0,
            distance: 1.3,
            payment_type: Some(7),
        },
        FixtureTrip {
            pickup: "2024-01-28 17:30:00",
            dropoff: "2024-01-28 17:55:00",
            zone: "Astoria",
            fare: 21.0,
            total: 26.0,
            distance: 5.6,
            payment_type: None,
        },
    ]
}
