//! Input boundary: JSON-Lines trip files.
//!
//! One trip object per line, using the column names of the upstream
//! transformed trip data (`tpep_pickup_datetime`, `PU_Zone`, ...). Rows are
//! validated into [`TripRecord`] as they are read, so everything downstream
//! can assume field presence and type. Any malformed line is fatal and
//! reported with its line number — there is nothing sensible to aggregate
//! over partially-loaded data.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;
use indicatif::ProgressBar;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::model::TripRecord;

/// Errors raised while loading a trip file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read trip file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Line {line}: invalid trip row: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: {reason}")]
    Invalid { line: usize, reason: String },
}

/// A trip row as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawTrip {
    tpep_pickup_datetime: String,
    tpep_dropoff_datetime: String,
    #[serde(rename = "PU_Zone")]
    pu_zone: String,
    fare_amount: f64,
    total_amount: f64,
    trip_distance: f64,
    #[serde(default)]
    payment_type: Option<i64>,
}

/// Timestamp formats accepted at the boundary: the space-separated form the
/// transformed data uses, plus the `T`-separated form.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn parse_datetime(value: &str, field: &str, line: usize) -> Result<NaiveDateTime, LoadError> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| LoadError::Invalid {
            line,
            reason: format!("unparseable {field} {value:?}"),
        })
}

fn validate(raw: RawTrip, line: usize) -> Result<TripRecord, LoadError> {
    let pickup = parse_datetime(&raw.tpep_pickup_datetime, "tpep_pickup_datetime", line)?;
    let dropoff = parse_datetime(&raw.tpep_dropoff_datetime, "tpep_dropoff_datetime", line)?;

    if raw.trip_distance < 0.0 {
        return Err(LoadError::Invalid {
            line,
            reason: format!("negative trip_distance {}", raw.trip_distance),
        });
    }
    if raw.fare_amount < 0.0 || raw.total_amount < 0.0 {
        return Err(LoadError::Invalid {
            line,
            reason: "negative monetary amount".to_string(),
        });
    }

    Ok(TripRecord::new(
        pickup,
        dropoff,
        raw.pu_zone,
        raw.fare_amount,
        raw.total_amount,
        raw.trip_distance,
        raw.payment_type,
    ))
}

/// Load every trip record from a JSONL file. Blank lines are skipped.
pub fn load_trips(path: &Path) -> Result<Vec<TripRecord>, LoadError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let bar = ProgressBar::new_spinner();
    bar.set_message("parsing trip records");

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let raw: RawTrip = serde_json::from_str(&line).map_err(|source| LoadError::Parse {
            line: line_no,
            source,
        })?;
        records.push(validate(raw, line_no)?);

        if line_no % 16384 == 0 {
            bar.set_message(format!("parsed {} trips", records.len()));
            bar.tick();
        }
    }
    bar.finish_and_clear();

    info!(trips = records.len(), path = %path.display(), "trip file loaded");
    Ok(records)
}
