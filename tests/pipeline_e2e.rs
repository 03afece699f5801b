//! E2E tests for the full report pipeline: fixture JSONL in, bundle out.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

mod util;
use util::{FixtureTrip, january_trips, write_trip_file};

const BUNDLE_FILES: [&str; 6] = [
    "summary.json",
    "top_zones.json",
    "hourly_fare.json",
    "distance_histogram.json",
    "payment_breakdown.json",
    "weekly_heatmap.json",
];

fn read_json(dir: &Path, name: &str) -> serde_json::Value {
    let raw = fs::read_to_string(dir.join(name)).unwrap_or_else(|_| panic!("missing {name}"));
    serde_json::from_str(&raw).unwrap_or_else(|_| panic!("invalid json in {name}"))
}

fn run_report(trips: &[FixtureTrip], extra_args: &[&str]) -> tempfile::TempDir {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = write_trip_file(tmp.path(), trips);
    let out = tmp.path().join("bundle");

    cargo_bin_cmd!("trips")
        .args(["report", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .args(extra_args)
        .assert()
        .success();

    tmp
}

#[test]
fn report_writes_every_bundle_file() {
    let tmp = run_report(&january_trips(), &[]);
    let bundle = tmp.path().join("bundle");
    for name in BUNDLE_FILES {
        assert!(bundle.join(name).exists(), "missing {name}");
    }
}

#[test]
fn top_zones_ordered_by_count() {
    let tmp = run_report(&january_trips(), &[]);
    let zones = read_json(&tmp.path().join("bundle"), "top_zones.json");
    let rows = zones.as_array().unwrap();

    // Midtown Center and Harlem both have two trips; the tie breaks by name.
    assert_eq!(rows[0]["zone"], "Harlem");
    assert_eq!(rows[0]["trips"], 2);
    assert_eq!(rows[1]["zone"], "Midtown Center");
    assert_eq!(rows[1]["trips"], 2);
    assert_eq!(rows.len(), 4);
}

#[test]
fn hourly_fare_uses_dropoff_hour() {
    let tmp = run_report(&january_trips(), &[]);
    let hourly = read_json(&tmp.path().join("bundle"), "hourly_fare.json");
    let rows = hourly.as_array().unwrap();

    // The 08:50 pickup drops off at 09:10, so hour 8 holds only one trip.
    let hour8 = rows.iter().find(|r| r["hour"] == 8).expect("hour 8 row");
    assert!((hour8["mean_fare"].as_f64().unwrap() - 14.0).abs() < 1e-9);
    let hour9 = rows.iter().find(|r| r["hour"] == 9).expect("hour 9 row");
    assert!((hour9["mean_fare"].as_f64().unwrap() - 16.0).abs() < 1e-9);

    // Ascending, populated hours only.
    let hours: Vec<i64> = rows.iter().map(|r| r["hour"].as_i64().unwrap()).collect();
    let mut sorted = hours.clone();
    sorted.sort_unstable();
    assert_eq!(hours, sorted);
}

#[test]
fn payment_breakdown_conserves_trip_count() {
    let tmp = run_report(&january_trips(), &[]);
    let breakdown = read_json(&tmp.path().join("bundle"), "payment_breakdown.json");
    let rows = breakdown.as_array().unwrap();

    let total: u64 = rows.iter().map(|r| r["trips"].as_u64().unwrap()).sum();
    assert_eq!(total, 6);

    let labels: Vec<&str> = rows.iter().map(|r| r["label"].as_str().unwrap()).collect();
    assert!(labels.contains(&"Credit Card"));
    assert!(labels.contains(&"Cash"));
    assert!(labels.contains(&"Unknown"));
    assert!(!labels.contains(&"Dispute"));
}

#[test]
fn heatmap_carries_day_order_metadata() {
    let tmp = run_report(&january_trips(), &[]);
    let heatmap = read_json(&tmp.path().join("bundle"), "weekly_heatmap.json");

    let day_order: Vec<&str> = heatmap["day_order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap())
        .collect();
    assert_eq!(
        day_order,
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );

    let cells = heatmap["cells"].as_array().unwrap();
    let total: u64 = cells.iter().map(|c| c["trips"].as_u64().unwrap()).sum();
    assert_eq!(total, 6);
    // Both 2024-01-08 pickups (08:15, 08:50) land in the Monday/8 cell.
    assert!(
        cells
            .iter()
            .any(|c| c["day"] == "Monday" && c["hour"] == 8 && c["trips"] == 2)
    );
}

#[test]
fn distance_histogram_conserves_clipped_records() {
    let tmp = run_report(&january_trips(), &[]);
    let histogram = read_json(&tmp.path().join("bundle"), "distance_histogram.json");
    let bins = histogram.as_array().unwrap();
    assert!(!bins.is_empty());

    let total: u64 = bins.iter().map(|b| b["count"].as_u64().unwrap()).sum();
    // p99 over the six distances lands at 14.72 mi, clipping the 15.2 mi
    // airport run; the other five trips survive.
    assert_eq!(total, 5);

    let top = bins.last().unwrap()["upper"].as_f64().unwrap();
    assert!(top < 15.2, "outlier should not stretch the domain");

    // Contiguous bins.
    for pair in bins.windows(2) {
        let upper = pair[0]["upper"].as_f64().unwrap();
        let lower = pair[1]["lower"].as_f64().unwrap();
        assert!((upper - lower).abs() < 1e-9);
    }
}

#[test]
fn summary_json_matches_fixture() {
    let tmp = run_report(&january_trips(), &[]);
    let summary = read_json(&tmp.path().join("bundle"), "summary.json");

    assert_eq!(summary["total_trips"], 6);
    let avg_fare = summary["avg_fare"].as_f64().unwrap();
    assert!((avg_fare - 20.833333).abs() < 1e-3);
    let revenue = summary["total_revenue"].as_f64().unwrap();
    assert!((revenue - 157.0).abs() < 1e-9);
}

#[test]
fn filtered_report_restricts_every_table() {
    let tmp = run_report(&january_trips(), &["--payment", "Cash"]);
    let bundle = tmp.path().join("bundle");

    let summary = read_json(&bundle, "summary.json");
    assert_eq!(summary["total_trips"], 2);

    let zones = read_json(&bundle, "top_zones.json");
    let rows = zones.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let breakdown = read_json(&bundle, "payment_breakdown.json");
    let rows = breakdown.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["label"], "Cash");
}

#[test]
fn excluding_filter_produces_empty_tables_not_failure() {
    let tmp = run_report(&january_trips(), &["--from", "2030-01-01"]);
    let bundle = tmp.path().join("bundle");

    let summary = read_json(&bundle, "summary.json");
    assert_eq!(summary["total_trips"], 0);
    assert_eq!(summary["avg_fare"], 0.0);

    for name in [
        "top_zones.json",
        "hourly_fare.json",
        "distance_histogram.json",
        "payment_breakdown.json",
    ] {
        let table = read_json(&bundle, name);
        assert!(table.as_array().unwrap().is_empty(), "{name} not empty");
    }

    let heatmap = read_json(&bundle, "weekly_heatmap.json");
    assert!(heatmap["cells"].as_array().unwrap().is_empty());
}

#[test]
fn malformed_input_fails_with_line_number() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("trips.jsonl");
    fs::write(&input, "{\"broken\": true}\n").unwrap();

    cargo_bin_cmd!("trips")
        .args(["report", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(tmp.path().join("bundle"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 1"));
}
