//! Integration tests for the dataset generator.
//!
//! Generates a full snapshot into a scratch directory and verifies the
//! written CSV end to end: shape, header, row invariants, and timestamp
//! spacing.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;
use vitalflow::dataset::{generate_history, write_snapshot, TIMESTAMP_FORMAT, WARDS};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(22, 15, 0)
        .unwrap()
}

fn generate_csv(seed: u64) -> String {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("hospital_enterprise.csv");

    let mut rng = StdRng::seed_from_u64(seed);
    let rows = generate_history(&mut rng, fixed_now(), 24);
    write_snapshot(&path, &rows).unwrap();

    std::fs::read_to_string(&path).unwrap()
}

#[test]
fn test_snapshot_shape() {
    let content = generate_csv(11);
    let mut lines = content.lines();

    assert_eq!(
        lines.next().unwrap(),
        "Timestamp,Ward_Name,Occupancy_Percent,Wait_Time_Mins,Staff_On_Duty,Status"
    );
    assert_eq!(lines.count(), 200);
}

#[test]
fn test_row_invariants() {
    let content = generate_csv(12);

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut count = 0;
    for record in reader.records() {
        let record = record.unwrap();
        count += 1;

        let ward = &record[1];
        assert!(WARDS.contains(&ward), "unknown ward: {}", ward);

        let occupancy: u32 = record[2].parse().unwrap();
        let wait_time: u32 = record[3].parse().unwrap();
        let staff: u32 = record[4].parse().unwrap();
        let status = &record[5];

        assert!(occupancy <= 100);
        assert_eq!(wait_time, occupancy * 12 / 10);
        assert!((3..=12).contains(&staff));

        let expected = if occupancy > 95 {
            "Critical"
        } else if occupancy > 85 {
            "High"
        } else {
            "Normal"
        };
        assert_eq!(status, expected);
    }

    assert_eq!(count, 200);
}

#[test]
fn test_timestamps_hourly_per_ward_ending_now() {
    let content = generate_csv(13);

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut icu_timestamps = Vec::new();
    for record in reader.records() {
        let record = record.unwrap();
        if &record[1] == "ICU" {
            let ts = NaiveDateTime::parse_from_str(&record[0], TIMESTAMP_FORMAT).unwrap();
            icu_timestamps.push(ts);
        }
    }

    assert_eq!(icu_timestamps.len(), 25);
    assert_eq!(*icu_timestamps.last().unwrap(), fixed_now());
    for pair in icu_timestamps.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::hours(1));
    }
}

#[test]
fn test_seeded_output_is_reproducible() {
    assert_eq!(generate_csv(42), generate_csv(42));
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(generate_csv(1), generate_csv(2));
}
