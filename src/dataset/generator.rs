//! Ward reading synthesis
//!
//! One reading per (hourly timestamp, ward) pair, each independently random
//! except for the Emergency night-surge bias. All randomness flows through
//! the caller's RNG so seeded runs are reproducible.

use chrono::{Duration, NaiveDateTime, Timelike};
use rand::Rng;

use crate::dataset::{WardReading, WardStatus, WARDS};

/// Whether the Emergency night surge applies at the given local hour.
///
/// The window is strictly after 18:00 or strictly before 04:00; hours 4
/// through 18 inclusive never surge. The asymmetric comparators are the
/// established behavior the demo dashboards were built against, so they
/// stay as-is.
pub fn night_surge(ward: &str, hour: u32) -> bool {
    ward == "Emergency" && (18 < hour || hour < 4)
}

/// Occupancy band for a given occupancy percentage.
pub fn status_for(occupancy: u32) -> WardStatus {
    if occupancy > 95 {
        WardStatus::Critical
    } else if occupancy > 85 {
        WardStatus::High
    } else {
        WardStatus::Normal
    }
}

fn generate_reading(rng: &mut impl Rng, time_point: NaiveDateTime, ward: &str) -> WardReading {
    let mut base: i32 = rng.gen_range(40..=80);
    if night_surge(ward, time_point.hour()) {
        base += 20;
    }

    let occupancy = (base + rng.gen_range(-10..=15)).clamp(0, 100) as u32;
    // floor(occupancy * 1.2), exact in integer math
    let wait_time = occupancy * 12 / 10;
    let staff = rng.gen_range(3..=12);

    WardReading {
        timestamp: time_point,
        ward: ward.to_string(),
        occupancy,
        wait_time,
        staff,
        status: status_for(occupancy),
    }
}

/// Generate the full ward history ending at `now`.
///
/// Produces `history_hours + 1` hourly snapshots (oldest first) of all
/// eight wards: `(history_hours + 1) * 8` rows.
pub fn generate_history(
    rng: &mut impl Rng,
    now: NaiveDateTime,
    history_hours: u32,
) -> Vec<WardReading> {
    let snapshots = history_hours as usize + 1;
    let mut rows = Vec::with_capacity(snapshots * WARDS.len());

    for offset in 0..=history_hours {
        let time_point = now - Duration::hours(i64::from(history_hours - offset));
        for ward in WARDS {
            rows.push(generate_reading(rng, time_point, ward));
        }
    }

    rows
}
