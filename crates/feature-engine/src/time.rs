//! Time-Derived Diagnostics
//!
//! Period-of-day and high-season flags from the historical feature
//! engineering. Neither feeds the final 10-column vocabulary; they are
//! kept for parity with the legacy pipeline and exercised by tests only.
//! `minutes_diff` is live: it drives label derivation during training.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Period of the day a flight departs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOfDay {
    /// 05:00-11:59
    Morning,
    /// 12:00-18:59
    Afternoon,
    /// 19:00-04:59
    Night,
}

impl PeriodOfDay {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodOfDay::Morning => "morning",
            PeriodOfDay::Afternoon => "afternoon",
            PeriodOfDay::Night => "night",
        }
    }
}

/// Bucket a time of day into morning, afternoon or night
///
/// Boundaries are inclusive; every valid time maps to exactly one bucket.
pub fn period_of_day(time: NaiveTime) -> PeriodOfDay {
    match time.hour() {
        5..=11 => PeriodOfDay::Morning,
        12..=18 => PeriodOfDay::Afternoon,
        _ => PeriodOfDay::Night,
    }
}

/// High-season windows as (month, day) bounds, inclusive
const HIGH_SEASON_WINDOWS: [((u32, u32), (u32, u32)); 4] = [
    ((12, 15), (12, 31)),
    ((1, 1), (3, 3)),
    ((7, 15), (7, 31)),
    ((9, 11), (9, 30)),
];

/// Whether a date falls in the high season
///
/// Evaluated against the date's own year: Dec 15-31, Jan 1-Mar 3,
/// Jul 15-31 and Sep 11-30, all inclusive.
pub fn is_high_season(date: NaiveDate) -> bool {
    let md = (date.month(), date.day());
    HIGH_SEASON_WINDOWS
        .iter()
        .any(|&(lo, hi)| lo <= md && md <= hi)
}

/// Signed difference `actual - scheduled` in minutes
///
/// Fractional minutes are preserved; negative means an early departure.
pub fn minutes_diff(actual: NaiveDateTime, scheduled: NaiveDateTime) -> f64 {
    (actual - scheduled).num_seconds() as f64 / 60.0
}
