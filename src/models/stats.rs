// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly volume aggregates for trend charts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Activity;

/// Raw per-week sums as storage returns them, before unit conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWeeklyTotals {
    /// Distance (meters)
    pub volume: f64,
    /// Elevation gain (meters)
    pub elevation: f64,
    /// Moving time (seconds)
    pub time: f64,
}

impl RawWeeklyTotals {
    pub fn add_activity(&mut self, activity: &Activity) {
        self.volume += activity.distance_meters.unwrap_or(0.0);
        self.elevation += activity.elevation_gain_meters.unwrap_or(0.0);
        self.time += activity.duration_seconds.unwrap_or(0.0);
    }
}

/// Raw weekly sums keyed by `<year>W<ISO week>`.
pub type RawWeeklyTotalsMap = HashMap<String, RawWeeklyTotals>;

/// One point of the weekly chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklyStats {
    /// Week key, e.g. "2025W23"
    pub week: String,
    /// Distance in kilometers, one decimal
    pub volume: f64,
    /// Elevation gain in meters
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub elevation: i64,
    /// Moving time in seconds
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub time: i64,
}

impl WeeklyStats {
    /// A week with no logged activity.
    pub fn zero(week: String) -> Self {
        Self {
            week,
            volume: 0.0,
            elevation: 0,
            time: 0,
        }
    }

    /// Convert raw sums: meters to km rounded to 0.1, elevation and time
    /// rounded to whole units.
    pub fn from_raw(week: String, raw: &RawWeeklyTotals) -> Self {
        Self {
            week,
            volume: (raw.volume / 1000.0 * 10.0).round() / 10.0,
            elevation: raw.elevation.round() as i64,
            time: raw.time.round() as i64,
        }
    }
}
