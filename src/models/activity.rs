// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model as handed over by storage.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::time_utils::local_date;

/// Kind of activity logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Run,
    Trail,
    Treadmill,
    Hike,
    Strength,
    Cardio,
}

/// Workout tag. Running and strength workouts share one namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    // Running
    BaseRun,
    Hills,
    LongRun,
    Tempo,
    Threshold,
    Intervals,
    Race,
    Other,
    // Strength
    Push,
    Pull,
    Legs,
    Back,
    Chest,
    Shoulders,
    Abs,
    Arms,
    UpperBody,
    LowerBody,
    FullBody,
}

impl WorkoutType {
    pub fn is_race(self) -> bool {
        self == WorkoutType::Race
    }
}

/// Where an activity was imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Manual,
    Strava,
    Garmin,
}

/// Stored activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    pub id: String,
    /// Owner
    pub user_id: String,
    pub source: DataSource,
    pub activity_type: ActivityType,
    pub workout_type: WorkoutType,
    /// Start instant with the athlete's UTC offset at the time (RFC3339)
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub start_time: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate: Option<f64>,
    /// Rate of perceived exertion (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Activity {
    /// Calendar day the activity belongs to, in the athlete's local time.
    pub fn local_date(&self) -> NaiveDate {
        local_date(&self.start_time)
    }

    pub fn is_race(&self) -> bool {
        self.workout_type.is_race()
    }
}
