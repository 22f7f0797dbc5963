// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, NaiveDate};
use training_calendar::config::Config;
use training_calendar::db::MemoryDb;
use training_calendar::models::{
    Activity, ActivityType, DataSource, StructuredActivitiesLog, WorkoutType,
};
use training_calendar::services::TrainingLogService;

pub const FIXTURE_PATH: &str = "tests/fixtures/training_log.json";

/// Calendar date shorthand.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Create a store loaded with the shared fixture.
#[allow(dead_code)]
pub fn fixture_db() -> MemoryDb {
    MemoryDb::load_from_file(FIXTURE_PATH).expect("Failed to load fixture")
}

/// Create a service over the fixture with the default config.
#[allow(dead_code)]
pub fn fixture_service() -> TrainingLogService<MemoryDb> {
    TrainingLogService::new(fixture_db(), &Config::default())
}

/// Build a run at an RFC3339 instant.
#[allow(dead_code)]
pub fn run_at(id: &str, start: &str, distance: f64) -> Activity {
    Activity {
        id: id.to_string(),
        user_id: "athlete-1".to_string(),
        source: DataSource::Manual,
        activity_type: ActivityType::Run,
        workout_type: WorkoutType::BaseRun,
        start_time: DateTime::parse_from_rfc3339(start).expect("valid timestamp"),
        distance_meters: Some(distance),
        duration_seconds: Some(distance * 0.3),
        elevation_gain_meters: Some(distance / 100.0),
        avg_heart_rate: None,
        rpe: None,
        notes: None,
    }
}

/// Build a race at an RFC3339 instant.
#[allow(dead_code)]
pub fn race_at(id: &str, start: &str, distance: f64) -> Activity {
    Activity {
        workout_type: WorkoutType::Race,
        ..run_at(id, start, distance)
    }
}

/// Check the rollup invariant at every level of a log and return the total
/// number of activities found in day entries.
#[allow(dead_code)]
pub fn assert_totals_consistent(log: &StructuredActivitiesLog) -> u32 {
    let mut log_count = 0;
    let mut log_races = 0;

    for year in &log.years {
        let mut year_count = 0;
        for month in year.months.as_slice() {
            let mut month_count = 0;
            for week in month.weeks.as_slice() {
                let days = week.days.as_slice();
                let week_count: u32 = days.iter().map(|d| d.activities.len() as u32).sum();
                let week_races: u32 = days
                    .iter()
                    .flat_map(|d| d.activities.iter())
                    .filter(|a| a.is_race())
                    .count() as u32;

                assert_eq!(week.totals.activities_count, week_count, "week {}", week.start_date);
                assert_eq!(week.totals.races_count, week_races, "week {}", week.start_date);
                for day in days {
                    assert_eq!(day.is_rest_day, day.activities.is_empty(), "day {}", day.date);
                }
                month_count += week_count;
            }
            if month.weeks.is_empty() {
                assert_eq!(month.totals.activities_count, 0);
            } else {
                assert_eq!(month.totals.activities_count, month_count, "month {}", month.month);
            }
            year_count += month.totals.activities_count;
        }
        if year.months.is_empty() {
            assert_eq!(year.totals.activities_count, 0);
        } else {
            assert_eq!(year.totals.activities_count, year_count, "year {}", year.year);
        }
        log_count += year.totals.activities_count;
        log_races += year.totals.races_count;
    }

    assert_eq!(log.totals.activities_count, log_count);
    assert_eq!(log.totals.races_count, log_races);
    log_count
}
