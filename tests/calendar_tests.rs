// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar aggregation tests against the shared fixture and synthetic
//! multi-year histories.

use chrono::{Datelike, Weekday};
use training_calendar::db::TrainingStore;
use training_calendar::models::{StructuredActivitiesLog, Totals};
use training_calendar::services::structure_log;
use training_calendar::time_utils::date_range;

mod common;
use common::{assert_totals_consistent, date, fixture_db, fixture_service, race_at, run_at};

async fn fixture_log(user_id: &str) -> StructuredActivitiesLog {
    let db = fixture_db();
    let activities = db.get_activities_by_user(user_id).await.unwrap();
    let range = db.get_date_range(user_id).await.unwrap();
    structure_log(&activities, range.min_date, range.max_date)
}

#[test]
fn test_empty_history_is_canonical_empty_log() {
    let log = structure_log(&[], None, None);

    assert!(log.years.is_empty());
    assert_eq!(log.totals, Totals::default());
    assert_eq!(
        serde_json::to_value(&log).unwrap(),
        serde_json::json!({
            "years": [],
            "totals": {
                "distance_meters": 0.0,
                "duration_seconds": 0.0,
                "elevation_gain_meters": 0.0,
                "activities_count": 0,
                "races_count": 0
            }
        })
    );
}

#[tokio::test]
async fn test_fixture_tree_shape() {
    let log = fixture_log("athlete-1").await;

    assert_eq!(log.totals.activities_count, 6);
    assert_eq!(log.totals.races_count, 1);
    assert_eq!(log.totals.distance_meters, 67097.5);

    let years: Vec<i32> = log.years.iter().map(|y| y.year).collect();
    assert_eq!(years, [2025, 2024]);

    let months_2025: Vec<u32> = log.years[0].months.as_slice().iter().map(|m| m.month).collect();
    let months_2024: Vec<u32> = log.years[1].months.as_slice().iter().map(|m| m.month).collect();
    assert_eq!(months_2025, [2, 1]);
    assert_eq!(months_2024, [12, 11]);
}

#[tokio::test]
async fn test_fixture_collapsing() {
    let log = fixture_log("athlete-1").await;

    // January 2025 and December 2024 have no activity at all
    let january = &log.years[0].months.as_slice()[1];
    let december = &log.years[1].months.as_slice()[0];
    assert_eq!(january.month_name, "January");
    assert!(january.weeks.is_empty());
    assert_eq!(january.totals.activities_count, 0);
    assert!(december.weeks.is_empty());

    // February keeps every week, but only the active one keeps its days
    let february = &log.years[0].months.as_slice()[0];
    let weeks = february.weeks.as_slice();
    let starts: Vec<_> = weeks.iter().map(|w| w.start_date).collect();
    assert_eq!(starts, [date(2025, 2, 10), date(2025, 2, 3), date(2025, 1, 27)]);
    assert!(!weeks[0].days.is_empty());
    assert!(weeks[1].days.is_empty());
    assert!(weeks[2].days.is_empty());
    assert_eq!(weeks[0].week_number, 7);

    // Strength session without distance still counts
    assert_eq!(weeks[0].totals.activities_count, 2);
    assert_eq!(weeks[0].totals.distance_meters, 25000.0);
    assert_eq!(weeks[0].totals.duration_seconds, 11400.0);
}

#[tokio::test]
async fn test_fixture_late_evening_activity_stays_local() {
    let log = fixture_log("athlete-1").await;

    let november = &log.years[1].months.as_slice()[1];
    let first_week = november.weeks.as_slice().last().unwrap();
    assert_eq!(first_week.start_date, date(2024, 11, 4));
    assert_eq!(first_week.totals.activities_count, 3);

    let days = first_week.days.as_slice();
    let wednesday = days.iter().find(|d| d.date == date(2024, 11, 6)).unwrap();
    let thursday = days.iter().find(|d| d.date == date(2024, 11, 7)).unwrap();
    assert_eq!(wednesday.activities.len(), 2);
    assert_eq!(wednesday.day_of_week, 3);
    assert!(thursday.is_rest_day);
}

#[tokio::test]
async fn test_fixture_race_week() {
    let log = fixture_log("athlete-1").await;

    let november = &log.years[1].months.as_slice()[1];
    let race_week = november
        .weeks
        .as_slice()
        .iter()
        .find(|w| w.start_date == date(2024, 11, 11))
        .unwrap();

    assert_eq!(race_week.totals.races_count, 1);
    assert_eq!(race_week.end_date, date(2024, 11, 17));
    let sunday = &race_week.days.as_slice()[0];
    assert_eq!(sunday.date.weekday(), Weekday::Sun);
    assert_eq!(sunday.day_of_week, 0);
    assert_eq!(sunday.activities[0].id, "a4");
}

#[tokio::test]
async fn test_service_structured_log_matches_store_pipeline() {
    let service = fixture_service();

    let log = service.get_structured_log("athlete-1").await.unwrap();

    assert_eq!(log, fixture_log("athlete-1").await);
    assert_eq!(log.totals.activities_count, 6);
}

#[tokio::test]
async fn test_service_structured_log_for_unknown_user_is_empty() {
    let service = fixture_service();

    let log = service.get_structured_log("nobody").await.unwrap();

    assert_eq!(log, StructuredActivitiesLog::default());
    assert_eq!(serde_json::to_value(&log).unwrap()["years"], serde_json::json!([]));
}

#[tokio::test]
async fn test_fixture_totals_consistent() {
    let log = fixture_log("athlete-1").await;
    assert_eq!(assert_totals_consistent(&log), 6);
}

#[test]
fn test_empty_middle_year_collapses() {
    let activities = vec![
        run_at("a", "2022-12-30T08:00:00+00:00", 10000.0),
        race_at("b", "2024-01-03T08:00:00+00:00", 42195.0),
    ];
    let (min, max) = date_range(activities.iter().map(|a| &a.start_time)).unwrap();

    let log = structure_log(&activities, Some(min), Some(max));

    let years: Vec<i32> = log.years.iter().map(|y| y.year).collect();
    assert_eq!(years, [2024, 2023, 2022]);
    assert!(log.years[1].months.is_empty());
    assert_eq!(log.years[1].totals, Totals::default());
    assert!(!log.years[0].months.is_empty());
    assert!(!log.years[2].months.is_empty());
    assert_eq!(assert_totals_consistent(&log), 2);

    // The walk covers whole weeks: Mon 2022-12-26 .. Sun 2024-01-07
    let first_week = log.years[2].months.as_slice()[0].weeks.as_slice().last().unwrap();
    assert_eq!(first_week.start_date, date(2022, 12, 26));
    let last_week = &log.years[0].months.as_slice()[0].weeks.as_slice()[0];
    assert_eq!(last_week.end_date, date(2024, 1, 7));
}

#[test]
fn test_every_day_in_range_appears_once() {
    let activities = vec![
        run_at("a", "2025-01-15T08:00:00-05:00", 5000.0),
        run_at("b", "2025-03-20T08:00:00-05:00", 5000.0),
        run_at("c", "2025-05-07T08:00:00-05:00", 5000.0),
        run_at("d", "2025-06-28T08:00:00-05:00", 5000.0),
    ];

    let log = structure_log(&activities, Some(date(2025, 1, 15)), Some(date(2025, 6, 28)));

    // Only weeks with activity keep their days; each of those weeks lies in
    // a single month here, so all 7 days are present.
    let mut day_count = 0;
    for month in log.years[0].months.as_slice() {
        for week in month.weeks.as_slice() {
            let days = week.days.as_slice();
            if !days.is_empty() {
                assert_eq!(days.len(), 7);
                assert!(days.windows(2).all(|w| w[0].date > w[1].date));
            }
            day_count += days.len();
        }
    }
    assert_eq!(day_count, 4 * 7);
    assert_eq!(assert_totals_consistent(&log), 4);
}

#[test]
fn test_activities_outside_range_are_not_placed() {
    let activities = vec![
        run_at("a", "2025-03-05T08:00:00Z", 5000.0),
        run_at("b", "2025-04-20T08:00:00Z", 5000.0),
    ];

    let log = structure_log(&activities, Some(date(2025, 3, 5)), Some(date(2025, 3, 5)));

    assert_eq!(log.totals.activities_count, 1);
    assert_eq!(assert_totals_consistent(&log), 1);
}

#[test]
fn test_structure_log_is_deterministic() {
    let mut activities = vec![
        run_at("a", "2025-02-01T06:00:00+09:00", 8000.0),
        race_at("b", "2025-02-01T20:00:00+09:00", 5000.0),
        run_at("c", "2025-01-20T06:00:00+09:00", 12000.0),
    ];
    let range = (Some(date(2025, 1, 20)), Some(date(2025, 2, 1)));

    let first = structure_log(&activities, range.0, range.1);
    let second = structure_log(&activities, range.0, range.1);
    assert_eq!(first, second);

    // Input order does not matter either
    activities.reverse();
    let reversed = structure_log(&activities, range.0, range.1);
    assert_eq!(
        serde_json::to_value(&first).unwrap()["totals"],
        serde_json::to_value(&reversed).unwrap()["totals"]
    );
    assert_eq!(first.years.len(), reversed.years.len());
}
