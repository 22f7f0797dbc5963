// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly volume series for trend charts.
//!
//! Storage hands over raw per-week sums; this module gap-fills them into a
//! fixed-length series and converts units. It never queries storage.

use chrono::{Days, NaiveDate};

use crate::error::{AppError, Result};
use crate::models::{Activity, RawWeeklyTotals, RawWeeklyTotalsMap, WeeklyStats};
use crate::time_utils::week_key;

/// Produce exactly `week_count` points, one per 7-day step from `start_date`.
///
/// Each step is keyed with [`week_key`] of its anchor date; weeks with no
/// raw row are zero. Fails with `InvalidInput` if the window runs past the
/// representable date range.
pub fn weekly_series(
    raw: &RawWeeklyTotalsMap,
    start_date: NaiveDate,
    week_count: u32,
) -> Result<Vec<WeeklyStats>> {
    window_end(start_date, week_count)?;

    let series: Vec<WeeklyStats> = (0..u64::from(week_count))
        .map(|i| -> Result<WeeklyStats> {
            let anchor = start_date
                .checked_add_days(Days::new(i * 7))
                .ok_or_else(|| window_error(start_date, week_count))?;
            let key = week_key(anchor);
            Ok(match raw.get(&key) {
                Some(totals) => WeeklyStats::from_raw(key, totals),
                None => WeeklyStats::zero(key),
            })
        })
        .collect::<Result<_>>()?;

    tracing::debug!(
        raw_weeks = raw.len(),
        week_count,
        start = %start_date,
        "Built weekly series"
    );

    Ok(series)
}

/// Sum activities into raw weekly buckets for local dates in `[start, end)`.
///
/// Buckets use the same [`week_key`] as [`weekly_series`]. An ISO week that
/// spans New Year is split over two keys, and the series only looks up the
/// key of its own anchor day.
pub fn accumulate_weekly_totals<'a, I>(
    activities: I,
    start: NaiveDate,
    end: NaiveDate,
) -> RawWeeklyTotalsMap
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut buckets = RawWeeklyTotalsMap::new();
    for activity in activities {
        let date = activity.local_date();
        if date < start || date >= end {
            continue;
        }
        buckets
            .entry(week_key(date))
            .or_insert_with(RawWeeklyTotals::default)
            .add_activity(activity);
    }
    buckets
}

/// First day of the weekly chart window for a season `year`: day 1 of
/// `start_month` in the previous calendar year.
pub fn season_window_start(year: i32, start_month: u32) -> Result<NaiveDate> {
    year.checked_sub(1)
        .and_then(|previous| NaiveDate::from_ymd_opt(previous, start_month, 1))
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Invalid season window: year {} month {}",
                year, start_month
            ))
        })
}

/// Exclusive end of a window of `week_count` weeks from `start`.
pub fn window_end(start: NaiveDate, week_count: u32) -> Result<NaiveDate> {
    start
        .checked_add_days(Days::new(u64::from(week_count) * 7))
        .ok_or_else(|| window_error(start, week_count))
}

fn window_error(start: NaiveDate, week_count: u32) -> AppError {
    AppError::InvalidInput(format!(
        "Weekly window of {} weeks from {} is out of range",
        week_count, start
    ))
}
