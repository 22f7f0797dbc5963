// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date bucketing.
//!
//! Everything here works on calendar days (`NaiveDate`), never on instants.
//! Activity timestamps are reduced to the athlete's local date first with
//! [`local_date`], so an activity at 23:30 local time stays on its own day
//! no matter what the UTC date is.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

use crate::error::{AppError, Result};

/// ISO-8601 week number (1..=53) of a date.
///
/// Weeks run Monday to Sunday and week 1 is the week holding the year's
/// first Thursday, so late December can fall in week 1 of the next year
/// and early January in week 52/53 of the previous one.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// The Monday on or before `date`.
///
/// Clamped to `NaiveDate::MIN` when that Monday is not representable.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
}

/// The Sunday on or after `date` (`week_start(date) + 6 days`).
///
/// Clamped to `NaiveDate::MAX` when that Sunday is not representable.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date)
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX)
}

/// Format a calendar date as `YYYY-MM-DD` from its own year/month/day.
pub fn format_local_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Calendar date of an instant in the timezone it carries.
pub fn local_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Weekly bucket key: `<calendar year>W<ISO week>`.
///
/// The year is the plain calendar year of `date`, not the ISO week-year,
/// so 2025-12-29 (ISO week 1 of 2026) yields `2025W1`.
pub fn week_key(date: NaiveDate) -> String {
    format!("{}W{}", date.year(), iso_week_number(date))
}

/// Parse a `YYYY-MM-DD` date supplied by a caller.
///
/// A full RFC3339 timestamp is also accepted and reduced to the calendar
/// date in its own offset.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| local_date(&dt))
        .map_err(|_| {
            AppError::InvalidInput(format!(
                "Invalid date '{}': expected YYYY-MM-DD or RFC3339",
                raw
            ))
        })
}

/// Earliest and latest local dates among a set of instants.
pub fn date_range<'a, Tz, I>(instants: I) -> Option<(NaiveDate, NaiveDate)>
where
    Tz: TimeZone + 'a,
    I: IntoIterator<Item = &'a DateTime<Tz>>,
{
    instants
        .into_iter()
        .map(local_date)
        .fold(None, |range, date| match range {
            None => Some((date, date)),
            Some((min, max)) => Some((min.min(date), max.max(date))),
        })
}
