// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar aggregation: fold a flat activity list into year → month →
//! week → day with rollup totals.
//!
//! The date range is widened to whole weeks and every day in it is visited
//! once, in ascending order. Containers are accumulated in ordered maps and
//! the immutable tree is materialized at the end, most recent first, with
//! empty subtrees collapsed.
//!
//! A week that straddles a month boundary appears under both months, each
//! copy holding only the days of its own month.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::models::{
    Activity, Children, DayEntry, MonthEntry, StructuredActivitiesLog, Totals, WeekEntry,
    YearEntry,
};
use crate::time_utils::{iso_week_number, week_end, week_start};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a month number (1-12).
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Build the structured log for a user's activity history.
///
/// `min_date`/`max_date` are the first and last local dates with activity.
/// A missing bound or an empty activity list yields the empty log. Only
/// activities whose local date lies in the week-aligned range are placed.
pub fn structure_log(
    activities: &[Activity],
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
) -> StructuredActivitiesLog {
    let (Some(min_date), Some(max_date)) = (min_date, max_date) else {
        return StructuredActivitiesLog::default();
    };
    if activities.is_empty() {
        return StructuredActivitiesLog::default();
    }

    let range_start = week_start(min_date);
    let range_end = week_end(max_date);

    let mut builder = CalendarBuilder::new(activities);
    for date in range_start.iter_days().take_while(|d| *d <= range_end) {
        builder.push_day(date);
    }
    let log = builder.finish();

    tracing::debug!(
        activities = activities.len(),
        placed = log.totals.activities_count,
        years = log.years.len(),
        start = %range_start,
        end = %range_end,
        "Structured activity log"
    );

    log
}

/// Accumulates days into indexed containers before the tree is sorted and
/// collapsed.
struct CalendarBuilder<'a> {
    by_date: HashMap<NaiveDate, Vec<&'a Activity>>,
    years: BTreeMap<i32, YearAcc>,
    totals: Totals,
}

#[derive(Default)]
struct YearAcc {
    totals: Totals,
    months: BTreeMap<u32, MonthAcc>,
}

#[derive(Default)]
struct MonthAcc {
    totals: Totals,
    /// Keyed by the week's Monday
    weeks: BTreeMap<NaiveDate, WeekAcc>,
}

struct WeekAcc {
    week_number: u32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    totals: Totals,
    /// Ascending while building
    days: Vec<DayEntry>,
}

impl<'a> CalendarBuilder<'a> {
    fn new(activities: &'a [Activity]) -> Self {
        let mut by_date: HashMap<NaiveDate, Vec<&'a Activity>> = HashMap::new();
        for activity in activities {
            by_date
                .entry(activity.local_date())
                .or_default()
                .push(activity);
        }

        Self {
            by_date,
            years: BTreeMap::new(),
            totals: Totals::default(),
        }
    }

    fn push_day(&mut self, date: NaiveDate) {
        let day_activities: Vec<Activity> = self
            .by_date
            .get(&date)
            .map(|list| list.iter().map(|a| (*a).clone()).collect())
            .unwrap_or_default();

        let year = self.years.entry(date.year()).or_default();
        let month = year.months.entry(date.month()).or_default();
        let monday = week_start(date);
        let week = month.weeks.entry(monday).or_insert_with(|| WeekAcc {
            week_number: iso_week_number(date),
            start_date: monday,
            end_date: week_end(date),
            totals: Totals::default(),
            days: Vec::with_capacity(7),
        });

        for activity in &day_activities {
            week.totals.add_activity(activity);
            month.totals.add_activity(activity);
            year.totals.add_activity(activity);
            self.totals.add_activity(activity);
        }

        week.days.push(DayEntry {
            date,
            day_of_week: date.weekday().num_days_from_sunday(),
            is_rest_day: day_activities.is_empty(),
            activities: day_activities,
        });
    }

    fn finish(self) -> StructuredActivitiesLog {
        let years = self
            .years
            .into_iter()
            .rev()
            .map(|(year, acc)| acc.into_entry(year))
            .collect();

        StructuredActivitiesLog {
            years,
            totals: self.totals,
        }
    }
}

impl YearAcc {
    fn into_entry(self, year: i32) -> YearEntry {
        let months: Vec<MonthEntry> = self
            .months
            .into_iter()
            .rev()
            .map(|(month, acc)| acc.into_entry(month))
            .collect();

        let months = if months.iter().all(|m| m.totals.is_empty()) {
            Children::Empty
        } else {
            Children::Present(months)
        };

        YearEntry {
            year,
            months,
            totals: self.totals,
        }
    }
}

impl MonthAcc {
    fn into_entry(self, month: u32) -> MonthEntry {
        let weeks: Vec<WeekEntry> = self
            .weeks
            .into_values()
            .rev()
            .map(WeekAcc::into_entry)
            .collect();

        let weeks = if weeks.iter().all(|w| w.totals.is_empty()) {
            Children::Empty
        } else {
            Children::Present(weeks)
        };

        MonthEntry {
            month,
            month_name: month_name(month).to_string(),
            weeks,
            totals: self.totals,
        }
    }
}

impl WeekAcc {
    fn into_entry(mut self) -> WeekEntry {
        let days = if self.totals.is_empty() {
            Children::Empty
        } else {
            self.days.reverse();
            Children::Present(self.days)
        };

        WeekEntry {
            week_number: self.week_number,
            start_date: self.start_date,
            end_date: self.end_date,
            days,
            totals: self.totals,
        }
    }
}
