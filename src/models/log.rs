// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar-structured activity log: year → month → week → day.
//!
//! Empty subtrees are collapsed to [`Children::Empty`], which serializes as
//! `null`, so a history with long idle stretches stays compact on the wire.

use std::ops::AddAssign;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Activity;

/// Rollup totals for any level of the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Totals {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub elevation_gain_meters: f64,
    pub activities_count: u32,
    pub races_count: u32,
}

impl Totals {
    /// Fold one activity into the totals. Missing measurements count as zero.
    pub fn add_activity(&mut self, activity: &Activity) {
        self.distance_meters += activity.distance_meters.unwrap_or(0.0);
        self.duration_seconds += activity.duration_seconds.unwrap_or(0.0);
        self.elevation_gain_meters += activity.elevation_gain_meters.unwrap_or(0.0);
        self.activities_count += 1;
        if activity.is_race() {
            self.races_count += 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.activities_count == 0
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, other: Self) {
        self.distance_meters += other.distance_meters;
        self.duration_seconds += other.duration_seconds;
        self.elevation_gain_meters += other.elevation_gain_meters;
        self.activities_count += other.activities_count;
        self.races_count += other.races_count;
    }
}

impl std::iter::Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Totals::default(), |mut acc, t| {
            acc += t;
            acc
        })
    }
}

/// Child collection of a calendar node, collapsed when it holds no activity.
#[derive(Debug, Clone, PartialEq)]
pub enum Children<T> {
    Empty,
    Present(Vec<T>),
}

impl<T> Children<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::Empty)
    }

    /// Children when present, an empty slice otherwise.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Children::Empty => &[],
            Children::Present(items) => items,
        }
    }
}

impl<T> From<Option<Vec<T>>> for Children<T> {
    fn from(value: Option<Vec<T>>) -> Self {
        value.map_or(Children::Empty, Children::Present)
    }
}

impl<T: Serialize> Serialize for Children<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Children::Empty => serializer.serialize_none(),
            Children::Present(items) => serializer.serialize_some(items),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Children<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Vec<T>>::deserialize(deserializer).map(Children::from)
    }
}

/// One calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u32,
    pub is_rest_day: bool,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WeekEntry {
    pub week_number: u32,
    /// Monday of the week
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub start_date: NaiveDate,
    /// Sunday of the week
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub end_date: NaiveDate,
    /// Days of the week that fall in the parent month, most recent first
    #[cfg_attr(feature = "binding-generation", ts(type = "Array<DayEntry> | null"))]
    pub days: Children<DayEntry>,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct MonthEntry {
    /// 1-12
    pub month: u32,
    pub month_name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "Array<WeekEntry> | null"))]
    pub weeks: Children<WeekEntry>,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct YearEntry {
    pub year: i32,
    #[cfg_attr(feature = "binding-generation", ts(type = "Array<MonthEntry> | null"))]
    pub months: Children<MonthEntry>,
    pub totals: Totals,
}

/// Root of the structured log, years most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StructuredActivitiesLog {
    pub years: Vec<YearEntry>,
    pub totals: Totals,
}
