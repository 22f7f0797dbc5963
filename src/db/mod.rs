// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer.
//!
//! The engine never talks to storage itself. [`TrainingStore`] is the seam a
//! request handler uses to fetch raw rows and persist computed cycles;
//! [`MemoryDb`] implements it in memory.

pub mod memory;

pub use memory::{MemoryDb, Snapshot};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Activity, NewTrainingCycle, RawWeeklyTotalsMap};

/// First and last local activity dates of a user, `None` without activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

/// Queries and writes the training engine relies on.
#[allow(async_fn_in_trait)]
pub trait TrainingStore {
    /// All activities of a user, in any order.
    async fn get_activities_by_user(&self, user_id: &str) -> Result<Vec<Activity>>;

    async fn get_date_range(&self, user_id: &str) -> Result<DateRange>;

    /// Raw weekly sums for activities with local dates in `[start, end)`.
    async fn get_weekly_stats_raw(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RawWeeklyTotalsMap>;

    /// Date of a race owned by the user, `None` if there is no such race.
    async fn get_race_date(&self, race_id: &str, user_id: &str) -> Result<Option<NaiveDate>>;

    /// Persist a cycle and all its phases atomically, returning the new id.
    async fn create_training_cycle(&self, cycle: &NewTrainingCycle) -> Result<String>;
}
