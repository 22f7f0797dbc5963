// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training log service.
//!
//! Handles the request-level workflow:
//! 1. Fetch raw rows from the store
//! 2. Hand them to the calendar, weekly series or scheduling engine
//! 3. Return the result, or persist a computed cycle

use crate::config::Config;
use crate::db::TrainingStore;
use crate::error::{AppError, Result};
use crate::models::{
    CreateTrainingCycleRequest, CycleGoal, NewTrainingCycle, StructuredActivitiesLog,
    TrainingCycle, WeeklyStats,
};
use crate::services::calendar::structure_log;
use crate::services::periodization::{build_cycle, total_weeks};
use crate::services::weekly_stats::{season_window_start, weekly_series, window_end};
use crate::time_utils::parse_date;

/// Glue between a [`TrainingStore`] and the pure engine.
pub struct TrainingLogService<S> {
    store: S,
    weekly_window_weeks: u32,
    season_start_month: u32,
}

impl<S: TrainingStore> TrainingLogService<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            weekly_window_weeks: config.weekly_window_weeks,
            season_start_month: config.season_start_month,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Full calendar-structured history of a user.
    pub async fn get_structured_log(&self, user_id: &str) -> Result<StructuredActivitiesLog> {
        let activities = self.store.get_activities_by_user(user_id).await?;
        let range = self.store.get_date_range(user_id).await?;

        let log = structure_log(&activities, range.min_date, range.max_date);

        tracing::info!(
            user_id,
            activities = log.totals.activities_count,
            years = log.years.len(),
            "Built structured activity log"
        );

        Ok(log)
    }

    /// Weekly series of `week_count` weeks starting at `start_date`.
    pub async fn get_weekly_stats(
        &self,
        user_id: &str,
        start_date: chrono::NaiveDate,
        week_count: u32,
    ) -> Result<Vec<WeeklyStats>> {
        let end_date = window_end(start_date, week_count)?;
        let raw = self
            .store
            .get_weekly_stats_raw(user_id, start_date, end_date)
            .await?;

        weekly_series(&raw, start_date, week_count)
    }

    /// Weekly series for the chart of a season `year`, using the configured
    /// window.
    pub async fn get_weekly_stats_for_season(
        &self,
        user_id: &str,
        year: i32,
    ) -> Result<Vec<WeeklyStats>> {
        let start_date = season_window_start(year, self.season_start_month)?;

        tracing::info!(
            user_id,
            year,
            start = %start_date,
            weeks = self.weekly_window_weeks,
            "Building weekly stats"
        );

        self.get_weekly_stats(user_id, start_date, self.weekly_window_weeks)
            .await
    }

    /// Compute a cycle for a creation request without persisting it.
    pub async fn plan_training_cycle(
        &self,
        user_id: &str,
        request: &CreateTrainingCycleRequest,
    ) -> Result<TrainingCycle> {
        if request.name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Training cycle name must not be empty".to_string(),
            ));
        }

        let explicit_end = request.end_date.as_deref().map(parse_date).transpose()?;
        let explicit_start = request.start_date.as_deref().map(parse_date).transpose()?;

        if let Some(expected) = request.total_weeks {
            let actual = total_weeks(&request.phases);
            if expected != actual {
                return Err(AppError::InvalidInput(format!(
                    "total_weeks is {} but phases add up to {} weeks",
                    expected, actual
                )));
            }
        }

        let race_date = match request.race_id.as_deref() {
            Some(race_id) => Some(
                self.store
                    .get_race_date(race_id, user_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Race {} not found", race_id)))?,
            ),
            None => None,
        };

        let goal = CycleGoal {
            race_date,
            end_date: explicit_end,
            start_date: explicit_start,
        };

        build_cycle(&request.phases, &goal)
    }

    /// Compute and persist a cycle with its phases, returning the new id.
    pub async fn create_training_cycle(
        &self,
        user_id: &str,
        request: &CreateTrainingCycleRequest,
    ) -> Result<String> {
        let cycle = self.plan_training_cycle(user_id, request).await?;

        let new_cycle = NewTrainingCycle {
            user_id: user_id.to_string(),
            race_id: request.race_id.clone(),
            name: request.name.trim().to_string(),
            cycle,
        };
        let id = self.store.create_training_cycle(&new_cycle).await?;

        tracing::info!(
            user_id,
            cycle_id = %id,
            start = %new_cycle.cycle.start_date,
            end = %new_cycle.cycle.end_date,
            total_weeks = new_cycle.cycle.total_weeks,
            "Training cycle created"
        );

        Ok(id)
    }
}
