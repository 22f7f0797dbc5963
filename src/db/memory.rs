// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store with typed operations.
//!
//! Backs the demo binary, tests and benchmarks. Maps are concurrent so a
//! cloned handle can be shared across tasks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::db::{DateRange, TrainingStore};
use crate::error::{AppError, Result};
use crate::models::{Activity, NewTrainingCycle, Race, RawWeeklyTotalsMap};
use crate::services::weekly_stats::accumulate_weekly_totals;
use crate::time_utils::date_range;

/// Serialized contents of a store, as loaded from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub races: Vec<Race>,
}

#[derive(Default)]
struct Inner {
    /// Activities keyed by user id
    activities: DashMap<String, Vec<Activity>>,
    /// Races keyed by race id
    races: DashMap<String, Race>,
    /// Persisted cycles keyed by cycle id
    cycles: DashMap<String, NewTrainingCycle>,
    next_cycle_id: AtomicU64,
}

/// In-memory database handle. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Inner>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let db = Self::new();
        for activity in snapshot.activities {
            db.insert_activity(activity);
        }
        for race in snapshot.races {
            db.insert_race(race);
        }
        db
    }

    /// Load a JSON snapshot from disk.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Storage(format!("Failed to read {}: {}", path, e)))?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .map_err(|e| AppError::Storage(format!("Failed to parse {}: {}", path, e)))?;

        tracing::info!(
            path,
            activities = snapshot.activities.len(),
            races = snapshot.races.len(),
            "Loaded snapshot"
        );

        Ok(Self::from_snapshot(snapshot))
    }

    // ─── Activity Operations ─────────────────────────────────────

    pub fn insert_activity(&self, activity: Activity) {
        self.inner
            .activities
            .entry(activity.user_id.clone())
            .or_default()
            .push(activity);
    }

    // ─── Race Operations ─────────────────────────────────────────

    pub fn insert_race(&self, race: Race) {
        self.inner.races.insert(race.id.clone(), race);
    }

    // ─── Training Cycle Operations ───────────────────────────────

    pub fn get_training_cycle(&self, id: &str) -> Option<NewTrainingCycle> {
        self.inner.cycles.get(id).map(|c| c.value().clone())
    }

    pub fn training_cycle_count(&self) -> usize {
        self.inner.cycles.len()
    }
}

impl TrainingStore for MemoryDb {
    async fn get_activities_by_user(&self, user_id: &str) -> Result<Vec<Activity>> {
        Ok(self
            .inner
            .activities
            .get(user_id)
            .map(|list| list.value().clone())
            .unwrap_or_default())
    }

    async fn get_date_range(&self, user_id: &str) -> Result<DateRange> {
        let range = self
            .inner
            .activities
            .get(user_id)
            .and_then(|list| date_range(list.iter().map(|a| &a.start_time)));

        Ok(DateRange {
            min_date: range.map(|(min, _)| min),
            max_date: range.map(|(_, max)| max),
        })
    }

    async fn get_weekly_stats_raw(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RawWeeklyTotalsMap> {
        Ok(self
            .inner
            .activities
            .get(user_id)
            .map(|list| accumulate_weekly_totals(list.iter(), start, end))
            .unwrap_or_default())
    }

    async fn get_race_date(&self, race_id: &str, user_id: &str) -> Result<Option<NaiveDate>> {
        Ok(self
            .inner
            .races
            .get(race_id)
            .filter(|race| race.user_id == user_id)
            .map(|race| race.race_date))
    }

    async fn create_training_cycle(&self, cycle: &NewTrainingCycle) -> Result<String> {
        let seq = self.inner.next_cycle_id.fetch_add(1, Ordering::Relaxed) + 1;
        let id = format!("cycle-{}", seq);
        self.inner.cycles.insert(id.clone(), cycle.clone());

        tracing::debug!(
            cycle_id = %id,
            user_id = %cycle.user_id,
            phases = cycle.cycle.phases.len(),
            "Stored training cycle"
        );

        Ok(id)
    }
}
