// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the training log.

pub mod activity;
pub mod cycle;
pub mod log;
pub mod race;
pub mod stats;

pub use activity::{Activity, ActivityType, DataSource, WorkoutType};
pub use cycle::{
    CalculatedPhase, CreateTrainingCycleRequest, CycleGoal, NewTrainingCycle, PhaseDefinition,
    PhaseType, TrainingCycle,
};
pub use log::{
    Children, DayEntry, MonthEntry, StructuredActivitiesLog, Totals, WeekEntry, YearEntry,
};
pub use race::Race;
pub use stats::{RawWeeklyTotals, RawWeeklyTotalsMap, WeeklyStats};
