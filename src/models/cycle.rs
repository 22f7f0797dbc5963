// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training cycle and phase models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Training emphasis of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum PhaseType {
    Base,
    Build,
    Peak,
    Taper,
    Recovery,
    Off,
}

/// Phase as requested by the athlete: what and for how many weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PhaseDefinition {
    pub phase_type: PhaseType,
    pub duration_weeks: u32,
}

/// Phase with its position and week-aligned dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CalculatedPhase {
    pub phase_type: PhaseType,
    /// 1-based position, earliest phase first
    pub order: u32,
    pub duration_weeks: u32,
    /// Always a Monday
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub start_date: NaiveDate,
    /// Always a Sunday
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub end_date: NaiveDate,
}

/// What a cycle is scheduled toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleGoal {
    /// Date of the linked race, takes precedence over `end_date`
    pub race_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
}

/// Computed cycle dates and phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TrainingCycle {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub start_date: NaiveDate,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub end_date: NaiveDate,
    pub total_weeks: u32,
    pub phases: Vec<CalculatedPhase>,
}

/// Cycle creation request as received from a client. Dates are raw strings
/// and are parsed before scheduling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateTrainingCycleRequest {
    pub name: String,
    #[serde(default)]
    pub race_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Optional client-side total; must match the phase durations if given
    #[serde(default)]
    pub total_weeks: Option<u32>,
    pub phases: Vec<PhaseDefinition>,
}

/// A computed cycle ready to be written with its phases in one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrainingCycle {
    pub user_id: String,
    pub race_id: Option<String>,
    pub name: String,
    #[serde(flatten)]
    pub cycle: TrainingCycle,
}
