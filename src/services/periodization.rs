// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training cycle scheduling.
//!
//! Phases are laid out backward from the goal date: the last phase ends on
//! the goal week's Sunday and each earlier phase ends the day before its
//! successor starts. All arithmetic is on calendar days.

use chrono::{Days, NaiveDate};

use crate::error::{AppError, Result};
use crate::models::{CalculatedPhase, CycleGoal, PhaseDefinition, TrainingCycle};
use crate::time_utils::{week_end, week_start};

/// Compute week-aligned dates for a cycle and its phases.
///
/// Fails with `InvalidInput` when neither a race date nor an end date is
/// given, when there are no phases, or when a phase lasts zero weeks.
pub fn build_cycle(phases: &[PhaseDefinition], goal: &CycleGoal) -> Result<TrainingCycle> {
    let goal_date = goal.race_date.or(goal.end_date).ok_or_else(|| {
        AppError::InvalidInput("Either a race or an end date must be provided".to_string())
    })?;
    validate_phases(phases)?;

    // A cycle always closes out a full week.
    let end_date = week_end(goal_date);
    let total_weeks = total_weeks(phases);

    let derived_start = week_start(span_start(end_date, total_weeks)?);
    let start_date = match goal.start_date {
        Some(explicit) => {
            let start = week_start(explicit);
            if start != derived_start {
                tracing::warn!(
                    explicit = %start,
                    derived = %derived_start,
                    total_weeks,
                    "Explicit cycle start does not match phase durations"
                );
            }
            start
        }
        None => derived_start,
    };

    let phases = partition_backward(phases, end_date)?;

    tracing::debug!(
        start = %start_date,
        end = %end_date,
        total_weeks,
        phases = phases.len(),
        "Scheduled training cycle"
    );

    Ok(TrainingCycle {
        start_date,
        end_date,
        total_weeks,
        phases,
    })
}

/// Sum of all phase durations.
pub fn total_weeks(phases: &[PhaseDefinition]) -> u32 {
    phases
        .iter()
        .fold(0u32, |acc, p| acc.saturating_add(p.duration_weeks))
}

fn validate_phases(phases: &[PhaseDefinition]) -> Result<()> {
    if phases.is_empty() {
        return Err(AppError::InvalidInput(
            "A training cycle needs at least one phase".to_string(),
        ));
    }
    if let Some(pos) = phases.iter().position(|p| p.duration_weeks == 0) {
        return Err(AppError::InvalidInput(format!(
            "Phase {} must last at least one week",
            pos + 1
        )));
    }
    Ok(())
}

/// First day of a span of `weeks` whole weeks ending on `end`.
fn span_start(end: NaiveDate, weeks: u32) -> Result<NaiveDate> {
    end.checked_sub_days(Days::new(u64::from(weeks) * 7))
        .and_then(|d| d.checked_add_days(Days::new(1)))
        .ok_or_else(|| {
            AppError::InvalidInput(format!("{} weeks before {} is out of range", weeks, end))
        })
}

/// Walk the phases from last to first, each ending the day before the
/// following one starts. `order` is 1-based from the earliest phase.
fn partition_backward(
    phases: &[PhaseDefinition],
    end_date: NaiveDate,
) -> Result<Vec<CalculatedPhase>> {
    let mut calculated = Vec::with_capacity(phases.len());
    let mut phase_end = end_date;

    for (index, phase) in phases.iter().enumerate().rev() {
        let phase_start = span_start(phase_end, phase.duration_weeks)?;
        calculated.push(CalculatedPhase {
            phase_type: phase.phase_type,
            order: index as u32 + 1,
            duration_weeks: phase.duration_weeks,
            start_date: phase_start,
            end_date: phase_end,
        });
        phase_end = phase_start.pred_opt().ok_or_else(|| {
            AppError::InvalidInput(format!("Phase {} starts out of range", index + 1))
        })?;
    }

    calculated.reverse();
    Ok(calculated)
}
