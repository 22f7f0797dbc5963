// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - calendar engine and its request-level glue.

pub mod calendar;
pub mod periodization;
pub mod training_log;
pub mod weekly_stats;

pub use calendar::structure_log;
pub use periodization::build_cycle;
pub use training_log::TrainingLogService;
pub use weekly_stats::{accumulate_weekly_totals, weekly_series};
