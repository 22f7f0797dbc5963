// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Training Calendar: date bucketing and aggregation for an endurance
//! training log.
//!
//! This crate folds a flat activity history into a gap-filled
//! year/month/week/day calendar, reduces it to a weekly trend series, and
//! schedules week-aligned training phases backward from a goal date.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
