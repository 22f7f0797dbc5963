// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training Calendar demo
//!
//! Loads a JSON snapshot of activities and races into the in-memory store
//! and prints engine output as JSON:
//!
//! ```text
//! training-calendar log <user_id>
//! training-calendar weekly <user_id> <year>
//! training-calendar cycle <user_id> <request.json>
//! ```
//!
//! The snapshot path comes from `TRAINING_LOG_DATA`.

use training_calendar::{
    config::Config, db::MemoryDb, error::AppError, models::CreateTrainingCycleRequest,
    services::TrainingLogService,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Structured JSON logging on stderr, stdout carries results
    init_logging();

    let config = Config::from_env()?;
    let data_path = config
        .data_path
        .clone()
        .ok_or("TRAINING_LOG_DATA must point to a JSON snapshot")?;
    let db = MemoryDb::load_from_file(&data_path)?;
    let service = TrainingLogService::new(db, &config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let output = match args.as_slice() {
        ["log", user_id] => {
            let log = service.get_structured_log(user_id).await?;
            serde_json::to_string_pretty(&log)?
        }
        ["weekly", user_id, year] => {
            let year: i32 = year
                .parse()
                .map_err(|_| AppError::InvalidInput(format!("Invalid year '{}'", year)))?;
            let stats = service.get_weekly_stats_for_season(user_id, year).await?;
            serde_json::to_string_pretty(&stats)?
        }
        ["cycle", user_id, request_path] => {
            let content = std::fs::read_to_string(request_path)?;
            let request: CreateTrainingCycleRequest = serde_json::from_str(&content)?;
            let cycle = service.plan_training_cycle(user_id, &request).await?;
            serde_json::to_string_pretty(&cycle)?
        }
        _ => {
            eprintln!("usage: training-calendar log USER | weekly USER YEAR | cycle USER FILE");
            std::process::exit(2);
        }
    };

    println!("{}", output);
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("training_calendar=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
