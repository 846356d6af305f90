use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::Config;
use crate::utils::error::AppError;

pub mod bookings;
pub mod events;

/// Opens the pool and brings the schema up to date.
///
/// Idle connections are never reaped: with `sqlite::memory:` every
/// connection is its own database, so the pool must hold on to them.
pub async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(AppError::database("Invalid database URL"))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(AppError::database("Failed to connect to database"))?;

    tracing::info!("Successfully connected to database");

    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Migrations run successfully");

    Ok(pool)
}

const SAMPLE_EVENTS: [(&str, (i32, u32, u32), &str); 3] = [
    ("Coldplay Concert", (2025, 1, 20), "Mumbai, India"),
    ("Comedy Night", (2025, 1, 25), "Delhi, India"),
    ("Art Exhibition", (2025, 2, 10), "Bangalore, India"),
];

/// Fills an empty `events` table with the demo line-up. Returns how many
/// rows were added.
pub async fn seed_sample_events(pool: &SqlitePool) -> Result<usize, AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
        .fetch_one(pool)
        .await
        .map_err(AppError::database("Failed to count events"))?;

    if count > 0 {
        tracing::debug!("Seed: {} event(s) already present, skipping", count);
        return Ok(0);
    }

    for (title, (year, month, day), location) in SAMPLE_EVENTS {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::InternalServerError(format!("bad seed date for {title}")))?;
        events::insert_event(pool, title, date, location)
            .await
            .map_err(AppError::database("Failed to seed events"))?;
    }

    tracing::info!("Seed: added {} sample event(s)", SAMPLE_EVENTS.len());
    Ok(SAMPLE_EVENTS.len())
}
