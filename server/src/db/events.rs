use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::Event;

pub async fn list_events(pool: &SqlitePool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as("SELECT id, title, date, location FROM events ORDER BY date ASC, id ASC")
        .fetch_all(pool)
        .await
}

pub async fn find_event(pool: &SqlitePool, id: i64) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as("SELECT id, title, date, location FROM events WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Only used for seeding; the HTTP surface never writes events.
pub async fn insert_event(
    pool: &SqlitePool,
    title: &str,
    date: NaiveDate,
    location: &str,
) -> Result<Event, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO events (title, date, location) VALUES (?, ?, ?) RETURNING id, title, date, location",
    )
    .bind(title)
    .bind(date)
    .bind(location)
    .fetch_one(pool)
    .await
}
