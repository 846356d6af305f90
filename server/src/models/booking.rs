use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A validated booking request, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub event_id: i64,
    pub user_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub event_id: i64,
    pub user_email: String,
    pub timestamp: DateTime<Utc>,
}

/// Booking row joined with the title of the event it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingWithEvent {
    pub id: i64,
    pub event_id: i64,
    pub user_email: String,
    pub timestamp: DateTime<Utc>,
    pub event_title: String,
}
