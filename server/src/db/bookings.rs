use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use sqlx::SqlitePool;

use crate::models::{Booking, BookingWithEvent, NewBooking};

const BOOKINGS_WITH_EVENT: &str = "SELECT b.id, b.event_id, b.user_email, b.timestamp, e.title AS event_title
     FROM bookings b
     JOIN events e ON b.event_id = e.id";

/// Stored as fixed-width text (always six fractional digits, `Z` suffix) so
/// `ORDER BY timestamp` is chronological.
fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Rounds up to whole microseconds, the stored precision, so a booking is
/// never recorded as earlier than the moment it was made.
fn round_up_to_micros(instant: DateTime<Utc>) -> DateTime<Utc> {
    let truncated = instant.trunc_subsecs(6);
    if truncated < instant {
        truncated + Duration::microseconds(1)
    } else {
        truncated
    }
}

pub async fn create_booking(pool: &SqlitePool, booking: &NewBooking) -> Result<Booking, sqlx::Error> {
    let timestamp = round_up_to_micros(Utc::now());

    let id = sqlx::query("INSERT INTO bookings (event_id, user_email, timestamp) VALUES (?, ?, ?)")
        .bind(booking.event_id)
        .bind(&booking.user_email)
        .bind(encode_timestamp(&timestamp))
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(Booking {
        id,
        event_id: booking.event_id,
        user_email: booking.user_email.clone(),
        timestamp,
    })
}

pub async fn list_bookings(pool: &SqlitePool) -> Result<Vec<BookingWithEvent>, sqlx::Error> {
    let sql = format!("{BOOKINGS_WITH_EVENT} ORDER BY b.timestamp DESC, b.id DESC");
    sqlx::query_as(&sql).fetch_all(pool).await
}

pub async fn list_bookings_for_email(
    pool: &SqlitePool,
    user_email: &str,
) -> Result<Vec<BookingWithEvent>, sqlx::Error> {
    let sql = format!(
        "{BOOKINGS_WITH_EVENT} WHERE b.user_email = ? ORDER BY b.timestamp DESC, b.id DESC"
    );
    sqlx::query_as(&sql).bind(user_email).fetch_all(pool).await
}
