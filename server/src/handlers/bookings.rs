use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Response;

use crate::db;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{confirmation, success};
use crate::utils::validation::{is_valid_email, parse_booking_request, INVALID_EMAIL};

/// `POST /bookings`
///
/// The body is taken raw so that an empty or malformed payload gets the same
/// JSON error shape as every other rejection, whatever the `Content-Type`.
/// Whether `event_id` names a real event is left to the foreign key.
pub async fn create_booking(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let body = body.map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;
    let booking = parse_booking_request(&body)?;

    let created = db::bookings::create_booking(&state.pool, &booking)
        .await
        .map_err(AppError::database("Booking failed"))?;

    tracing::info!(
        booking_id = created.id,
        event_id = created.event_id,
        "Booking confirmed"
    );

    Ok(confirmation("Booking confirmed", created))
}

/// `GET /bookings`: newest first, each with its event title.
pub async fn list_bookings(State(state): State<AppState>) -> Result<Response, AppError> {
    let bookings = db::bookings::list_bookings(&state.pool)
        .await
        .map_err(AppError::database("Failed to retrieve bookings"))?;

    Ok(success(bookings))
}

/// `GET /bookings/user/{email}`
pub async fn list_user_bookings(
    State(state): State<AppState>,
    email: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(email) = email.map_err(|_| AppError::ValidationError(INVALID_EMAIL.to_string()))?;
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(AppError::ValidationError(INVALID_EMAIL.to_string()));
    }

    let bookings = db::bookings::list_bookings_for_email(&state.pool, email)
        .await
        .map_err(AppError::database("Failed to retrieve user bookings"))?;

    Ok(success(bookings))
}
