use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Response;

use crate::db;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// `GET /events`: every event, soonest first.
pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = db::events::list_events(&state.pool)
        .await
        .map_err(AppError::database("Failed to retrieve events"))?;

    Ok(success(events))
}

/// `GET /events/{id}`
pub async fn get_event(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let invalid_id = || AppError::ValidationError("Invalid event ID".to_string());
    let Path(raw_id) = raw_id.map_err(|_| invalid_id())?;
    let id = raw_id
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid_id())?;
    if id <= 0 {
        return Err(AppError::ValidationError(
            "Event ID must be positive".to_string(),
        ));
    }

    let event = db::events::find_event(&state.pool, id)
        .await
        .map_err(AppError::database("Failed to retrieve event"))?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok(success(event))
}
