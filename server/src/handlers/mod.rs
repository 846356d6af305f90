use axum::response::Response;
use serde::Serialize;

use crate::utils::error::AppError;
use crate::utils::response::success;

pub mod bookings;
pub mod events;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    success(HealthPayload {
        status: "healthy",
        service: "booking-api",
    })
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
