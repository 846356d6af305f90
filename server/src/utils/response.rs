use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageResponse<T>
where
    T: Serialize,
{
    pub message: String,
    pub booking: T,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub code: String,
}

/// Plain 200 with the payload as the body; list endpoints return bare arrays.
pub fn success<T>(data: T) -> Response
where
    T: Serialize,
{
    (StatusCode::OK, Json(data)).into_response()
}

pub fn confirmation<T>(message: impl Into<String>, booking: T) -> Response
where
    T: Serialize,
{
    let body = MessageResponse {
        message: message.into(),
        booking,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub fn error(code: &str, message: impl Into<String>, status: StatusCode) -> Response {
    let body = ApiErrorResponse {
        error: message.into(),
        code: code.to_string(),
    };

    (status, Json(body)).into_response()
}
