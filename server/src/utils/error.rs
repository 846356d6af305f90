use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Database error: {message}")]
    DatabaseError {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Migration error")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Internal server error")]
    InternalServerError(String),
}

impl AppError {
    /// Wraps a store failure with the message the client should see.
    pub fn database(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::DatabaseError { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MigrationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::DatabaseError { .. } => "DATABASE_ERROR",
            AppError::MigrationError(_) => "MIGRATION_ERROR",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::InternalServerError(msg) => msg.clone(),
            AppError::MethodNotAllowed => "Method not allowed.".to_string(),
            AppError::DatabaseError { message, .. } => message.to_string(),
            AppError::MigrationError(_) => "Internal server error".to_string(),
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg) | AppError::NotFound(msg) => {
                tracing::debug!(error = ?self, message = %msg, "Rejected request");
            }
            AppError::MethodNotAllowed => {
                tracing::debug!("Rejected request: method not allowed");
            }
            AppError::InternalServerError(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::DatabaseError { message, source } => {
                error!(error = ?source, message = %message, "Database error");
            }
            AppError::MigrationError(e) => {
                error!(error = ?e, "Migration error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        error_response(self.code(), self.public_message(), self.status_code())
    }
}
