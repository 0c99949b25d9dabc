//! API error types with IntoResponse
//!
//! Every error body has the shape `{"message": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::DbError;

/// JSON body carrying a single human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Path id is not an integer (400)
    InvalidId,

    /// Request body is not a parseable user (400)
    InvalidData,

    /// No row for the requested id (404)
    NotFound,

    /// Store failure on any route but delete (500, logged)
    Database(DbError),

    /// Store failure while deleting (500, logged)
    DeleteFailed(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId | Self::InvalidData => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::DeleteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::InvalidId => "Invalid ID",
            Self::InvalidData => "Invalid data",
            Self::NotFound => "User not found",
            Self::Database(_) => "Internal Server Error",
            Self::DeleteFailed(_) => "Error deleting user",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::DeleteFailed(e) => tracing::error!("Delete failed: {}", e),
            _ => {}
        }

        (self.status(), Json(ErrorBody::new(self.message()))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound,
            DbError::Sqlx(_) => Self::Database(e),
        }
    }
}
