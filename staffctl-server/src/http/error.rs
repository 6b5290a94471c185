//! API error types with IntoResponse
//!
//! Every error renders as the `{"error": "..."}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::response::JsonReply;
use crate::db::DbError;
use crate::models::ErrorBody;

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// `employeeId` path segment is not an integer (400)
    #[error("invalid employee ID")]
    InvalidEmployeeId,

    /// `jobId` path segment is not an integer (400)
    #[error("invalid job ID")]
    InvalidJobId,

    /// Body is not JSON of the expected shape (400)
    #[error("invalid JSON payload")]
    InvalidPayload,

    /// Insert failed; the cause is logged, not returned (500)
    #[error("failed to add employee job")]
    AddJobFailed(#[source] DbError),

    /// Any other store failure, message passed through (500)
    #[error(transparent)]
    Database(#[from] DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidEmployeeId | Self::InvalidJobId | Self::InvalidPayload => {
                StatusCode::BAD_REQUEST
            }
            Self::AddJobFailed(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::AddJobFailed(e) => tracing::error!("Failed to add employee job: {}", e),
            Self::Database(e) => tracing::error!("Database error: {}", e),
            _ => tracing::debug!("Rejected request: {}", self),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status(), JsonReply(body)).into_response()
    }
}
