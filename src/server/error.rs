use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::content::ContentError;
use crate::draft::DraftError;
use crate::state::AdminError;
use crate::storage::StorageError;

/// Error returned by the admin API, rendered as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    /// Missing or wrong passcode
    Unauthorized,
    Admin(AdminError),
    /// A background task died before finishing
    Task(tokio::task::JoinError),
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Task(err)
    }
}

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        ApiError::Admin(err)
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        ApiError::Admin(err.into())
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        ApiError::Admin(err.into())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Admin(err.into())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Admin(AdminError::Content(ContentError::Parse(_)))
            | ApiError::Admin(AdminError::Content(ContentError::Schema(_))) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Admin(AdminError::Draft(DraftError::IndexOutOfRange { .. })) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Admin(AdminError::Draft(_)) => StatusCode::BAD_REQUEST,
            ApiError::Admin(AdminError::Storage(StorageError::QuotaExceeded { .. })) => {
                StatusCode::INSUFFICIENT_STORAGE
            }
            ApiError::Admin(AdminError::Storage(_)) | ApiError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Unauthorized => "Invalid admin passcode".to_string(),
            ApiError::Admin(err) => err.to_string(),
            ApiError::Task(err) => format!("Admin task failed: {}", err),
        };
        if status.is_server_error() {
            tracing::error!("{}", message);
        } else {
            tracing::debug!("Rejected admin request ({}): {}", status, message);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
