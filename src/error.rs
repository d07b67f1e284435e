use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value as JsonValue;

use crate::models::ApiResponse;

/// Custom error type for API endpoints
///
/// Every variant renders as a JSON envelope with `data: null`. The fixed
/// descriptions match the wire contract exactly; body rejections keep the
/// extractor's status and message.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The `{id}` path segment is not an integer
    InvalidId,
    /// No employee with the requested id
    NotFound,
    /// The store rejected an append
    AddFailed,
    /// The store rejected a removal
    DeleteFailed,
    /// The request body failed JSON deserialization
    InvalidBody { status: StatusCode, message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, description) = match self {
            ApiError::InvalidId => (StatusCode::BAD_REQUEST, "Id invalid".to_string()),
            ApiError::NotFound => (
                StatusCode::BAD_REQUEST,
                "Employee id does not exists".to_string(),
            ),
            ApiError::AddFailed => (StatusCode::BAD_REQUEST, "Add failed".to_string()),
            ApiError::DeleteFailed => (StatusCode::BAD_REQUEST, "Delete failed".to_string()),
            ApiError::InvalidBody { status, message } => (status, message),
        };

        let body = Json(ApiResponse::<JsonValue> {
            status: i32::from(status.as_u16()),
            description,
            data: None,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
