use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::models::ApiResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};
use serde_json::Value as JsonValue;

/// DELETE /api/v1/employees/{id} handler - Delete one employee
///
/// Success carries `data: null`; the freed id is never reassigned.
#[utoipa::path(
    delete,
    path = routes::EMPLOYEE,
    params(
        ("id" = String, Path, description = "Integer id of the employee; non-integer values get 400 \"Id invalid\"")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Invalid or unknown id", body = ApiResponse<serde_json::Value>)
    ),
    tag = "employees"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<JsonValue>>), ApiError> {
    let id = parse_id(&id_str)?;

    match state.store.remove(id) {
        Some(true) => {
            tracing::info!("Deleted employee with id: {}", id);
            Ok((StatusCode::OK, Json(ApiResponse::success_empty())))
        }
        Some(false) => Err(ApiError::DeleteFailed),
        None => {
            tracing::info!("Employee not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}
