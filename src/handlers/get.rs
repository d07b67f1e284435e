use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::models::{ApiResponse, Employee};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// GET /api/v1/employees/{id} handler - Fetch one employee
#[utoipa::path(
    get,
    path = routes::EMPLOYEE,
    params(
        ("id" = String, Path, description = "Integer id of the employee; non-integer values get 400 \"Id invalid\"")
    ),
    responses(
        (status = 200, description = "Employee found", body = ApiResponse<Employee>),
        (status = 400, description = "Invalid or unknown id", body = ApiResponse<serde_json::Value>)
    ),
    tag = "employees"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), ApiError> {
    let id = parse_id(&id_str)?;

    match state.store.get(id) {
        Some(employee) => {
            tracing::info!("Retrieved employee with id: {}", id);
            Ok((StatusCode::OK, Json(ApiResponse::success(employee))))
        }
        None => {
            tracing::info!("Employee not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}
