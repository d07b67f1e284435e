use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::models::{ApiResponse, Employee, EmployeeInput};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// PUT /api/v1/employees/{id} handler - Update one employee
///
/// Overwrites name, email, phoneNumber and jobTitle in place; the stored
/// id never changes and an id in the body is ignored.
#[utoipa::path(
    put,
    path = routes::EMPLOYEE,
    params(
        ("id" = String, Path, description = "Integer id of the employee; non-integer values get 400 \"Id invalid\"")
    ),
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Employee updated", body = ApiResponse<Employee>),
        (status = 400, description = "Invalid or unknown id", body = ApiResponse<serde_json::Value>)
    ),
    tag = "employees"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), ApiError> {
    // the id guard runs before the body is considered
    let id = parse_id(&id_str)?;
    let Json(input) = body?;

    match state.store.update(id, input) {
        Some(employee) => {
            tracing::info!("Updated employee with id: {}", id);
            Ok((StatusCode::OK, Json(ApiResponse::success(employee))))
        }
        None => {
            tracing::info!("Employee not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}
