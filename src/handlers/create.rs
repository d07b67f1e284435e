use crate::error::ApiError;
use crate::models::{ApiResponse, Employee, EmployeeInput};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /api/v1/employees handler - Create an employee
///
/// The server assigns the id; an id in the body is ignored.
#[utoipa::path(
    post,
    path = routes::EMPLOYEES,
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Employee created", body = ApiResponse<Employee>),
        (status = 400, description = "Add failed", body = ApiResponse<serde_json::Value>)
    ),
    tag = "employees"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), ApiError> {
    let Json(input) = body?;
    let employee = state.store.insert(input).ok_or(ApiError::AddFailed)?;

    tracing::info!("Created employee with id: {}", employee.id);
    Ok((StatusCode::OK, Json(ApiResponse::success(employee))))
}
