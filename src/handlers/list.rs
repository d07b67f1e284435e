use crate::models::{ApiResponse, Employee};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /api/v1/employees handler - List all employees
///
/// Returns the full collection in insertion order.
#[utoipa::path(
    get,
    path = routes::EMPLOYEES,
    responses(
        (status = 200, description = "All employees", body = ApiResponse<Vec<Employee>>)
    ),
    tag = "employees"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<Employee>>>) {
    let employees = state.store.list();

    tracing::info!("Listed {} employees", employees.len());
    (StatusCode::OK, Json(ApiResponse::success(employees)))
}
