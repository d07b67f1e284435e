use utoipa::OpenApi;

use crate::handlers;
use crate::models::{ApiResponse, Employee, EmployeeInput};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "employee-api",
        version = "1.0.0",
        description = "A minimal in-memory employee CRUD service"
    ),
    paths(
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Employee,
            EmployeeInput,
            ApiResponse<Employee>,
            ApiResponse<Vec<Employee>>,
            ApiResponse<serde_json::Value>
        )
    ),
    tags(
        (name = "employees", description = "Employee CRUD operations")
    )
)]
pub struct ApiDoc;
