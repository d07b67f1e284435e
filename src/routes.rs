// Route path constants - single source of truth for all API paths

pub const EMPLOYEES: &str = "/api/v1/employees";
pub const EMPLOYEE: &str = "/api/v1/employees/{id}";
