use serde::{Deserialize, Serialize};

/// An employee record as stored and as returned on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub job_title: String,
}

/// Request body for create and update operations
///
/// A client-supplied `id` is accepted and ignored; ids are assigned by the
/// server. Any other unknown field is rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployeeInput {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub job_title: String,
}

/// Uniform response envelope for every endpoint
///
/// `status` mirrors the HTTP status code. `data` is always serialized,
/// as `null` on paths that produce no value.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiResponse<T> {
    pub status: i32,
    pub description: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 envelope carrying a payload
    pub fn success(data: T) -> Self {
        ApiResponse {
            status: 200,
            description: "Success".to_string(),
            data: Some(data),
        }
    }

    /// 200 envelope with `data: null`, used by delete
    pub fn success_empty() -> Self {
        ApiResponse {
            status: 200,
            description: "Success".to_string(),
            data: None,
        }
    }
}
