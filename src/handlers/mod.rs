pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use get::get_handler;
pub use list::list_handler;
pub use update::update_handler;

use crate::error::ApiError;

/// Path-parameter guard shared by the `{id}` routes
///
/// The segment must parse as an integer before any handler touches the
/// store; otherwise the request short-circuits with 400 "Id invalid".
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidId)
}
