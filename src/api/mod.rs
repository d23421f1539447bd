//! REST API module.
//!
//! Contains all API routes and handlers. Handlers validate request bodies, call the
//! repository, and map outcomes onto status codes.

mod collections;
mod prompts;
mod versions;

pub use collections::*;
pub use prompts::*;
pub use versions::*;

use validator::Validate;

use crate::errors::AppError;

/// Result type returned by every handler.
pub type ApiResult<T> = Result<T, AppError>;

/// Check the declared field limits of a request body.
fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request.validate().map_err(AppError::from)
}
