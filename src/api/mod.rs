//! REST API module.
//!
//! One handler module per resource group; routes follow the browser page's
//! contract.

mod articles;
mod saved;
mod scrape;

pub use articles::*;
pub use saved::*;
pub use scrape::*;

use axum::Json;

use crate::errors::AppError;

/// Handler result: a bare JSON value on success, a serialized error body on
/// failure.
pub type ApiResult<T> = Result<Json<T>, AppError>;
