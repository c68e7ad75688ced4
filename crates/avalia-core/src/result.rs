//! Convenience result type alias for Avalia.

use crate::error::AppError;

/// A specialized `Result` type for Avalia operations.
pub type AppResult<T> = Result<T, AppError>;
