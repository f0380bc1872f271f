//! Convenience result type alias for InternHub.

use crate::error::AppError;

/// A specialized `Result` type for InternHub operations.
pub type AppResult<T> = Result<T, AppError>;
