//! Typed outcomes of failed authentication attempts.

use thiserror::Error;

use internhub_core::error::{AppError, ErrorKind};

/// Why a login or registration attempt did not produce a session.
///
/// Credential mismatches never say which part was wrong, so callers cannot
/// probe which emails are registered.
#[derive(Debug, Clone, Error)]
pub enum AuthFailure {
    /// No account in the requested role slot matches the email and secret.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// Registration secret shorter than the configured minimum.
    #[error("Password must be at least {min_length} characters long")]
    WeakSecret {
        /// Minimum accepted length.
        min_length: usize,
    },
    /// Registration email already present in some role slot.
    #[error("User with this email already exists")]
    DuplicateEmail,
    /// A backend fault (local storage write, hashing).
    #[error(transparent)]
    Internal(#[from] AppError),
}

impl AuthFailure {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::WeakSecret { .. } => "weak_secret",
            Self::DuplicateEmail => "duplicate_email",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::InvalidCredentials => AppError::authentication(failure.to_string()),
            AuthFailure::WeakSecret { .. } => AppError::validation(failure.to_string()),
            AuthFailure::DuplicateEmail => AppError::new(ErrorKind::Conflict, failure.to_string()),
            AuthFailure::Internal(err) => err,
        }
    }
}
