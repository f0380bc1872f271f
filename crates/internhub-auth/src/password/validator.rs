//! Secret policy applied at registration.

use tracing::warn;

use internhub_core::config::AuthConfig;

use crate::error::AuthFailure;

/// Validates registration secrets against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum secret length, in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Rejects secrets shorter than the minimum length with
    /// [`AuthFailure::WeakSecret`].
    pub fn validate(&self, password: &str) -> Result<(), AuthFailure> {
        if password.chars().count() < self.min_length {
            return Err(AuthFailure::WeakSecret {
                min_length: self.min_length,
            });
        }
        Ok(())
    }

    /// zxcvbn strength estimate, penalizing secrets derived from `user_inputs`.
    pub fn strength(&self, password: &str, user_inputs: &[&str]) -> zxcvbn::Score {
        zxcvbn::zxcvbn(password, user_inputs).score()
    }

    /// Logs a warning for secrets that pass the length policy but are easy
    /// to guess. Advisory only.
    pub fn warn_if_guessable(&self, password: &str, user_inputs: &[&str]) {
        let score = self.strength(password, user_inputs);
        if score < zxcvbn::Score::Two {
            warn!(score = ?score, "Accepted a guessable secret at registration");
        }
    }
}
