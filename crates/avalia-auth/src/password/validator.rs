//! Password policy for new and changed passwords.

use avalia_core::config::AuthConfig;
use avalia_core::error::AppError;

/// Enforces the configured minimum length and, optionally, a zxcvbn score.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
    min_strength: u8,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            min_strength: config.password_min_strength,
        }
    }

    /// Check `password` against the policy.
    ///
    /// `user_inputs` (identifier, name, email) are penalized by the
    /// strength estimator when the strength check is enabled.
    pub fn validate(&self, password: &str, user_inputs: &[&str]) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "A senha deve ter pelo menos {} caracteres",
                self.min_length
            )));
        }

        if self.min_strength > 0 {
            let estimate = zxcvbn::zxcvbn(password, user_inputs);
            if (estimate.score() as u8) < self.min_strength {
                return Err(AppError::validation(
                    "Senha muito fraca; escolha uma senha mais difícil de adivinhar",
                ));
            }
        }

        Ok(())
    }
}
