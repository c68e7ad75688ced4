//! JWT claims embedded in session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload of every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the employee's `matricula`.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token identifier.
    pub jti: Uuid,
}

impl Claims {
    /// Claims for `matricula`, valid from `issued_at` until `expires_at`.
    pub fn new(matricula: &str, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: matricula.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        }
    }

    /// The employee identifier carried by this token.
    pub fn matricula(&self) -> &str {
        &self.sub
    }
}
