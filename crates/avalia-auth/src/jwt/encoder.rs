//! Signed session token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use avalia_core::config::AuthConfig;
use avalia_core::error::AppError;

use super::claims::Claims;

/// Upper bound on the access token lifetime (one year).
const MAX_TTL_MINUTES: u64 = 60 * 24 * 365;

/// A freshly signed access token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact JWS string.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Creates HS256-signed access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    access_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let minutes = config.jwt_access_ttl_minutes.min(MAX_TTL_MINUTES) as i64;
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: Duration::minutes(minutes),
        }
    }

    /// Issue an access token whose subject is `matricula`.
    pub fn issue(&self, matricula: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + self.access_ttl;
        self.sign(&Claims::new(matricula, now, expires_at))
            .map(|token| IssuedToken { token, expires_at })
    }

    /// Sign arbitrary claims with the configured key.
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }
}
