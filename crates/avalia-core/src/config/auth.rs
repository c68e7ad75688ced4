//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder signing secret shipped in the default configuration.
pub const PLACEHOLDER_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Clock-skew tolerance applied when checking `exp`.
    #[serde(default = "default_leeway")]
    pub jwt_leeway_seconds: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Minimum zxcvbn score (0-4) a new password must reach. 0 disables the check.
    #[serde(default)]
    pub password_min_strength: u8,
    /// Employees allowed to read every final result regardless of reporting line.
    #[serde(default = "default_admins")]
    pub admin_matriculas: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            jwt_leeway_seconds: default_leeway(),
            password_min_length: default_password_min(),
            password_min_strength: 0,
            admin_matriculas: default_admins(),
        }
    }
}

fn default_jwt_secret() -> String {
    PLACEHOLDER_JWT_SECRET.to_string()
}

fn default_access_ttl() -> u64 {
    30
}

fn default_leeway() -> u64 {
    5
}

fn default_password_min() -> usize {
    6
}

fn default_admins() -> Vec<String> {
    vec!["admin".to_string()]
}
