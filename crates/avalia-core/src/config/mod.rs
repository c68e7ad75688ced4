//! Application configuration schemas.
//!
//! All configuration structs are deserialized through the `config` crate.
//! Each sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, PLACEHOLDER_JWT_SECRET};
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environments in which the placeholder JWT secret is tolerated.
const RELAXED_ENVIRONMENTS: [&str; 2] = ["development", "test"];

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration sources
/// (`default.toml`, the environment overlay, and `AVALIA__*` variables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name of the active environment (`development`, `test`, `production`, ...).
    #[serde(default = "default_environment")]
    pub environment: String,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config/` for the given environment.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from a custom directory.
    ///
    /// Merges `{dir}/default.toml` with `{dir}/{env}.toml` and environment
    /// variables prefixed with `AVALIA__` (e.g. `AVALIA__SERVER__PORT=9000`).
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .set_default("environment", env)?
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("AVALIA")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("auth.admin_matriculas")
                    .with_list_parse_key("server.cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that are unsafe or unusable.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if self.auth.jwt_secret == PLACEHOLDER_JWT_SECRET
            && !RELAXED_ENVIRONMENTS.contains(&self.environment.as_str())
        {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret still holds the placeholder value in environment '{}'",
                self.environment
            )));
        }
        if self.auth.jwt_access_ttl_minutes == 0 {
            return Err(AppError::configuration(
                "auth.jwt_access_ttl_minutes must be greater than zero",
            ));
        }
        if self.auth.password_min_strength > 4 {
            return Err(AppError::configuration(
                "auth.password_min_strength must be between 0 and 4",
            ));
        }
        Ok(())
    }
}

fn default_environment() -> String {
    "development".to_string()
}
