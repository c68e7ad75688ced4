//! CLI command definitions and dispatch.

pub mod employee;
pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use avalia_core::config::AppConfig;
use avalia_core::error::AppError;
use avalia_database::Repositories;

use crate::output::OutputFormat;

/// Avalia: personnel performance review backend
#[derive(Debug, Parser)]
#[command(name = "avalia", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to load (falls back to `AVALIA_ENV`, then `development`)
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Create the administrator, sample employees and the current cycle
    Seed(seed::SeedArgs),
    /// Employee management
    Employee(employee::EmployeeArgs),
}

impl Cli {
    /// Whether the server is being started.
    pub fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve(_))
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Seed(args) => seed::execute(args, &config, self.format).await,
            Commands::Employee(args) => employee::execute(args, &config, self.format).await,
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        let env = self
            .env
            .clone()
            .or_else(|| std::env::var("AVALIA_ENV").ok())
            .unwrap_or_else(|| "development".to_string());
        AppConfig::load_from(&self.config_dir, &env)
    }
}

/// Helper: connect the configured backend without touching the schema.
pub async fn connect_repositories(config: &AppConfig) -> Result<Repositories, AppError> {
    let mut database = config.database.clone();
    database.auto_migrate = false;
    let repos = Repositories::connect(&database).await?;
    tracing::debug!(backend = repos.backend_name(), "Repositories connected");
    Ok(repos)
}

/// Helper: prompt for a password with confirmation.
pub fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirme a senha", "As senhas não conferem")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
