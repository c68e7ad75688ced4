//! Seed bootstrap data.

use clap::Args;

use avalia_core::config::AppConfig;
use avalia_core::error::AppError;
use avalia_service::Seeder;

use crate::output::{self, OutputFormat};

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Password for the `admin` employee (default: admin123)
    #[arg(long)]
    pub admin_password: Option<String>,
}

/// Execute the seed command
pub async fn execute(
    args: &SeedArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let repos = super::connect_repositories(config).await?;
    let report = Seeder::new(repos.clone(), &config.auth)
        .run(args.admin_password.as_deref())
        .await?;
    repos.close().await;

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => return Err(AppError::internal(format!("Serialization error: {e}"))),
        },
        OutputFormat::Table => {
            for label in &report.created {
                output::print_success(&format!("Criado: {label}"));
            }
            for label in &report.skipped {
                println!("  Já existente: {label}");
            }
        }
    }
    Ok(())
}
