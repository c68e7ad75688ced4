//! Database migration management commands.

use clap::{Args, Subcommand};

use avalia_core::config::{AppConfig, DatabaseProvider};
use avalia_core::error::AppError;
use avalia_database::DatabasePool;
use avalia_database::connection::mask_password;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.database.provider != DatabaseProvider::Postgres {
        return Err(AppError::configuration(
            "Migrations require database.provider = \"postgres\"",
        ));
    }

    match &args.command {
        MigrateCommand::Run => {
            println!(
                "Running database migrations on {}...",
                mask_password(&config.database.url)
            );
            let db = DatabasePool::connect(&config.database).await?;
            avalia_database::migration::run_migrations(db.pool()).await?;
            db.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
