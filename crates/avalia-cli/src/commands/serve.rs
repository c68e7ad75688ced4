//! Start the Avalia server.

use clap::Args;

use avalia_core::config::AppConfig;
use avalia_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip applying pending migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if args.no_migrate {
        config.database.auto_migrate = false;
    }

    println!("Starting Avalia server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    avalia_api::run_server(config).await
}
