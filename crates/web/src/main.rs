//! Anggar web server.

use clap::{Parser, Subcommand};

use common::telemetry::init_tracing;
use web_lib::config::WebConfig;

#[derive(Parser)]
#[command(name = "anggar")]
#[command(about = "Anggar sign-in and sign-up web application")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides WEB_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides WEB_PORT
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing("info,tower_http=debug");

    let cli = Cli::parse();
    let mut config = WebConfig::from_env()?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            web_lib::run_server(config).await?;
        }
    }

    Ok(())
}
