//! rosterd CLI - serve the hero and team roster HTTP API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rosterd_server::ServerConfig;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "rosterd",
    author,
    version,
    about = "Hero and team roster HTTP service"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Database connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; deployments usually set DATABASE_URL directly
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => {
            let defaults = ServerConfig::default();
            let config = ServerConfig {
                bind_addr: args.bind,
                database_url: args.database_url.unwrap_or(defaults.database_url),
            };

            tracing::info!(bind = %config.bind_addr, "Starting rosterd");
            rosterd_server::run_server(config)
                .await
                .context("server exited with error")
        }
    }
}
