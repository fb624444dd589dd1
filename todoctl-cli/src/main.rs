//! todoctl - SQLite-backed todo API server
//!
//! Resolves configuration once at startup (flags, then environment, then
//! defaults), opens the connection pool, and hands off to the server.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use todoctl_server::{db, run_server, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "todoctl", version, about = "SQLite-backed todo API server")]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Database file path (overrides TODO_SQLITE_DB_PATH / SQLITE_DB_PATH)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    let db_path = cli.db_path.unwrap_or_else(db::default_db_path);
    info!("Opening database at {}", db_path.display());

    let pool = db::create_pool(&db_path)
        .await
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    let config = ServerConfig {
        bind_addr: cli.bind,
    };

    run_server(pool, config).await.context("server error")?;

    Ok(())
}
