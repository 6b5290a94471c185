//! staffctl - HTTP API over the employee job store
//!
//! Opens the SQLite database, then serves the JSON API until Ctrl+C or
//! SIGTERM. Settings come from flags, the environment, or a `.env` file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use staffctl_server::{run_server, Database, ServerConfig};
use tracing::info;

mod tracing_setup;

/// Default database location, relative to the working directory
const DEFAULT_DB_PATH: &str = "../db/employees.db";

/// Default bind address; a bare port binds all interfaces
const DEFAULT_BIND: &str = ":8080";

#[derive(Parser, Debug)]
#[command(
    name = "staffctl",
    author,
    version,
    about = "JSON API for employees and their job assignments"
)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, env = "DB_PATH", default_value = DEFAULT_DB_PATH)]
    db_path: PathBuf,

    /// Address to bind the API to (e.g. :8080 or 127.0.0.1:8080)
    #[arg(long, short = 'b', env = "BIND_JSON", default_value = DEFAULT_BIND)]
    bind: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; flags and the process environment still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let db = Database::open(&cli.db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", cli.db_path.display()))?;
    info!("Database: {}", cli.db_path.display());

    info!("Starting the API server");
    let config = ServerConfig { bind: cli.bind };
    let served = run_server(db.clone(), config).await.context("Server error");

    db.close().await;
    served
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "staffctl",
            "--db-path",
            "/tmp/people.db",
            "--bind",
            "127.0.0.1:9000",
            "--debug",
        ])
        .unwrap();

        assert_eq!(cli.db_path, PathBuf::from("/tmp/people.db"));
        assert_eq!(cli.bind, "127.0.0.1:9000");
        assert!(cli.debug);
    }
}
