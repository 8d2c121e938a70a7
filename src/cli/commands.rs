//! CLI command implementations
//!
//! Boot order:
//! 1. Install logging
//! 2. Resolve server and database settings
//! 3. Open the store (or fall back to none)
//! 4. Serve until Ctrl-C

use std::sync::Arc;

use crate::http_server::{AppState, HttpServer, HttpServerConfig};
use crate::observability::{init_logging, Event};
use crate::storage::{self, Database, DatabaseConfig};

use super::args::Cli;
use super::errors::CliResult;

/// Name of the process-local database selected by `--in-memory`
const IN_MEMORY_DATABASE: &str = "stray_animals";

/// Boot the service and serve until shutdown
pub async fn serve(cli: Cli) -> CliResult<()> {
    init_logging(cli.log_format)?;

    tracing::info!(
        event = %Event::BootStart,
        version = env!("CARGO_PKG_VERSION"),
        log_format = %cli.log_format,
        "starting"
    );

    let server_config = server_config(&cli, HttpServerConfig::from_env());
    let database_config = DatabaseConfig::from_env();

    let database = open_database(&cli, &database_config).await;

    tracing::info!(
        event = %Event::ConfigLoaded,
        address = %server_config.socket_addr(),
        database_url_set = database_config.is_url_set(),
        database_name_set = database_config.is_name_set(),
        store = database.is_some(),
        "configuration loaded"
    );

    let state = Arc::new(AppState::new(
        database,
        database_config,
        server_config.diagnostic_timeout(),
    ));

    HttpServer::with_state(server_config, state).start().await?;
    Ok(())
}

/// Applies `--host` and `--port` on top of the environment settings
fn server_config(cli: &Cli, mut config: HttpServerConfig) -> HttpServerConfig {
    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    config
}

async fn open_database(cli: &Cli, config: &DatabaseConfig) -> Option<Database> {
    if cli.in_memory {
        tracing::info!(event = %Event::MemoryStoreSelected, database = IN_MEMORY_DATABASE, "using in-memory store");
        return Some(Database::in_memory(IN_MEMORY_DATABASE));
    }

    storage::open_configured(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::try_parse_from(["stray-api", "--host", "127.0.0.1", "--port", "9001"]).unwrap();
        let env = HttpServerConfig {
            host: "10.0.0.1".to_string(),
            port: 7000,
            ..Default::default()
        };

        let config = server_config(&cli, env);
        assert_eq!(config.socket_addr(), "127.0.0.1:9001");
    }

    #[test]
    fn test_environment_kept_without_flags() {
        let cli = Cli::try_parse_from(["stray-api"]).unwrap();
        let config = server_config(&cli, HttpServerConfig::with_port(7000));
        assert_eq!(config.port, 7000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[tokio::test]
    async fn test_in_memory_flag_selects_memory_store() {
        let cli = Cli::try_parse_from(["stray-api", "--in-memory"]).unwrap();
        let database = open_database(&cli, &DatabaseConfig::default()).await;
        assert_eq!(database.map(|db| db.name().to_string()).as_deref(), Some(IN_MEMORY_DATABASE));
    }

    #[tokio::test]
    async fn test_unconfigured_runs_without_store() {
        let cli = Cli::try_parse_from(["stray-api"]).unwrap();
        assert!(open_database(&cli, &DatabaseConfig::default()).await.is_none());
    }
}
