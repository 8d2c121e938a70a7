//! Shared request state
//!
//! The only process-wide state is the database handle, created once at
//! startup. Handlers never hold state across requests.

use std::time::Duration;

use crate::storage::{Database, DatabaseConfig, StorageError, StorageResult};

/// State shared across handlers
pub struct AppState {
    database: Option<Database>,
    database_config: DatabaseConfig,
    diagnostic_timeout: Duration,
}

impl AppState {
    pub fn new(database: Option<Database>, database_config: DatabaseConfig, diagnostic_timeout: Duration) -> Self {
        Self {
            database,
            database_config,
            diagnostic_timeout,
        }
    }

    /// State backed by a fresh in-memory database
    pub fn in_memory() -> Self {
        Self::new(
            Some(Database::in_memory("memory")),
            DatabaseConfig::default(),
            Duration::from_secs(5),
        )
    }

    /// Returns the database handle, or `StorageError::Unavailable`
    pub fn database(&self) -> StorageResult<&Database> {
        self.database.as_ref().ok_or(StorageError::Unavailable)
    }

    pub fn database_config(&self) -> &DatabaseConfig {
        &self.database_config
    }

    pub fn diagnostic_timeout(&self) -> Duration {
        self.diagnostic_timeout
    }
}
