//! Document storage subsystem
//!
//! Translates typed records into persisted documents and bounded queries
//! into document lists. The database itself is external; this layer is a
//! thin driver interface over it.
//!
//! # Backends
//!
//! - `MongoStore`: used when `DATABASE_URL` and `DATABASE_NAME` are set
//! - `MemoryStore`: process-local, for development and tests

mod config;
mod database;
mod errors;
mod memory;
mod mongo;
mod store;

pub use config::{DatabaseConfig, DATABASE_NAME_VAR, DATABASE_URL_VAR};
pub use database::Database;
pub use errors::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::DocumentStore;

use crate::observability::Event;

/// Opens the configured MongoDB database.
///
/// Returns `None` when either setting is missing or the client cannot be
/// built; the service keeps running without a store in both cases.
pub async fn open_configured(config: &DatabaseConfig) -> Option<Database> {
    let Some((url, name)) = config.settings() else {
        tracing::warn!(
            event = %Event::DatabaseNotConfigured,
            url_set = config.is_url_set(),
            name_set = config.is_name_set(),
            "database settings incomplete, running without a store"
        );
        return None;
    };

    match Database::connect(url, name).await {
        Ok(database) => {
            tracing::info!(event = %Event::DatabaseReady, database = name, "database client ready");
            Some(database)
        }
        Err(e) => {
            tracing::error!(event = %Event::DatabaseUnavailable, error = %e, "database client creation failed");
            None
        }
    }
}
