//! Observability subsystem
//!
//! Structured logging through `tracing`:
//! - one log line = one event, named by [`Event`]
//! - human-readable or JSON output
//! - filtering through `RUST_LOG`
//!
//! # Usage
//!
//! ```ignore
//! use stray_api::observability::{init_logging, Event, LogFormat};
//!
//! init_logging(LogFormat::Json)?;
//! tracing::info!(event = %Event::RecordCreated, collection = "animal", "record created");
//! ```

mod events;

pub use events::Event;

use std::fmt;

use clap::ValueEnum;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "stray_api=info,tower_http=info";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Logging could not be initialized
#[derive(Debug, thiserror::Error)]
#[error("failed to initialize logging: {0}")]
pub struct ObservabilityError(String);

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(format: LogFormat) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .try_init(),
    };

    result.map_err(|e| ObservabilityError(e.to_string()))
}
