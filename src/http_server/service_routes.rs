//! Service HTTP Routes
//!
//! Liveness, schema description and the database diagnostic. None of
//! these can fail the request.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{Map, Value};

use super::state::AppState;
use crate::observability::Event;
use crate::records::schema_catalog;

/// Message returned by `GET /`
pub const LIVENESS_MESSAGE: &str = "Stray Animal Welfare API is running";

/// Max collection names listed by the diagnostic
const MAX_DIAGNOSTIC_COLLECTIONS: usize = 10;
/// Max characters of an error message echoed by the diagnostic
const MAX_DIAGNOSTIC_ERROR_CHARS: usize = 50;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Database diagnostic report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Create service routes
pub fn service_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/schema", get(schema_handler))
        .route("/test", get(diagnostic_handler))
        .with_state(state)
}

/// Liveness handler
async fn root_handler() -> impl IntoResponse {
    let response = MessageResponse {
        message: LIVENESS_MESSAGE.to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Schema handler - field-level schemas of every record kind
async fn schema_handler() -> Json<Map<String, Value>> {
    Json(schema_catalog())
}

/// Diagnostic handler
async fn diagnostic_handler(State(state): State<Arc<AppState>>) -> Json<DiagnosticReport> {
    let report = run_diagnostic(&state).await;

    tracing::info!(
        event = %Event::DiagnosticProbe,
        connection_status = %report.connection_status,
        database = %report.database,
        "diagnostic probe"
    );

    Json(report)
}

/// Probes the database, turning every failure into a status string.
pub async fn run_diagnostic(state: &AppState) -> DiagnosticReport {
    let config = state.database_config();
    let mut report = DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_marker(config.is_url_set()),
        database_name: set_marker(config.is_name_set()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let Ok(database) = state.database() else {
        return report;
    };

    report.database = "✅ Available".to_string();
    report.connection_status = "Connected".to_string();

    let timeout = state.diagnostic_timeout();
    match tokio::time::timeout(timeout, database.collection_names()).await {
        Ok(Ok(mut names)) => {
            names.truncate(MAX_DIAGNOSTIC_COLLECTIONS);
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
        }
        Ok(Err(e)) => {
            report.database = format!("⚠️  Connected but Error: {}", truncate_chars(&e.to_string()));
        }
        Err(_) => {
            let message = format!("timed out after {}s", timeout.as_secs());
            report.database = format!("⚠️  Connected but Error: {}", truncate_chars(&message));
        }
    }

    report
}

fn set_marker(is_set: bool) -> String {
    let marker = if is_set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn truncate_chars(message: &str) -> String {
    message.chars().take(MAX_DIAGNOSTIC_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::storage::DatabaseConfig;

    #[tokio::test]
    async fn test_diagnostic_without_database() {
        let state = AppState::new(None, DatabaseConfig::default(), Duration::from_secs(1));
        let report = run_diagnostic(&state).await;

        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "❌ Not Available");
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert_eq!(report.connection_status, "Not Connected");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn test_diagnostic_with_memory_database() {
        let state = AppState::in_memory();
        let report = run_diagnostic(&state).await;

        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.connection_status, "Connected");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        let message = "é".repeat(80);
        assert_eq!(truncate_chars(&message).chars().count(), 50);
    }

    #[test]
    fn test_liveness_message() {
        let json = serde_json::to_value(MessageResponse {
            message: LIVENESS_MESSAGE.to_string(),
        })
        .unwrap();
        assert_eq!(json["message"], "Stray Animal Welfare API is running");
    }
}
