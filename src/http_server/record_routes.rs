//! Record HTTP Routes
//!
//! Create and list endpoints for the four record kinds. Each create is one
//! validated insert; each list is one bounded query.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::observability::Event;
use crate::records::{Animal, Donation, Record, RecordKind, Sighting, Volunteer};
use crate::storage::StorageError;

/// Default page size for `GET /api/animals`
pub const ANIMAL_LIST_LIMIT: u64 = 50;
/// Default page size for `GET /api/sightings`
pub const SIGHTING_LIST_LIMIT: u64 = 100;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub items: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
    pub message: String,
}

// ==================
// Record Routes
// ==================

/// Create record routes (nested under `/api`)
pub fn record_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/animals",
            get(list_handler::<Animal, ANIMAL_LIST_LIMIT>).post(create_handler::<Animal>),
        )
        .route(
            "/sightings",
            get(list_handler::<Sighting, SIGHTING_LIST_LIMIT>).post(create_handler::<Sighting>),
        )
        .route("/volunteers", post(create_handler::<Volunteer>))
        .route("/donations", post(create_handler::<Donation>))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_handler<T: Record>(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    let kind = T::KIND;
    let Json(payload) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let record = T::from_payload(&payload).map_err(|err| {
        tracing::info!(
            event = %Event::ValidationRejected,
            collection = kind.collection(),
            violations = err.details().len(),
            "payload rejected"
        );
        err
    })?;

    let database = state.database().map_err(|e| storage_failure(kind, "create", e))?;
    let id = database
        .create(kind.collection(), &record)
        .await
        .map_err(|e| storage_failure(kind, "create", e))?;

    tracing::info!(event = %Event::RecordCreated, collection = kind.collection(), id = %id, "record created");

    Ok(Json(CreatedResponse {
        id,
        message: kind.created_message().to_string(),
    }))
}

async fn list_handler<T: Record, const DEFAULT_LIMIT: u64>(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<ListResponse>> {
    let kind = T::KIND;
    let Query(query) = query.map_err(|rejection| ApiError::InvalidQueryParam(rejection.body_text()))?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let database = state.database().map_err(|e| storage_failure(kind, "list", e))?;
    let documents = database
        .list(kind.collection(), Document::new(), limit)
        .await
        .map_err(|e| storage_failure(kind, "list", e))?;

    tracing::debug!(
        event = %Event::RecordsListed,
        collection = kind.collection(),
        limit,
        count = documents.len(),
        "records listed"
    );

    Ok(Json(ListResponse {
        items: documents.into_iter().map(present_document).collect(),
    }))
}

// ==================
// Helper Functions
// ==================

fn storage_failure(kind: RecordKind, operation: &'static str, err: StorageError) -> ApiError {
    tracing::error!(
        event = %Event::StorageFailed,
        collection = kind.collection(),
        operation,
        code = err.code(),
        error = %err,
        "storage operation failed"
    );
    ApiError::Storage(err)
}

/// Converts a stored document to JSON with `_id` rendered as a string.
pub fn present_document(document: Document) -> Value {
    let object: Map<String, Value> = document
        .into_iter()
        .map(|(key, value)| {
            let value = if key == "_id" {
                Value::String(stringify_id(value))
            } else {
                value.into_relaxed_extjson()
            };
            (key, value)
        })
        .collect();
    Value::Object(object)
}

fn stringify_id(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}
