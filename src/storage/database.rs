//! # Database Facade
//!
//! High-level `create` / `list` interface used by the HTTP layer. Turns
//! typed records into documents and bounds every query.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use mongodb::bson::{self, Document};
use serde::Serialize;

use super::errors::StorageResult;
use super::memory::MemoryStore;
use super::mongo::MongoStore;
use super::store::DocumentStore;

/// Shared handle to the document store
#[derive(Clone)]
pub struct Database {
    store: Arc<dyn DocumentStore>,
}

impl Database {
    /// Wraps an existing store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Database backed by a fresh in-memory store
    pub fn in_memory(name: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryStore::new(name)))
    }

    /// Database backed by MongoDB
    pub async fn connect(url: &str, name: &str) -> StorageResult<Self> {
        let store = MongoStore::connect(url, name).await?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Name of the underlying database
    pub fn name(&self) -> &str {
        self.store.database_name()
    }

    /// Serializes `record` into a document, stamps it, and inserts it.
    ///
    /// Returns the generated identifier.
    pub async fn create<T>(&self, collection: &str, record: &T) -> StorageResult<String>
    where
        T: Serialize + ?Sized,
    {
        let mut document = bson::to_document(record)?;
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        document.insert("created_at", now.clone());
        document.insert("updated_at", now);

        self.store.insert_one(collection, document).await
    }

    /// Returns up to `limit` documents matching `filter`.
    ///
    /// A zero limit returns nothing without touching the store.
    pub async fn list(&self, collection: &str, filter: Document, limit: u64) -> StorageResult<Vec<Document>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.store.find(collection, filter, limit).await
    }

    /// Collection names, for diagnostics
    pub async fn collection_names(&self) -> StorageResult<Vec<String>> {
        self.store.list_collection_names().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    #[derive(Serialize)]
    struct Pledge {
        name: String,
        amount: Option<f64>,
    }

    #[tokio::test]
    async fn test_create_stamps_timestamps() {
        let db = Database::in_memory("test");
        let pledge = Pledge {
            name: "Sam".into(),
            amount: None,
        };

        let id = db.create("donation", &pledge).await.unwrap();
        assert!(!id.is_empty());

        let docs = db.list("donation", Document::new(), 10).await.unwrap();
        let stored = &docs[0];
        assert_eq!(stored.get_str("name").unwrap(), "Sam");
        assert!(stored.get("amount").map_or(false, |v| v.as_null().is_some()));

        let created = stored.get_str("created_at").unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
        assert_eq!(created, stored.get_str("updated_at").unwrap());
    }

    #[tokio::test]
    async fn test_zero_limit_returns_nothing() {
        let db = Database::in_memory("test");
        db.create("animal", &json!({ "name": "Rex" })).await.unwrap();

        let docs = db.list("animal", Document::new(), 0).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_non_object_record_rejected() {
        let db = Database::in_memory("test");
        let result = db.create("animal", &json!(["Rex"])).await;
        assert_eq!(result.unwrap_err().code(), "STORAGE_ENCODING_FAILED");
    }

    #[tokio::test]
    async fn test_collection_names_and_name() {
        let db = Database::in_memory("shelter");
        db.create("sighting", &json!({ "species": "cat" })).await.unwrap();

        assert_eq!(db.name(), "shelter");
        assert_eq!(db.collection_names().await.unwrap(), vec!["sighting"]);
    }
}
