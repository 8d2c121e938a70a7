//! In-memory document store
//!
//! Keeps one vector of documents per collection. Used by `--in-memory`
//! and by the test suite. Documents are returned in insertion order.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use super::errors::{StorageError, StorageResult};
use super::store::DocumentStore;

/// In-memory store for development and testing
pub struct MemoryStore {
    name: String,
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StorageResult<String> {
        // `_id` goes first, as the store would place it
        let id = match document.get("_id") {
            Some(existing) => existing.clone(),
            None => Bson::ObjectId(ObjectId::new()),
        };
        let mut stored = Document::new();
        stored.insert("_id", id.clone());
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StorageError::write_failed("memory store lock poisoned"))?;
        collections.entry(collection.to_string()).or_default().push(stored);

        Ok(match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        })
    }

    async fn find(&self, collection: &str, filter: Document, limit: u64) -> StorageResult<Vec<Document>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StorageError::read_failed("memory store lock poisoned"))?;

        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(documents
            .iter()
            .filter(|doc| matches_filter(doc, &filter))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_collection_names(&self) -> StorageResult<Vec<String>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StorageError::read_failed("memory store lock poisoned"))?;

        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

/// Top-level equality match on every filter key
fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}
