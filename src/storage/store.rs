//! Document store driver interface
//!
//! The service needs exactly three driver operations: insert one document,
//! find documents with a limit, and list collection names for diagnostics.
//! Backends implement this trait; everything above it is backend-agnostic.

use async_trait::async_trait;
use mongodb::bson::Document;

use super::errors::StorageResult;

/// Persistence trait for document backends.
///
/// Each call is a single attempt: no caching, no retry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database this store writes to
    fn database_name(&self) -> &str;

    /// Inserts one document and returns its generated identifier as a string.
    async fn insert_one(&self, collection: &str, document: Document) -> StorageResult<String>;

    /// Returns up to `limit` documents matching `filter`, in the store's
    /// natural order. `limit` is always greater than zero.
    async fn find(&self, collection: &str, filter: Document, limit: u64) -> StorageResult<Vec<Document>>;

    /// Lists collection names in the database.
    async fn list_collection_names(&self) -> StorageResult<Vec<String>>;
}
