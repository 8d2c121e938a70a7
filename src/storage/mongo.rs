//! MongoDB document store
//!
//! The client is created once at startup and shared by every request.
//! Creating it does not contact the server; connection problems surface
//! on the first operation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::options::{ClientOptions, FindOptions};
use mongodb::{Client, Database};

use super::errors::{StorageError, StorageResult};
use super::store::DocumentStore;

const APP_NAME: &str = "stray-api";

/// MongoDB-backed store
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Builds a client for `url` bound to database `name`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the URL or its options are
    /// malformed.
    pub async fn connect(url: &str, name: &str) -> StorageResult<Self> {
        let mut options = ClientOptions::parse(url)
            .await
            .map_err(StorageError::connection)?;
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options).map_err(StorageError::connection)?;
        Ok(Self {
            database: client.database(name),
        })
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn database_name(&self) -> &str {
        self.database.name()
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StorageResult<String> {
        let result = self
            .collection(collection)
            .insert_one(document, None)
            .await
            .map_err(StorageError::write_failed)?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        })
    }

    async fn find(&self, collection: &str, filter: Document, limit: u64) -> StorageResult<Vec<Document>> {
        let options = FindOptions::builder()
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .build();

        let cursor = self
            .collection(collection)
            .find(filter, options)
            .await
            .map_err(StorageError::read_failed)?;

        cursor.try_collect().await.map_err(StorageError::read_failed)
    }

    async fn list_collection_names(&self) -> StorageResult<Vec<String>> {
        self.database
            .list_collection_names(None)
            .await
            .map_err(StorageError::read_failed)
    }
}
