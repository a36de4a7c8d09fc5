//! Thin adapter over a MongoDB database.
//!
//! Each method performs exactly one store operation: no retries, no
//! batching, no caching. The adapter may be constructed in a disconnected
//! state so the server can come up (and report diagnostics) even when the
//! store is unreachable; every operation then fails with
//! [`StoreError::Unavailable`].

use futures::TryStreamExt;
use mongodb::bson::{self, Bson, Document};
use mongodb::{Client, Database};
use serde::Serialize;

use crate::error::StoreError;

/// Handle to a named MongoDB database, or nothing at all.
pub struct DocumentStore {
    inner: Option<Handle>,
}

struct Handle {
    client: Client,
    db: Database,
}

impl DocumentStore {
    /// Build a client for `database_url` and select `database_name`.
    ///
    /// The returned handle is lazy: the driver does not reach out to the
    /// server until the first operation, so a successful `connect` does not
    /// imply the store is reachable.
    pub async fn connect(
        database_url: &str,
        database_name: &str,
    ) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(database_url).await?;
        tracing::debug!(database = %database_name, "Document store client built");
        let db = client.database(database_name);
        Ok(Self {
            inner: Some(Handle { client, db }),
        })
    }

    /// An adapter with no underlying connection. Every operation fails with
    /// [`StoreError::Unavailable`].
    pub fn disconnected() -> Self {
        Self { inner: None }
    }

    /// Whether a connection handle was established at startup.
    pub fn is_connected(&self) -> bool {
        self.inner.is_some()
    }

    /// Return all documents in `collection` matching the exact-match
    /// `filter` (empty filter = all documents). No pagination, no
    /// projection.
    pub async fn find(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let db = self.db()?;
        let cursor = db
            .collection::<Document>(collection)
            .find(filter)
            .await
            .map_err(|source| StoreError::Query {
                collection: collection.to_string(),
                source,
            })?;
        cursor
            .try_collect()
            .await
            .map_err(|source| StoreError::Query {
                collection: collection.to_string(),
                source,
            })
    }

    /// Serialize `record` to a BSON document and insert it into
    /// `collection`, returning the store-generated identifier as a string.
    pub async fn create<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<String, StoreError> {
        let db = self.db()?;
        let document = bson::to_document(record).map_err(|source| StoreError::Serialize {
            collection: collection.to_string(),
            source,
        })?;
        let result = db
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|source| StoreError::Write {
                collection: collection.to_string(),
                source,
            })?;

        Ok(match result.inserted_id {
            Bson::ObjectId(id) => id.to_hex(),
            other => other.to_string(),
        })
    }

    /// List the names of all collections in the database. Used by the
    /// diagnostic endpoint only.
    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let db = self.db()?;
        db.list_collection_names()
            .await
            .map_err(|source| StoreError::Query {
                collection: db.name().to_string(),
                source,
            })
    }

    /// Shut down the underlying client, draining in-flight operations.
    /// A no-op for a disconnected adapter.
    pub async fn shutdown(&self) {
        if let Some(handle) = &self.inner {
            handle.client.clone().shutdown().await;
        }
    }

    fn db(&self) -> Result<&Database, StoreError> {
        self.inner
            .as_ref()
            .map(|handle| &handle.db)
            .ok_or(StoreError::Unavailable)
    }
}
