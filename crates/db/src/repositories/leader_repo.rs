//! Repository for the `leader` collection.

use mongodb::bson::doc;

use super::map_documents;
use crate::error::DbError;
use crate::models::Leader;
use crate::store::DocumentStore;

const COLLECTION: &str = "leader";

/// Read operations for leaders.
pub struct LeaderRepo;

impl LeaderRepo {
    /// List all leaders in store order.
    pub async fn list_all(store: &DocumentStore) -> Result<Vec<Leader>, DbError> {
        let docs = store.find(COLLECTION, doc! {}).await?;
        map_documents(COLLECTION, docs)
    }
}
