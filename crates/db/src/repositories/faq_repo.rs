//! Repository for the `faq` collection.

use mongodb::bson::doc;

use super::map_documents;
use crate::error::DbError;
use crate::models::Faq;
use crate::store::DocumentStore;

const COLLECTION: &str = "faq";

/// Read operations for FAQ entries.
pub struct FaqRepo;

impl FaqRepo {
    /// List all FAQ entries in store order.
    pub async fn list_all(store: &DocumentStore) -> Result<Vec<Faq>, DbError> {
        let docs = store.find(COLLECTION, doc! {}).await?;
        map_documents(COLLECTION, docs)
    }
}
