//! Repository for the `event` collection.

use mongodb::bson::{doc, Document};

use super::map_documents;
use crate::error::DbError;
use crate::models::Event;
use crate::store::DocumentStore;

const COLLECTION: &str = "event";

/// Read operations for events.
pub struct EventRepo;

impl EventRepo {
    /// List events sorted ascending by `starts_at`, optionally restricted
    /// to a single program slug.
    pub async fn list(
        store: &DocumentStore,
        program_slug: Option<&str>,
    ) -> Result<Vec<Event>, DbError> {
        let docs = store.find(COLLECTION, Self::filter_for(program_slug)).await?;
        Self::from_documents(docs)
    }

    /// Exact-match filter: `{ program_slug: <slug> }` when given, else all
    /// documents.
    fn filter_for(program_slug: Option<&str>) -> Document {
        match program_slug {
            Some(slug) => doc! { "program_slug": slug },
            None => doc! {},
        }
    }

    /// Strip ids, validate (including timestamp coercion), and sort. The
    /// sort is stable: events with equal `starts_at` keep store order.
    fn from_documents(docs: Vec<Document>) -> Result<Vec<Event>, DbError> {
        let mut events: Vec<Event> = map_documents(COLLECTION, docs)?;
        events.sort_by_key(|event| event.starts_at);
        Ok(events)
    }
}
