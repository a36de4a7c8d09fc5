//! Repository for the `testimonial` collection.

use mongodb::bson::doc;

use super::map_documents;
use crate::error::DbError;
use crate::models::Testimonial;
use crate::store::DocumentStore;

const COLLECTION: &str = "testimonial";

/// Read operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// List all testimonials in store order.
    pub async fn list_all(store: &DocumentStore) -> Result<Vec<Testimonial>, DbError> {
        let docs = store.find(COLLECTION, doc! {}).await?;
        map_documents(COLLECTION, docs)
    }
}
