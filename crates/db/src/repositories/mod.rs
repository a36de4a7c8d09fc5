//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DocumentStore` as the first argument. Every method performs a
//! single fetch-or-insert pipeline: fetch → strip id → validate → sort.

pub mod event_repo;
pub mod faq_repo;
pub mod leader_repo;
pub mod program_repo;
pub mod registration_repo;
pub mod testimonial_repo;

pub use event_repo::EventRepo;
pub use faq_repo::FaqRepo;
pub use leader_repo::LeaderRepo;
pub use program_repo::ProgramRepo;
pub use registration_repo::RegistrationRepo;
pub use testimonial_repo::TestimonialRepo;

use mongodb::bson::{self, Document};
use serde::de::DeserializeOwned;

use crate::error::DbError;

/// Strip the store-generated `_id` from each raw document and deserialize
/// it into its typed model. The identifier is never surfaced on content
/// reads; a document that does not match its schema fails the whole batch.
fn map_documents<T: DeserializeOwned>(
    collection: &'static str,
    docs: Vec<Document>,
) -> Result<Vec<T>, DbError> {
    docs.into_iter()
        .map(|mut doc| {
            doc.remove("_id");
            bson::from_document(doc).map_err(|err| DbError::Validation {
                collection,
                message: err.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Program;
    use assert_matches::assert_matches;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn generated_id_is_stripped_before_validation() {
        let docs = vec![doc! {
            "_id": ObjectId::new(),
            "title": "Foundations",
            "slug": "foundations",
            "essence": "Where it all starts.",
        }];

        let programs: Vec<Program> = map_documents("program", docs).unwrap();
        assert_eq!(programs.len(), 1);

        // The serialized response must not leak the identifier.
        let json = serde_json::to_value(&programs[0]).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn malformed_document_fails_the_batch() {
        let docs = vec![
            doc! {
                "title": "Foundations",
                "slug": "foundations",
                "essence": "Where it all starts.",
            },
            doc! {
                "title": "Broken",
                // slug and essence missing
            },
        ];

        let result: Result<Vec<Program>, DbError> = map_documents("program", docs);
        assert_matches!(result, Err(DbError::Validation { collection: "program", .. }));
    }
}
