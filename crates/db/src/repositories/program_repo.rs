//! Repository for the `program` collection.

use mongodb::bson::{doc, Document};

use super::map_documents;
use crate::error::DbError;
use crate::models::Program;
use crate::store::DocumentStore;

const COLLECTION: &str = "program";

/// Read operations for programs.
pub struct ProgramRepo;

impl ProgramRepo {
    /// List all programs sorted ascending by `order`.
    pub async fn list_all(store: &DocumentStore) -> Result<Vec<Program>, DbError> {
        let docs = store.find(COLLECTION, doc! {}).await?;
        Self::from_documents(docs)
    }

    /// Strip ids, validate, and sort. The sort is stable: programs with
    /// equal `order` keep store order.
    fn from_documents(docs: Vec<Document>) -> Result<Vec<Program>, DbError> {
        let mut programs: Vec<Program> = map_documents(COLLECTION, docs)?;
        programs.sort_by_key(|program| program.order);
        Ok(programs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_doc(slug: &str, order: i64) -> Document {
        doc! {
            "title": slug,
            "slug": slug,
            "essence": "essence",
            "order": order,
        }
    }

    #[test]
    fn programs_are_sorted_ascending_by_order() {
        let docs = vec![
            program_doc("third", 30),
            program_doc("first", 1),
            program_doc("second", 2),
        ];

        let programs = ProgramRepo::from_documents(docs).unwrap();
        let slugs: Vec<&str> = programs.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["first", "second", "third"]);
    }

    #[test]
    fn equal_order_preserves_store_order() {
        let docs = vec![
            program_doc("a", 5),
            program_doc("b", 5),
            program_doc("c", 0),
        ];

        let programs = ProgramRepo::from_documents(docs).unwrap();
        let slugs: Vec<&str> = programs.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["c", "a", "b"]);
    }

    #[test]
    fn missing_order_sorts_as_zero() {
        let docs = vec![
            program_doc("late", 1),
            doc! { "title": "early", "slug": "early", "essence": "essence" },
        ];

        let programs = ProgramRepo::from_documents(docs).unwrap();
        assert_eq!(programs[0].slug, "early");
    }
}
