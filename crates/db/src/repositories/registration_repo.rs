//! Repository for the `registration` collection.

use crate::error::DbError;
use crate::models::CreateRegistration;
use crate::store::DocumentStore;

const COLLECTION: &str = "registration";

/// Write operations for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Insert a validated registration, returning the store-generated
    /// identifier.
    pub async fn insert(
        store: &DocumentStore,
        registration: &CreateRegistration,
    ) -> Result<String, DbError> {
        let id = store.create(COLLECTION, registration).await?;
        Ok(id)
    }
}
