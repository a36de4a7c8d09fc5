//! Registration DTO.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for creating a registration.
///
/// Write-only: registrations are inserted into the `registration` collection
/// and never read back through this API.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRegistration {
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Soft reference to `Program.slug`; not checked against the `program`
    /// collection.
    #[serde(default)]
    pub program_slug: Option<String>,
    #[serde(default)]
    pub intention: Option<String>,
}
