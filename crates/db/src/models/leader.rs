//! Leader content model.

use serde::{Deserialize, Serialize};

/// A document from the `leader` collection. No ordering guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leader {
    pub name: String,
    /// One-line stance.
    #[serde(default)]
    pub stance: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}
