//! Program content model.

use serde::{Deserialize, Serialize};

/// A document from the `program` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub title: String,
    /// URL-friendly identifier. Unique by convention, not enforced.
    pub slug: String,
    /// One-sentence essence of the program.
    pub essence: String,
    /// Who this is for.
    #[serde(default)]
    pub who: Option<String>,
    /// "What to expect" bullets, in display order.
    #[serde(default)]
    pub expect: Vec<String>,
    /// Duration, e.g. "1 evening" or "2 days".
    #[serde(default)]
    pub duration: Option<String>,
    /// Display sort key, ascending.
    #[serde(default)]
    pub order: i64,
}
