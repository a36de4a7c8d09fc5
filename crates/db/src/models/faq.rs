//! FAQ content model.

use serde::{Deserialize, Serialize};

/// A document from the `faq` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub q: String,
    pub a: String,
}
