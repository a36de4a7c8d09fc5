//! Testimonial content model.

use serde::{Deserialize, Serialize};

/// A document from the `testimonial` collection. No ordering guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    /// Short, raw quote.
    pub text: String,
    /// Name or initials.
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub city: Option<String>,
}
