//! Error types for the store adapter and the document→model boundary.

/// Failure of a single document store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No connection was ever established (missing configuration or a
    /// failed client build at startup).
    #[error("document store is not available (no connection established)")]
    Unavailable,

    /// A read query failed against a live connection.
    #[error("query against `{collection}` failed: {source}")]
    Query {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// A write failed against a live connection.
    #[error("write to `{collection}` failed: {source}")]
    Write {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// A typed record could not be serialized into a BSON document.
    #[error("failed to serialize record for `{collection}`: {source}")]
    Serialize {
        collection: String,
        #[source]
        source: mongodb::bson::ser::Error,
    },
}

/// Repository-level error: either the store operation failed, or a stored
/// document does not match its schema.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A document read from `collection` failed typed deserialization.
    #[error("invalid document in `{collection}`: {message}")]
    Validation {
        collection: &'static str,
        message: String,
    },
}
