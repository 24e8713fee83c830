//! Error types for hearth-store.

use std::path::PathBuf;

use hearth_types::UnitError;

/// Result type for hearth-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hearth-store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database file missing at open time.
    #[error("database file not found: {path}")]
    NotFound {
        /// Path that was given to [`Store::open`](crate::Store::open).
        path: PathBuf,
    },

    /// Row count requested for a table outside the recorder schema.
    #[error("unknown table: {0:?}")]
    UnknownTable(String),

    /// Unit resolution or conversion failure.
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// A state row's attributes blob is not the expected JSON shape.
    #[error("malformed attributes for {entity_id}: {source}")]
    MalformedMetadata {
        entity_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// A state row's `last_changed` column does not parse as a timestamp.
    #[error("malformed timestamp {value:?} for {entity_id}: {source}")]
    MalformedTimestamp {
        entity_id: String,
        value: String,
        #[source]
        source: time::error::Parse,
    },

    /// A state row's value column is not numeric.
    #[error("malformed state value {value:?} for {entity_id}")]
    MalformedValue { entity_id: String, value: String },

    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
