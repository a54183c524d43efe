//! # Storage Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← Adds context and categorization        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  LedgerError (in tienda-ledger) ← What embedders handle             │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
///
/// These errors wrap I/O and serialization failures and provide additional
/// context for debugging and user feedback.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in a collection.
    ///
    /// ## When This Occurs
    /// - Updating or deleting a record whose id is not in the collection
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Reading or writing a document failed at the filesystem level.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - File permissions issue
    /// - Disk full
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document could not be serialized or deserialized.
    ///
    /// ## When This Occurs
    /// - Hand-edited or truncated JSON document
    /// - Schema drift between versions
    #[error("Storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No usable data directory could be resolved.
    #[error("No data directory available: {0}")]
    NoDataDir(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
