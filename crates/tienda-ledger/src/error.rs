//! # Ledger Error Type
//!
//! Unified error type for ledger operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tienda POS                         │
//! │                                                                     │
//! │  Caller                       Ledger                                │
//! │  ──────                       ──────                                │
//! │                                                                     │
//! │  ledger.commit_sale()                                               │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌──────────────────────────────────────────────────────────────┐   │
//! │  │  Business rule broken? ── CoreError ──────┐                  │   │
//! │  │  Document read/write?  ── StoreError ─────┼──► LedgerError   │   │
//! │  │  Bad credentials?      ── InvalidCredentials                 │   │
//! │  └──────────────────────────────────────────────────────────────┘   │
//! │                                                                     │
//! │  Every failure is recoverable: the cart and the stores are left     │
//! │  untouched, so the caller may correct the condition and retry.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use tienda_core::{CoreError, ValidationError};
use tienda_store::StoreError;

/// Errors surfaced by ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Business rule violation (stock, selections, empty cart, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Persistence read/write failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Login failed: unknown username or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl From<ValidationError> for LedgerError {
    fn from(err: ValidationError) -> Self {
        LedgerError::Core(CoreError::Validation(err))
    }
}

impl LedgerError {
    /// True when the failure was an insufficient-stock rejection.
    pub fn is_insufficient_stock(&self) -> bool {
        matches!(self, LedgerError::Core(CoreError::InsufficientStock { .. }))
    }
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================
