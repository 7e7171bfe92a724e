//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  kiosk-core errors (this file)                                      │
//! │  ├── CoreError        - Out-of-range lookups, domain failures       │
//! │  └── ValidationError  - Malformed catalog / policy construction     │
//! │                                                                     │
//! │  kiosk-db errors (separate crate)                                   │
//! │  └── DbError          - Ticket store failures                       │
//! │                                                                     │
//! │  kiosk-cli errors (in app)                                          │
//! │  └── AppError         - What the session boundary surfaces          │
//! │                                                                     │
//! │  Recoverable (IndexOutOfRange, parse failures) are caught at the    │
//! │  session loop and become user-visible messages. Everything else     │
//! │  propagates to the process boundary.                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, lengths, field names)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain rule violations. The session loop catches
/// [`CoreError::IndexOutOfRange`] and keeps going; construction-time
/// validation failures are fatal because the session never starts.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog or ledger index is outside `[0, len)`.
    ///
    /// ## When This Occurs
    /// - The session loop passes a selection past the end of the menu
    /// - A ledger is asked about an item the catalog does not have
    ///
    /// ## Recovery
    /// Reported to the user; the ordering session continues with no state
    /// change.
    #[error("index {index} is out of range for a menu of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Construction-time validation errors.
///
/// These occur when a [`Catalog`](crate::Catalog) or
/// [`DiscountPolicy`](crate::DiscountPolicy) is built from malformed input.
/// They are fatal: no ordering session starts against an invalid catalog.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The name and price lists do not pair up.
    #[error("catalog has {names} names but {prices} prices")]
    LengthMismatch { names: usize, prices: usize },

    /// The catalog has no items at all.
    #[error("catalog must contain at least one item")]
    Empty,

    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// A price is below zero. Prices are non-negative won.
    #[error("price for '{name}' must not be negative (got {price})")]
    NegativePrice { name: String, price: i64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
