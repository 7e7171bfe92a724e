//! # Application Error Type
//!
//! Unified error type for the session boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in the Kiosk CLI                        │
//! │                                                                     │
//! │  Inside the session loop (RECOVERABLE):                             │
//! │    parse failure        → message, loop continues                   │
//! │    out-of-range choice  → message, loop continues                   │
//! │    (neither ever becomes an AppError)                               │
//! │                                                                     │
//! │  Outside the loop (FATAL):                                          │
//! │    ValidationError  → catalog never built, session never starts     │
//! │    DbError          → no ticket issued, propagates out of main      │
//! │    io::Error        → terminal gone, propagates out of main         │
//! │                                                                     │
//! │  No retries anywhere.                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use kiosk_core::{CoreError, ValidationError};
use kiosk_db::DbError;

/// Fatal errors surfaced at the process boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog or policy construction failed; the session never starts.
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// Domain failure that escaped the recoverable path.
    #[error("order processing failed: {0}")]
    Core(#[from] CoreError),

    /// The ticket store is unreadable or unwritable; no ticket issued.
    #[error("ticket store failure: {0}")]
    Db(#[from] DbError),

    /// Terminal I/O failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
