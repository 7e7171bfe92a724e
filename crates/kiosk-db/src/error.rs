//! # Database Error Types
//!
//! Error types for the ticket store.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← adds context and categorization            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  AppError (kiosk-cli) ← surfaced at the process boundary            │
//! │                                                                     │
//! │  NOTE: a missing database FILE is NOT an error. SQLite creates it   │
//! │  and the migration seeds the counter at 0; absence is the valid     │
//! │  empty state. DbError covers every OTHER persistence failure.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Ticket store operation errors.
///
/// These errors wrap sqlx errors and provide additional context. All of
/// them are fatal to the session: no ticket is issued and the error
/// propagates to the process boundary. No retries are performed.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created (permissions, disk full)
    /// - Pool is closed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    ///
    /// ## When This Occurs
    /// - Invalid SQL in a migration
    /// - Checksum mismatch with an already-applied migration
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// The counter row is missing or malformed.
    ///
    /// ## When This Occurs
    /// The migration seeds `ticket_counter` with one row; seeing this
    /// means the store was tampered with out-of-band.
    #[error("ticket counter row is missing")]
    CounterMissing,

    /// Stored payload could not be decoded.
    #[error("stored receipt snapshot is not valid JSON: {0}")]
    CorruptPayload(String),

    /// Pool exhausted (all connections in use).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::CounterMissing
/// sqlx::Error::Database       → DbError::QueryFailed (with message)
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // The only fetch_one in this crate targets the seeded counter
            sqlx::Error::RowNotFound => DbError::CounterMissing,

            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::CorruptPayload(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_counter_missing() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::CounterMissing));
        assert_eq!(err.to_string(), "ticket counter row is missing");
    }

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));
    }
}
