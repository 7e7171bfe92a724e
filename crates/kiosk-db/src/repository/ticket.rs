//! # Ticket Repository
//!
//! The durable ticket sequencer and its issue audit log.
//!
//! ## Sequencing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Ticket Number Lifecycle                          │
//! │                                                                     │
//! │  Fresh store: migration seeds  ticket_counter = (1, 0)              │
//! │                                                                     │
//! │  next()  ──►  UPDATE ticket_counter                                 │
//! │               SET value = value + 1                                 │
//! │               WHERE id = 1                                          │
//! │               RETURNING value                                       │
//! │                                                                     │
//! │  One statement: read, increment, and write happen atomically under  │
//! │  SQLite's write lock. Two kiosk processes sharing the file cannot   │
//! │  lose an update or hand out the same number. (The system this       │
//! │  replaces did read-then-write in two steps; that race was a defect, │
//! │  not a contract.)                                                   │
//! │                                                                     │
//! │  Result: 1, 2, 3, ... strictly increasing, surviving restarts.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use kiosk_core::Receipt;

// =============================================================================
// Ticket Issue
// =============================================================================

/// One row of the issue audit log: a ticket that was handed out, with the
/// receipt snapshot it was handed out for. Serializes for audit exports.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TicketIssue {
    /// Row id (UUID v4).
    pub id: String,

    /// The ticket number the customer received.
    pub ticket_number: i64,

    /// Pre-discount session total, whole won.
    pub total_won: i64,

    /// Amount payable after any discount, whole won.
    pub total_due_won: i64,

    /// Receipt snapshot as JSON (see [`TicketIssue::receipt`]).
    pub receipt_json: String,

    /// When the ticket was issued (UTC).
    pub issued_at: DateTime<Utc>,
}

impl TicketIssue {
    /// Decodes the stored receipt snapshot.
    pub fn receipt(&self) -> DbResult<Receipt> {
        Ok(serde_json::from_str(&self.receipt_json)?)
    }
}

// =============================================================================
// Ticket Repository
// =============================================================================

/// Repository for ticket sequencing and the issue log.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    pool: SqlitePool,
}

impl TicketRepository {
    /// Creates a new TicketRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TicketRepository { pool }
    }

    /// Issues the next ticket number.
    ///
    /// Atomically increments the persisted counter and returns the new
    /// value. Strictly increasing: every successful call returns a value
    /// greater than any previously returned, including across process
    /// restarts. The first call against a fresh store returns 1.
    ///
    /// ## Errors
    /// [`DbError`](crate::DbError) when the store is unreadable or
    /// unwritable; [`DbError::CounterMissing`](crate::DbError) if the
    /// seeded counter row has been deleted out-of-band.
    pub async fn next(&self) -> DbResult<i64> {
        let value: i64 = sqlx::query_scalar(
            r#"
            UPDATE ticket_counter
            SET value = value + 1
            WHERE id = 1
            RETURNING value
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        debug!(ticket = value, "Issued ticket number");
        Ok(value)
    }

    /// Returns the last issued ticket number (0 when none yet).
    pub async fn current(&self) -> DbResult<i64> {
        let value: i64 = sqlx::query_scalar("SELECT value FROM ticket_counter WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(value)
    }

    /// Records an issued ticket in the audit log.
    ///
    /// ## Snapshot Pattern
    /// The full receipt is stored as JSON, so the sale can be reconstructed
    /// even after the menu changes.
    pub async fn record_issue(&self, ticket_number: i64, receipt: &Receipt) -> DbResult<()> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let payload = serde_json::to_string(receipt)?;

        debug!(id = %id, ticket = ticket_number, "Recording ticket issue");

        sqlx::query(
            r#"
            INSERT INTO ticket_issues (
                id, ticket_number, total_won, total_due_won, receipt_json, issued_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&id)
        .bind(ticket_number)
        .bind(receipt.total.won())
        .bind(receipt.total_due.won())
        .bind(&payload)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns the most recent issues, newest first.
    pub async fn recent_issues(&self, limit: i64) -> DbResult<Vec<TicketIssue>> {
        let issues: Vec<TicketIssue> = sqlx::query_as(
            r#"
            SELECT id, ticket_number, total_won, total_due_won, receipt_json, issued_at
            FROM ticket_issues
            ORDER BY issued_at DESC, ticket_number DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(issues)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use kiosk_core::{Catalog, DiscountPolicy, OrderLedger, Receipt};

    async fn fresh_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_receipt() -> Receipt {
        let catalog = Catalog::new(
            vec![
                "Ice Americano".to_string(),
                "Watermelon Juice".to_string(),
            ],
            vec![2000, 4900],
        )
        .unwrap();
        let mut ledger = OrderLedger::new(&catalog);
        ledger.record(&catalog, 1).unwrap();
        ledger.record(&catalog, 1).unwrap();
        ledger.record(&catalog, 0).unwrap();
        Receipt::render(&catalog, &ledger, &DiscountPolicy::default())
    }

    #[tokio::test]
    async fn test_next_starts_at_one_and_increases() {
        let db = fresh_db().await;
        let tickets = db.tickets();

        assert_eq!(tickets.current().await.unwrap(), 0);

        for expected in 1..=5 {
            assert_eq!(tickets.next().await.unwrap(), expected);
        }
        assert_eq!(tickets.current().await.unwrap(), 5);
        db.close().await;
    }

    #[tokio::test]
    async fn test_sequence_survives_restart() {
        // A file-backed store is the only way to exercise a real restart:
        // close the pool, reopen the same path, keep counting.
        let path = std::env::temp_dir().join(format!("kiosk-test-{}.db", Uuid::new_v4()));

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(db.tickets().next().await.unwrap(), 1);
        assert_eq!(db.tickets().next().await.unwrap(), 2);
        db.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(db.tickets().next().await.unwrap(), 3);
        assert_eq!(db.tickets().current().await.unwrap(), 3);
        db.close().await;

        // WAL mode leaves -wal/-shm sidecars next to the main file
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
        }
    }

    #[tokio::test]
    async fn test_record_and_fetch_issue() {
        let db = fresh_db().await;
        let tickets = db.tickets();
        let receipt = sample_receipt();

        let number = tickets.next().await.unwrap();
        tickets.record_issue(number, &receipt).await.unwrap();

        let issues = tickets.recent_issues(10).await.unwrap();
        assert_eq!(issues.len(), 1);

        let issue = &issues[0];
        assert_eq!(issue.ticket_number, number);
        assert_eq!(issue.total_won, 11_800);
        assert_eq!(issue.total_due_won, 10_620);

        // snapshot decodes back to the receipt that was stored
        let restored = issue.receipt().unwrap();
        assert_eq!(restored, receipt);
        db.close().await;
    }

    #[tokio::test]
    async fn test_recent_issues_newest_first() {
        let db = fresh_db().await;
        let tickets = db.tickets();
        let receipt = sample_receipt();

        for _ in 0..3 {
            let number = tickets.next().await.unwrap();
            tickets.record_issue(number, &receipt).await.unwrap();
        }

        let issues = tickets.recent_issues(2).await.unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].ticket_number, 3);
        assert_eq!(issues[1].ticket_number, 2);
        db.close().await;
    }

    #[tokio::test]
    async fn test_deleted_counter_row_is_an_error() {
        let db = fresh_db().await;
        sqlx::query("DELETE FROM ticket_counter")
            .execute(db.pool())
            .await
            .unwrap();

        let err = db.tickets().next().await.unwrap_err();
        assert!(matches!(err, crate::DbError::CounterMissing));
        db.close().await;
    }
}
