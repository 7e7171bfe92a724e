//! # kiosk-db: Database Layer for the Cafe Kiosk
//!
//! This crate provides the durable ticket sequencer backing the kiosk.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cafe Kiosk Data Flow                           │
//! │                                                                     │
//! │  Session loop finishes ("Exit" selected)                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                     kiosk-db (THIS CRATE)                     │ │
//! │  │                                                               │ │
//! │  │  ┌──────────────┐   ┌──────────────────┐   ┌──────────────┐  │ │
//! │  │  │   Database   │   │ TicketRepository │   │  Migrations  │  │ │
//! │  │  │  (pool.rs)   │   │  (repository/)   │   │  (embedded)  │  │ │
//! │  │  │              │   │                  │   │              │  │ │
//! │  │  │ SqlitePool   │◄──│ next()           │   │ 001_init.sql │  │ │
//! │  │  │ WAL mode     │   │ record_issue()   │   │              │  │ │
//! │  │  └──────────────┘   └──────────────────┘   └──────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite file: ticket_counter (one row) + ticket_issues (append)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The ticket repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiosk_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("kiosk.db")).await?;
//! let ticket = db.tickets().next().await?; // 1, 2, 3, ... across restarts
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::ticket::{TicketIssue, TicketRepository};
