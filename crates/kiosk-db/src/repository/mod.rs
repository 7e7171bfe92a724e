//! # Repository Module
//!
//! Database repository implementations for the kiosk.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Repository Pattern Explained                        │
//! │                                                                     │
//! │  The Repository pattern keeps SQL behind a clean API.               │
//! │                                                                     │
//! │  Session end                                                        │
//! │       │                                                             │
//! │       │  db.tickets().next()                                        │
//! │       ▼                                                             │
//! │  TicketRepository                                                   │
//! │  ├── next(&self)                                                    │
//! │  ├── current(&self)                                                 │
//! │  ├── record_issue(&self, number, receipt)                           │
//! │  └── recent_issues(&self, limit)                                    │
//! │       │                                                             │
//! │       │  SQL                                                        │
//! │       ▼                                                             │
//! │  SQLite database                                                    │
//! │                                                                     │
//! │  Benefits: SQL isolated in one place, easy to test against an       │
//! │  in-memory pool, callers never touch raw rows.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ticket::TicketRepository`] - Ticket sequencing and the issue log

pub mod ticket;
