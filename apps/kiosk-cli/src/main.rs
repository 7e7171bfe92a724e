//! # Kiosk CLI Entry Point
//!
//! Wires the pure ordering core to the durable ticket store and runs one
//! interactive session on the terminal.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Kiosk CLI Startup                             │
//! │                                                                     │
//! │  1. Initialize tracing (RUST_LOG-driven filter)                     │
//! │  2. Open the ticket store (KIOSK_DB or ./kiosk.db) + migrations     │
//! │  3. Build the catalog (fails fast on malformed menu data)           │
//! │  4. Run the session loop on stdin/stdout                            │
//! │  5. Issue the ticket, record it in the audit log, print it          │
//! │  6. Close the pool EXPLICITLY                                       │
//! │                                                                     │
//! │  Recoverable input errors live inside step 4; everything that       │
//! │  reaches main() is fatal and exits nonzero.                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod error;
mod session;

use tracing::info;
use tracing_subscriber::EnvFilter;

use kiosk_core::{Catalog, DiscountPolicy};
use kiosk_db::{Database, DbConfig};

use crate::error::AppError;
use crate::session::Session;

/// The default cafe menu. Names and prices pair up by position; the
/// catalog constructor verifies that before any session starts.
const MENU: &[(&str, i64)] = &[
    ("Ice Americano", 2000),
    ("Cafe Latte", 3000),
    ("Watermelon Juice", 4900),
    ("Ice tea", 3500),
];

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // RUST_LOG=debug for query-level detail; quiet by default so log
    // lines don't interleave with the menu prompt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let db_path = std::env::var("KIOSK_DB").unwrap_or_else(|_| "kiosk.db".to_string());
    let db = Database::new(DbConfig::new(&db_path)).await?;
    info!(path = %db_path, "Ticket store ready");

    let (names, prices): (Vec<_>, Vec<_>) = MENU
        .iter()
        .map(|(name, price)| (name.to_string(), *price))
        .unzip();
    let catalog = Catalog::new(names, prices)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let receipt = Session::new(
        &catalog,
        DiscountPolicy::default(),
        stdin.lock(),
        stdout.lock(),
    )
    .run()?;

    // Receipt first, ticket second: the customer sees what they pay,
    // then the number to wait on.
    let tickets = db.tickets();
    let number = tickets.next().await?;
    tickets.record_issue(number, &receipt).await?;
    println!("ticket : {number}");

    db.close().await;
    Ok(())
}
