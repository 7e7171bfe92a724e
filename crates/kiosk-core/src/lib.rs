//! # kiosk-core: Pure Business Logic for the Cafe Kiosk
//!
//! This crate is the **heart** of the kiosk. It contains all ordering logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cafe Kiosk Architecture                       │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    kiosk-cli (session loop)                   │ │
//! │  │    menu prompt ──► selection ──► confirmation ──► receipt     │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ kiosk-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐            │ │
//! │  │  │ catalog │ │ ledger  │ │ discount │ │ receipt │            │ │
//! │  │  │ Catalog │ │ Order-  │ │ Discount-│ │ Receipt │            │ │
//! │  │  │ items   │ │ Ledger  │ │ Policy   │ │ lines   │            │ │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └─────────┘            │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS          │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                  kiosk-db (ticket sequencer)                  │ │
//! │  │          SQLite counter, migrations, issue audit log          │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The immutable menu (names and prices)
//! - [`ledger`] - Per-session order state (quantities + running total)
//! - [`discount`] - Threshold-based discount rule
//! - [`receipt`] - Receipt value and table rendering
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, terminal, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole won (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **No Ambient State**: The ledger is an explicit value owned by the session,
//!    never a module-level global
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::{Catalog, DiscountPolicy, OrderLedger, Receipt};
//!
//! let catalog = Catalog::new(
//!     vec!["Ice Americano".into(), "Cafe Latte".into()],
//!     vec![2000, 3000],
//! ).unwrap();
//!
//! let mut ledger = OrderLedger::new(&catalog);
//! ledger.record(&catalog, 0).unwrap();
//! ledger.record(&catalog, 0).unwrap();
//! ledger.record(&catalog, 1).unwrap();
//! assert_eq!(ledger.total().won(), 7000);
//!
//! let receipt = Receipt::render(&catalog, &ledger, &DiscountPolicy::default());
//! assert_eq!(receipt.total_due.won(), 7000); // below threshold, no discount
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod discount;
pub mod error;
pub mod ledger;
pub mod money;
pub mod receipt;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kiosk_core::Catalog` instead of
// `use kiosk_core::catalog::Catalog`

pub use catalog::{Catalog, CatalogItem};
pub use discount::DiscountPolicy;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{OrderLedger, OrderLine};
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum session total (in won) at which the discount kicks in.
///
/// ## Business Reason
/// Orders of 10,000 won or more earn the bulk discount. The boundary is
/// inclusive: a total of exactly 10,000 won is discounted.
pub const DEFAULT_DISCOUNT_THRESHOLD_WON: i64 = 10_000;

/// Default discount rate in basis points (1000 bps = 10%).
///
/// ## Why Basis Points?
/// Integer basis points keep the discount math exact; a float rate would
/// reintroduce the precision drift this crate exists to avoid.
pub const DEFAULT_DISCOUNT_RATE_BPS: u32 = 1_000;
