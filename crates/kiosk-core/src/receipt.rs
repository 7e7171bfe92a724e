//! # Receipt Module
//!
//! A derived, read-only view of a completed ordering session.
//!
//! ## Where the Receipt Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Receipt Flow                                │
//! │                                                                     │
//! │  Catalog + OrderLedger snapshot                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Receipt::render(catalog, ledger, policy)                           │
//! │       │                                                             │
//! │       ├── one ReceiptLine per index with quantity > 0,              │
//! │       │   in CATALOG ORDER (stable, deterministic)                  │
//! │       │                                                             │
//! │       └── discount applied ONCE, at the end, on the session total   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Receipt value ──► Display (terminal table)                         │
//! │               └──► serde_json (persisted snapshot in kiosk-db)      │
//! │                                                                     │
//! │  The receipt is never persisted as the source of truth; it is a     │
//! │  pure function of the ledger at formatting time.                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::Catalog;
use crate::discount::DiscountPolicy;
use crate::ledger::OrderLedger;
use crate::money::Money;

// =============================================================================
// Receipt Line
// =============================================================================

/// One line item on the receipt.
///
/// Snapshot pattern: the name and unit price are copied out of the catalog
/// at render time, so a persisted receipt stays truthful even if the menu
/// changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Item name at render time (frozen).
    pub name: String,

    /// Unit price at render time (frozen).
    pub unit_price: Money,

    /// Units ordered. Always > 0: zero-quantity items never get a line.
    pub quantity: u32,

    /// `unit_price × quantity`.
    pub subtotal: Money,
}

// =============================================================================
// Receipt
// =============================================================================

/// The rendered order summary: line items plus the discount block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Line items in catalog index order, nonzero quantities only.
    pub lines: Vec<ReceiptLine>,

    /// Pre-discount session total.
    pub total: Money,

    /// Amount taken off by the discount policy (zero when none applied).
    pub discount: Money,

    /// Amount payable: `total - discount`.
    pub total_due: Money,
}

impl Receipt {
    /// Renders a ledger snapshot into a receipt, applying the discount
    /// policy once on the session total.
    ///
    /// Pure: no side effects, and the ledger is only read. Displaying or
    /// persisting the result is the caller's business.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::{Catalog, DiscountPolicy, OrderLedger, Receipt};
    ///
    /// let catalog = Catalog::new(
    ///     vec!["Ice Americano".into(), "Cafe Latte".into()],
    ///     vec![2000, 3000],
    /// ).unwrap();
    /// let mut ledger = OrderLedger::new(&catalog);
    /// ledger.record(&catalog, 0).unwrap();
    ///
    /// let receipt = Receipt::render(&catalog, &ledger, &DiscountPolicy::default());
    /// assert_eq!(receipt.lines.len(), 1);
    /// assert_eq!(receipt.total_due.won(), 2000);
    /// ```
    pub fn render(catalog: &Catalog, ledger: &OrderLedger, policy: &DiscountPolicy) -> Receipt {
        let mut lines = Vec::new();

        // Catalog index order: stable and deterministic, per contract.
        for (index, item) in catalog.iter().enumerate() {
            let quantity = ledger.quantity(index).unwrap_or(0);
            if quantity == 0 {
                continue;
            }

            lines.push(ReceiptLine {
                name: item.name.clone(),
                unit_price: item.price,
                quantity,
                subtotal: item.price * quantity as i64,
            });
        }

        let total = ledger.total();
        let total_due = policy.apply(total);

        Receipt {
            lines,
            total,
            discount: total - total_due,
            total_due,
        }
    }

    /// True when the discount policy reduced the total.
    #[inline]
    pub fn discounted(&self) -> bool {
        self.discount.is_positive()
    }
}

// =============================================================================
// Display
// =============================================================================

/// Renders the fixed-width receipt table the kiosk prints:
///
/// ```text
/// Product         Price      Amount     Subtotal
/// --------------------------------------------------
/// Ice Americano   2000       2          4000 won
/// Cafe Latte      3000       1          3000 won
/// --------------------------------------------------
/// Total price before discount:   7000 won
/// No discount applied.
/// Total price:                   7000 won
/// ```
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<15} {:<10} {:<10} {:<10}",
            "Product", "Price", "Amount", "Subtotal"
        )?;
        writeln!(f, "{}", "-".repeat(50))?;

        for line in &self.lines {
            writeln!(
                f,
                "{:<15} {:<10} {:<10} {} won",
                line.name,
                line.unit_price.won(),
                line.quantity,
                line.subtotal.won()
            )?;
        }

        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(
            f,
            "{:<30} {} won",
            "Total price before discount:",
            self.total.won()
        )?;

        if self.discounted() {
            writeln!(f, "{:<30} {} won", "Discount amount:", self.discount.won())?;
            writeln!(
                f,
                "{:<30} {} won",
                "Total price after discount:",
                self.total_due.won()
            )?;
        } else {
            writeln!(f, "{:<30}", "No discount applied.")?;
            writeln!(f, "{:<30} {} won", "Total price:", self.total.won())?;
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe_catalog() -> Catalog {
        Catalog::new(
            vec![
                "Ice Americano".to_string(),
                "Cafe Latte".to_string(),
                "Watermelon Juice".to_string(),
            ],
            vec![2000, 3000, 4900],
        )
        .unwrap()
    }

    fn ledger_with(catalog: &Catalog, selections: &[usize]) -> OrderLedger {
        let mut ledger = OrderLedger::new(catalog);
        for &index in selections {
            ledger.record(catalog, index).unwrap();
        }
        ledger
    }

    #[test]
    fn test_lines_in_catalog_order_nonzero_only() {
        let catalog = cafe_catalog();
        // Order juice first, americano second: receipt must still list
        // americano before juice (catalog order), and skip the latte.
        let ledger = ledger_with(&catalog, &[2, 0, 0]);

        let receipt = Receipt::render(&catalog, &ledger, &DiscountPolicy::default());

        let names: Vec<&str> = receipt.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Ice Americano", "Watermelon Juice"]);
    }

    #[test]
    fn test_no_discount_scenario() {
        let catalog = cafe_catalog();
        // 2x americano + 1x latte = 7000, below threshold
        let ledger = ledger_with(&catalog, &[0, 0, 1]);

        let receipt = Receipt::render(&catalog, &ledger, &DiscountPolicy::default());

        assert_eq!(receipt.total.won(), 7000);
        assert!(!receipt.discounted());
        assert_eq!(receipt.discount.won(), 0);
        assert_eq!(receipt.total_due.won(), 7000);

        let americano = &receipt.lines[0];
        assert_eq!(americano.quantity, 2);
        assert_eq!(americano.subtotal.won(), 4000);
        let latte = &receipt.lines[1];
        assert_eq!(latte.quantity, 1);
        assert_eq!(latte.subtotal.won(), 3000);
    }

    #[test]
    fn test_just_below_threshold() {
        let catalog = cafe_catalog();
        // juice + 2x americano = 8900, still below 10000
        let ledger = ledger_with(&catalog, &[2, 0, 0]);

        let receipt = Receipt::render(&catalog, &ledger, &DiscountPolicy::default());
        assert_eq!(receipt.total.won(), 8900);
        assert!(!receipt.discounted());
    }

    #[test]
    fn test_discount_scenario() {
        let catalog = cafe_catalog();
        // 2x juice = 9800 (no discount), + americano = 11800 (discounted)
        let below = ledger_with(&catalog, &[2, 2]);
        let receipt = Receipt::render(&catalog, &below, &DiscountPolicy::default());
        assert_eq!(receipt.total.won(), 9800);
        assert!(!receipt.discounted());

        let above = ledger_with(&catalog, &[2, 2, 0]);
        let receipt = Receipt::render(&catalog, &above, &DiscountPolicy::default());
        assert_eq!(receipt.total.won(), 11_800);
        assert!(receipt.discounted());
        assert_eq!(receipt.discount.won(), 1_180);
        assert_eq!(receipt.total_due.won(), 10_620);
    }

    #[test]
    fn test_empty_ledger_renders_empty_receipt() {
        let catalog = cafe_catalog();
        let ledger = OrderLedger::new(&catalog);

        let receipt = Receipt::render(&catalog, &ledger, &DiscountPolicy::default());
        assert!(receipt.lines.is_empty());
        assert_eq!(receipt.total_due.won(), 0);
    }

    #[test]
    fn test_display_no_discount() {
        let catalog = cafe_catalog();
        let ledger = ledger_with(&catalog, &[0, 0, 1]);
        let receipt = Receipt::render(&catalog, &ledger, &DiscountPolicy::default());

        let text = receipt.to_string();
        assert!(text.contains("Product         Price      Amount     Subtotal"));
        assert!(text.contains("Ice Americano   2000       2          4000 won"));
        assert!(text.contains("No discount applied."));
        assert!(text.contains("Total price:                   7000 won"));
        assert!(!text.contains("Discount amount:"));
    }

    #[test]
    fn test_display_with_discount() {
        let catalog = cafe_catalog();
        let ledger = ledger_with(&catalog, &[2, 2, 0]);
        let receipt = Receipt::render(&catalog, &ledger, &DiscountPolicy::default());

        let text = receipt.to_string();
        assert!(text.contains("Total price before discount:   11800 won"));
        assert!(text.contains("Discount amount:               1180 won"));
        assert!(text.contains("Total price after discount:    10620 won"));
        assert!(!text.contains("No discount applied."));
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let catalog = cafe_catalog();
        let ledger = ledger_with(&catalog, &[2, 2, 0]);
        let receipt = Receipt::render(&catalog, &ledger, &DiscountPolicy::default());

        // kiosk-db persists this exact shape in the issue log
        let json = serde_json::to_string(&receipt).unwrap();
        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, receipt);
    }
}
