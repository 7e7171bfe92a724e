//! # Order Ledger
//!
//! Per-session order state: how many of each item, and the running total.
//!
//! ## The Accumulator Invariant
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  At EVERY observation point:                                        │
//! │                                                                     │
//! │     total == Σ catalog.price(i) × quantities[i]                     │
//! │                                                                     │
//! │  The only mutation is record(): one unit of one item at a time,     │
//! │  which bumps quantities[i] and adds price(i) to the total in the    │
//! │  same call. There is no other write path, so the invariant cannot   │
//! │  drift.                                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Ambient State
//! The original system kept totals in module-level globals. Here the
//! ledger is an explicit value owned by the session and passed by
//! reference into each operation. Not thread-safe by contract:
//! single-writer, single-session usage only.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Order Line
// =============================================================================

/// The snapshot returned by [`OrderLedger::record`]: what was just ordered.
///
/// The session boundary uses this to print the confirmation line
/// (`"Cafe Latte ordered. Price: 3000 won"`). The reporting itself is a
/// boundary concern, not part of the ledger invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Zero-based catalog index of the recorded item.
    pub index: usize,

    /// Item name at recording time.
    pub name: String,

    /// Unit price of the recorded item.
    pub price: Money,
}

// =============================================================================
// Order Ledger
// =============================================================================

/// Mutable per-session order state built against a [`Catalog`].
///
/// Created empty when an ordering session starts; mutated only by
/// [`record`](OrderLedger::record); discarded (or [`reset`](OrderLedger::reset))
/// when the session completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLedger {
    /// Units ordered per catalog index. Parallel to the catalog.
    quantities: Vec<u32>,

    /// Running total. Maintained incrementally by `record`.
    total: Money,
}

impl OrderLedger {
    /// Creates an empty ledger sized to the catalog.
    pub fn new(catalog: &Catalog) -> Self {
        OrderLedger {
            quantities: vec![0; catalog.len()],
            total: Money::zero(),
        }
    }

    /// Records one unit of the item at `index`.
    ///
    /// Increments `quantities[index]` and adds the unit price to the
    /// running total, returning the recorded line so the caller can
    /// report it.
    ///
    /// ## Errors
    /// [`CoreError::IndexOutOfRange`] when `index` is outside the catalog;
    /// the ledger is untouched in that case.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::{Catalog, OrderLedger};
    ///
    /// let catalog = Catalog::new(vec!["Cafe Latte".into()], vec![3000]).unwrap();
    /// let mut ledger = OrderLedger::new(&catalog);
    ///
    /// let line = ledger.record(&catalog, 0).unwrap();
    /// assert_eq!(line.name, "Cafe Latte");
    /// assert_eq!(ledger.total().won(), 3000);
    /// ```
    pub fn record(&mut self, catalog: &Catalog, index: usize) -> CoreResult<OrderLine> {
        // Validate against our own length as well: a ledger built for one
        // catalog must not be driven by a longer one.
        if index >= self.quantities.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.quantities.len(),
            });
        }

        let item = catalog.item_at(index)?;

        self.quantities[index] += 1;
        self.total += item.price;

        Ok(OrderLine {
            index,
            name: item.name.clone(),
            price: item.price,
        })
    }

    /// Units ordered for the item at `index`.
    pub fn quantity(&self, index: usize) -> CoreResult<u32> {
        self.quantities
            .get(index)
            .copied()
            .ok_or(CoreError::IndexOutOfRange {
                index,
                len: self.quantities.len(),
            })
    }

    /// The running pre-discount total.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.total.is_zero() && self.quantities.iter().all(|&q| q == 0)
    }

    /// Clears the ledger back to its just-created state.
    pub fn reset(&mut self) {
        self.quantities.iter_mut().for_each(|q| *q = 0);
        self.total = Money::zero();
    }

    /// Iterates `(index, quantity)` pairs in catalog order.
    pub fn quantities(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.quantities.iter().copied().enumerate()
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

    /// Recomputes the total from scratch; used to assert the accumulator
    /// invariant after every mutation.
    fn recomputed_total(catalog: &Catalog, ledger: &OrderLedger) -> Money {
        ledger
            .quantities()
            .map(|(i, q)| catalog.price_at(i).unwrap() * q as i64)
            .sum()
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let catalog = cafe_catalog();
        let ledger = OrderLedger::new(&catalog);

        assert!(ledger.is_empty());
        assert_eq!(ledger.total().won(), 0);
        for i in 0..catalog.len() {
            assert_eq!(ledger.quantity(i).unwrap(), 0);
        }
    }

    #[test]
    fn test_record_accumulates() {
        let catalog = cafe_catalog();
        let mut ledger = OrderLedger::new(&catalog);

        let line = ledger.record(&catalog, 0).unwrap();
        assert_eq!(line.name, "Ice Americano");
        assert_eq!(line.price.won(), 2000);

        ledger.record(&catalog, 0).unwrap();
        ledger.record(&catalog, 1).unwrap();

        assert_eq!(ledger.quantity(0).unwrap(), 2);
        assert_eq!(ledger.quantity(1).unwrap(), 1);
        assert_eq!(ledger.quantity(2).unwrap(), 0);
        assert_eq!(ledger.total().won(), 7000);
    }

    #[test]
    fn test_invariant_holds_after_every_record() {
        let catalog = cafe_catalog();
        let mut ledger = OrderLedger::new(&catalog);

        for index in [2, 0, 1, 0, 2, 1, 1] {
            ledger.record(&catalog, index).unwrap();
            assert_eq!(ledger.total(), recomputed_total(&catalog, &ledger));
        }
    }

    #[test]
    fn test_out_of_range_leaves_state_untouched() {
        let catalog = cafe_catalog();
        let mut ledger = OrderLedger::new(&catalog);
        ledger.record(&catalog, 0).unwrap();

        let err = ledger.record(&catalog, 3).unwrap_err();
        assert!(matches!(err, CoreError::IndexOutOfRange { index: 3, len: 3 }));

        // total and quantities unchanged after the failed record
        assert_eq!(ledger.total().won(), 2000);
        assert_eq!(ledger.quantity(0).unwrap(), 1);
    }

    #[test]
    fn test_reset() {
        let catalog = cafe_catalog();
        let mut ledger = OrderLedger::new(&catalog);
        ledger.record(&catalog, 1).unwrap();
        ledger.record(&catalog, 2).unwrap();
        assert!(!ledger.is_empty());

        ledger.reset();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total().won(), 0);
    }
}
