//! # Catalog Module
//!
//! The immutable cafe menu: an ordered list of (name, price) pairs.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Lifecycle                             │
//! │                                                                     │
//! │  Caller supplies two parallel lists                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Catalog::new(names, prices) ← validates once, up front             │
//! │       │                                                             │
//! │       ├── lengths differ?      ValidationError::LengthMismatch      │
//! │       ├── zero items?          ValidationError::Empty               │
//! │       ├── blank name?          ValidationError::Required            │
//! │       └── negative price?      ValidationError::NegativePrice       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Immutable Catalog ── name_at / price_at / display_menu forever     │
//! │                                                                     │
//! │  A session never starts against an invalid catalog: construction    │
//! │  is the only validation point, lookups only check the index.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Catalog Item
// =============================================================================

/// A single purchasable item: a display name and its unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Display name shown on the menu and the receipt. Never blank.
    pub name: String,

    /// Unit price in whole won. Never negative.
    pub price: Money,
}

// =============================================================================
// Catalog
// =============================================================================

/// The fixed, ordered menu the kiosk sells from.
///
/// ## Invariants (established at construction, held forever)
/// - At least one item
/// - Every name is non-blank
/// - Every price is >= 0
///
/// Immutable after construction: there is no way to add, remove, or
/// reprice an item on a live catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog from two parallel lists of names and prices (won).
    ///
    /// ## Errors
    /// - [`ValidationError::LengthMismatch`] when the lists do not pair up
    /// - [`ValidationError::Empty`] when both lists are empty
    /// - [`ValidationError::Required`] when a name is blank
    /// - [`ValidationError::NegativePrice`] when a price is below zero
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::Catalog;
    ///
    /// let catalog = Catalog::new(
    ///     vec!["Ice Americano".into(), "Cafe Latte".into()],
    ///     vec![2000, 3000],
    /// ).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn new(names: Vec<String>, prices: Vec<i64>) -> Result<Self, ValidationError> {
        if names.len() != prices.len() {
            return Err(ValidationError::LengthMismatch {
                names: names.len(),
                prices: prices.len(),
            });
        }

        if names.is_empty() {
            return Err(ValidationError::Empty);
        }

        let mut items = Vec::with_capacity(names.len());
        for (name, price) in names.into_iter().zip(prices) {
            if name.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "name".to_string(),
                });
            }
            if price < 0 {
                return Err(ValidationError::NegativePrice { name, price });
            }
            items.push(CatalogItem {
                name,
                price: Money::from_won(price),
            });
        }

        Ok(Catalog { items })
    }

    /// Number of items on the menu.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A catalog is never empty by construction, but the conventional
    /// pair to `len()` is still provided.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`.
    ///
    /// ## Errors
    /// [`CoreError::IndexOutOfRange`] when `index >= len()`.
    pub fn item_at(&self, index: usize) -> CoreResult<&CatalogItem> {
        self.items.get(index).ok_or(CoreError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Returns the display name at `index`.
    pub fn name_at(&self, index: usize) -> CoreResult<&str> {
        Ok(self.item_at(index)?.name.as_str())
    }

    /// Returns the unit price at `index`.
    pub fn price_at(&self, index: usize) -> CoreResult<Money> {
        Ok(self.item_at(index)?.price)
    }

    /// Iterates over the items in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// Renders the numbered menu prompt shown to the customer.
    ///
    /// ## Format
    /// One line per item, 1-based numbering, then the exit option:
    /// ```text
    /// 1) Ice Americano 2000 won
    /// 2) Cafe Latte 3000 won
    /// 3) Exit :
    /// ```
    /// The exit sentinel is always `len() + 1` from the customer's
    /// perspective.
    pub fn display_menu(&self) -> String {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            // write! to String cannot fail
            let _ = writeln!(out, "{}) {} {}", i + 1, item.name, item.price);
        }
        let _ = write!(out, "{}) Exit : ", self.items.len() + 1);
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
