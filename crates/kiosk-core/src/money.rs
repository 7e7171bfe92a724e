//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A 10% discount on 10005 won:                                       │
//! │    10005 * 0.9 = 9004.5             → which way does it round?      │
//! │                                                                     │
//! │  OUR SOLUTION: Integer won + one explicit rounding rule             │
//! │    (10005 * 9000 + 5000) / 10000 = 9005                             │
//! │    Round to nearest, ties away from zero. Always. Documented.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The won has no minor unit, so `Money` counts whole won directly - no
//! cents scale, no conversion at the display boundary.
//!
//! ## Usage
//! ```rust
//! use kiosk_core::Money;
//!
//! let price = Money::from_won(2000);
//! let line = price * 3;                      // 6000 won
//! let total = line + Money::from_won(4900);  // 10900 won
//! assert_eq!(format!("{}", total), "10900 won");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole won.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediate values (discount deltas)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support so receipts serialize to JSON
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole won.
    #[inline]
    pub const fn from_won(won: i64) -> Self {
        Money(won)
    }

    /// Returns the value in whole won.
    #[inline]
    pub const fn won(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::Money;
    ///
    /// let unit_price = Money::from_won(2000);
    /// let subtotal = unit_price.multiply_quantity(2);
    /// assert_eq!(subtotal.won(), 4000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Scales the amount by a rate in basis points, rounding to the nearest
    /// won with ties away from zero.
    ///
    /// ## Rounding Rule
    /// `amount × bps / 10000`, rounded half away from zero. The source
    /// system was inconsistent about discount rounding; this crate picks
    /// one deterministic rule and applies it everywhere.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::Money;
    ///
    /// // 90% of 10005 won = 9004.5 → ties away from zero → 9005
    /// let kept = Money::from_won(10005).apply_rate_bps(9000);
    /// assert_eq!(kept.won(), 9005);
    /// ```
    pub fn apply_rate_bps(&self, bps: u32) -> Money {
        // i128 intermediate to rule out overflow on large totals
        let scaled = self.0 as i128 * bps as i128;
        let rounded = if scaled >= 0 {
            (scaled + 5_000) / 10_000
        } else {
            (scaled - 5_000) / 10_000
        };
        Money(rounded as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money the way the kiosk prints it.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} won", self.0)
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values (ledger totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
