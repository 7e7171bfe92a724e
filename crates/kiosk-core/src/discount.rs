//! # Discount Policy
//!
//! The one pricing rule in the system: orders at or above a threshold get
//! a percentage off.
//!
//! ## Decision Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  total < threshold       →  total unchanged                         │
//! │  total == threshold      →  discounted (boundary is INCLUSIVE)      │
//! │  total > threshold       →  discounted                              │
//! │                                                                     │
//! │  discounted = total × (10000 − rate_bps) / 10000                    │
//! │               rounded to nearest won, ties away from zero           │
//! │                                                                     │
//! │  Defaults: threshold 10000 won, rate 1000 bps (10%)                 │
//! │    apply(9999)  == 9999                                             │
//! │    apply(10000) == 9000                                             │
//! │    apply(0)     == 0                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and deterministic: no side effects, same input always yields the
//! same output.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::{DEFAULT_DISCOUNT_RATE_BPS, DEFAULT_DISCOUNT_THRESHOLD_WON};

// =============================================================================
// Discount Policy
// =============================================================================

/// Threshold-based percentage discount.
///
/// Construct with [`DiscountPolicy::new`] to override the defaults, or use
/// [`DiscountPolicy::default`] for the standard 10% over 10,000 won rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountPolicy {
    /// Minimum total (inclusive) at which the discount applies.
    threshold: Money,

    /// Discount rate in basis points (1000 = 10%).
    rate_bps: u32,
}

impl DiscountPolicy {
    /// Creates a policy with an explicit threshold (won) and rate (bps).
    ///
    /// ## Errors
    /// [`ValidationError::OutOfRange`] when `rate_bps > 10000`: a discount
    /// above 100% would produce negative totals.
    pub fn new(threshold_won: i64, rate_bps: u32) -> Result<Self, ValidationError> {
        if rate_bps > 10_000 {
            return Err(ValidationError::OutOfRange {
                field: "rate_bps".to_string(),
                min: 0,
                max: 10_000,
            });
        }

        Ok(DiscountPolicy {
            threshold: Money::from_won(threshold_won),
            rate_bps,
        })
    }

    /// The threshold at which the discount starts applying.
    #[inline]
    pub fn threshold(&self) -> Money {
        self.threshold
    }

    /// The discount rate in basis points.
    #[inline]
    pub fn rate_bps(&self) -> u32 {
        self.rate_bps
    }

    /// Applies the policy to a pre-discount total.
    ///
    /// Returns the amount payable: unchanged below the threshold, the
    /// rounded discounted total at or above it.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::{DiscountPolicy, Money};
    ///
    /// let policy = DiscountPolicy::default();
    /// assert_eq!(policy.apply(Money::from_won(9_999)).won(), 9_999);
    /// assert_eq!(policy.apply(Money::from_won(10_000)).won(), 9_000);
    /// ```
    pub fn apply(&self, total: Money) -> Money {
        if total >= self.threshold {
            // Round the payable figure, then derive the discount from it,
            // so the bottom line of the receipt is the deterministic one.
            total.apply_rate_bps(10_000 - self.rate_bps)
        } else {
            total
        }
    }

    /// How much the policy takes off a pre-discount total.
    ///
    /// Zero below the threshold; `total - apply(total)` otherwise.
    pub fn discount_amount(&self, total: Money) -> Money {
        total - self.apply(total)
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        DiscountPolicy {
            threshold: Money::from_won(DEFAULT_DISCOUNT_THRESHOLD_WON),
            rate_bps: DEFAULT_DISCOUNT_RATE_BPS,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_unchanged() {
        let policy = DiscountPolicy::default();
        assert_eq!(policy.apply(Money::from_won(9_999)).won(), 9_999);
        assert_eq!(policy.discount_amount(Money::from_won(9_999)).won(), 0);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let policy = DiscountPolicy::default();
        assert_eq!(policy.apply(Money::from_won(10_000)).won(), 9_000);
        assert_eq!(policy.discount_amount(Money::from_won(10_000)).won(), 1_000);
    }

    #[test]
    fn test_zero_total() {
        let policy = DiscountPolicy::default();
        assert_eq!(policy.apply(Money::zero()).won(), 0);
    }

    #[test]
    fn test_above_threshold() {
        let policy = DiscountPolicy::default();
        assert_eq!(policy.apply(Money::from_won(11_800)).won(), 10_620);
        assert_eq!(policy.discount_amount(Money::from_won(11_800)).won(), 1_180);
    }

    #[test]
    fn test_rounding_ties_away_from_zero() {
        let policy = DiscountPolicy::default();
        // 10005 * 0.9 = 9004.5 → 9005; discount derived as the remainder
        assert_eq!(policy.apply(Money::from_won(10_005)).won(), 9_005);
        assert_eq!(policy.discount_amount(Money::from_won(10_005)).won(), 1_000);
    }

    #[test]
    fn test_custom_policy() {
        // 5% over 5000 won
        let policy = DiscountPolicy::new(5_000, 500).unwrap();
        assert_eq!(policy.apply(Money::from_won(4_999)).won(), 4_999);
        assert_eq!(policy.apply(Money::from_won(6_000)).won(), 5_700);
    }

    #[test]
    fn test_rate_above_hundred_percent_rejected() {
        let err = DiscountPolicy::new(10_000, 10_001).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_determinism() {
        let policy = DiscountPolicy::default();
        let total = Money::from_won(12_345);
        assert_eq!(policy.apply(total), policy.apply(total));
    }
}
