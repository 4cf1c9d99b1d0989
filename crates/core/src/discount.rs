//! Derived discount badge state.
//!
//! A discount is never stored on a record; it is computed from the current
//! price and the optional original price every time a view is built.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;

/// Discount state for a product.
///
/// Fields are private so a percentage can only exist alongside
/// `has_discount == true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discount {
    has_discount: bool,
    percent: i64,
}

impl Discount {
    /// No discount.
    pub const NONE: Self = Self {
        has_discount: false,
        percent: 0,
    };

    /// Compute the discount for `price` against an optional `original_price`.
    ///
    /// A discount exists only when the original price is present and strictly
    /// greater than the current price. The percentage is
    /// `round(100 * (original - price) / original)`, rounding halves away
    /// from zero.
    ///
    /// A zero current price (the default for records without one) paired with
    /// any positive original price yields 100 %.
    #[must_use]
    pub fn compute(price: Decimal, original_price: Option<Decimal>) -> Self {
        let Some(original) = original_price.filter(|original| *original > price) else {
            return Self::NONE;
        };

        let percent = (original - price)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(original))
            .map(|ratio| ratio.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.to_i64())
            .unwrap_or(0);

        Self {
            has_discount: true,
            percent,
        }
    }

    /// Whether the discount badge should be shown.
    #[must_use]
    pub const fn has_discount(&self) -> bool {
        self.has_discount
    }

    /// Discount percentage; `0` when there is no discount.
    #[must_use]
    pub const fn percent(&self) -> i64 {
        self.percent
    }

    /// Badge text (e.g., "20% OFF"), only when a discount exists.
    #[must_use]
    pub fn badge_label(&self) -> Option<String> {
        self.has_discount.then(|| format!("{}% OFF", self.percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    #[test]
    fn test_twenty_percent() {
        let discount = Discount::compute(dec(800), Some(dec(1000)));
        assert!(discount.has_discount());
        assert_eq!(discount.percent(), 20);
        assert_eq!(discount.badge_label().as_deref(), Some("20% OFF"));
    }

    #[test]
    fn test_absent_original_price() {
        let discount = Discount::compute(dec(850), None);
        assert_eq!(discount, Discount::NONE);
        assert_eq!(discount.badge_label(), None);
    }

    #[test]
    fn test_equal_prices_is_not_a_discount() {
        assert!(!Discount::compute(dec(500), Some(dec(500))).has_discount());
    }

    #[test]
    fn test_original_below_price_is_not_a_discount() {
        let discount = Discount::compute(dec(900), Some(dec(700)));
        assert!(!discount.has_discount());
        assert_eq!(discount.percent(), 0);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 1/8 off = 12.5%
        assert_eq!(Discount::compute(dec(700), Some(dec(800))).percent(), 13);
        // 7/8 off = 87.5%
        assert_eq!(Discount::compute(dec(100), Some(dec(800))).percent(), 88);
        // 1/3 off = 33.33%
        assert_eq!(Discount::compute(dec(200), Some(dec(300))).percent(), 33);
        // 2/3 off = 66.67%
        assert_eq!(Discount::compute(dec(100), Some(dec(300))).percent(), 67);
    }

    #[test]
    fn test_zero_price_reads_as_full_discount() {
        let discount = Discount::compute(Decimal::ZERO, Some(dec(1000)));
        assert!(discount.has_discount());
        assert_eq!(discount.percent(), 100);
    }

    #[test]
    fn test_zero_original_price_does_not_panic() {
        let discount = Discount::compute(dec(-5), Some(Decimal::ZERO));
        assert!(discount.has_discount());
        assert_eq!(discount.percent(), 0);
    }
}
