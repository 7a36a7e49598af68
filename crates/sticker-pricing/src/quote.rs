//! Price quoting
//!
//! Implements the pricing engine:
//! - Quantity coercion (free-form input normalized to a positive integer)
//! - Discount tier lookup
//! - Full-precision math, 2-decimal rounding at the output boundary
//! - Next-tier upsell hints

use crate::catalog::Catalog;
use crate::error::PricingError;
use serde::{Deserialize, Serialize};

/// The next discount milestone above a quoted quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTier {
    /// Lowest quantity that reaches the tier
    pub quantity: u32,
    /// Discount percentage granted at that quantity (0-100)
    pub discount_pct: u32,
}

/// A computed price quote
///
/// Pure function of (size index, quantity) and the static catalog. Recomputed
/// fresh on every change; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Display name of the quoted size
    pub size_name: String,
    /// Diameter of the quoted size in millimeters
    pub diameter_mm: u32,
    /// Quantity after coercion
    pub quantity: u32,
    /// Base price per sticker, rounded to 2 decimals
    pub base_price: f64,
    /// Discounted price per sticker, rounded to 2 decimals
    pub unit_price: f64,
    /// Total order price, rounded to 2 decimals
    pub total_price: f64,
    /// Applied discount percentage (0-100)
    pub discount_pct: u32,
    /// Next discount milestone, or `None` when already in the top tier
    pub next_tier: Option<NextTier>,
}

impl PriceQuote {
    /// Upsell message for the display layer
    ///
    /// "Save N% when you add K stickers" when a higher tier exists, otherwise
    /// "You saved N%" when a discount is already applied, otherwise `None`.
    #[must_use]
    pub fn upsell_message(&self) -> Option<String> {
        if let Some(next) = self.next_tier {
            let to_add = next.quantity - self.quantity;
            Some(format!(
                "Save {}% when you add {} stickers",
                next.discount_pct, to_add
            ))
        } else if self.discount_pct > 0 {
            Some(format!("You saved {}%", self.discount_pct))
        } else {
            None
        }
    }
}

/// Normalize free-form quantity input to a positive integer
///
/// Fractional values are floored toward zero; non-finite, zero, or negative
/// input clamps to 1. Callers parsing text pass the parse failure through as
/// NaN (or zero), which lands here as 1.
#[inline]
#[must_use]
pub fn coerce_quantity(raw: f64) -> u32 {
    if !raw.is_finite() || raw < 1.0 {
        return 1;
    }
    let floored = raw.floor();
    if floored >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        floored as u32
    }
}

/// Round a currency amount to 2 decimal places
#[inline]
#[must_use]
pub(crate) fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

impl Catalog {
    /// Compute a price quote for a size and quantity
    ///
    /// `size_index` must be a valid index into the size list; `quantity` is
    /// coerced, never rejected. Discount is applied to the base price, then
    /// multiplied by quantity, each step at full precision; every currency
    /// field is rounded to 2 decimals only on output.
    ///
    /// # Errors
    /// [`PricingError::InvalidSize`] when `size_index` is out of range.
    pub fn quote(&self, size_index: usize, quantity: f64) -> Result<PriceQuote, PricingError> {
        let size = self.size(size_index).ok_or(PricingError::InvalidSize {
            index: size_index,
            available: self.sizes.len(),
        })?;

        let quantity = coerce_quantity(quantity);
        let discount = self.tier_for(quantity).map_or(0.0, |t| t.discount);

        let base_price = size.unit_price;
        let unit_price = base_price * (1.0 - discount);
        let total_price = unit_price * f64::from(quantity);

        let next_tier = self.tier_above(quantity).map(|t| NextTier {
            quantity: t.min,
            discount_pct: (t.discount * 100.0).round() as u32,
        });

        let quote = PriceQuote {
            size_name: size.name.clone(),
            diameter_mm: size.diameter_mm,
            quantity,
            base_price: round_currency(base_price),
            unit_price: round_currency(unit_price),
            total_price: round_currency(total_price),
            discount_pct: (discount * 100.0).round() as u32,
            next_tier,
        };
        tracing::debug!(
            size = %quote.size_name,
            quantity,
            total = quote.total_price,
            discount_pct = quote.discount_pct,
            "computed quote"
        );
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::real_estate()
    }

    #[test]
    fn medium_fifty_scenario() {
        // Medium (500mm), base 10.00, 12% tier at 50
        let quote = catalog().quote(1, 50.0).unwrap();
        assert_eq!(quote.size_name, "Medium (500mm)");
        assert_eq!(quote.base_price, 10.0);
        assert_eq!(quote.unit_price, 8.8);
        assert_eq!(quote.total_price, 440.0);
        assert_eq!(quote.discount_pct, 12);
    }

    #[test]
    fn tier_boundaries_are_exact() {
        let catalog = catalog();
        let pct = |qty: f64| catalog.quote(0, qty).unwrap().discount_pct;
        assert_eq!(pct(19.0), 0);
        assert_eq!(pct(20.0), 5);
        assert_eq!(pct(49.0), 5);
        assert_eq!(pct(50.0), 12);
        assert_eq!(pct(99.0), 12);
        assert_eq!(pct(100.0), 16);
        assert_eq!(pct(199.0), 16);
        assert_eq!(pct(200.0), 22);
    }

    #[test]
    fn discount_is_monotonic_across_tiers() {
        let catalog = catalog();
        let mut last = 0;
        for qty in [1u32, 20, 50, 100, 200] {
            let pct = catalog.quote(2, f64::from(qty)).unwrap().discount_pct;
            assert!(pct >= last, "discount dropped at quantity {qty}");
            last = pct;
        }
        assert_eq!(last, 22);
    }

    #[test]
    fn next_tier_hint_at_fifteen() {
        let quote = catalog().quote(0, 15.0).unwrap();
        assert_eq!(
            quote.next_tier,
            Some(NextTier {
                quantity: 20,
                discount_pct: 5
            })
        );
        assert_eq!(
            quote.upsell_message().as_deref(),
            Some("Save 5% when you add 5 stickers")
        );
    }

    #[test]
    fn top_tier_has_no_hint() {
        let quote = catalog().quote(0, 200.0).unwrap();
        assert_eq!(quote.next_tier, None);
        assert_eq!(quote.upsell_message().as_deref(), Some("You saved 22%"));

        let quote = catalog().quote(0, 1000.0).unwrap();
        assert_eq!(quote.next_tier, None);
    }

    #[test]
    fn no_message_without_discount_or_hint() {
        use crate::catalog::DiscountTier;

        let single_tier = catalog().with_discount_tiers(vec![DiscountTier::open(1, 0.0)]);
        let quote = single_tier.quote(0, 10.0).unwrap();
        assert_eq!(quote.upsell_message(), None);
    }

    #[test]
    fn quantity_is_coerced_before_pricing() {
        assert_eq!(coerce_quantity(f64::NAN), 1); // "abc" parses to NaN upstream
        assert_eq!(coerce_quantity(0.0), 1);
        assert_eq!(coerce_quantity(-5.0), 1);
        assert_eq!(coerce_quantity(2.9), 2);
        assert_eq!(coerce_quantity(1.0), 1);
        assert_eq!(coerce_quantity(f64::INFINITY), 1);

        let quote = catalog().quote(0, -5.0).unwrap();
        assert_eq!(quote.quantity, 1);
        assert_eq!(quote.total_price, 7.0);
    }

    #[test]
    fn invalid_size_is_rejected() {
        let err = catalog().quote(4, 10.0).unwrap_err();
        assert_eq!(
            err,
            crate::error::PricingError::InvalidSize {
                index: 4,
                available: 4
            }
        );
    }

    #[test]
    fn rounding_happens_at_output_only() {
        // 15.00 * 0.78 = 11.70 unit; at 333 units full precision gives
        // 3896.1 exactly; rounding per-unit first would not change this one,
        // so also check a case with a repeating intermediate.
        let quote = catalog().quote(3, 333.0).unwrap();
        assert_eq!(quote.unit_price, 11.7);
        assert_eq!(quote.total_price, 3896.1);

        // 7.00 * 0.95 = 6.65 exactly; 6.65 * 3 = 19.95
        let quote = catalog().quote(0, 21.0).unwrap();
        assert_eq!(quote.unit_price, 6.65);
        assert!((quote.total_price - 6.65 * 21.0).abs() < 0.01);
    }
}
