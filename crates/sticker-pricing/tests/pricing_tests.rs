use proptest::prelude::*;
use sticker_pricing::{Catalog, PricingError};

#[test]
fn test_quote_all_sizes_at_unit_quantity() {
    let catalog = Catalog::real_estate();
    let expected = [7.0, 10.0, 12.0, 15.0];
    for (index, base) in expected.into_iter().enumerate() {
        let quote = catalog.quote(index, 1.0).unwrap();
        assert_eq!(quote.base_price, base);
        assert_eq!(quote.unit_price, base);
        assert_eq!(quote.total_price, base);
        assert_eq!(quote.discount_pct, 0);
    }
}

#[test]
fn test_out_of_range_size_is_the_only_failure() {
    let catalog = Catalog::real_estate();
    assert!(matches!(
        catalog.quote(99, 10.0),
        Err(PricingError::InvalidSize {
            index: 99,
            available: 4
        })
    ));
    // Quantity is never a failure, however malformed.
    assert!(catalog.quote(0, f64::NAN).is_ok());
    assert!(catalog.quote(0, -1000.0).is_ok());
}

#[test]
fn test_quote_is_deterministic() {
    let catalog = Catalog::real_estate();
    let a = catalog.quote(2, 75.0).unwrap();
    let b = catalog.quote(2, 75.0).unwrap();
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn prop_total_equals_unit_times_quantity(
        size_index in 0usize..4,
        quantity in 1u32..100_000,
    ) {
        let catalog = Catalog::real_estate();
        let quote = catalog.quote(size_index, f64::from(quantity)).unwrap();
        let expected = quote.unit_price * f64::from(quote.quantity);
        prop_assert!(
            (quote.total_price - expected).abs() <= 0.01,
            "total {} != unit {} x qty {}",
            quote.total_price,
            quote.unit_price,
            quote.quantity
        );
    }

    #[test]
    fn prop_discount_never_decreases_with_quantity(
        size_index in 0usize..4,
        quantity in 1u32..10_000,
    ) {
        let catalog = Catalog::real_estate();
        let here = catalog.quote(size_index, f64::from(quantity)).unwrap();
        let next = catalog.quote(size_index, f64::from(quantity + 1)).unwrap();
        prop_assert!(next.discount_pct >= here.discount_pct);
    }

    #[test]
    fn prop_coerced_quantity_is_positive(raw in prop::num::f64::ANY) {
        let quantity = sticker_pricing::coerce_quantity(raw);
        prop_assert!(quantity >= 1);
    }

    #[test]
    fn prop_next_tier_is_strictly_above_quantity(
        size_index in 0usize..4,
        quantity in 1u32..500,
    ) {
        let catalog = Catalog::real_estate();
        let quote = catalog.quote(size_index, f64::from(quantity)).unwrap();
        if let Some(next) = quote.next_tier {
            prop_assert!(next.quantity > quote.quantity);
            prop_assert!(next.discount_pct >= quote.discount_pct);
        } else {
            // Top tier starts at 200 in the real-estate catalog.
            prop_assert!(quote.quantity >= 200);
        }
    }
}
