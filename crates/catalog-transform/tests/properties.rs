//! Property tests for transform invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use catalog_model::Record;
use catalog_transform::transform;

fn arb_price() -> impl Strategy<Value = Decimal> {
    // Mantissa/scale pairs covering negative, zero, and large prices at
    // mixed input scales.
    (-10_000_000i64..10_000_000, 0u32..4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

proptest! {
    #[test]
    fn non_electronics_records_keep_price_and_category(
        name in "[a-z ]{0,16}",
        category in "[A-Za-z]{1,12}",
        price in arb_price(),
    ) {
        prop_assume!(!category.eq_ignore_ascii_case("Electronics"));
        let out = transform(Record::new(1, name.clone(), price, category.clone()));

        // Bit-for-bit: the rendered price keeps its input scale.
        prop_assert_eq!(out.price.to_string(), price.to_string());
        prop_assert_eq!(out.category, category);
        prop_assert_eq!(out.name, name.to_uppercase());
        prop_assert!(out.price_range.is_some());
    }

    #[test]
    fn non_electronics_transform_is_idempotent(
        name in "[a-z ]{0,16}",
        category in "[A-Za-z]{1,12}",
        price in arb_price(),
    ) {
        prop_assume!(!category.eq_ignore_ascii_case("Electronics"));
        let once = transform(Record::new(1, name, price, category));
        let twice = transform(once.clone());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn electronics_price_always_has_two_fraction_digits(price in arb_price()) {
        let out = transform(Record::new(1, "item", price, "Electronics"));
        prop_assert_eq!(out.price.scale(), 2);
    }

    #[test]
    fn every_record_leaves_with_a_price_range(
        category in "[A-Za-z]{1,12}",
        price in arb_price(),
    ) {
        let out = transform(Record::new(1, "item", price, category));
        prop_assert!(out.price_range.is_some());
    }
}
