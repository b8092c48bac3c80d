use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::debug;

use catalog_model::{PriceRange, Record};

/// Category that triggers the discount and recategorization rules.
const ELECTRONICS: &str = "Electronics";

/// Category written when a discounted price still exceeds the threshold.
const PREMIUM_ELECTRONICS: &str = "Premium Electronics";

/// Multiplier for the Electronics discount (10% off).
const DISCOUNT: Decimal = dec!(0.90);

/// Strictly-greater-than bound for the Premium Electronics rewrite.
const PREMIUM_THRESHOLD: Decimal = dec!(500.00);

/// Apply the full rule sequence to one record.
///
/// Total for any well-formed record: negative and zero prices classify like
/// any other value and are never rejected here. Discount and
/// recategorization eligibility is decided from the category as extracted,
/// not the possibly-rewritten one, while the recategorization threshold is
/// checked against the already-discounted price.
pub fn transform(record: Record) -> Record {
    let was_electronics = record.category.eq_ignore_ascii_case(ELECTRONICS);

    let upper = record.name.to_uppercase();
    let mut current = record.with_name(upper);

    if was_electronics {
        let discounted = (current.price * DISCOUNT)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        debug!(id = current.id, price = %discounted, "applied electronics discount");
        current = current.with_price(discounted);
    }

    if was_electronics && current.price > PREMIUM_THRESHOLD {
        debug!(id = current.id, "recategorized as premium electronics");
        current = current.with_category(PREMIUM_ELECTRONICS);
    }

    let range = classify(current.price);
    current.with_price_range(range)
}

/// Band a final price. Every band is inclusive at its upper bound.
pub fn classify(price: Decimal) -> PriceRange {
    if price <= dec!(10.00) {
        PriceRange::Low
    } else if price <= dec!(100.00) {
        PriceRange::Medium
    } else if price <= dec!(500.00) {
        PriceRange::High
    } else {
        PriceRange::Premium
    }
}

/// Transform a whole batch, preserving input order.
pub fn transform_all(records: Vec<Record>) -> Vec<Record> {
    records.into_iter().map(transform).collect()
}
