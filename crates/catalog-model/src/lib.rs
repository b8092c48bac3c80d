//! Data model for the product catalog ETL pipeline.

pub mod price_range;
pub mod record;

pub use price_range::PriceRange;
pub use record::Record;

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{PriceRange, Record};

    #[test]
    fn record_serializes() {
        let record = Record::new(7, "Monitor", dec!(249.99), "Electronics")
            .with_price_range(PriceRange::High);
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: Record = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
        assert_eq!(round.price.to_string(), "249.99");
    }
}
