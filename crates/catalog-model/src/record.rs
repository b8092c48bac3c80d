use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PriceRange;

/// A single product row flowing through the pipeline.
///
/// Records are immutable value types: each `with_*` method returns a new
/// record with exactly one field replaced, which keeps every transform rule
/// referentially transparent. Prices are exact base-10 decimals; binary
/// floating point is never used for money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    /// Unset until the transform stage computes it; required before load.
    pub price_range: Option<PriceRange>,
}

impl Record {
    /// Build a freshly extracted record with no price range yet.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            price_range: None,
        }
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_price(self, price: Decimal) -> Self {
        Self { price, ..self }
    }

    #[must_use]
    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_price_range(self, price_range: PriceRange) -> Self {
        Self {
            price_range: Some(price_range),
            ..self
        }
    }

    /// Serialize to one output row.
    ///
    /// The price is rendered in plain decimal notation at whatever scale it
    /// currently holds; an unset price range renders as an empty field.
    pub fn to_csv_row(&self) -> String {
        let range = self.price_range.map(PriceRange::as_str).unwrap_or("");
        format!(
            "{},{},{},{},{}",
            self.id, self.name, self.price, self.category, range
        )
    }
}
