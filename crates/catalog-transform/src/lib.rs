//! Transform stage: the rule engine applied to each extracted record.
//!
//! Every record passes through a fixed, order-dependent rule sequence:
//!
//! 1. Snapshot the category as extracted.
//! 2. Uppercase the product name.
//! 3. Apply the 10% Electronics discount, rounded half-up to 2 places.
//! 4. Recategorize to "Premium Electronics" when the discounted price
//!    exceeds 500.00.
//! 5. Classify the final price into a [`PriceRange`] band.
//!
//! Rules 3 and 4 key off the category *snapshot*, while rule 4 inspects the
//! already-discounted price. Records are transformed independently; nothing
//! here depends on row order or on other records.

mod transformer;

pub use transformer::{classify, transform, transform_all};
