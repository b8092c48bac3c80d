use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived price bucket attached to every transformed record.
///
/// Variants are declared in ascending band order, so the derived `Ord`
/// matches the price ordering of the bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    Low,
    Medium,
    High,
    Premium,
}

impl PriceRange {
    /// All labels in band order, for summary output.
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Low,
        PriceRange::Medium,
        PriceRange::High,
        PriceRange::Premium,
    ];

    /// The label text written to the output file.
    pub fn as_str(self) -> &'static str {
        match self {
            PriceRange::Low => "Low",
            PriceRange::Medium => "Medium",
            PriceRange::High => "High",
            PriceRange::Premium => "Premium",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::PriceRange;

    #[test]
    fn labels_match_output_column_values() {
        let labels: Vec<&str> = PriceRange::ALL.into_iter().map(PriceRange::as_str).collect();
        assert_eq!(labels, vec!["Low", "Medium", "High", "Premium"]);
    }

    #[test]
    fn ordering_follows_band_order() {
        assert!(PriceRange::Low < PriceRange::Medium);
        assert!(PriceRange::Medium < PriceRange::High);
        assert!(PriceRange::High < PriceRange::Premium);
    }
}
