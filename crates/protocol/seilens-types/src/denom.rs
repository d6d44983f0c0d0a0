//! usei ↔ SEI conversion.
//!
//! All internal arithmetic uses [`Amount`] in usei; SEI values only appear
//! in reports and configuration.

use crate::constants::USEI_PER_SEI;
use crate::Amount;

/// Convert usei to display SEI.
pub fn usei_to_sei(usei: Amount) -> f64 {
    usei as f64 / USEI_PER_SEI as f64
}

/// Convert display SEI to usei.
pub fn sei_to_usei(sei: f64) -> Amount {
    (sei * USEI_PER_SEI as f64).round() as Amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sei_conversion() {
        assert_eq!(sei_to_usei(1.0), 1_000_000);
        assert_eq!(sei_to_usei(0.5), 500_000);
        assert_eq!(sei_to_usei(1_000_000.0), 1_000_000_000_000);

        assert_eq!(usei_to_sei(1_000_000), 1.0);
        assert_eq!(usei_to_sei(500_000), 0.5);
        assert_eq!(usei_to_sei(1_000_000_000_000), 1_000_000.0);
    }

    #[test]
    fn test_sei_to_usei_rounds_instead_of_truncating() {
        // 0.5000009 SEI = 500000.9 usei, should round to 500001 not truncate
        assert_eq!(sei_to_usei(0.500_000_9), 500_001);
        // 0.5000001 SEI = 500000.1 usei, should round down to 500000
        assert_eq!(sei_to_usei(0.500_000_1), 500_000);
        // Verify whole amounts still convert exactly
        assert_eq!(sei_to_usei(1.0), 1_000_000);
    }
}
