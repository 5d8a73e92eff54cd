//! Money display formatting.
//!
//! Cart arithmetic stays in exact [`Decimal`] values; rounding to two
//! decimal places happens only here, at display time, never in the
//! accumulated amounts themselves.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal amount as a USD price string (e.g., `$19.99`).
///
/// Rounds to two decimal places, midpoint away from zero, matching how
/// prices are shown on product and cart pages.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_format_usd_two_decimals() {
        assert_eq!(format_usd(dec!(19.99)), "$19.99");
        assert_eq!(format_usd(dec!(20)), "$20.00");
        assert_eq!(format_usd(dec!(0)), "$0.00");
    }

    #[test]
    fn test_format_usd_rounds_at_display() {
        // 2.6000 from tax math displays as $2.60
        assert_eq!(format_usd(dec!(2.6000)), "$2.60");
        assert_eq!(format_usd(dec!(1.005)), "$1.01");
    }
}
