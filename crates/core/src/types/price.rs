//! Display formatting for prices.
//!
//! Prices are carried as `f64` throughout the domain and are never stored
//! rounded; the two-decimal rounding here happens only at presentation time.

/// Format an amount in Peruvian soles for display (e.g., `"S/ 77.94"`).
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("S/ {amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(77.94), "S/ 77.94");
        assert_eq!(format_price(0.0), "S/ 0.00");
        assert_eq!(format_price(199.9), "S/ 199.90");
    }

    #[test]
    fn test_format_price_rounds_at_display_only() {
        // The value keeps full precision; rounding is visual only.
        assert_eq!(format_price(129.999), "S/ 130.00");
    }
}
