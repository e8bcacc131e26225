//! Display formatting for amounts.
//!
//! Rounding happens here and only here. Calculator results keep full
//! precision so rounding error does not compound across tiers.

use crate::domain::foundation::CurrencyCode;

/// Rounds to two decimal places, half away from zero.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Formats an amount for display, e.g. `$175.00` or `175.00 SEK`.
pub fn format_amount(amount: f64, currency: &CurrencyCode) -> String {
    let rounded = round_to_cents(amount);
    // Avoid rendering "-0.00" for tiny negative rounding residue.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    match currency.symbol() {
        Some(symbol) if rounded < 0.0 => format!("-{}{:.2}", symbol, -rounded),
        Some(symbol) => format!("{}{:.2}", symbol, rounded),
        None => format!("{:.2} {}", rounded, currency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::try_new(s).unwrap()
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(-0.125), -0.13);
        assert_eq!(round_to_cents(2.344), 2.34);
    }

    #[test]
    fn formats_with_symbol() {
        assert_eq!(format_amount(175.0, &code("USD")), "$175.00");
        assert_eq!(format_amount(49.999, &code("EUR")), "€50.00");
    }

    #[test]
    fn formats_with_code_when_no_symbol() {
        assert_eq!(format_amount(1234.5, &code("SEK")), "1234.50 SEK");
    }

    #[test]
    fn formats_negative_amounts_with_leading_sign() {
        assert_eq!(format_amount(-12.5, &code("GBP")), "-£12.50");
    }

    #[test]
    fn never_renders_negative_zero() {
        assert_eq!(format_amount(-0.001, &code("USD")), "$0.00");
    }

    #[test]
    fn float_residue_is_hidden_at_display() {
        assert_eq!(format_amount(0.2 + 3.0 * 0.1, &code("USD")), "$0.50");
    }
}
