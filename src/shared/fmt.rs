//! Display formatting helpers.
//!
//! Spot prices and axis ticks render at two decimal places, conversion
//! results at up to six. Nothing here carries precision guarantees beyond
//! the fixed-point string it returns.

use rust_decimal::Decimal;

/// Format an `f64` with a fixed number of decimal places.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Format an `f64` with two decimal places and comma-grouped thousands,
/// as the spot-price ticker row displays it (`97123.456` → `"97,123.46"`).
pub fn thousands(value: f64) -> String {
    group_thousands(fixed(value, 2))
}

/// Format a conversion amount: rounded to six decimal places, trailing
/// zeros trimmed (`2049.620000` → `"2049.62"`).
pub fn amount(value: &Decimal) -> String {
    value.round_dp(6).normalize().to_string()
}

/// Insert comma separators into the integer part of a formatted number.
fn group_thousands(formatted: String) -> String {
    let parts = formatted.split('.').collect::<Vec<_>>();

    let integer_part = parts[0]
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    let integer_part = integer_part
        .strip_prefix("-,")
        .map(|rest| format!("-{rest}"))
        .unwrap_or(integer_part);

    if parts.len() > 1 {
        format!("{}.{}", integer_part, parts[1])
    } else {
        integer_part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fixed_two_decimals() {
        assert_eq!(fixed(0.0, 2), "0.00");
        assert_eq!(fixed(97123.456, 2), "97123.46");
        assert_eq!(fixed(1.005, 6), "1.005000");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0.0), "0.00");
        assert_eq!(thousands(999.5), "999.50");
        assert_eq!(thousands(1234.5), "1,234.50");
        assert_eq!(thousands(97123.456), "97,123.46");
        assert_eq!(thousands(1234567.0), "1,234,567.00");
    }

    #[test]
    fn test_thousands_negative() {
        assert_eq!(thousands(-1234.5), "-1,234.50");
        assert_eq!(thousands(-12.0), "-12.00");
    }

    #[test]
    fn test_amount_trims_trailing_zeros() {
        assert_eq!(amount(&dec("2049.620000")), "2049.62");
        assert_eq!(amount(&dec("1.000000")), "1");
        assert_eq!(amount(&dec("0.000008")), "0.000008");
    }

    #[test]
    fn test_amount_rounds_to_six_places() {
        assert_eq!(amount(&dec("0.12345678")), "0.123457");
        assert_eq!(amount(&dec("0.1234564")), "0.123456");
    }
}
