//! Monetary amount handling.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Upstream data stores some amounts as free text, so parsing here is
//! permissive: anything without a numeric prefix is zero, never an error.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

/// Parses a free-text amount, treating anything unparsable as zero.
///
/// Surrounding whitespace is ignored, `,` and `_` digit separators are
/// skipped, and the longest leading numeric prefix is used, so
/// `"1,500.50 ETB"` parses as `1500.50` and `"abc"` as `0`. A prefix too
/// large for `Decimal` saturates at `Decimal::MAX` (or `MIN` when negative).
#[must_use]
pub fn parse_amount(raw: &str) -> Decimal {
    let mut chars = raw.trim().chars().peekable();
    let mut digits = String::with_capacity(raw.len());

    if let Some(sign) = chars.next_if(|c| matches!(c, '-' | '+')) {
        if sign == '-' {
            digits.push('-');
        }
    }

    let mut seen_digit = false;
    let mut seen_point = false;
    for c in chars {
        match c {
            '0'..='9' => {
                seen_digit = true;
                digits.push(c);
            }
            ',' | '_' if seen_digit && !seen_point => {}
            '.' if !seen_point => {
                seen_point = true;
                if !seen_digit {
                    digits.push('0');
                }
                digits.push('.');
            }
            _ => break,
        }
    }

    if !seen_digit {
        return Decimal::ZERO;
    }

    let negative = digits.starts_with('-');
    digits
        .trim_end_matches('.')
        .parse::<Decimal>()
        .unwrap_or(if negative { Decimal::MIN } else { Decimal::MAX })
}

/// Parses an optional free-text amount; `None` is zero.
#[must_use]
pub fn parse_optional_amount(raw: Option<&str>) -> Decimal {
    raw.map_or(Decimal::ZERO, parse_amount)
}

/// Divides `numerator` by `denominator`, resolving division by zero to zero.
///
/// Overflow saturates instead of panicking.
#[must_use]
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Returns `part / whole * 100`, or zero when `whole` is zero.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    ratio(part, whole).saturating_mul(Decimal::ONE_HUNDRED)
}

/// Formats an amount for display, e.g. `"ETB 12,345.00"`.
///
/// Rounds half-to-even at two decimal places.
#[must_use]
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{currency} {sign}{grouped}.{fraction}")
}

/// Serde adapter for ledger amounts.
///
/// Accepts a JSON number, a numeric string, or null. Anything that cannot be
/// read as an amount decodes as zero.
pub mod lenient_amount {
    use super::{Decimal, Deserialize, Deserializer, parse_amount};

    /// Deserializes an amount, falling back to zero.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => {
                let text = n.to_string();
                text.parse::<Decimal>()
                    .or_else(|_| Decimal::from_scientific(&text))
                    .unwrap_or(Decimal::ZERO)
            }
            serde_json::Value::String(s) => parse_amount(&s),
            _ => Decimal::ZERO,
        })
    }
}

/// Serde adapter for amounts stored as free text.
///
/// Keeps the raw text. JSON numbers are accepted and kept in their textual
/// form; null and non-scalar values become `None`.
pub mod amount_text {
    use super::{Deserialize, Deserializer};

    /// Deserializes optional amount text.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("1000", dec!(1000))]
    #[case("  250.75 ", dec!(250.75))]
    #[case("1,500.50", dec!(1500.50))]
    #[case("1_000", dec!(1000))]
    #[case("1500 ETB", dec!(1500))]
    #[case("-20", dec!(-20))]
    #[case("+20", dec!(20))]
    #[case(".5", dec!(0.5))]
    #[case("7.", dec!(7))]
    #[case("1.2.3", dec!(1.2))]
    #[case("", dec!(0))]
    #[case("abc", dec!(0))]
    #[case("-", dec!(0))]
    #[case("ETB 100", dec!(0))]
    #[case("123456789012345678901234567890", Decimal::MAX)]
    #[case("-123,456,789,012,345,678,901,234,567,890", Decimal::MIN)]
    fn test_parse_amount(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(raw), expected);
    }

    #[test]
    fn test_parse_optional_amount() {
        assert_eq!(parse_optional_amount(None), Decimal::ZERO);
        assert_eq!(parse_optional_amount(Some("42")), dec!(42));
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(dec!(500), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_of(dec!(500), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(600), dec!(1000)), dec!(60));
        assert_eq!(percent_of(dec!(1500), dec!(1000)), dec!(150));
    }

    #[test]
    fn test_ratio_overflow_saturates() {
        assert_eq!(ratio(Decimal::MAX, dec!(0.0001)), Decimal::MAX);
        assert_eq!(ratio(Decimal::MIN, dec!(0.0001)), Decimal::MIN);
    }

    #[rstest]
    #[case(dec!(12345), "ETB 12,345.00")]
    #[case(dec!(0), "ETB 0.00")]
    #[case(dec!(999.999), "ETB 1,000.00")]
    #[case(dec!(1234567.891), "ETB 1,234,567.89")]
    #[case(dec!(-400), "ETB -400.00")]
    #[case(dec!(0.125), "ETB 0.12")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount, "ETB"), expected);
    }

    #[derive(Debug, Deserialize)]
    struct Ledger {
        #[serde(default, deserialize_with = "lenient_amount::deserialize")]
        amount: Decimal,
        #[serde(default, deserialize_with = "amount_text::deserialize")]
        budget: Option<String>,
    }

    #[rstest]
    #[case(r#"{"amount": 12.5}"#, dec!(12.5))]
    #[case(r#"{"amount": "300"}"#, dec!(300))]
    #[case(r#"{"amount": "n/a"}"#, dec!(0))]
    #[case(r#"{"amount": null}"#, dec!(0))]
    #[case(r#"{"amount": [1]}"#, dec!(0))]
    #[case(r#"{}"#, dec!(0))]
    fn test_lenient_amount(#[case] json: &str, #[case] expected: Decimal) {
        let ledger: Ledger = serde_json::from_str(json).unwrap();
        assert_eq!(ledger.amount, expected);
    }

    #[test]
    fn test_amount_text_accepts_numbers() {
        let ledger: Ledger = serde_json::from_str(r#"{"budget": 1000}"#).unwrap();
        assert_eq!(ledger.budget.as_deref(), Some("1000"));

        let ledger: Ledger = serde_json::from_str(r#"{"budget": null}"#).unwrap();
        assert_eq!(ledger.budget, None);
    }
}
