//! Currency formatting with locale digit grouping.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end; this module only renders them.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Digit grouping convention for the integer part of an amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitGrouping {
    /// Lakh/crore grouping: last three digits, then pairs (`12,34,567`).
    #[default]
    Indian,
    /// Thousands grouping (`1,234,567`).
    Western,
}

/// How monetary amounts are rendered for display.
///
/// The prefix is either a currency glyph (`₹`) or a textual abbreviation
/// (`Rs. `); both are plain configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Text placed between the sign and the digits.
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Digit grouping convention.
    #[serde(default)]
    pub grouping: DigitGrouping,
    /// Group separator.
    #[serde(default = "default_separator")]
    pub separator: char,
}

fn default_symbol() -> String {
    "₹".to_string()
}

const fn default_separator() -> char {
    ','
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::rupee_symbol()
    }
}

impl CurrencyFormat {
    /// Rupee glyph with Indian grouping (`₹1,00,000`).
    #[must_use]
    pub fn rupee_symbol() -> Self {
        Self {
            symbol: default_symbol(),
            grouping: DigitGrouping::Indian,
            separator: default_separator(),
        }
    }

    /// Textual rupee prefix with Indian grouping (`Rs. 1,00,000`).
    #[must_use]
    pub fn rupee_text() -> Self {
        Self {
            symbol: "Rs. ".to_string(),
            grouping: DigitGrouping::Indian,
            separator: default_separator(),
        }
    }

    /// Formats an amount with no decimal places.
    ///
    /// Fractions are rounded half away from zero. The sign is kept and
    /// written before the symbol (`-₹500`).
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = round_whole(amount);
        let digits = rounded.abs().mantissa().to_string();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{}{}", self.symbol, self.group_digits(&digits))
    }

    fn group_digits(&self, digits: &str) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let head_group = match self.grouping {
            DigitGrouping::Indian => 2,
            DigitGrouping::Western => 3,
        };

        // Build the leading groups right to left, then restore order.
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(head_group);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();

        let mut out = String::with_capacity(digits.len() + groups.len());
        for group in groups {
            out.push_str(group);
            out.push(self.separator);
        }
        out.push_str(tail);
        out
    }
}

/// Rounds to a whole unit, half away from zero.
#[must_use]
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "₹0")]
    #[case(dec!(999), "₹999")]
    #[case(dec!(1000), "₹1,000")]
    #[case(dec!(100000), "₹1,00,000")]
    #[case(dec!(1234567), "₹12,34,567")]
    #[case(dec!(-500), "-₹500")]
    #[case(dec!(-123456), "-₹1,23,456")]
    #[case(dec!(766.5), "₹767")]
    #[case(dec!(-0.4), "₹0")]
    fn test_format_indian_symbol(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(CurrencyFormat::rupee_symbol().format(amount), expected);
    }

    #[rstest]
    #[case(dec!(1000), "Rs. 1,000")]
    #[case(dec!(2300), "Rs. 2,300")]
    #[case(dec!(1500000), "Rs. 15,00,000")]
    fn test_format_textual_prefix(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(CurrencyFormat::rupee_text().format(amount), expected);
    }

    #[rstest]
    #[case(dec!(1234567), "$1,234,567")]
    #[case(dec!(100000), "$100,000")]
    #[case(dec!(12), "$12")]
    fn test_format_western(#[case] amount: Decimal, #[case] expected: &str) {
        let format = CurrencyFormat {
            symbol: "$".to_string(),
            grouping: DigitGrouping::Western,
            separator: ',',
        };
        assert_eq!(format.format(amount), expected);
    }

    #[test]
    fn test_round_whole_midpoint() {
        assert_eq!(round_whole(dec!(2.5)), dec!(3));
        assert_eq!(round_whole(dec!(-2.5)), dec!(-3));
        assert_eq!(round_whole(dec!(766.666)), dec!(767));
    }

    #[test]
    fn test_currency_format_deserialize_defaults() {
        let format: CurrencyFormat = serde_json::from_str("{}").unwrap();
        assert_eq!(format, CurrencyFormat::rupee_symbol());

        let format: CurrencyFormat =
            serde_json::from_str(r#"{"symbol":"Rs. ","grouping":"western"}"#).unwrap();
        assert_eq!(format.symbol, "Rs. ");
        assert_eq!(format.grouping, DigitGrouping::Western);
    }
}
