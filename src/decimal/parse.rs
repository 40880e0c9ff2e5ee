//! Exact parsing of decimal literals such as `3.14159`, `-0.25` or `1.5E-3`.

use std::str::FromStr;

use num_bigint::BigInt;

use super::decimal_impl::Decimal;
use super::error::ParseDecimalError;

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (coefficient, written_exponent) = match trimmed.find(['e', 'E']) {
            Some(index) => {
                let parsed = trimmed[index + 1..]
                    .parse::<i64>()
                    .map_err(|_| ParseDecimalError::InvalidExponent)?;
                (&trimmed[..index], parsed)
            }
            None => (trimmed, 0),
        };

        let (negative, unsigned) = match coefficient.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, coefficient.strip_prefix('+').unwrap_or(coefficient)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseDecimalError::Empty);
        }
        if let Some(bad) = whole.chars().chain(fraction.chars()).find(|c| !c.is_ascii_digit()) {
            return Err(ParseDecimalError::InvalidDigit(bad));
        }

        let digits = format!("{whole}{fraction}");
        let mut mantissa =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(ParseDecimalError::Empty)?;
        if negative {
            mantissa = -mantissa;
        }
        let fraction_len =
            i64::try_from(fraction.len()).map_err(|_| ParseDecimalError::InvalidExponent)?;
        let exponent = written_exponent
            .checked_sub(fraction_len)
            .ok_or(ParseDecimalError::InvalidExponent)?;
        Ok(Decimal::new(mantissa, exponent))
    }
}
