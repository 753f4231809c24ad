//! Exact decimal <-> subunit conversion.
//!
//! Token quantities are entered as decimal strings such as `"1.5"` and
//! committed as integers of the smallest unit, 10^18 per whole token. All
//! arithmetic stays in 256-bit integers: a single unit of drift would give a
//! different leaf and therefore a different root.

use std::iter;

use alloy_primitives::U256;

use crate::AirdropError;

/// Fractional decimal digits of the token
pub const DECIMALS: usize = 18;

/// Subunits in one whole token (10^18)
pub const SUBUNITS_PER_TOKEN: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Convert a decimal token amount into subunits.
///
/// The input must match `^\d+(\.\d+)?$` exactly. Surrounding whitespace is
/// not tolerated here; the loader trims fields before calling this.
pub fn parse_units(amount: &str) -> Result<U256, AirdropError> {
    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (amount, None),
    };
    if !is_digits(integer) || fraction.is_some_and(|fraction| !is_digits(fraction)) {
        return Err(AirdropError::InvalidAmountFormat(amount.to_string()));
    }

    match fraction {
        None => parse_decimal(integer, amount)?
            .checked_mul(SUBUNITS_PER_TOKEN)
            .ok_or_else(|| AirdropError::AmountOverflow(amount.to_string())),
        Some(fraction) if fraction.len() > DECIMALS => Err(AirdropError::PrecisionOverflow {
            amount: amount.to_string(),
            digits: fraction.len(),
        }),
        Some(fraction) => {
            let mut digits = String::with_capacity(integer.len() + DECIMALS);
            digits.push_str(integer);
            digits.push_str(fraction);
            digits.extend(iter::repeat_n('0', DECIMALS - fraction.len()));
            parse_decimal(&digits, amount)
        }
    }
}

/// Render subunits as a decimal token amount.
///
/// Trailing fractional zeros are dropped, and so is the decimal point when
/// nothing is left after it. This is the inverse of [`parse_units`] on
/// canonical input.
pub fn format_units(subunits: U256) -> String {
    let integer = subunits / SUBUNITS_PER_TOKEN;
    let fraction = subunits % SUBUNITS_PER_TOKEN;
    if fraction.is_zero() {
        return integer.to_string();
    }

    let fraction = format!("{:0>width$}", fraction.to_string(), width = DECIMALS);
    format!("{integer}.{}", fraction.trim_end_matches('0'))
}

/// Hex form used for amounts in the proof artifact, e.g. `0x56bc75e2d63100000`
pub fn format_subunits_hex(subunits: U256) -> String {
    format!("0x{subunits:x}")
}

/// Parse the artifact's hex amount form back into subunits
pub fn parse_subunits_hex(value: &str) -> Result<U256, AirdropError> {
    let invalid = || AirdropError::InvalidAmountFormat(value.to_string());
    let digits = value.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    U256::from_str_radix(digits, 16).map_err(|_| AirdropError::AmountOverflow(value.to_string()))
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an already validated digit string; the only possible failure is
/// exceeding 256 bits.
fn parse_decimal(digits: &str, amount: &str) -> Result<U256, AirdropError> {
    U256::from_str_radix(digits, 10).map_err(|_| AirdropError::AmountOverflow(amount.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(amount: &str) -> U256 {
        parse_units(amount).unwrap()
    }

    /// Strip redundant zeros the way `format_units` prints numbers.
    fn canonical(amount: &str) -> String {
        let (integer, fraction) = amount.split_once('.').unwrap_or((amount, ""));
        let integer = integer.trim_start_matches('0');
        let integer = if integer.is_empty() { "0" } else { integer };
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() { integer.to_string() } else { format!("{integer}.{fraction}") }
    }

    #[test]
    fn test_whole_tokens() {
        assert_eq!(units("100"), U256::from(100_000_000_000_000_000_000u128));
        assert_eq!(units("1"), SUBUNITS_PER_TOKEN);
        assert_eq!(units("0"), U256::ZERO);
    }

    #[test]
    fn test_fractional_tokens() {
        assert_eq!(units("1.5"), U256::from(1_500_000_000_000_000_000u64));
        assert_eq!(units("0.000000000000000001"), U256::from(1u64));
        assert_eq!(units("0.1"), U256::from(100_000_000_000_000_000u64));
        assert_eq!(units("12.340"), U256::from(12_340_000_000_000_000_000u128));
    }

    #[test]
    fn test_no_float_drift() {
        // 0.1 + 0.2 style values that a double cannot hold exactly
        assert_eq!(units("0.3"), units("0.1") + units("0.2"));
        assert_eq!(
            units("9007199254740993.000000000000000001"),
            U256::from(9_007_199_254_740_993u64) * SUBUNITS_PER_TOKEN + U256::from(1u64)
        );
    }

    #[test]
    fn test_precision_overflow() {
        let amount = "1.0000000000000000001";
        assert!(matches!(
            parse_units(amount),
            Err(AirdropError::PrecisionOverflow { digits: 19, .. })
        ));
    }

    #[test]
    fn test_invalid_formats() {
        for amount in ["", ".", ".5", "5.", "1.2.3", "-1", "+1", "1e18", " 1", "1 ", "1,5", "0x10", "١"]
        {
            assert!(
                matches!(parse_units(amount), Err(AirdropError::InvalidAmountFormat(ref s)) if s == amount),
                "{amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_amount_overflow() {
        let max = U256::MAX.to_string();
        assert!(matches!(parse_units(&max), Err(AirdropError::AmountOverflow(_))));

        let too_many_digits = "1".repeat(100);
        assert!(matches!(
            parse_units(&format!("{too_many_digits}.5")),
            Err(AirdropError::AmountOverflow(_))
        ));
    }

    #[test]
    fn test_largest_whole_amount() {
        let largest = U256::MAX / SUBUNITS_PER_TOKEN;
        assert_eq!(units(&largest.to_string()), largest * SUBUNITS_PER_TOKEN);
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(U256::ZERO), "0");
        assert_eq!(format_units(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(format_units(U256::from(1_500_000_000_000_000_000u64)), "1.5");
        assert_eq!(format_units(U256::from(100_000_000_000_000_000_000u128)), "100");
    }

    #[test]
    fn test_roundtrip_canonical_form() {
        for amount in [
            "0",
            "000",
            "7",
            "007.50",
            "1.5",
            "1.000000000000000000",
            "123456789.123456789123456789",
            "0.000000000000000010",
            "340282366920938463463374607431.768211455",
        ] {
            assert_eq!(format_units(units(amount)), canonical(amount), "roundtrip of {amount:?}");
        }
    }

    #[test]
    fn test_subunits_hex() {
        assert_eq!(format_subunits_hex(U256::ZERO), "0x0");
        assert_eq!(format_subunits_hex(units("100")), "0x56bc75e2d63100000");
        assert_eq!(parse_subunits_hex("0x56bc75e2d63100000").unwrap(), units("100"));
        assert_eq!(parse_subunits_hex("0xFF").unwrap(), U256::from(255u64));
    }

    #[test]
    fn test_parse_subunits_hex_rejects_malformed() {
        for value in ["", "0x", "ff", "0xzz", "0x 1"] {
            assert!(
                matches!(parse_subunits_hex(value), Err(AirdropError::InvalidAmountFormat(_))),
                "{value:?} should be rejected"
            );
        }
    }
}
