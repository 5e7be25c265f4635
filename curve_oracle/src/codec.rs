//! Conversions between decimal arguments, fixed-width byte arrays and the
//! hexadecimal renderings the oracle prints.

use crate::OracleError;
use num_bigint::BigUint;

/// Parse `value` as a non-negative base-10 integer.
///
/// Only ASCII digits are accepted. Signs, whitespace, `_` separators and
/// radix prefixes are rejected so that every accepted string has exactly one
/// meaning.
pub fn parse_decimal(argument: &'static str, value: &str) -> Result<BigUint, OracleError> {
    let parse_error = || OracleError::Parse {
        argument,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error());
    }
    BigUint::parse_bytes(value.as_bytes(), 10).ok_or_else(parse_error)
}

/// Big-endian encoding of `value`, left-padded with zeros to `N` bytes.
///
/// Fails instead of truncating when `value` needs more than `N` bytes.
pub fn to_fixed_be_bytes<const N: usize>(
    argument: &'static str,
    value: &BigUint,
) -> Result<[u8; N], OracleError> {
    // `to_bytes_be` of zero is `[0]`, which still fits any `N > 0`
    let bytes = value.to_bytes_be();
    let significant = bytes.iter().skip_while(|b| **b == 0).count();
    if significant > N {
        return Err(OracleError::Range {
            argument,
            actual: significant,
            max: N,
        });
    }
    let mut out = [0u8; N];
    out[N - significant..].copy_from_slice(&bytes[bytes.len() - significant..]);
    Ok(out)
}

/// Lowercase hex of the big-endian integer in `bytes`, two digits per byte
/// after leading zero bytes are dropped. No `0x` prefix.
pub fn format_unpadded_lower_hex(bytes: &[u8]) -> String {
    let first_significant = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    hex::encode(&bytes[first_significant..])
}

/// `0x` followed by 64 uppercase hex digits.
pub fn format_limb_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode_upper(bytes))
}
