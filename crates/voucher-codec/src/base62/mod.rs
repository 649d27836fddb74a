//! Base-62 encoding and decoding of fixed-width private keys.
//!
//! The conversion is a plain radix change on an arbitrary-precision unsigned
//! integer: hex digits in, base-62 digits out (most significant first), and
//! back. Unlike Base58 there is no leading-zero preservation, so keys with
//! high zero bits encode to shorter strings. The decoder restores the fixed
//! width by left-padding to the configured key size.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use zeroize::Zeroizing;

use crate::config::CodecConfig;
use crate::validate::validate_hex;
use crate::VoucherError;

/// Base-62 alphabet: digits, then uppercase, then lowercase.
///
/// A character's digit value is its index in this table.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Numeric base of [`ALPHABET`].
pub const BASE: u32 = 62;

/// Map a character to its base-62 digit value.
///
/// # Returns
/// `Some(0..62)` for characters in [`ALPHABET`], `None` otherwise
/// (including all non-ASCII characters).
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 36),
        _ => None,
    }
}

/// Encode an unsigned integer as a base-62 string.
///
/// Zero encodes to the empty string: the division loop never runs.
pub fn encode_uint(value: &BigUint) -> String {
    let base = BigUint::from(BASE);
    let mut n = value.clone();
    let mut digits = Zeroizing::new(Vec::<u8>::with_capacity(44));

    while !n.is_zero() {
        let (quotient, remainder) = n.div_rem(&base);
        // remainder < BASE, so it always fits in a u8.
        let digit = remainder.to_u8().unwrap_or(0);
        digits.push(ALPHABET[digit as usize]);
        n = quotient;
    }

    digits.iter().rev().map(|&d| d as char).collect()
}

/// Decode a base-62 string into an unsigned integer of at most `max_bits` bits.
///
/// The empty string decodes to zero.
///
/// # Returns
/// The integer value, `InvalidCharset` naming the first character outside
/// [`ALPHABET`], or `Overflow` as soon as the accumulated value needs more
/// than `max_bits` bits.
pub fn decode_uint(s: &str, max_bits: u64) -> Result<BigUint, VoucherError> {
    let mut value = BigUint::zero();

    for (pos, c) in s.chars().enumerate() {
        let digit = digit_value(c).ok_or_else(|| {
            VoucherError::InvalidCharset(format!(
                "non-base62 character {:?} at position {}",
                c, pos
            ))
        })?;
        value = value * BASE + digit;
        if value.bits() > max_bits {
            return Err(VoucherError::Overflow { max_bits });
        }
    }

    Ok(value)
}

/// Encode a hex private key as a base-62 string.
///
/// The input must be exactly `config.hex_len()` hex characters; any case is
/// accepted. The output has no fixed length: the maximal 256-bit key encodes
/// to 43 characters and the all-zero key to the empty string.
///
/// # Arguments
/// * `hex_input` - The private key in hex.
/// * `config` - Key width parameters.
///
/// # Returns
/// The base-62 string, `InvalidConfig` for an unusable `config`, or the
/// validation error unchanged.
pub fn encode(hex_input: &str, config: &CodecConfig) -> Result<String, VoucherError> {
    config.validate()?;
    validate_hex(hex_input, config.hex_len())?;

    let bytes = Zeroizing::new(hex::decode(hex_input)?);
    let value = BigUint::from_bytes_be(&bytes);
    let encoded = encode_uint(&value);

    tracing::trace!(encoded_len = encoded.len(), "encoded key as base62");
    Ok(encoded)
}

/// Decode a base-62 string into a lowercase hex private key.
///
/// The result is left-zero-padded to exactly `config.hex_len()` characters.
///
/// # Arguments
/// * `base62_input` - The base-62 string. May be empty.
/// * `config` - Key width parameters.
///
/// # Returns
/// The hex key, `InvalidCharset` for characters outside [`ALPHABET`], or
/// `Overflow` if the value does not fit in `config.key_size` bytes, or
/// `InvalidConfig` for an unusable `config`.
pub fn decode(base62_input: &str, config: &CodecConfig) -> Result<String, VoucherError> {
    config.validate()?;
    let value = decode_uint(base62_input, config.max_bits())?;

    let bytes = Zeroizing::new(if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    });
    let offset = config
        .key_size
        .checked_sub(bytes.len())
        .ok_or(VoucherError::Overflow { max_bits: config.max_bits() })?;

    let mut padded = Zeroizing::new(vec![0u8; config.key_size]);
    padded[offset..].copy_from_slice(&bytes);

    tracing::trace!(input_len = base62_input.len(), "decoded base62 key");
    Ok(hex::encode(padded.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const MAX_KEY_B62: &str = "yhjskwdA6OZ1AL1YmHWZWm8LLG7HjnuCA2j5rOw8Xp1";

    fn cfg() -> CodecConfig {
        CodecConfig::default()
    }

    #[test]
    fn test_alphabet_order() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(digit_value(c as char), Some(i as u32));
        }
        assert_eq!(digit_value('A'), Some(10));
        assert_eq!(digit_value('a'), Some(36));
        assert_eq!(digit_value('z'), Some(61));
        assert_eq!(digit_value('-'), None);
        assert_eq!(digit_value('é'), None);
    }

    #[test]
    fn test_encode_uint_small_values() {
        assert_eq!(encode_uint(&BigUint::zero()), "");
        assert_eq!(encode_uint(&BigUint::from(1u32)), "1");
        assert_eq!(encode_uint(&BigUint::from(61u32)), "z");
        assert_eq!(encode_uint(&BigUint::from(62u32)), "10");
        assert_eq!(encode_uint(&BigUint::from(3843u32)), "zz");
    }

    #[test]
    fn test_decode_uint_small_values() {
        assert_eq!(decode_uint("", 256).unwrap(), BigUint::zero());
        assert_eq!(decode_uint("10", 256).unwrap(), BigUint::from(62u32));
        assert_eq!(decode_uint("zz", 256).unwrap(), BigUint::from(3843u32));
        // Leading zero digits carry no value.
        assert_eq!(decode_uint("000zz", 256).unwrap(), BigUint::from(3843u32));
    }

    #[test]
    fn test_encode_max_key() {
        let encoded = encode(&"f".repeat(64), &cfg()).unwrap();
        assert_eq!(encoded, MAX_KEY_B62);
        assert_eq!(encoded.len(), 43);
    }

    #[test]
    fn test_encode_one() {
        let key = format!("{}1", "0".repeat(63));
        assert_eq!(encode(&key, &cfg()).unwrap(), "1");
    }

    #[test]
    fn test_encode_zero_key_is_empty() {
        assert_eq!(encode(&"0".repeat(64), &cfg()).unwrap(), "");
    }

    #[test]
    fn test_encode_is_case_insensitive() {
        let upper = "0B6BF630452AABF9C57A2755DD4B3DD570A4047181C8A3A44239AD50E9F7D06B";
        let lower = upper.to_lowercase();
        assert_eq!(encode(upper, &cfg()).unwrap(), encode(&lower, &cfg()).unwrap());
    }

    #[test]
    fn test_encode_propagates_validation_error() {
        assert_eq!(
            encode("ABCD", &cfg()),
            Err(VoucherError::InvalidLength { expected: 64, got: 4 })
        );
        assert_eq!(encode(&"Z".repeat(64), &cfg()).unwrap_err().kind(), ErrorKind::InvalidCharset);
    }

    #[test]
    fn test_decode_pads_to_full_width() {
        let decoded = decode("zz", &cfg()).unwrap();
        assert_eq!(decoded.len(), 64);
        assert_eq!(decoded, format!("{}f03", "0".repeat(61)));
    }

    #[test]
    fn test_decode_empty_is_zero_key() {
        assert_eq!(decode("", &cfg()).unwrap(), "0".repeat(64));
    }

    #[test]
    fn test_decode_max_key() {
        assert_eq!(decode(MAX_KEY_B62, &cfg()).unwrap(), "f".repeat(64));
    }

    #[test]
    fn test_decode_rejects_invalid_characters() {
        for bad in ["ab_c", "ab-c", "ab c", "abcé", "abc=", "+"] {
            assert_eq!(
                decode(bad, &cfg()).unwrap_err().kind(),
                ErrorKind::InvalidCharset,
                "input {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_decode_overflow_just_past_256_bits() {
        // 2^256 is one more than the maximal key.
        let over = "yhjskwdA6OZ1AL1YmHWZWm8LLG7HjnuCA2j5rOw8Xp2";
        assert_eq!(decode(over, &cfg()), Err(VoucherError::Overflow { max_bits: 256 }));
    }

    #[test]
    fn test_decode_overflow_long_input() {
        let long = format!("1{}", "0".repeat(43));
        assert_eq!(decode(&long, &cfg()).unwrap_err().kind(), ErrorKind::Overflow);
    }

    #[test]
    fn test_unusable_config_is_an_error() {
        let huge = CodecConfig { key_size: usize::MAX, split_offset: 28 };
        assert_eq!(decode("1", &huge).unwrap_err().kind(), ErrorKind::InvalidConfig);
        assert_eq!(encode("ab", &huge).unwrap_err().kind(), ErrorKind::InvalidConfig);

        let empty = CodecConfig { key_size: 0, split_offset: 28 };
        assert_eq!(decode("", &empty).unwrap_err().kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_smaller_key_size() {
        let small = CodecConfig { key_size: 4, split_offset: 2 };
        let encoded = encode("ffffffff", &small).unwrap();
        assert_eq!(decode(&encoded, &small).unwrap(), "ffffffff");
        assert_eq!(decode("zzzzzz", &small).unwrap_err().kind(), ErrorKind::Overflow);
    }
}
