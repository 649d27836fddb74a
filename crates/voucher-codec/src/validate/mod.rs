//! Hex format gate for private key input.

use crate::VoucherError;

/// Check that `input` is a hexadecimal string of exactly `expected_length`
/// characters.
///
/// The length is counted in characters, not bytes, and is checked before the
/// charset. Upper, lower, and mixed case are all accepted.
///
/// # Arguments
/// * `input` - The candidate hex string.
/// * `expected_length` - Required number of characters (64 for a private key).
///
/// # Returns
/// `Ok(())` if valid, `InvalidLength` on a length mismatch, or
/// `InvalidCharset` naming the first non-hex character.
pub fn validate_hex(input: &str, expected_length: usize) -> Result<(), VoucherError> {
    let got = input.chars().count();
    if got != expected_length {
        return Err(VoucherError::InvalidLength {
            expected: expected_length,
            got,
        });
    }

    if let Some((pos, c)) = input.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(VoucherError::InvalidCharset(format!(
            "non-hex character {:?} at position {}",
            c, pos
        )));
    }

    Ok(())
}
