//! Private key vouchers - base-62 encoding and split/join of 256-bit keys.
//!
//! This crate converts a 64-character hex private key into a base-62 string
//! and splits it into two fragments, a voucher key and a voucher code, that
//! can be handed out separately and later joined to recover the key:
//! - Hex validation (length and charset)
//! - Base-62 encode/decode on arbitrary-precision integers
//! - Voucher creation and private key restoration
//!
//! This is a reversible re-encoding only. It adds no secrecy.
//!
//! All free functions use the default 256-bit configuration. Use
//! [`VoucherCodec::with_config`] for other key widths or split offsets.

pub mod config;
pub mod validate;
pub mod base62;
pub mod voucher;

mod error;
pub use error::{ErrorKind, VoucherError};

pub use config::CodecConfig;
pub use voucher::{Voucher, VoucherCodec};

/// Check that `input` is a hex string of exactly `length` characters.
pub fn validate_hex(input: &str, length: usize) -> Result<(), VoucherError> {
    validate::validate_hex(input, length)
}

/// Encode a 64-character hex private key as base-62.
pub fn encode_base62(hex: &str) -> Result<String, VoucherError> {
    VoucherCodec::default().encode(hex)
}

/// Decode a base-62 string into a 64-character lowercase hex private key.
pub fn decode_base62(base62: &str) -> Result<String, VoucherError> {
    VoucherCodec::default().decode(base62)
}

/// Encode a private key and split it into a voucher key and voucher code.
pub fn create_voucher(private_key: &str) -> Result<Voucher, VoucherError> {
    VoucherCodec::default().create_voucher(private_key)
}

/// Join a voucher key and voucher code and recover the hex private key.
pub fn restore_private_key(voucher_key: &str, voucher_code: &str) -> Result<String, VoucherError> {
    VoucherCodec::default().restore_private_key(voucher_key, voucher_code)
}
