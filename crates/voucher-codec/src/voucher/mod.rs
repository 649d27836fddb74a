//! Voucher creation and private key restoration.
//!
//! A voucher is the base-62 encoding of a private key cut in two at a fixed
//! offset. The first fragment is the voucher key, the rest is the voucher
//! code. Joining them (key first, no delimiter) and decoding gives the key
//! back.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::base62;
use crate::config::CodecConfig;
use crate::validate::validate_hex;
use crate::VoucherError;

/// The two fragments of a split base-62 key encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    /// Leading fragment, exactly `split_offset` characters.
    #[serde(rename = "voucher_key")]
    pub key: String,
    /// Remaining suffix. Empty when the encoding is exactly `split_offset` long.
    #[serde(rename = "voucher_code")]
    pub code: String,
}

impl Voucher {
    /// Return the full base-62 string (key followed by code).
    pub fn joined(&self) -> String {
        let mut s = String::with_capacity(self.key.len() + self.code.len());
        s.push_str(&self.key);
        s.push_str(&self.code);
        s
    }

    /// Split into `(voucher_key, voucher_code)`.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.code)
    }
}

/// Stateless codec bound to a [`CodecConfig`].
///
/// `VoucherCodec::default()` handles 256-bit keys split after 28 characters.
/// Other configs go through [`VoucherCodec::with_config`], which rejects
/// unusable widths. The value holds no mutable state and can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoucherCodec {
    config: CodecConfig,
}

impl VoucherCodec {
    /// Build a codec for `config`.
    ///
    /// # Returns
    /// The codec, or `InvalidConfig` if `config` fails [`CodecConfig::validate`].
    pub fn with_config(config: CodecConfig) -> Result<Self, VoucherError> {
        config.validate()?;
        Ok(VoucherCodec { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Check that `input` is a hex key of the configured width.
    pub fn validate(&self, input: &str) -> Result<(), VoucherError> {
        validate_hex(input, self.config.hex_len())
    }

    /// Encode a hex key as base-62. See [`base62::encode`].
    pub fn encode(&self, hex_input: &str) -> Result<String, VoucherError> {
        base62::encode(hex_input, &self.config)
    }

    /// Decode base-62 into a padded lowercase hex key. See [`base62::decode`].
    pub fn decode(&self, base62_input: &str) -> Result<String, VoucherError> {
        base62::decode(base62_input, &self.config)
    }

    /// Encode a private key and split the result into a [`Voucher`].
    ///
    /// # Arguments
    /// * `private_key` - Hex private key of the configured width, any case.
    ///
    /// # Returns
    /// The voucher, any encoding error unchanged, or `TooShort` when the
    /// encoding has fewer than `split_offset` characters. Keys with many
    /// leading zero bits (including the all-zero key) hit the latter.
    pub fn create_voucher(&self, private_key: &str) -> Result<Voucher, VoucherError> {
        let encoded = self.encode(private_key)?;

        let min = self.config.split_offset;
        if encoded.len() < min {
            tracing::debug!(encoded_len = encoded.len(), min, "encoded key too short to split");
            return Err(VoucherError::TooShort { min, got: encoded.len() });
        }

        // Base-62 output is pure ASCII, so the byte offset is a char boundary.
        let (key, code) = encoded.split_at(min);
        tracing::debug!(code_len = code.len(), "created voucher");
        Ok(Voucher {
            key: key.to_string(),
            code: code.to_string(),
        })
    }

    /// Join a voucher key and code and decode them back into a hex key.
    ///
    /// # Returns
    /// The lowercase hex key padded to the configured width, or the decode
    /// error unchanged.
    pub fn restore_private_key(
        &self,
        voucher_key: &str,
        voucher_code: &str,
    ) -> Result<String, VoucherError> {
        let mut combined = Zeroizing::new(String::with_capacity(
            voucher_key.len() + voucher_code.len(),
        ));
        combined.push_str(voucher_key);
        combined.push_str(voucher_code);

        let restored = self.decode(&combined);
        if let Err(e) = &restored {
            tracing::debug!(kind = ?e.kind(), "failed to restore private key");
        }
        restored
    }

    /// Restore the private key held by `voucher` using this codec's width.
    pub fn restore_voucher(&self, voucher: &Voucher) -> Result<String, VoucherError> {
        self.restore_private_key(&voucher.key, &voucher.code)
    }
}
