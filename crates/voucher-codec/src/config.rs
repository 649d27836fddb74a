//! Codec configuration: key width and voucher split position.

use serde::{Deserialize, Serialize};

use crate::VoucherError;

/// Private key size in bytes (256 bits).
pub const DEFAULT_KEY_SIZE: usize = 32;

/// Number of base-62 characters that go into the voucher key.
pub const DEFAULT_SPLIT_OFFSET: usize = 28;

/// Largest accepted key size in bytes (512 bits).
pub const MAX_KEY_SIZE: usize = 64;

/// Width and split parameters used by [`crate::VoucherCodec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Key size in bytes. Hex input must be exactly twice this many characters.
    pub key_size: usize,
    /// Length of the voucher key fragment.
    pub split_offset: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            key_size: DEFAULT_KEY_SIZE,
            split_offset: DEFAULT_SPLIT_OFFSET,
        }
    }
}

impl CodecConfig {
    /// Check that the key size is in `1..=MAX_KEY_SIZE` and the split offset
    /// is at least one character.
    ///
    /// # Returns
    /// `Ok(())` if usable, or `InvalidConfig` describing the bad field.
    pub fn validate(&self) -> Result<(), VoucherError> {
        if self.key_size == 0 || self.key_size > MAX_KEY_SIZE {
            return Err(VoucherError::InvalidConfig(format!(
                "key_size must be between 1 and {}, got {}",
                MAX_KEY_SIZE, self.key_size
            )));
        }
        if self.split_offset == 0 {
            return Err(VoucherError::InvalidConfig(
                "split_offset must be at least 1".to_string()
            ));
        }
        Ok(())
    }

    pub fn hex_len(&self) -> usize {
        self.key_size.saturating_mul(2)
    }

    pub fn max_bits(&self) -> u64 {
        (self.key_size as u64).saturating_mul(8)
    }
}
