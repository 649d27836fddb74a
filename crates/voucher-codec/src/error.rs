/// Unified error type for voucher codec operations.
///
/// Covers hex validation, base-62 decoding, and voucher splitting. Errors from
/// lower layers are returned unchanged by the higher-level operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoucherError {
    #[error("invalid length: expected {expected} characters, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid charset: {0}")]
    InvalidCharset(String),

    #[error("encoded key too short: need at least {min} characters, got {got}")]
    TooShort { min: usize, got: usize },

    #[error("decoded value exceeds {max_bits} bits")]
    Overflow { max_bits: u64 },

    #[error("invalid codec config: {0}")]
    InvalidConfig(String),
}

/// Category of a [`VoucherError`], without the attached details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLength,
    InvalidCharset,
    TooShort,
    Overflow,
    InvalidConfig,
}

impl VoucherError {
    /// Return the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VoucherError::InvalidLength { .. } => ErrorKind::InvalidLength,
            VoucherError::InvalidCharset(_) => ErrorKind::InvalidCharset,
            VoucherError::TooShort { .. } => ErrorKind::TooShort,
            VoucherError::Overflow { .. } => ErrorKind::Overflow,
            VoucherError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}

impl From<hex::FromHexError> for VoucherError {
    fn from(e: hex::FromHexError) -> Self {
        VoucherError::InvalidCharset(format!("invalid hex: {}", e))
    }
}
