//! Error types

use core::fmt;

/// Result type with the `eth-ecdsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by this crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// `v` did not normalize to a recovery bit of `0` or `1`.
    #[error("invalid signature v value: {v}{}", ChainIdSuffix(.chain_id))]
    InvalidRecovery {
        /// Raw `v` value supplied by the caller or reported by the signer.
        v: u64,
        /// Chain id used during normalization, if any.
        chain_id: Option<u64>,
    },

    /// Private keys are exactly 32 bytes.
    #[error("invalid private key length: expected 32 bytes, got {0}")]
    PrivateKeyLength(usize),

    /// Public keys are exactly 64 bytes (no SEC1 tag byte).
    #[error("invalid public key length: expected 64 bytes, got {0}")]
    PublicKeyLength(usize),

    /// Hex decoding failed.
    #[error("invalid hex string: {0}")]
    Hex(hex::FromHexError),

    /// Failure reported by the underlying curve implementation.
    #[error("curve operation failed: {0}")]
    Signature(signature::Error),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::Hex(err)
    }
}

impl From<signature::Error> for Error {
    fn from(err: signature::Error) -> Self {
        Error::Signature(err)
    }
}

struct ChainIdSuffix<'a>(&'a Option<u64>);

impl fmt::Display for ChainIdSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(chain_id) => write!(f, " (chain id {chain_id})"),
            None => Ok(()),
        }
    }
}
