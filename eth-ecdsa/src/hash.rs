//! Keccak-256 message hashing.
//!
//! This is the original Keccak padding used throughout Ethereum, which
//! differs from the standardized SHA3-256.

use sha3::{Digest as _, Keccak256};

/// Size of a message digest in bytes
pub const DIGEST_SIZE: usize = 32;

/// Keccak-256 message digest
pub type Digest = [u8; DIGEST_SIZE];

/// Hash `msg` with Keccak-256.
///
/// Text is hashed as its UTF-8 bytes.
pub fn hash(msg: impl AsRef<[u8]>) -> Digest {
    Keccak256::digest(msg.as_ref()).into()
}

#[cfg(test)]
mod tests {
    use super::hash;
    use hex_literal::hex;

    #[test]
    fn empty_input() {
        assert_eq!(
            hash(""),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn abc() {
        assert_eq!(
            hash("abc"),
            hex!("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
        );
    }

    #[test]
    fn text_and_bytes_agree() {
        assert_eq!(hash("Hello World!"), hash(b"Hello World!"));
    }
}
