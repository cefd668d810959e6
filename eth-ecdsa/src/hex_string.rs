//! Hex string helpers with optional `0x` prefix handling.

use crate::Result;
use alloc::{format, string::String, vec::Vec};

/// Prefix used for hex strings in the Ethereum ecosystem
pub const HEX_PREFIX: &str = "0x";

/// Does `s` begin with exactly `0x`?
pub fn is_hex_prefixed(s: &str) -> bool {
    s.starts_with(HEX_PREFIX)
}

/// Remove a leading `0x`, if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix(HEX_PREFIX).unwrap_or(s)
}

/// Ensure `s` carries exactly one leading `0x`.
pub fn add_hex_prefix(s: &str) -> String {
    format!("{HEX_PREFIX}{}", strip_hex_prefix(s))
}

/// Lowercase hex encoding of `bytes`, without prefix.
pub fn to_hex_string(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hex string, with or without `0x` prefix.
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(strip_hex_prefix(s))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn prefix_detection() {
        assert!(is_hex_prefixed("0x"));
        assert!(is_hex_prefixed("0xdeadbeef"));
        assert!(!is_hex_prefixed("0X00"));
        assert!(!is_hex_prefixed("deadbeef"));
        assert!(!is_hex_prefixed("x0"));
        assert!(!is_hex_prefixed(""));
    }

    #[test]
    fn strip_prefix_once() {
        assert_eq!(strip_hex_prefix("0xabcd"), "abcd");
        assert_eq!(strip_hex_prefix("abcd"), "abcd");
        assert_eq!(strip_hex_prefix("0x0xab"), "0xab");
        assert_eq!(strip_hex_prefix(""), "");
    }

    #[test]
    fn add_prefix() {
        assert_eq!(add_hex_prefix("abcd"), "0xabcd");
        assert_eq!(add_hex_prefix("0xabcd"), "0xabcd");
    }

    #[test]
    fn encode_lowercase() {
        assert_eq!(to_hex_string([0x00, 0xAB, 0xff]), "00abff");
        assert_eq!(to_hex_string([0u8; 0]), "");
    }

    #[test]
    fn decode() {
        assert_eq!(decode_hex("0x00ff").unwrap(), [0x00, 0xff]);
        assert_eq!(decode_hex("00FF").unwrap(), [0x00, 0xff]);
        assert!(matches!(decode_hex("0xabc"), Err(Error::Hex(_))));
        assert!(matches!(decode_hex("zz"), Err(Error::Hex(_))));
    }
}
