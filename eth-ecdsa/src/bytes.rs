//! Byte buffer helpers: concatenation and fixed-length canonicalization.
//!
//! Signature components travel as big-endian integers, which may arrive
//! shorter (leading zeros dropped) or longer than the 32 bytes a compact
//! signature expects. [`set_length_left`] restores the canonical width.

use alloc::{borrow::Cow, vec, vec::Vec};

/// Size of a secp256k1 field element / scalar when serialized
pub const FIELD_SIZE: usize = 32;

/// Concatenate `chunks` in order.
///
/// A single chunk is returned as-is without copying.
pub fn concat_bytes<'a>(chunks: &[&'a [u8]]) -> Cow<'a, [u8]> {
    if let [chunk] = chunks {
        return Cow::Borrowed(chunk);
    }

    let length = chunks.iter().map(|chunk| chunk.len()).sum();
    let mut result = Vec::with_capacity(length);

    for chunk in chunks {
        result.extend_from_slice(chunk);
    }

    Cow::Owned(result)
}

/// Buffer of `n` zero bytes.
pub fn zeros(n: usize) -> Vec<u8> {
    vec![0u8; n]
}

/// Canonicalize `msg` to exactly `length` bytes.
///
/// With `right` set, short input is zero-padded on the right and long input
/// keeps its first `length` bytes. Otherwise short input is zero-padded on
/// the left and long input keeps its last `length` bytes.
///
/// Truncation borrows from `msg`; only padding allocates.
pub fn set_length(msg: &[u8], length: usize, right: bool) -> Cow<'_, [u8]> {
    if msg.len() >= length {
        return if right {
            Cow::Borrowed(&msg[..length])
        } else {
            Cow::Borrowed(&msg[msg.len() - length..])
        };
    }

    let mut padded = zeros(length);

    if right {
        padded[..msg.len()].copy_from_slice(msg);
    } else {
        padded[length - msg.len()..].copy_from_slice(msg);
    }

    Cow::Owned(padded)
}

/// Left-pad or truncate `msg` to `length` bytes, keeping the trailing bytes.
pub fn set_length_left(msg: &[u8], length: usize) -> Cow<'_, [u8]> {
    set_length(msg, length, false)
}

/// Right-pad or truncate `msg` to `length` bytes, keeping the leading bytes.
pub fn set_length_right(msg: &[u8], length: usize) -> Cow<'_, [u8]> {
    set_length(msg, length, true)
}

/// [`set_length_left`] into a fixed-size array.
pub fn left_pad_32(msg: &[u8]) -> [u8; FIELD_SIZE] {
    let mut out = [0u8; FIELD_SIZE];
    out.copy_from_slice(&set_length_left(msg, FIELD_SIZE));
    out
}
