//! Public key recovery (`ecrecover`).

use crate::{
    Digest, PublicKey, Result,
    bytes::{concat_bytes, left_pad_32},
    primitive::{COMPACT_SIGNATURE_SIZE, CurvePrimitive, K256},
    recovery::calculate_sig_recovery,
};

/// Recover the public key that signed `digest`.
///
/// `r` and `s` are big endian integers of any length; they are left-padded
/// or truncated to 32 bytes. `v` may be a raw recovery bit, a legacy value
/// (`27`/`28`), or, when `chain_id` is given, an EIP-155 value. See
/// [`calculate_sig_recovery`] for the exact precedence.
pub fn ecrecover(
    digest: &Digest,
    v: u64,
    r: &[u8],
    s: &[u8],
    chain_id: Option<u64>,
) -> Result<PublicKey> {
    ecrecover_with(&K256, digest, v, r, s, chain_id)
}

/// [`ecrecover`] using the given [`CurvePrimitive`].
///
/// An invalid `v` is rejected before `primitive` is called.
pub fn ecrecover_with<P>(
    primitive: &P,
    digest: &Digest,
    v: u64,
    r: &[u8],
    s: &[u8],
    chain_id: Option<u64>,
) -> Result<PublicKey>
where
    P: CurvePrimitive + ?Sized,
{
    let r = left_pad_32(r);
    let s = left_pad_32(s);
    let signature = concat_bytes(&[r.as_slice(), s.as_slice()]);
    let recovery = calculate_sig_recovery(v, chain_id)?;

    let mut compact = [0u8; COMPACT_SIGNATURE_SIZE];
    compact.copy_from_slice(&signature);
    primitive.recover_prehash(digest, &compact, recovery)
}
