//! Curve and hash primitives this crate delegates to.
//!
//! [`CurvePrimitive`] is the complete set of operations the Ethereum
//! signature convention needs from an elliptic curve library. Everything
//! else in this crate (recovery bit normalization, `v` encoding, byte
//! canonicalization) is layered on top of it.
//!
//! [`K256`] implements it with the RustCrypto [`k256`] and [`sha3`] crates.

use crate::{Digest, PrivateKey, PublicKey, RecoveryBit, Result, bytes::FIELD_SIZE};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

/// Size of a compact signature (`r‖s`) in bytes
pub const COMPACT_SIGNATURE_SIZE: usize = FIELD_SIZE * 2;

/// Compact signature: 32-byte big endian `r` followed by 32-byte big endian `s`
pub type CompactSignature = [u8; COMPACT_SIGNATURE_SIZE];

/// secp256k1 operations required to sign and recover Ethereum signatures.
pub trait CurvePrimitive {
    /// Compute `private_key × G`.
    fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey>;

    /// Sign a 32-byte message digest with a deterministic nonce.
    ///
    /// Returns the compact signature and the recovery ID reported by the
    /// implementation, which is `0` or `1` unless the x-coordinate of `k×G`
    /// exceeded the curve order.
    fn sign_prehash(
        &self,
        digest: &Digest,
        private_key: &PrivateKey,
    ) -> Result<(CompactSignature, u8)>;

    /// Recover the public key which produced `signature` over `digest`.
    fn recover_prehash(
        &self,
        digest: &Digest,
        signature: &CompactSignature,
        recovery: RecoveryBit,
    ) -> Result<PublicKey>;

    /// Hash a message into a [`Digest`].
    fn hash(&self, msg: &[u8]) -> Digest;
}

/// [`CurvePrimitive`] backed by the pure Rust `k256` crate and Keccak-256.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct K256;

impl CurvePrimitive for K256 {
    fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey> {
        let signing_key = SigningKey::from_slice(private_key.as_bytes())?;
        Ok(encode_public_key(signing_key.verifying_key()))
    }

    fn sign_prehash(
        &self,
        digest: &Digest,
        private_key: &PrivateKey,
    ) -> Result<(CompactSignature, u8)> {
        let signing_key = SigningKey::from_slice(private_key.as_bytes())?;
        let (signature, recovery_id) = signing_key.sign_prehash_recoverable(digest)?;

        let mut compact = [0u8; COMPACT_SIGNATURE_SIZE];
        compact.copy_from_slice(&signature.to_bytes());
        Ok((compact, recovery_id.to_byte()))
    }

    fn recover_prehash(
        &self,
        digest: &Digest,
        signature: &CompactSignature,
        recovery: RecoveryBit,
    ) -> Result<PublicKey> {
        let mut signature = Signature::from_slice(signature)?;
        let mut recovery = recovery;

        // `k256` only verifies low-S signatures. Negating `s` selects the
        // other candidate point, so the bit flips with it.
        if let Some(normalized) = signature.normalize_s() {
            signature = normalized;
            recovery = recovery.flip();
        }

        let recovery_id = RecoveryId::new(recovery.is_y_odd(), false);
        let verifying_key = VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)?;
        Ok(encode_public_key(&verifying_key))
    }

    fn hash(&self, msg: &[u8]) -> Digest {
        crate::hash(msg)
    }
}

/// Uncompressed SEC1 encoding without the leading `0x04` tag.
pub(crate) fn encode_public_key(verifying_key: &VerifyingKey) -> PublicKey {
    let point = verifying_key.to_encoded_point(false);
    let mut bytes = [0u8; PublicKey::SIZE];
    bytes.copy_from_slice(&point.as_bytes()[1..]);
    PublicKey::from_bytes(bytes)
}
