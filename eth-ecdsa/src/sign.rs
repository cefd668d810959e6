//! Producing `(r, s, v)` signatures.

use crate::{
    Digest, Error, PrivateKey, PublicKey, RecoveryBit, Result,
    bytes::FIELD_SIZE,
    primitive::{COMPACT_SIGNATURE_SIZE, CompactSignature, CurvePrimitive, K256},
    recovery::{self, calculate_sig_recovery},
};

/// Ethereum-style ECDSA signature.
///
/// - `r`: 32-byte integer, big endian
/// - `s`: 32-byte integer, big endian
/// - `v`: recovery bit, either raw (`0`/`1`), legacy (`27`/`28`) or
///   EIP-155 encoded (`chain_id * 2 + 35 + bit`)
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EcdsaSignature {
    /// `r` component
    pub r: [u8; FIELD_SIZE],
    /// `s` component
    pub s: [u8; FIELD_SIZE],
    /// Recovery value
    pub v: u64,
}

impl EcdsaSignature {
    /// Split a compact signature and attach a legacy `v` for `bit`.
    pub fn from_compact(compact: &CompactSignature, bit: RecoveryBit) -> Self {
        let mut r = [0u8; FIELD_SIZE];
        let mut s = [0u8; FIELD_SIZE];
        r.copy_from_slice(&compact[..FIELD_SIZE]);
        s.copy_from_slice(&compact[FIELD_SIZE..]);

        Self {
            r,
            s,
            v: recovery::to_legacy_v(bit),
        }
    }

    /// `r‖s` without the recovery value.
    pub fn to_compact(&self) -> CompactSignature {
        let mut out = [0u8; COMPACT_SIGNATURE_SIZE];
        out[..FIELD_SIZE].copy_from_slice(&self.r);
        out[FIELD_SIZE..].copy_from_slice(&self.s);
        out
    }

    /// Normalize `v` into a [`RecoveryBit`].
    pub fn recovery_bit(&self, chain_id: Option<u64>) -> Result<RecoveryBit> {
        calculate_sig_recovery(self.v, chain_id)
    }

    /// Re-encode `v` for `chain_id` as described in EIP-155.
    ///
    /// `v` must currently be in raw or legacy form.
    pub fn with_chain_id(self, chain_id: u64) -> Result<Self> {
        let bit = self.recovery_bit(None)?;
        let v = recovery::to_eip155_v(bit, chain_id).ok_or(Error::InvalidRecovery {
            v: self.v,
            chain_id: Some(chain_id),
        })?;

        Ok(Self { v, ..self })
    }

    /// Recover the signer's public key. See [`ecrecover`](crate::ecrecover).
    pub fn recover(&self, digest: &Digest, chain_id: Option<u64>) -> Result<PublicKey> {
        crate::ecrecover(digest, self.v, &self.r, &self.s, chain_id)
    }
}

/// Sign `digest` with `private_key` using RFC6979 deterministic nonces.
///
/// `v` is returned in legacy form: `27 + recovery bit`.
pub fn ecsign(digest: &Digest, private_key: &PrivateKey) -> Result<EcdsaSignature> {
    ecsign_with(&K256, digest, private_key)
}

/// [`ecsign`] using the given [`CurvePrimitive`].
pub fn ecsign_with<P>(
    primitive: &P,
    digest: &Digest,
    private_key: &PrivateKey,
) -> Result<EcdsaSignature>
where
    P: CurvePrimitive + ?Sized,
{
    let (compact, recovery_id) = primitive.sign_prehash(digest, private_key)?;
    let bit = RecoveryBit::from_byte(recovery_id).ok_or(Error::InvalidRecovery {
        v: recovery_id.into(),
        chain_id: None,
    })?;

    Ok(EcdsaSignature::from_compact(&compact, bit))
}
