//! Ethereum `v` values and recovery bits.
//!
//! Ethereum overloads the `v` component of a signature with three meanings:
//!
//! - `0` / `1`: the raw recovery bit
//! - `27` / `28`: the legacy encoding, `27 + bit`
//! - `chain_id * 2 + 35 + bit`: [EIP-155] replay-protected encoding
//!
//! [`calculate_sig_recovery`] collapses all three into a [`RecoveryBit`]
//! so that nothing downstream has to reinterpret `v`.
//!
//! [EIP-155]: https://eips.ethereum.org/EIPS/eip-155

use crate::{Error, Result};

/// Offset added to the recovery bit by legacy (pre-EIP-155) signatures
pub const LEGACY_V_OFFSET: u64 = 27;

/// Offset added to `chain_id * 2` by EIP-155 signatures
pub const EIP155_V_OFFSET: u64 = 35;

/// Recovery bit: which of the two candidate points with x-coordinate `r`
/// was the ephemeral point `k×G`.
///
/// This is the parity of the affine y-coordinate of `k×G`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum RecoveryBit {
    /// y-coordinate is even
    Even = 0,
    /// y-coordinate is odd
    Odd = 1,
}

impl RecoveryBit {
    /// Build from y-coordinate parity.
    pub const fn new(is_y_odd: bool) -> Self {
        if is_y_odd { Self::Odd } else { Self::Even }
    }

    /// Is the y-coordinate of `k×G` odd?
    pub const fn is_y_odd(self) -> bool {
        matches!(self, Self::Odd)
    }

    /// Convert a `u8` into a [`RecoveryBit`].
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Even),
            1 => Some(Self::Odd),
            _ => None,
        }
    }

    /// Convert this [`RecoveryBit`] into a `u8`.
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// The other bit. Negating `s` flips which candidate point is correct.
    pub const fn flip(self) -> Self {
        match self {
            Self::Even => Self::Odd,
            Self::Odd => Self::Even,
        }
    }
}

impl TryFrom<u8> for RecoveryBit {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::from_byte(byte).ok_or(Error::InvalidRecovery {
            v: byte.into(),
            chain_id: None,
        })
    }
}

impl From<RecoveryBit> for u8 {
    fn from(bit: RecoveryBit) -> u8 {
        bit.to_byte()
    }
}

impl From<RecoveryBit> for u64 {
    fn from(bit: RecoveryBit) -> u64 {
        bit.to_byte().into()
    }
}

/// Normalize `v` into a [`RecoveryBit`].
///
/// - `v` of `0` or `1` is already a recovery bit; `chain_id` is ignored.
/// - Without a `chain_id`, `v` is taken as `27 + bit`.
/// - Otherwise `v` is taken as `chain_id * 2 + 35 + bit`.
///
/// Anything that does not land on `0` or `1` is rejected with
/// [`Error::InvalidRecovery`].
pub fn calculate_sig_recovery(v: u64, chain_id: Option<u64>) -> Result<RecoveryBit> {
    let invalid = || Error::InvalidRecovery { v, chain_id };

    if let Some(bit) = u8::try_from(v).ok().and_then(RecoveryBit::from_byte) {
        return Ok(bit);
    }

    // i128 holds every intermediate for u64 inputs, including negatives
    let offset = match chain_id {
        None => i128::from(LEGACY_V_OFFSET),
        Some(chain_id) => i128::from(chain_id) * 2 + i128::from(EIP155_V_OFFSET),
    };

    let recovery = i128::from(v) - offset;

    u8::try_from(recovery)
        .ok()
        .and_then(RecoveryBit::from_byte)
        .ok_or_else(invalid)
}

/// Legacy `v` value: `27 + bit`.
pub fn to_legacy_v(bit: RecoveryBit) -> u64 {
    LEGACY_V_OFFSET + u64::from(bit)
}

/// EIP-155 `v` value: `chain_id * 2 + 35 + bit`.
///
/// Returns `None` if the result does not fit in a `u64`.
pub fn to_eip155_v(bit: RecoveryBit, chain_id: u64) -> Option<u64> {
    chain_id
        .checked_mul(2)?
        .checked_add(EIP155_V_OFFSET)?
        .checked_add(u64::from(bit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bits() {
        assert_eq!(calculate_sig_recovery(0, None).unwrap(), RecoveryBit::Even);
        assert_eq!(calculate_sig_recovery(1, None).unwrap(), RecoveryBit::Odd);
    }

    #[test]
    fn raw_bits_ignore_chain_id() {
        assert_eq!(calculate_sig_recovery(0, Some(1)).unwrap(), RecoveryBit::Even);
        assert_eq!(calculate_sig_recovery(1, Some(137)).unwrap(), RecoveryBit::Odd);
    }

    #[test]
    fn legacy() {
        assert_eq!(calculate_sig_recovery(27, None).unwrap(), RecoveryBit::Even);
        assert_eq!(calculate_sig_recovery(28, None).unwrap(), RecoveryBit::Odd);
    }

    #[test]
    fn eip155() {
        assert_eq!(calculate_sig_recovery(37, Some(1)).unwrap(), RecoveryBit::Even);
        assert_eq!(calculate_sig_recovery(38, Some(1)).unwrap(), RecoveryBit::Odd);
        assert_eq!(calculate_sig_recovery(309, Some(137)).unwrap(), RecoveryBit::Even);
        assert_eq!(calculate_sig_recovery(310, Some(137)).unwrap(), RecoveryBit::Odd);
    }

    #[test]
    fn rejects_out_of_range() {
        for (v, chain_id) in [
            (2, None),
            (4, None),
            (26, None),
            (29, None),
            (28, Some(1)),
            (39, Some(1)),
            (u64::MAX, None),
            (u64::MAX, Some(u64::MAX)),
            (35, Some(u64::MAX)),
        ] {
            match calculate_sig_recovery(v, chain_id) {
                Err(Error::InvalidRecovery { v: got_v, chain_id: got_chain_id }) => {
                    assert_eq!(got_v, v);
                    assert_eq!(got_chain_id, chain_id);
                }
                other => panic!("v={v} chain_id={chain_id:?}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn encoders_invert_normalization() {
        for bit in [RecoveryBit::Even, RecoveryBit::Odd] {
            assert_eq!(calculate_sig_recovery(to_legacy_v(bit), None).unwrap(), bit);

            for chain_id in [1, 5, 137, 1 << 40] {
                let v = to_eip155_v(bit, chain_id).unwrap();
                assert_eq!(calculate_sig_recovery(v, Some(chain_id)).unwrap(), bit);
            }
        }

        assert_eq!(to_eip155_v(RecoveryBit::Odd, 1), Some(38));
        assert_eq!(to_eip155_v(RecoveryBit::Even, u64::MAX / 2), None);
    }

    #[test]
    fn byte_conversions() {
        assert_eq!(RecoveryBit::try_from(0u8).unwrap(), RecoveryBit::Even);
        assert_eq!(RecoveryBit::try_from(1u8).unwrap(), RecoveryBit::Odd);
        assert!(RecoveryBit::try_from(2u8).is_err());
        assert_eq!(u8::from(RecoveryBit::Odd), 1);
        assert_eq!(RecoveryBit::Even.flip(), RecoveryBit::Odd);
        assert!(RecoveryBit::new(true).is_y_odd());
    }
}
