//! Private keys, public keys, and key pairs.

use crate::{
    Error, Result,
    bytes::FIELD_SIZE,
    hex_string::decode_hex,
    primitive::{CurvePrimitive, K256, encode_public_key},
};
use core::fmt;
use k256::{ecdsa::SigningKey, elliptic_curve::rand_core::CryptoRngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

const PUBLIC_KEY_SIZE: usize = FIELD_SIZE * 2;

/// secp256k1 private key: a 32-byte big endian scalar.
///
/// Only the length is checked on construction. Zero or out-of-range scalars
/// are rejected by the curve operations that use them.
///
/// The key material is zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; FIELD_SIZE]);

impl PrivateKey {
    /// Size of a private key in bytes
    pub const SIZE: usize = FIELD_SIZE;

    /// Wrap raw scalar bytes.
    pub const fn from_bytes(bytes: [u8; FIELD_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse a private key from a 32-byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes
            .try_into()
            .map_err(|_| Error::PrivateKeyLength(bytes.len()))?;
        Ok(Self(bytes))
    }

    /// Parse a private key from hex, with or without `0x` prefix.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut bytes = decode_hex(hex)?;
        let key = Self::from_slice(&bytes);
        bytes.zeroize();
        key
    }

    /// Borrow the raw scalar bytes.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    pub fn as_bytes(&self) -> &[u8; FIELD_SIZE] {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// secp256k1 public key as 64 bytes of uncompressed affine coordinates
/// (`x‖y`), without the SEC1 `0x04` tag byte.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Size of a public key in bytes
    pub const SIZE: usize = PUBLIC_KEY_SIZE;

    /// Wrap raw coordinate bytes.
    ///
    /// No on-curve check is performed.
    pub const fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse a public key from a 64-byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| Error::PublicKeyLength(bytes.len()))
    }

    /// Borrow the coordinate bytes.
    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.0
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> &[u8] {
        &self.0[..FIELD_SIZE]
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &[u8] {
        &self.0[FIELD_SIZE..]
    }

    /// Uncompressed SEC1 encoding, i.e. these bytes prefixed with `0x04`.
    pub fn to_sec1_bytes(&self) -> [u8; Self::SIZE + 1] {
        let mut out = [0u8; Self::SIZE + 1];
        out[0] = 0x04;
        out[1..].copy_from_slice(&self.0);
        out
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({self:x})")
    }
}

impl fmt::LowerHex for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Derive the [`PublicKey`] for `private_key`.
pub fn private_to_public(private_key: &PrivateKey) -> Result<PublicKey> {
    K256.public_key(private_key)
}

/// Private key together with its derived public key.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Generate a cryptographically random key pair.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        let signing_key = SigningKey::random(rng);
        let public_key = encode_public_key(signing_key.verifying_key());
        let private_key = PrivateKey::from_bytes(signing_key.to_bytes().into());

        Self {
            private_key,
            public_key,
        }
    }

    /// Derive the public half of `private_key`.
    pub fn from_private_key(private_key: PrivateKey) -> Result<Self> {
        let public_key = private_to_public(&private_key)?;

        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Borrow the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Get the public key.
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }
}

/// Build a [`KeyPair`] from a hex-encoded private key (`0x` prefix optional).
pub fn keypair(sk: &str) -> Result<KeyPair> {
    KeyPair::from_private_key(PrivateKey::from_hex(sk)?)
}
