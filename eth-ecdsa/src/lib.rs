//! Ethereum-style ECDSA over secp256k1.
//!
//! Signatures are `(r, s, v)` triples where `v` carries the recovery bit
//! needed to recover the signer's public key from the signature alone,
//! optionally offset by a chain id as described in [EIP-155][1].
//!
//! Curve arithmetic and RFC6979 signing are provided by [`k256`], hashing by
//! the Keccak-256 implementation in [`sha3`]. This crate handles the
//! conventions layered on top: `v` encoding, recovery bit normalization, and
//! fixed-width canonicalization of the signature components.
//!
//! # Usage
//!
//! ```
//! use eth_ecdsa::{ecrecover, ecsign, hash, keypair};
//!
//! let kp = keypair("0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318")?;
//! let digest = hash("Hello World!");
//!
//! let sig = ecsign(&digest, kp.private_key())?;
//! let pk = ecrecover(&digest, sig.v, &sig.r, &sig.s, None)?;
//! assert_eq!(pk, kp.public_key());
//! # Ok::<(), eth_ecdsa::Error>(())
//! ```
//!
//! [1]: https://eips.ethereum.org/EIPS/eip-155

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub mod bytes;
pub mod hex_string;
pub mod primitive;
pub mod recovery;

mod error;
mod hash;
mod keys;
mod recover;
mod sign;

pub use crate::{
    error::{Error, Result},
    hash::{DIGEST_SIZE, Digest, hash},
    keys::{KeyPair, PrivateKey, PublicKey, keypair, private_to_public},
    recover::{ecrecover, ecrecover_with},
    recovery::RecoveryBit,
    sign::{EcdsaSignature, ecsign, ecsign_with},
};
pub use bytes::{concat_bytes, set_length, set_length_left, set_length_right, zeros};
pub use hex_string::{is_hex_prefixed, strip_hex_prefix, to_hex_string};

// Re-export the curve implementation
pub use k256;
