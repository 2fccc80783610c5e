// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A cryptographic primitive suite built around the Rescue family of algebraic permutations
//! over the Curve25519 base field $F_p$ with $p = 2^{255} - 19$.
//!
//! The suite exposes two user-facing primitives derived from a single parameterised
//! permutation:
//!
//! * [RescuePrime] - a sponge-based hash function targeting 256-bit security.
//! * [RescueCipher] - a counter-mode stream cipher targeting 128-bit security, with key
//!   derivation per NIST SP 800-56C.
//!
//! Both interoperate bit-for-bit with other conforming implementations: round constants are
//! sampled from SHAKE256 under fixed seed strings, and ciphertext elements serialize as
//! canonical 32-byte little-endian values.
//!
//! # Hashing
//!
//! ```
//! use rescue25519::{BaseElement, RescuePrime};
//!
//! # fn main() -> Result<(), rescue25519::RescueError> {
//! let hasher = RescuePrime::new_default()?;
//! let digest = hasher.digest(&[
//!     BaseElement::from(1u8),
//!     BaseElement::from(2u8),
//!     BaseElement::from(3u8),
//! ])?;
//! assert_eq!(5, digest.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Encryption
//!
//! ```
//! use rescue25519::{generate_nonce, BaseElement, RescueCipher};
//!
//! # fn main() -> Result<(), rescue25519::RescueError> {
//! let secret = rescue25519::random::random_bytes(32)?;
//! let cipher = RescueCipher::new(&secret)?;
//!
//! let nonce = generate_nonce()?;
//! let plaintext = vec![BaseElement::from(42u8)];
//! let ciphertext = cipher.encrypt(&plaintext, &nonce)?;
//!
//! assert_eq!(plaintext, cipher.decrypt(&ciphertext, &nonce)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Crate organization
//!
//! This crate re-exports the suite's public surface; the implementation lives in
//! `rescue25519-math` (bignum, field, and matrix arithmetic) and `rescue25519-crypto`
//! (permutation, hash, cipher, and randomness).

#![cfg_attr(not(feature = "std"), no_std)]

pub use crypto::{
    generate_nonce, random, sha256, shake256, RescueCipher, RescueDesc, RescueError, RescueMode,
    RescuePrime, Shake256, BLOCK_SIZE, CIPHER_SECURITY_LEVEL, DIGEST_LENGTH, ELEMENT_SIZE,
    HASH_CAPACITY, HASH_RATE, HASH_SECURITY_LEVEL, HASH_STATE_WIDTH, NONCE_SIZE, SECRET_SIZE,
};
pub use math::{fields::f25519::BaseElement, MathError, Matrix, U256, U512};
pub use utils::{
    ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable, SliceReader,
};
