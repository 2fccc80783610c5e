// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains the cryptographic primitives of the rescue25519 suite:
//!
//! * **Rescue permutation** - [RescueDesc] derives the S-box exponents, round count, MDS
//!   matrices, and SHAKE256-seeded round keys for a cipher-mode or hash-mode instance over
//!   the Curve25519 base field.
//! * **Rescue-Prime hash** - [RescuePrime] is a sponge over the hash-mode permutation
//!   targeting 256-bit security.
//! * **Rescue-CTR cipher** - [RescueCipher] is a counter-mode stream cipher over the
//!   cipher-mode permutation targeting 128-bit security, with key derivation per NIST SP
//!   800-56C.
//! * **XOF adapters** - [Shake256], [shake256] and [sha256] wrap the seed hashes; nothing
//!   else in the suite depends on them.
//! * **OS randomness** - the [random] module and [generate_nonce], all fallible with no weak
//!   fallback.

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate alloc;

mod errors;
pub use errors::RescueError;

mod hash;
pub use hash::{
    sha256, shake256, RescuePrime, Shake256, DIGEST_LENGTH, HASH_CAPACITY, HASH_RATE,
    HASH_STATE_WIDTH,
};

mod rescue;
pub use rescue::{
    build_cauchy_matrix, build_cauchy_matrix_inverse, get_alpha_and_inverse, get_num_rounds,
    mds, rescue_permutation, rescue_permutation_inverse, RescueDesc, RescueMode,
    CIPHER_SECURITY_LEVEL, HASH_SECURITY_LEVEL,
};

mod cipher;
pub use cipher::{
    generate_nonce, RescueCipher, BLOCK_SIZE, ELEMENT_SIZE, NONCE_SIZE, SECRET_SIZE,
};

pub mod random;
