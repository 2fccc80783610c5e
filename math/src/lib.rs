// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains the arithmetic layers of the rescue25519 suite:
//!
//! * [U256] and [U512] unsigned integers with the widening operations needed for exact modular
//!   reduction.
//! * The Curve25519 base field $F_p$ with $p = 2^{255} - 19$, implemented by
//!   [fields::f25519::BaseElement] with a constant-time posture on all secret-handling
//!   operations.
//! * A dense row-major [Matrix] over the base field, used by the Rescue permutation.

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate alloc;

mod bigint;
pub use bigint::{mul_wide, sqr_wide, U256, U512};

mod field;
pub mod fields {
    //! Finite field implementations.
    //!
    //! This module contains the concrete implementation of the Curve25519 base field used
    //! throughout the suite.

    pub use super::field::f25519;
}

mod matrix;
pub use matrix::Matrix;

mod errors;
pub use errors::MathError;
