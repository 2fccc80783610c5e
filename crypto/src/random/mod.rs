// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Random material from the operating-system CSPRNG.
//!
//! Unlike the test-only helpers in the rand-utils crate, every function here is fallible: a
//! CSPRNG failure surfaces as an [RescueError::OperationError] and never falls back to a
//! weaker source.

use alloc::{string::String, vec::Vec};

use math::{fields::f25519::BaseElement, U256};
use rand::{rngs::OsRng, RngCore};

use crate::errors::RescueError;

// RANDOM VALUE GENERATION
// ================================================================================================

/// Returns `num_bytes` bytes from the OS CSPRNG.
///
/// # Errors
/// Returns an error if the CSPRNG fails.
pub fn random_bytes(num_bytes: usize) -> Result<Vec<u8>, RescueError> {
    let mut bytes = vec![0u8; num_bytes];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|err| RescueError::OperationError(format!("CSPRNG failure: {err}")))?;
    Ok(bytes)
}

/// Returns a uniformly random integer in [0, bound) by rejection sampling over
/// `ceil(bit_length(bound) / 8)` bytes.
///
/// # Errors
/// Returns an error if the bound is zero or the CSPRNG fails.
pub fn random_value(bound: &U256) -> Result<U256, RescueError> {
    if bound.is_zero() {
        return Err(RescueError::InvalidInput(String::from("bound must be non-zero")));
    }

    let num_bytes = bound.bit_length().div_ceil(8);
    loop {
        let bytes = random_bytes(num_bytes)?;
        let value = U256::from_bytes_le(&bytes)?;
        if value < *bound {
            return Ok(value);
        }
    }
}

/// Returns a random field element: 32 CSPRNG bytes reduced modulo the field modulus.
///
/// # Errors
/// Returns an error if the CSPRNG fails.
pub fn random_element() -> Result<BaseElement, RescueError> {
    let bytes = random_bytes(BaseElement::ELEMENT_BYTES)?;
    Ok(BaseElement::from_bytes_le(&bytes)?)
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use math::U256;

    use super::{random_bytes, random_element, random_value};
    use crate::errors::RescueError;

    #[test]
    fn bytes() {
        let a = random_bytes(32).unwrap();
        let b = random_bytes(32).unwrap();
        assert_eq!(32, a.len());
        assert_ne!(a, b);

        assert!(random_bytes(0).unwrap().is_empty());
    }

    #[test]
    fn value_within_bound() {
        let bound = U256::from(1000u64);
        for _ in 0..20 {
            assert!(random_value(&bound).unwrap() < bound);
        }

        // a bound of one admits only zero
        assert_eq!(U256::ZERO, random_value(&U256::ONE).unwrap());

        assert!(matches!(random_value(&U256::ZERO), Err(RescueError::InvalidInput(_))));
    }

    #[test]
    fn element_is_canonical() {
        let a = random_element().unwrap();
        let b = random_element().unwrap();
        assert_ne!(a, b);
        assert!(a.as_int() < math::fields::f25519::BaseElement::MODULUS);
    }
}
