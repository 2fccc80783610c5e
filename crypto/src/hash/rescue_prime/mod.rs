// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The Rescue-Prime sponge hash.
//!
//! Implementation of Algorithm 1 from <https://eprint.iacr.org/2020/1143.pdf> with the
//! padding of Algorithm 2: the message is extended with a single one element followed by
//! zeros up to a multiple of the rate, so inputs which differ only in trailing zeros hash
//! differently. The default parameters (rate 7, capacity 5, state width 12) target 256-bit
//! security against collision, preimage, and second-preimage attacks.

use alloc::{string::String, vec::Vec};

use math::{fields::f25519::BaseElement, Matrix};

use crate::{errors::RescueError, rescue::RescueDesc};

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

/// Default absorption rate: elements absorbed per permutation call.
pub const HASH_RATE: usize = 7;

/// Default capacity: state elements never exposed to the caller.
pub const HASH_CAPACITY: usize = 5;

/// Default state width (rate + capacity).
pub const HASH_STATE_WIDTH: usize = HASH_RATE + HASH_CAPACITY;

/// Default digest length in field elements.
pub const DIGEST_LENGTH: usize = 5;

// RESCUE-PRIME HASH
// ================================================================================================

/// A Rescue-Prime hash instance wrapping a hash-mode permutation descriptor.
///
/// Instances are immutable and freely shareable; [RescuePrime::digest] is a pure function of
/// the message.
#[derive(Clone, Debug)]
pub struct RescuePrime {
    rate: usize,
    capacity: usize,
    digest_length: usize,
    desc: RescueDesc,
}

impl RescuePrime {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a hasher with the default parameters: rate 7, capacity 5, digest length 5.
    pub fn new_default() -> Result<Self, RescueError> {
        Self::new(HASH_RATE, HASH_CAPACITY, DIGEST_LENGTH)
    }

    /// Returns a hasher with the specified parameters.
    ///
    /// # Errors
    /// Returns an error if the rate, capacity, or digest length is zero, or if the digest
    /// length exceeds the state width (rate + capacity).
    pub fn new(rate: usize, capacity: usize, digest_length: usize) -> Result<Self, RescueError> {
        if rate == 0 {
            return Err(RescueError::InvalidInput(String::from("rate must be positive")));
        }
        if capacity == 0 {
            return Err(RescueError::InvalidInput(String::from("capacity must be positive")));
        }
        if digest_length == 0 {
            return Err(RescueError::InvalidInput(String::from(
                "digest length must be positive",
            )));
        }
        if digest_length > rate + capacity {
            return Err(RescueError::InvalidInput(format!(
                "digest length cannot exceed the state width, but received digest length \
                 {digest_length} for state width {}",
                rate + capacity
            )));
        }

        let desc = RescueDesc::new_hash(rate + capacity, capacity)?;
        Ok(RescuePrime { rate, capacity, digest_length, desc })
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the absorption rate.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Returns the capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the digest length in field elements.
    pub fn digest_length(&self) -> usize {
        self.digest_length
    }

    /// Returns the state width (rate + capacity).
    pub fn state_width(&self) -> usize {
        self.desc.state_width()
    }

    /// Returns the underlying permutation descriptor.
    pub fn descriptor(&self) -> &RescueDesc {
        &self.desc
    }

    // HASHING
    // --------------------------------------------------------------------------------------------

    /// Returns the hash of the provided message.
    ///
    /// The message is padded with a one element and zeros to a multiple of the rate, absorbed
    /// block by block into the rate portion of an all-zero state (constant-time field
    /// addition), with one permutation per block; the first `digest_length` state elements
    /// are the digest.
    pub fn digest(&self, message: &[BaseElement]) -> Result<Vec<BaseElement>, RescueError> {
        let m = self.desc.state_width();

        let mut padded = message.to_vec();
        padded.push(BaseElement::ONE);
        while padded.len() % self.rate != 0 {
            padded.push(BaseElement::ZERO);
        }

        let mut state = Matrix::from_column(vec![BaseElement::ZERO; m]);

        for block in padded.chunks(self.rate) {
            let mut absorb = Vec::with_capacity(m);
            absorb.extend_from_slice(block);
            absorb.resize(m, BaseElement::ZERO);

            state = self.desc.permute(&state.add(&Matrix::from_column(absorb))?)?;
        }

        let mut state = state.into_column_vec()?;
        state.truncate(self.digest_length);
        Ok(state)
    }
}
