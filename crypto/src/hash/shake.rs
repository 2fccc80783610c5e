// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! SHAKE256 and SHA-256 adapters.
//!
//! These wrap the RustCrypto implementations and exist only to seed Rescue round constants;
//! no other part of the suite depends on them. The [Shake256] wrapper is deliberately
//! absorb-then-squeeze-once: the round-constant sampler knows its total byte budget up front,
//! so incremental squeezing is not supported and a second squeeze is an error.

use alloc::{string::String, vec::Vec};

use sha2::Digest;
use sha3::digest::{ExtendableOutput, Update, XofReader};

use crate::errors::RescueError;

// SHAKE256 XOF
// ================================================================================================

/// A SHAKE256 extendable-output function with one-shot squeezing.
///
/// Data may be absorbed incrementally via [Shake256::update]; the first call to
/// [Shake256::squeeze] finalizes the state and consumes it. Any update or squeeze after that
/// point fails with an [RescueError::OperationError].
pub struct Shake256 {
    hasher: Option<sha3::Shake256>,
}

impl Shake256 {
    /// Returns a new SHAKE256 hasher with an empty state.
    pub fn new() -> Self {
        Shake256 { hasher: Some(sha3::Shake256::default()) }
    }

    /// Absorbs data into the hasher state.
    ///
    /// # Errors
    /// Returns an error if output has already been squeezed.
    pub fn update(&mut self, data: &[u8]) -> Result<(), RescueError> {
        match self.hasher.as_mut() {
            Some(hasher) => {
                hasher.update(data);
                Ok(())
            }
            None => Err(RescueError::OperationError(String::from(
                "cannot absorb data after output has been squeezed",
            ))),
        }
    }

    /// Squeezes `num_bytes` bytes of output, finalizing the absorb phase.
    ///
    /// # Errors
    /// Returns an error if output has already been squeezed; the total byte budget must be
    /// requested in a single call.
    pub fn squeeze(&mut self, num_bytes: usize) -> Result<Vec<u8>, RescueError> {
        match self.hasher.take() {
            Some(hasher) => {
                let mut result = vec![0u8; num_bytes];
                hasher.finalize_xof().read(&mut result);
                Ok(result)
            }
            None => Err(RescueError::OperationError(String::from(
                "output has already been squeezed",
            ))),
        }
    }
}

impl Default for Shake256 {
    fn default() -> Self {
        Self::new()
    }
}

// ONE-SHOT HELPERS
// ================================================================================================

/// Computes `num_bytes` bytes of SHAKE256 output for the specified data.
pub fn shake256(data: &[u8], num_bytes: usize) -> Vec<u8> {
    let mut hasher = sha3::Shake256::default();
    hasher.update(data);

    let mut result = vec![0u8; num_bytes];
    hasher.finalize_xof().read(&mut result);
    result
}

/// Computes the SHA-256 digest of the specified data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    sha2::Sha256::digest(data).into()
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::{sha256, shake256, Shake256};
    use crate::errors::RescueError;

    #[test]
    fn shake256_empty_input() {
        // FIPS 202 known-answer: first 32 bytes of SHAKE256("")
        let expected = [
            0x46, 0xb9, 0xdd, 0x2b, 0x0b, 0xa8, 0x8d, 0x13, 0x23, 0x3b, 0x3f, 0xeb, 0x74, 0x3e,
            0xeb, 0x24, 0x3f, 0xcd, 0x52, 0xea, 0x62, 0xb8, 0x1b, 0x82, 0xb5, 0x0c, 0x27, 0x64,
            0x6e, 0xd5, 0x76, 0x2f,
        ];
        assert_eq!(expected.to_vec(), shake256(b"", 32));
    }

    #[test]
    fn shake256_output_lengths() {
        let short = shake256(b"data", 16);
        let long = shake256(b"data", 64);
        assert_eq!(16, short.len());
        assert_eq!(64, long.len());

        // an XOF's shorter output is a prefix of its longer output
        assert_eq!(short, long[..16]);
    }

    #[test]
    fn incremental_absorb() {
        let mut hasher = Shake256::new();
        hasher.update(b"encrypt everything, ").unwrap();
        hasher.update(b"compute anything").unwrap();
        let incremental = hasher.squeeze(48).unwrap();

        assert_eq!(shake256(b"encrypt everything, compute anything", 48), incremental);
    }

    #[test]
    fn one_shot_squeeze() {
        let mut hasher = Shake256::new();
        hasher.update(b"data").unwrap();
        hasher.squeeze(32).unwrap();

        // neither a second squeeze nor a late absorb is allowed
        assert!(matches!(hasher.squeeze(32), Err(RescueError::OperationError(_))));
        assert!(matches!(hasher.update(b"more"), Err(RescueError::OperationError(_))));
    }

    #[test]
    fn sha256_known_answers() {
        // FIPS 180-4 known-answer: SHA-256("abc")
        let expected = [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ];
        assert_eq!(expected, sha256(b"abc"));

        // SHA-256 of the empty string
        let expected = [
            0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f,
            0xb9, 0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b,
            0x78, 0x52, 0xb8, 0x55,
        ];
        assert_eq!(expected, sha256(b""));
    }
}
