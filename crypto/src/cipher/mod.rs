// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The Rescue cipher in counter (CTR) mode.
//!
//! The cipher key is derived from a 32-byte shared secret with Rescue-Prime following NIST SP
//! 800-56C Option 1, and the keystream is produced by running the forward Rescue permutation
//! over counter blocks `(nonce, block_index, 0, ..., 0)`. Encryption adds the keystream to
//! the plaintext in the field; decryption subtracts it, so the mode is symmetric and only the
//! forward permutation is ever needed. Plaintext elements carry the canonical-range invariant
//! by construction, and byte inputs are reduced when elements are built from them, so the
//! stream loop itself performs no range checks.

use alloc::{string::String, vec::Vec};

use math::{fields::f25519::BaseElement, Matrix};

use crate::{
    errors::RescueError,
    hash::RescuePrime,
    random,
    rescue::RescueDesc,
};

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

/// Cipher block size: the state width of the cipher-mode permutation, in field elements.
pub const BLOCK_SIZE: usize = 5;

/// Nonce size in bytes.
pub const NONCE_SIZE: usize = 16;

/// Shared-secret size in bytes.
pub const SECRET_SIZE: usize = 32;

/// Serialized size of one ciphertext element, in bytes.
pub const ELEMENT_SIZE: usize = 32;

// RESCUE CIPHER
// ================================================================================================

/// A Rescue-CTR cipher instance wrapping a cipher-mode permutation descriptor.
///
/// Instances are immutable after construction and freely shareable across threads; the
/// key-derivation and key-schedule work happens once in [RescueCipher::new].
#[derive(Clone, Debug)]
pub struct RescueCipher {
    desc: RescueDesc,
}

impl RescueCipher {
    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------

    /// Builds a cipher from a 32-byte shared secret.
    ///
    /// The secret is deserialized as a little-endian field element Z, and the cipher key is
    /// the default Rescue-Prime digest of the vector `(1, Z, BLOCK_SIZE)` per NIST SP 800-56C
    /// Option 1 (counter, shared secret, fixed info).
    ///
    /// # Errors
    /// Returns an error if the secret is not exactly 32 bytes.
    pub fn new(shared_secret: &[u8]) -> Result<Self, RescueError> {
        let key = derive_key(shared_secret)?;
        Ok(RescueCipher { desc: RescueDesc::new_cipher(key)? })
    }

    // ENCRYPTION / DECRYPTION
    // --------------------------------------------------------------------------------------------

    /// Encrypts the plaintext under the specified 16-byte nonce, returning each ciphertext
    /// element serialized as 32 little-endian bytes.
    ///
    /// # Errors
    /// Returns an error if the nonce is not exactly 16 bytes.
    pub fn encrypt(
        &self,
        plaintext: &[BaseElement],
        nonce: &[u8],
    ) -> Result<Vec<[u8; ELEMENT_SIZE]>, RescueError> {
        let ciphertext = self.encrypt_raw(plaintext, nonce)?;
        Ok(ciphertext.iter().map(|element| element.to_bytes_le()).collect())
    }

    /// Decrypts ciphertext produced by [RescueCipher::encrypt] under the same nonce.
    ///
    /// # Errors
    /// Returns an error if the nonce is not exactly 16 bytes.
    pub fn decrypt(
        &self,
        ciphertext: &[[u8; ELEMENT_SIZE]],
        nonce: &[u8],
    ) -> Result<Vec<BaseElement>, RescueError> {
        let mut elements = Vec::with_capacity(ciphertext.len());
        for bytes in ciphertext {
            elements.push(BaseElement::from_bytes_le(bytes)?);
        }
        self.decrypt_raw(&elements, nonce)
    }

    /// Encrypts the plaintext under the specified 16-byte nonce, returning raw ciphertext
    /// elements.
    ///
    /// # Errors
    /// Returns an error if the nonce is not exactly 16 bytes.
    pub fn encrypt_raw(
        &self,
        plaintext: &[BaseElement],
        nonce: &[u8],
    ) -> Result<Vec<BaseElement>, RescueError> {
        self.apply_keystream(plaintext, nonce, |data, key| data + key)
    }

    /// Decrypts raw ciphertext elements under the specified 16-byte nonce.
    ///
    /// # Errors
    /// Returns an error if the nonce is not exactly 16 bytes.
    pub fn decrypt_raw(
        &self,
        ciphertext: &[BaseElement],
        nonce: &[u8],
    ) -> Result<Vec<BaseElement>, RescueError> {
        self.apply_keystream(ciphertext, nonce, |data, key| data - key)
    }

    // HELPER FUNCTIONS
    // --------------------------------------------------------------------------------------------

    /// Runs the CTR keystream over the data; `combine` is field addition for encryption and
    /// field subtraction for decryption, both constant-time.
    fn apply_keystream(
        &self,
        data: &[BaseElement],
        nonce: &[u8],
        combine: fn(BaseElement, BaseElement) -> BaseElement,
    ) -> Result<Vec<BaseElement>, RescueError> {
        let nonce = parse_nonce(nonce)?;
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let num_blocks = data.len().div_ceil(BLOCK_SIZE);
        let counter = generate_counter(nonce, num_blocks);

        let mut result = Vec::with_capacity(data.len());
        for (block_index, block) in data.chunks(BLOCK_SIZE).enumerate() {
            let offset = block_index * BLOCK_SIZE;
            let counter_block = Matrix::from_column(counter[offset..offset + BLOCK_SIZE].to_vec());

            // the keystream block is the permuted counter; the last data block may be short,
            // in which case the tail of the keystream is simply discarded
            let keystream = self.desc.permute(&counter_block)?.into_column_vec()?;
            for (&value, &key) in block.iter().zip(keystream.iter()) {
                result.push(combine(value, key));
            }
        }

        Ok(result)
    }
}

// KEY DERIVATION
// ================================================================================================

/// Derives the cipher key from a 32-byte shared secret via Rescue-Prime.
fn derive_key(shared_secret: &[u8]) -> Result<Vec<BaseElement>, RescueError> {
    if shared_secret.len() != SECRET_SIZE {
        return Err(RescueError::InvalidInput(format!(
            "shared secret must be {SECRET_SIZE} bytes, but received {}",
            shared_secret.len()
        )));
    }

    // counter || Z || FixedInfo; a single repetition suffices because the digest already
    // spans the full key
    let kdf_input = vec![
        BaseElement::ONE,
        BaseElement::from_bytes_le(shared_secret)?,
        BaseElement::from(BLOCK_SIZE as u64),
    ];

    let hasher = RescuePrime::new_default()?;
    hasher.digest(&kdf_input)
}

// COUNTER GENERATION
// ================================================================================================

/// Emits `num_blocks` counter blocks of the form (nonce, block_index, 0, ..., 0).
fn generate_counter(nonce: BaseElement, num_blocks: usize) -> Vec<BaseElement> {
    let mut counter = Vec::with_capacity(num_blocks * BLOCK_SIZE);
    for block_index in 0..num_blocks {
        counter.push(nonce);
        counter.push(BaseElement::from(block_index as u64));
        for _ in 2..BLOCK_SIZE {
            counter.push(BaseElement::ZERO);
        }
    }
    counter
}

/// Validates the nonce length and deserializes it as a little-endian field element.
fn parse_nonce(nonce: &[u8]) -> Result<BaseElement, RescueError> {
    if nonce.len() != NONCE_SIZE {
        return Err(RescueError::InvalidInput(format!(
            "nonce must be {NONCE_SIZE} bytes, but received {}",
            nonce.len()
        )));
    }
    Ok(BaseElement::from_bytes_le(nonce)?)
}

// NONCE GENERATION
// ================================================================================================

/// Generates a random 16-byte nonce from the OS CSPRNG.
///
/// # Errors
/// Returns an error if the CSPRNG fails; there is no fallback source.
pub fn generate_nonce() -> Result<[u8; NONCE_SIZE], RescueError> {
    let bytes = random::random_bytes(NONCE_SIZE)?;
    bytes.try_into().map_err(|_| {
        RescueError::OperationError(String::from("CSPRNG returned a malformed buffer"))
    })
}
