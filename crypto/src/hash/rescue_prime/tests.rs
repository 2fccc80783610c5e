// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use math::fields::f25519::BaseElement;
use rand_utils::rand_vector;

use super::{RescuePrime, DIGEST_LENGTH, HASH_CAPACITY, HASH_RATE};
use crate::errors::RescueError;

// CONSTRUCTION
// ================================================================================================

#[test]
fn construction() {
    let hasher = RescuePrime::new_default().unwrap();
    assert_eq!(HASH_RATE, hasher.rate());
    assert_eq!(HASH_CAPACITY, hasher.capacity());
    assert_eq!(DIGEST_LENGTH, hasher.digest_length());
    assert_eq!(HASH_RATE + HASH_CAPACITY, hasher.state_width());

    let custom = RescuePrime::new(5, 3, 3).unwrap();
    assert_eq!(5, custom.rate());
    assert_eq!(3, custom.capacity());
    assert_eq!(3, custom.digest_length());
    assert_eq!(8, custom.state_width());
}

#[test]
fn invalid_parameters() {
    assert!(matches!(RescuePrime::new(0, 5, 5), Err(RescueError::InvalidInput(_))));
    assert!(matches!(RescuePrime::new(7, 0, 5), Err(RescueError::InvalidInput(_))));
    assert!(matches!(RescuePrime::new(7, 5, 0), Err(RescueError::InvalidInput(_))));

    // digest length beyond the state width
    assert!(matches!(RescuePrime::new(7, 5, 13), Err(RescueError::InvalidInput(_))));
}

// HASHING
// ================================================================================================

#[test]
fn digest_length_and_range() {
    let hasher = RescuePrime::new_default().unwrap();
    let message: Vec<BaseElement> = rand_vector(10);

    let digest = hasher.digest(&message).unwrap();
    assert_eq!(DIGEST_LENGTH, digest.len());

    // digest elements are canonical and round-trip through their encoding
    for element in digest {
        let bytes = element.to_bytes_le();
        assert_eq!(element, BaseElement::from_bytes_le(&bytes).unwrap());
    }
}

#[test]
fn determinism() {
    let hasher = RescuePrime::new_default().unwrap();
    let message: Vec<BaseElement> = rand_vector(9);

    let digest1 = hasher.digest(&message).unwrap();
    let digest2 = hasher.digest(&message).unwrap();
    assert_eq!(digest1, digest2);

    // a second independently-built hasher must agree
    let other = RescuePrime::new_default().unwrap();
    assert_eq!(digest1, other.digest(&message).unwrap());
}

#[test]
fn reference_digest() {
    // digest of (1, 2, 3) under the default parameters; the value is pinned by an
    // independent implementation of the same construction and guards the whole chain:
    // seed string, wide reduction, round count, MDS, and sponge padding
    let hasher = RescuePrime::new_default().unwrap();
    let digest =
        hasher.digest(&[BaseElement::from(1u8), BaseElement::from(2u8), BaseElement::from(3u8)]);

    let expected = vec![
        BaseElement::from_raw_unchecked([
            0x48e4ba2bfaaf5c4f,
            0x19b0c3894f130a68,
            0x339678064dc3cbcd,
            0x51568e9f382855c5,
        ]),
        BaseElement::from_raw_unchecked([
            0x0ed2ee0fd1c3b0d9,
            0x4aa300c37c416d78,
            0x909068239e5588e3,
            0x0cf03676a21b52b7,
        ]),
        BaseElement::from_raw_unchecked([
            0xb83316e9ab391b50,
            0xe97cbc3593a5769e,
            0xbf94a2527fcc6764,
            0x0d30f4fedc4a4690,
        ]),
        BaseElement::from_raw_unchecked([
            0x8ca44c52173cbed7,
            0x27381de3dfbaa1c8,
            0x97f52f4f0da92fef,
            0x6ba6b6e2675a60c6,
        ]),
        BaseElement::from_raw_unchecked([
            0x2a6c18f75bd463de,
            0xecd6f8c92e9a06a5,
            0x7f5dbd435b962489,
            0x0630e27dded2c735,
        ]),
    ];
    assert_eq!(expected, digest.unwrap());
}

#[test]
fn distinct_messages() {
    let hasher = RescuePrime::new_default().unwrap();

    let m1 = [BaseElement::from(1u8), BaseElement::from(2u8), BaseElement::from(3u8)];
    let m2 = [BaseElement::from(1u8), BaseElement::from(2u8), BaseElement::from(4u8)];
    assert_ne!(hasher.digest(&m1).unwrap(), hasher.digest(&m2).unwrap());
}

#[test]
fn padding_separates_trailing_zeros() {
    let hasher = RescuePrime::new_default().unwrap();

    let m1 = [BaseElement::from(1u8), BaseElement::from(2u8)];
    let m2 = [BaseElement::from(1u8), BaseElement::from(2u8), BaseElement::ZERO];
    assert_ne!(hasher.digest(&m1).unwrap(), hasher.digest(&m2).unwrap());

    // the empty message hashes to something well-defined
    let empty = hasher.digest(&[]).unwrap();
    assert_eq!(DIGEST_LENGTH, empty.len());
    assert_ne!(empty, hasher.digest(&[BaseElement::ZERO]).unwrap());
}

#[test]
fn rate_boundary() {
    let hasher = RescuePrime::new_default().unwrap();

    // one element short of the rate, exactly the rate, and one element over
    for len in [HASH_RATE - 1, HASH_RATE, HASH_RATE + 1, 3 * HASH_RATE] {
        let message: Vec<BaseElement> = rand_vector(len);
        let digest = hasher.digest(&message).unwrap();
        assert_eq!(DIGEST_LENGTH, digest.len());
    }
}

#[test]
fn avalanche() {
    let hasher = RescuePrime::new_default().unwrap();

    let message: Vec<BaseElement> = rand_vector(6);
    let digest = hasher.digest(&message).unwrap();

    // flipping a single bit of a single input element must change the digest
    let mut bytes = message[3].to_bytes_le();
    bytes[0] ^= 1;
    let mut tweaked = message.clone();
    tweaked[3] = BaseElement::from_bytes_le(&bytes).unwrap();

    let tweaked_digest = hasher.digest(&tweaked).unwrap();
    assert_ne!(digest, tweaked_digest);
}

#[test]
fn custom_parameters_hash() {
    let hasher = RescuePrime::new(4, 2, 6).unwrap();
    let message: Vec<BaseElement> = rand_vector(5);

    let digest = hasher.digest(&message).unwrap();
    assert_eq!(6, digest.len());
    assert_eq!(digest, hasher.digest(&message).unwrap());
}
