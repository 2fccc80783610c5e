// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use math::fields::f25519::BaseElement;
use rand_utils::{rand_value, rand_vector};

use super::{generate_nonce, RescueCipher, NONCE_SIZE, SECRET_SIZE};
use crate::errors::RescueError;

// CONSTRUCTION
// ================================================================================================

#[test]
fn construction() {
    let secret: [u8; SECRET_SIZE] = rand_value();
    assert!(RescueCipher::new(&secret).is_ok());

    // wrong secret sizes are rejected
    assert!(matches!(RescueCipher::new(&[0u8; 16]), Err(RescueError::InvalidInput(_))));
    assert!(matches!(RescueCipher::new(&[0u8; 64]), Err(RescueError::InvalidInput(_))));
}

// ROUND TRIPS
// ================================================================================================

#[test]
fn encrypt_decrypt_round_trip() {
    let secret: [u8; SECRET_SIZE] = rand_value();
    let nonce: [u8; NONCE_SIZE] = rand_value();
    let cipher = RescueCipher::new(&secret).unwrap();

    let plaintext = vec![
        BaseElement::from(42u8),
        BaseElement::from(1337u16),
        BaseElement::from(0xdeadbeefu32),
    ];

    let ciphertext = cipher.encrypt(&plaintext, &nonce).unwrap();
    assert_eq!(plaintext.len(), ciphertext.len());

    let decrypted = cipher.decrypt(&ciphertext, &nonce).unwrap();
    assert_eq!(plaintext, decrypted);
}

#[test]
fn raw_round_trip() {
    let secret: [u8; SECRET_SIZE] = rand_value();
    let nonce: [u8; NONCE_SIZE] = rand_value();
    let cipher = RescueCipher::new(&secret).unwrap();

    let plaintext: Vec<BaseElement> = rand_vector(4);
    let ciphertext = cipher.encrypt_raw(&plaintext, &nonce).unwrap();

    // the keystream must actually mask the plaintext
    assert_ne!(plaintext, ciphertext);
    assert_eq!(plaintext, cipher.decrypt_raw(&ciphertext, &nonce).unwrap());
}

#[test]
fn multi_block_round_trip() {
    let secret: [u8; SECRET_SIZE] = rand_value();
    let nonce: [u8; NONCE_SIZE] = rand_value();
    let cipher = RescueCipher::new(&secret).unwrap();

    // 17 elements span four blocks with a short tail; also check the exact-fit cases
    for len in [17, 5, 10, 1] {
        let plaintext: Vec<BaseElement> = rand_vector(len);
        let ciphertext = cipher.encrypt(&plaintext, &nonce).unwrap();
        assert_eq!(len, ciphertext.len());
        assert_eq!(plaintext, cipher.decrypt(&ciphertext, &nonce).unwrap());
    }
}

#[test]
fn empty_plaintext() {
    let secret: [u8; SECRET_SIZE] = rand_value();
    let nonce: [u8; NONCE_SIZE] = rand_value();
    let cipher = RescueCipher::new(&secret).unwrap();

    assert!(cipher.encrypt(&[], &nonce).unwrap().is_empty());
    assert!(cipher.decrypt(&[], &nonce).unwrap().is_empty());
}

// DETERMINISM / INTEROP
// ================================================================================================

#[test]
fn fixed_secret_round_trip() {
    // secret bytes 00..1f, all-zero nonce, plaintext [1]
    let secret: Vec<u8> = (0u8..32).collect();
    let nonce = [0u8; NONCE_SIZE];
    let cipher = RescueCipher::new(&secret).unwrap();

    let plaintext = vec![BaseElement::ONE];
    let ciphertext = cipher.encrypt(&plaintext, &nonce).unwrap();
    assert_eq!(1, ciphertext.len());
    assert_eq!(plaintext, cipher.decrypt(&ciphertext, &nonce).unwrap());

    // conformance value pinned by an independent implementation of the same construction;
    // it exercises the KDF, the key schedule, and the keystream in one shot
    let expected: [u8; 32] = [
        0xdf, 0xb1, 0xf4, 0xca, 0xa6, 0x7b, 0xd7, 0xad, 0x6b, 0x84, 0xfa, 0xdf, 0x52, 0x32,
        0x2d, 0xaf, 0xc8, 0x3f, 0xf9, 0xc6, 0xf5, 0xf0, 0x2b, 0xed, 0x77, 0x7d, 0xae, 0x1d,
        0xed, 0x6b, 0xd3, 0x0b,
    ];
    assert_eq!(expected, ciphertext[0]);

    // the same (secret, nonce, plaintext) tuple must always produce the same ciphertext,
    // including across independently constructed cipher instances
    assert_eq!(ciphertext, cipher.encrypt(&plaintext, &nonce).unwrap());
    let other = RescueCipher::new(&secret).unwrap();
    assert_eq!(ciphertext, other.encrypt(&plaintext, &nonce).unwrap());
}

#[test]
fn nonce_sensitivity() {
    let secret: [u8; SECRET_SIZE] = rand_value();
    let cipher = RescueCipher::new(&secret).unwrap();
    let plaintext: Vec<BaseElement> = rand_vector(5);

    let mut nonce2 = [0u8; NONCE_SIZE];
    nonce2[0] = 1;
    let c1 = cipher.encrypt_raw(&plaintext, &[0u8; NONCE_SIZE]).unwrap();
    let c2 = cipher.encrypt_raw(&plaintext, &nonce2).unwrap();

    // a different nonce re-keys the whole stream
    for (e1, e2) in c1.iter().zip(c2.iter()) {
        assert_ne!(e1, e2);
    }

    // decrypting under the wrong nonce does not recover the plaintext
    assert_ne!(plaintext, cipher.decrypt_raw(&c1, &nonce2).unwrap());
}

#[test]
fn distinct_secrets_disagree() {
    let nonce: [u8; NONCE_SIZE] = rand_value();
    let plaintext: Vec<BaseElement> = rand_vector(3);

    let secret1 = [0x11u8; SECRET_SIZE];
    let secret2 = [0x22u8; SECRET_SIZE];
    let c1 = RescueCipher::new(&secret1).unwrap().encrypt_raw(&plaintext, &nonce).unwrap();
    let c2 = RescueCipher::new(&secret2).unwrap().encrypt_raw(&plaintext, &nonce).unwrap();
    assert_ne!(c1, c2);
}

// INPUT VALIDATION
// ================================================================================================

#[test]
fn nonce_length_is_checked() {
    let secret: [u8; SECRET_SIZE] = rand_value();
    let cipher = RescueCipher::new(&secret).unwrap();
    let plaintext = vec![BaseElement::ONE];

    assert!(matches!(
        cipher.encrypt(&plaintext, &[0u8; 8]),
        Err(RescueError::InvalidInput(_))
    ));
    assert!(matches!(
        cipher.decrypt_raw(&plaintext, &[0u8; 24]),
        Err(RescueError::InvalidInput(_))
    ));
}

#[test]
fn ciphertext_elements_are_canonical() {
    let secret: [u8; SECRET_SIZE] = rand_value();
    let nonce: [u8; NONCE_SIZE] = rand_value();
    let cipher = RescueCipher::new(&secret).unwrap();

    let ciphertext = cipher.encrypt(&rand_vector(7), &nonce).unwrap();
    for bytes in &ciphertext {
        // producers always emit canonical encodings, so decoding is lossless
        let element = BaseElement::from_bytes_le(bytes).unwrap();
        assert_eq!(*bytes, element.to_bytes_le());
    }
}

// NONCE GENERATION
// ================================================================================================

#[test]
fn nonce_generation() {
    let a = generate_nonce().unwrap();
    let b = generate_nonce().unwrap();
    assert_eq!(NONCE_SIZE, a.len());
    assert_ne!(a, b);
}
