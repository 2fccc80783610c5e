// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::{string::ToString, vec::Vec};

use num_bigint::BigUint;
use rand_utils::{rand_value, rand_vector};

use super::{mul_wide, sqr_wide, U256, U512};
use crate::MathError;

// BASIC ARITHMETIC
// ================================================================================================

#[test]
fn add_with_carry() {
    let (sum, carry) = U256::add_with_carry(&U256::from(2u64), &U256::from(3u64));
    assert_eq!(U256::from(5u64), sum);
    assert!(!carry);

    // carry propagation across all limbs
    let (sum, carry) = U256::add_with_carry(&U256::MAX, &U256::ONE);
    assert_eq!(U256::ZERO, sum);
    assert!(carry);

    let a = U256::new([u64::MAX, u64::MAX, 0, 0]);
    let (sum, carry) = U256::add_with_carry(&a, &U256::ONE);
    assert_eq!(U256::new([0, 0, 1, 0]), sum);
    assert!(!carry);
}

#[test]
fn sub_with_borrow() {
    let (diff, borrow) = U256::sub_with_borrow(&U256::from(5u64), &U256::from(3u64));
    assert_eq!(U256::from(2u64), diff);
    assert!(!borrow);

    // borrow propagation across all limbs
    let (diff, borrow) = U256::sub_with_borrow(&U256::ZERO, &U256::ONE);
    assert_eq!(U256::MAX, diff);
    assert!(borrow);

    let a = U256::new([0, 0, 1, 0]);
    let (diff, borrow) = U256::sub_with_borrow(&a, &U256::ONE);
    assert_eq!(U256::new([u64::MAX, u64::MAX, 0, 0]), diff);
    assert!(!borrow);
}

#[test]
fn add_sub_round_trip() {
    let a: U256 = rand_value();
    let b: U256 = rand_value();
    assert_eq!(a, (a + b) - b);
}

#[test]
fn ordering() {
    assert!(U256::ZERO < U256::ONE);
    assert!(U256::ONE < U256::MAX);
    assert!(U256::new([0, 1, 0, 0]) > U256::new([u64::MAX, 0, 0, 0]));
    assert!(U256::new([0, 0, 0, 1]) > U256::new([u64::MAX, u64::MAX, u64::MAX, 0]));
    assert_eq!(U256::from(7u64), U256::from(7u64));
}

#[test]
fn div_rem_u64() {
    let (quotient, rem) = U256::from(17u64).div_rem_u64(5);
    assert_eq!(U256::from(3u64), quotient);
    assert_eq!(2, rem);

    let a: U256 = rand_value();
    let (quotient, rem) = a.div_rem_u64(1_000_003);
    let expected = a.to_big_uint();
    let q = quotient.to_big_uint();
    assert_eq!(expected, q * 1_000_003u64 + rem);
}

// BIT OPERATIONS
// ================================================================================================

#[test]
fn bit_access() {
    let mut a = U256::ZERO;
    assert_eq!(0, a.bit_length());

    a.set_bit(0);
    a.set_bit(64);
    a.set_bit(255);
    assert!(a.bit(0));
    assert!(a.bit(64));
    assert!(a.bit(255));
    assert!(!a.bit(1));
    assert!(!a.bit(300));
    assert_eq!(256, a.bit_length());

    a.clear_bit(255);
    assert!(!a.bit(255));
    assert_eq!(65, a.bit_length());
}

#[test]
fn shifts() {
    let a = U256::ONE;
    assert_eq!(U256::new([0, 1, 0, 0]), a << 64);
    assert_eq!(U256::new([0, 0, 0, 1 << 63]), a << 255);
    assert_eq!(U256::ZERO, a << 256);

    let a = U256::new([0, 0, 0, 1 << 63]);
    assert_eq!(U256::ONE, a >> 255);
    assert_eq!(U256::ZERO, a >> 256);

    // shifted bits crossing limb boundaries
    let a: U256 = rand_value();
    for shift in [1u32, 13, 64, 65, 127, 192, 250] {
        let expected = (a.to_big_uint() << shift) % (BigUint::from(1u32) << 256);
        assert_eq!(expected, (a << shift).to_big_uint());

        let expected = a.to_big_uint() >> shift;
        assert_eq!(expected, (a >> shift).to_big_uint());
    }
}

#[test]
fn bitwise_ops() {
    let a: U256 = rand_value();
    let b: U256 = rand_value();
    assert_eq!(a.to_big_uint() & b.to_big_uint(), (a & b).to_big_uint());
    assert_eq!(a.to_big_uint() | b.to_big_uint(), (a | b).to_big_uint());
    assert_eq!(a.to_big_uint() ^ b.to_big_uint(), (a ^ b).to_big_uint());
    assert_eq!(a, !!a);
}

// WIDE MULTIPLICATION
// ================================================================================================

#[test]
fn mul_wide_against_oracle() {
    let v1: Vec<U256> = rand_vector(100);
    let v2: Vec<U256> = rand_vector(100);
    for (a, b) in v1.into_iter().zip(v2) {
        let expected = a.to_big_uint() * b.to_big_uint();
        assert_eq!(expected, mul_wide(&a, &b).to_big_uint());
    }
}

#[test]
fn sqr_wide_against_oracle() {
    // squaring must agree with the general product for edge values and random values
    for a in [U256::ZERO, U256::ONE, U256::MAX, U256::new([u64::MAX, 0, u64::MAX, 0])] {
        assert_eq!(mul_wide(&a, &a), sqr_wide(&a));
    }

    let values: Vec<U256> = rand_vector(100);
    for a in values {
        let expected = a.to_big_uint() * a.to_big_uint();
        assert_eq!(expected, sqr_wide(&a).to_big_uint());
    }
}

#[test]
fn u512_helpers() {
    let a = U512::from(U256::from(1_000_000_007u64));
    let b = a.mul_u64(1_000_000_009);
    let (quotient, rem) = b.div_rem_u64(1_000_000_009);
    assert_eq!(a, quotient);
    assert_eq!(0, rem);

    let (quotient, rem) = b.div_rem_u64(10);
    assert_eq!(3, rem); // 1000000007 * 1000000009 ends in 63
    assert!(quotient < b);

    assert!(U512::ZERO < U512::ONE);
    assert_eq!(U256::ZERO, U512::from(U256::MAX).high());
    assert_eq!(U256::MAX, U512::from(U256::MAX).low());
}

// SERIALIZATION / FORMATTING
// ================================================================================================

#[test]
fn byte_round_trip() {
    let a: U256 = rand_value();
    assert_eq!(a, U256::from_le_bytes(a.to_bytes_le()));
    assert_eq!(a, U256::from_bytes_le(&a.to_bytes_le()).unwrap());

    // short input zero-pads the high bytes
    assert_eq!(U256::from(0x0302_0100u64), U256::from_bytes_le(&[0, 1, 2, 3]).unwrap());

    // more than 32 bytes is rejected
    assert!(matches!(U256::from_bytes_le(&[0u8; 33]), Err(MathError::InvalidInput(_))));
}

#[test]
fn serialize_le() {
    let a = U256::from(0xaabbu64);
    assert_eq!(vec![0xbb, 0xaa, 0, 0], a.serialize_le(4).unwrap());
    assert_eq!(vec![0xbb, 0xaa], a.serialize_le(2).unwrap());
    assert_eq!(Err(MathError::Overflow(1)), a.serialize_le(1));

    // widths beyond 32 bytes pad with zeros
    let bytes = a.serialize_le(48).unwrap();
    assert_eq!(48, bytes.len());
    assert_eq!(0xbb, bytes[0]);
    assert!(bytes[2..].iter().all(|&b| b == 0));
}

#[test]
fn hex_round_trip() {
    let a: U256 = rand_value();
    let hex = format!("{a:#x}");
    assert_eq!(a, U256::from_hex(&hex).unwrap());
    assert_eq!(a, U256::from_hex(hex.trim_start_matches("0x")).unwrap());

    assert_eq!(U256::from(0xdeadbeefu64), U256::from_hex("0xDEADBEEF").unwrap());
    assert!(matches!(U256::from_hex(""), Err(MathError::InvalidInput(_))));
    assert!(matches!(U256::from_hex("0xzz"), Err(MathError::InvalidInput(_))));
}

#[test]
fn decimal_display() {
    assert_eq!("0", U256::ZERO.to_string());
    assert_eq!("1234567890123456789", U256::from(1234567890123456789u64).to_string());

    let a: U256 = rand_value();
    assert_eq!(a.to_big_uint().to_string(), a.to_string());
}

// HELPER FUNCTIONS
// ================================================================================================

impl U256 {
    pub fn to_big_uint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_bytes_le())
    }
}

impl U512 {
    pub fn to_big_uint(&self) -> BigUint {
        let mut bytes = Vec::with_capacity(64);
        for i in 0..8 {
            bytes.extend_from_slice(&self.limb(i).to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }
}
