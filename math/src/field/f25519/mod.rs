// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of the Curve25519 base field with modulus $p = 2^{255} - 19$.
//!
//! Elements are stored in canonical form in the range [0, p) on top of [U256]. Reduction
//! exploits the special structure of the prime: $2^{255} \equiv 19 \pmod p$ and therefore
//! $2^{256} \equiv 38 \pmod p$, so a 512-bit product folds into `low + 38 * high` followed by
//! at most two conditional subtractions of p.
//!
//! All operations which may touch secret material (addition, subtraction, negation,
//! multiplication, squaring, exponentiation, inversion, equality) execute without
//! data-dependent branches or memory accesses: every conditional step computes both outcomes
//! and combines them with a mask derived from the condition. Ordering comparisons are the one
//! exception; they operate on canonical values and may leak, so they must only be used on
//! public data.

use alloc::string::String;
use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use utils::{
    ByteReader, ByteWriter, Deserializable, DeserializationError, Randomizable, Serializable,
};

use crate::{bigint, MathError, U256, U512};


// CONSTANTS
// ================================================================================================

// Field modulus p = 2^255 - 19
const M: U256 = U256::new([
    0xffffffffffffffed,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x7fffffffffffffff,
]);

// Number of bytes needed to represent a field element
const ELEMENT_BYTES: usize = 32;

// Number of bytes in a wide (uniformity-margin) encoding of a field element
const WIDE_ELEMENT_BYTES: usize = 48;

// FIELD ELEMENT
// ================================================================================================

/// Represents a base field element.
///
/// Internal values are stored in their canonical form in the range [0, M). The backing type is
/// [U256].
#[derive(Copy, Clone, Debug, Default, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BaseElement(U256);

impl BaseElement {
    /// The additive identity.
    pub const ZERO: Self = Self(U256::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = Self(U256::ONE);

    /// Field modulus p = 2^255 - 19.
    pub const MODULUS: U256 = M;

    /// Number of bits needed to represent the field modulus.
    pub const MODULUS_BITS: u32 = 255;

    /// Number of bytes in the canonical encoding of a field element.
    pub const ELEMENT_BYTES: usize = ELEMENT_BYTES;

    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates a new field element from a [U256] value, reducing it modulo the field modulus.
    pub fn new(value: U256) -> Self {
        Self(reduce_full(&value))
    }

    /// Creates a field element from four little-endian limbs without reduction.
    ///
    /// The caller must guarantee that the value is already in canonical form; this constructor
    /// exists so that precomputed tables can be emitted as compile-time constants.
    pub const fn from_raw_unchecked(limbs: [u64; 4]) -> Self {
        Self(U256::new(limbs))
    }

    /// Parses a field element from a hexadecimal string with an optional `0x` prefix, reducing
    /// the value modulo the field modulus.
    pub fn from_hex(hex: &str) -> Result<Self, MathError> {
        Ok(Self::new(U256::from_hex(hex)?))
    }

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns this element added to itself.
    pub fn double(self) -> Self {
        self + self
    }

    /// Returns this element raised to power 2.
    pub fn square(self) -> Self {
        Self(sqr(&self.0))
    }

    /// Returns this element raised to power 5.
    ///
    /// This is the Rescue S-box hot path: two squarings and one multiplication instead of a
    /// full exponentiation ladder.
    pub fn pow5(self) -> Self {
        let a2 = sqr(&self.0);
        let a4 = sqr(&a2);
        Self(mul(&a4, &self.0))
    }

    /// Returns this element raised to the specified 256-bit power.
    ///
    /// Runs a Montgomery ladder over all 255 exponent bits: every iteration computes the same
    /// three products and selects two of them with a mask derived from the current bit, so
    /// execution time is independent of the exponent value.
    pub fn exp(self, power: &U256) -> Self {
        let mut r0 = Self::ONE;
        let mut r1 = self;

        // values are smaller than p, so bit 255 is never set
        for i in (0..255).rev() {
            let bit = power.bit(i);

            let r0r1 = Self(mul(&r0.0, &r1.0));
            let r0_sqr = Self(sqr(&r0.0));
            let r1_sqr = Self(sqr(&r1.0));

            // bit = 0: r0 <- r0^2,    r1 <- r0 * r1
            // bit = 1: r0 <- r0 * r1, r1 <- r1^2
            r0 = ct_select(bit, r0r1, r0_sqr);
            r1 = ct_select(bit, r1_sqr, r0r1);
        }

        r0
    }

    /// Returns this element raised to the specified 64-bit power, using the same constant-time
    /// ladder as [BaseElement::exp] over 64 bits.
    pub fn exp_u64(self, power: u64) -> Self {
        let mut r0 = Self::ONE;
        let mut r1 = self;

        for i in (0..64).rev() {
            let bit = (power >> i) & 1 == 1;

            let r0r1 = Self(mul(&r0.0, &r1.0));
            let r0_sqr = Self(sqr(&r0.0));
            let r1_sqr = Self(sqr(&r1.0));

            r0 = ct_select(bit, r0r1, r0_sqr);
            r1 = ct_select(bit, r1_sqr, r0r1);
        }

        r0
    }

    /// Returns the multiplicative inverse of this element, computed as a^(p - 2) via an
    /// explicit addition chain.
    ///
    /// The chain builds a^(2^n - 1) for n in {2, 4, 5, 10, 20, 40, 50, 100, 200, 250}; five
    /// squarings of a^(2^250 - 1) give a^(2^255 - 32), and multiplying by a^11 yields
    /// a^(2^255 - 21) = a^(p - 2).
    ///
    /// # Errors
    /// Returns an error if this element is zero.
    pub fn inv(self) -> Result<Self, MathError> {
        if self == Self::ZERO {
            return Err(MathError::InvalidInput(String::from(
                "cannot invert the zero element",
            )));
        }
        Ok(Self(inv(&self.0)))
    }

    // VALUE ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the canonical integer representation of this element.
    pub const fn as_int(&self) -> U256 {
        self.0
    }

    /// Returns true if this element is zero.
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if this element is one.
    pub const fn is_one(&self) -> bool {
        self.0.is_one()
    }

    // SERIALIZATION / DESERIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Returns the canonical 32-byte little-endian encoding of this element.
    pub fn to_bytes_le(&self) -> [u8; ELEMENT_BYTES] {
        self.0.to_bytes_le()
    }

    /// Creates a field element from up to 32 little-endian bytes, reducing the value modulo
    /// the field modulus.
    ///
    /// # Errors
    /// Returns an error if more than 32 bytes are provided.
    pub fn from_bytes_le(bytes: &[u8]) -> Result<Self, MathError> {
        Ok(Self::new(U256::from_bytes_le(bytes)?))
    }

    /// Creates a field element from a 48-byte little-endian encoding via wide reduction.
    ///
    /// The bytes are interpreted as a 384-bit integer X = low + 2^256 * high with a 256-bit
    /// low part and a 128-bit high part; since 2^256 = 38 (mod p), the result is
    /// (low + 38 * high) mod p. Round-constant sampling uses this decoding so that 48-byte
    /// SHAKE256 output chunks map to near-uniform field elements; taking only the low 32 bytes
    /// would not be interoperable.
    pub fn from_wide_bytes_le(bytes: &[u8; WIDE_ELEMENT_BYTES]) -> Self {
        let mut buf = [0u8; ELEMENT_BYTES];
        buf.copy_from_slice(&bytes[..ELEMENT_BYTES]);
        let low = U256::from_le_bytes(buf);

        let mut buf = [0u8; ELEMENT_BYTES];
        buf[..WIDE_ELEMENT_BYTES - ELEMENT_BYTES].copy_from_slice(&bytes[ELEMENT_BYTES..]);
        let high = U256::from_le_bytes(buf);

        // high < 2^128, so 38 * high fits into the low half of the wide product
        let high38 = bigint::mul_wide(&high, &U256::from(38u64)).low();

        Self::new(low) + Self::new(high38)
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for BaseElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(add(&self.0, &rhs.0))
    }
}

impl AddAssign for BaseElement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl Sub for BaseElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(sub(&self.0, &rhs.0))
    }
}

impl SubAssign for BaseElement {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for BaseElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(mul(&self.0, &rhs.0))
    }
}

impl MulAssign for BaseElement {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl Neg for BaseElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(neg(&self.0))
    }
}

impl PartialEq for BaseElement {
    /// Constant-time equality: limb differences are aggregated with OR-of-XORs before the
    /// single comparison against zero, so no intermediate result short-circuits.
    fn eq(&self, other: &Self) -> bool {
        let mut diff = 0u64;
        for i in 0..4 {
            diff |= self.0.limb(i) ^ other.0.limb(i);
        }
        diff == 0
    }
}

impl Ord for BaseElement {
    /// Ordering of canonical values; variable-time, for public data only.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for BaseElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<u64> for BaseElement {
    /// Converts a 64-bit value into a field element; no reduction is needed as all u64 values
    /// are below the modulus.
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u32> for BaseElement {
    fn from(value: u32) -> Self {
        Self(U256::from(value))
    }
}

impl From<u16> for BaseElement {
    fn from(value: u16) -> Self {
        Self(U256::from(value as u32))
    }
}

impl From<u8> for BaseElement {
    fn from(value: u8) -> Self {
        Self(U256::from(value as u32))
    }
}

impl TryFrom<&'_ [u8]> for BaseElement {
    type Error = MathError;

    /// Converts little-endian bytes into a field element, reducing modulo the field modulus;
    /// returns an error if more than 32 bytes are provided.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes_le(bytes)
    }
}

// FORMATTING
// ================================================================================================

impl fmt::Display for BaseElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::LowerHex for BaseElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

impl Serializable for BaseElement {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_bytes(&self.to_bytes_le());
    }

    fn get_size_hint(&self) -> usize {
        ELEMENT_BYTES
    }
}

impl Deserializable for BaseElement {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let value = U256::from_le_bytes(source.read_array()?);
        if value >= M {
            return Err(DeserializationError::InvalidValue(format!(
                "invalid field element: value {value} is greater than or equal to the field modulus"
            )));
        }
        Ok(Self(value))
    }
}

impl Randomizable for BaseElement {
    const VALUE_SIZE: usize = ELEMENT_BYTES;

    fn from_random_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; ELEMENT_BYTES] = bytes[..ELEMENT_BYTES].try_into().ok()?;
        let value = U256::from_le_bytes(bytes);
        if value >= M {
            return None;
        }
        Some(Self(value))
    }
}

// FINITE FIELD ARITHMETIC
// ================================================================================================

/// Reduces a value in [0, 2p) to [0, p) with one masked conditional subtraction.
#[inline]
fn reduce_once(x: &U256) -> U256 {
    let (diff, borrow) = U256::sub_with_borrow(x, &M);

    // borrow set means x < p: keep x; otherwise use the difference
    let mask = (borrow as u64).wrapping_sub(1);
    U256::new([
        (x.limb(0) & !mask) | (diff.limb(0) & mask),
        (x.limb(1) & !mask) | (diff.limb(1) & mask),
        (x.limb(2) & !mask) | (diff.limb(2) & mask),
        (x.limb(3) & !mask) | (diff.limb(3) & mask),
    ])
}

/// Fully reduces any 256-bit value to [0, p).
///
/// 2^256 - 1 < 3p, so two conditional subtractions cover the whole input range.
#[inline]
fn reduce_full(x: &U256) -> U256 {
    reduce_once(&reduce_once(x))
}

/// Computes (a + b) mod p; a and b must be in [0, p).
#[inline]
fn add(a: &U256, b: &U256) -> U256 {
    let (sum, carry) = U256::add_with_carry(a, b);
    let (diff, borrow) = U256::sub_with_borrow(&sum, &M);

    // subtract p when the raw sum wrapped past 2^256 or is still at least p
    let use_diff = carry | !borrow;
    let mask = 0u64.wrapping_sub(use_diff as u64);
    U256::new([
        (sum.limb(0) & !mask) | (diff.limb(0) & mask),
        (sum.limb(1) & !mask) | (diff.limb(1) & mask),
        (sum.limb(2) & !mask) | (diff.limb(2) & mask),
        (sum.limb(3) & !mask) | (diff.limb(3) & mask),
    ])
}

/// Computes (a - b) mod p; a and b must be in [0, p).
#[inline]
fn sub(a: &U256, b: &U256) -> U256 {
    let (diff, borrow) = U256::sub_with_borrow(a, b);
    let (sum, _) = U256::add_with_carry(&diff, &M);

    // add p back when the raw subtraction borrowed
    let mask = 0u64.wrapping_sub(borrow as u64);
    U256::new([
        (diff.limb(0) & !mask) | (sum.limb(0) & mask),
        (diff.limb(1) & !mask) | (sum.limb(1) & mask),
        (diff.limb(2) & !mask) | (sum.limb(2) & mask),
        (diff.limb(3) & !mask) | (sum.limb(3) & mask),
    ])
}

/// Computes (-a) mod p; a must be in [0, p). The result of p - a is masked to zero when a is
/// zero.
#[inline]
fn neg(a: &U256) -> U256 {
    let (diff, _) = U256::sub_with_borrow(&M, a);

    let mask = (a.is_zero() as u64).wrapping_sub(1);
    U256::new([
        diff.limb(0) & mask,
        diff.limb(1) & mask,
        diff.limb(2) & mask,
        diff.limb(3) & mask,
    ])
}

/// Reduces a 512-bit product modulo p.
///
/// Since 2^256 = 38 (mod p), the product low + 2^256 * high folds into low + 38 * high. The
/// fold is a single carry-propagating pass; the residual carry folds again as carry * 38, and
/// both overflow corrections are masked rather than branched. Two conditional subtractions
/// bring the result into [0, p).
#[inline]
fn reduce_512(x: &U512) -> U256 {
    let low = x.low();
    let high = x.high();

    // low + high * 38
    let mut limbs = [0u64; 4];
    let mut carry = 0u128;
    for (i, limb) in limbs.iter_mut().enumerate() {
        let prod = (high.limb(i) as u128) * 38 + (low.limb(i) as u128) + carry;
        *limb = prod as u64;
        carry = prod >> 64;
    }

    // fold the residual carry as carry * 38; the carry is at most 6 bits wide
    let extra = (carry as u64) * 38;
    let (result, c) = U256::add_with_carry(&U256::new(limbs), &U256::from(extra));

    // masked handling of the overflow from the fold
    let overflow_mask = 0u64.wrapping_sub(c as u64);
    let (result, c2) = U256::add_with_carry(&result, &U256::from(38u64 & overflow_mask));

    // a second overflow cannot occur for in-range inputs; the mask keeps the path total
    let overflow_mask2 = 0u64.wrapping_sub(c2 as u64);
    let mut limbs = result.limbs();
    limbs[0] = limbs[0].wrapping_add(38 & overflow_mask2);

    reduce_full(&U256::new(limbs))
}

/// Computes (a * b) mod p.
#[inline]
fn mul(a: &U256, b: &U256) -> U256 {
    reduce_512(&bigint::mul_wide(a, b))
}

/// Computes a^2 mod p using the symmetric squaring of the bignum layer.
#[inline]
fn sqr(a: &U256) -> U256 {
    reduce_512(&bigint::sqr_wide(a))
}

/// Computes a^(p - 2) mod p; the inverse of a for non-zero a.
///
/// p - 2 = 2^255 - 21. The chain below first builds a^(2^250 - 1), shifts it to
/// a^(2^255 - 32) with five squarings, and lands on the target with a final a^11 = a^8 * a^3
/// multiplication: (2^255 - 32) + 11 = 2^255 - 21.
fn inv(a: &U256) -> U256 {
    // a^(2^2 - 1)
    let t0 = mul(&sqr(a), a);

    // a^(2^4 - 1)
    let t1 = mul(&sqr(&sqr(&t0)), &t0);

    // a^(2^5 - 1)
    let t2 = mul(&sqr(&t1), a);

    // a^(2^10 - 1)
    let t3 = mul(&sqr_multi(&t2, 5), &t2);

    // a^(2^20 - 1)
    let t4 = mul(&sqr_multi(&t3, 10), &t3);

    // a^(2^40 - 1)
    let t5 = mul(&sqr_multi(&t4, 20), &t4);

    // a^(2^50 - 1)
    let t6 = mul(&sqr_multi(&t5, 10), &t3);

    // a^(2^100 - 1)
    let t7 = mul(&sqr_multi(&t6, 50), &t6);

    // a^(2^200 - 1)
    let t8 = mul(&sqr_multi(&t7, 100), &t7);

    // a^(2^250 - 1)
    let t9 = mul(&sqr_multi(&t8, 50), &t6);

    // a^(2^255 - 32)
    let t10 = sqr_multi(&t9, 5);

    // a^11 = a^8 * a^3
    let a2 = sqr(a);
    let a3 = mul(&a2, a);
    let a8 = sqr(&sqr(&a2));
    let a11 = mul(&a8, &a3);

    mul(&t10, &a11)
}

// HELPER FUNCTIONS
// ================================================================================================

/// Squares the value `num_times` in a row.
#[inline]
fn sqr_multi(a: &U256, num_times: usize) -> U256 {
    let mut result = *a;
    for _ in 0..num_times {
        result = sqr(&result);
    }
    result
}

/// Constant-time two-way select: returns `a` when the condition is set and `b` otherwise,
/// using a mask instead of a branch.
#[inline]
fn ct_select(condition: bool, a: BaseElement, b: BaseElement) -> BaseElement {
    let mask = 0u64.wrapping_sub(condition as u64);
    BaseElement(U256::new([
        (b.0.limb(0) & !mask) | (a.0.limb(0) & mask),
        (b.0.limb(1) & !mask) | (a.0.limb(1) & mask),
        (b.0.limb(2) & !mask) | (a.0.limb(2) & mask),
        (b.0.limb(3) & !mask) | (a.0.limb(3) & mask),
    ]))
}
