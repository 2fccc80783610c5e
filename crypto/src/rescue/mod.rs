// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The Rescue permutation and its parameter derivation.
//!
//! A [RescueDesc] holds everything a Rescue instance needs: the S-box exponents alpha and
//! alpha^-1, the round count, the MDS matrix with its inverse, and the 2N + 1 round keys. The
//! same descriptor type drives both primitives of the suite; behaviour is switched by the
//! [RescueMode] tag. In cipher mode the S-box applies alpha^-1 on even sub-rounds and alpha on
//! odd ones; hash mode swaps the assignment. Parameter derivation follows the Rescue-Prime
//! paper (<https://eprint.iacr.org/2020/1143.pdf>).
//!
//! Round keys are sampled from SHAKE256 exactly as the reference implementation samples them,
//! down to the seed strings and the 48-byte uniformity margin per element, so descriptors
//! built here interoperate bit-for-bit with descriptors built elsewhere.

use alloc::{string::String, vec::Vec};

use math::{fields::f25519::BaseElement, Matrix, U256, U512};

use crate::{errors::RescueError, hash::shake256, random};

pub mod mds;


// CONSTANTS
// ================================================================================================

/// Security level of the block cipher, in bits.
pub const CIPHER_SECURITY_LEVEL: usize = 128;

/// Security level of the hash function, in bits.
pub const HASH_SECURITY_LEVEL: usize = 256;

/// Number of SHAKE256 output bytes consumed per sampled field element: the 32-byte element
/// size plus a 16-byte margin so that the wide reduction lands near-uniformly in the field.
const CHUNK_BYTES: usize = 48;

/// Seed for cipher-mode round-constant sampling.
const CIPHER_SEED: &[u8] = b"encrypt everything, compute anything";

/// Primes tried when deriving the S-box exponent.
const ALPHA_CANDIDATES: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

// RESCUE MODE
// ================================================================================================

/// Operation mode of a Rescue permutation descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RescueMode {
    /// Block-cipher mode; the state width is the key length.
    Cipher {
        /// The cipher key as a vector of at least two field elements.
        key: Vec<BaseElement>,
    },
    /// Sponge-hash mode with state width `m` and the specified capacity.
    Hash {
        /// Total state width (rate + capacity).
        m: usize,
        /// Number of state elements reserved for the capacity.
        capacity: usize,
    },
}

impl RescueMode {
    /// Returns true if this is the cipher mode.
    pub fn is_cipher(&self) -> bool {
        matches!(self, RescueMode::Cipher { .. })
    }

    /// Returns true if this is the hash mode.
    pub fn is_hash(&self) -> bool {
        matches!(self, RescueMode::Hash { .. })
    }
}

// RESCUE DESCRIPTOR
// ================================================================================================

/// Parameters and round keys of a concrete Rescue permutation.
///
/// A descriptor is immutable once built and can be shared freely across threads. Construction
/// order matters: alpha and alpha^-1 first, then the round count, the MDS matrices, the raw
/// SHAKE-derived constants, and finally the round keys. In cipher mode the round keys are the
/// intermediate states of the forward permutation applied to the key column under the raw
/// constants; that key-schedule pass needs the MDS matrix and the exponents but never the
/// finalized keys, so the apparent recursion bottoms out.
#[derive(Clone, Debug)]
pub struct RescueDesc {
    mode: RescueMode,
    m: usize,
    alpha: u64,
    alpha_inverse: U256,
    num_rounds: usize,
    mds: Matrix,
    mds_inverse: Matrix,
    round_keys: Vec<Matrix>,
}

impl RescueDesc {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Builds a cipher-mode descriptor for the specified key.
    ///
    /// # Errors
    /// Returns an error if the key has fewer than two elements.
    pub fn new_cipher(key: Vec<BaseElement>) -> Result<Self, RescueError> {
        if key.len() < 2 {
            return Err(RescueError::InvalidInput(String::from(
                "cipher key must have at least 2 elements",
            )));
        }
        Self::build(RescueMode::Cipher { key })
    }

    /// Builds a hash-mode descriptor with state width `m` and the specified capacity.
    ///
    /// # Errors
    /// Returns an error unless `m > capacity >= 1`.
    pub fn new_hash(m: usize, capacity: usize) -> Result<Self, RescueError> {
        if capacity == 0 {
            return Err(RescueError::InvalidInput(String::from("capacity must be positive")));
        }
        if m <= capacity {
            return Err(RescueError::InvalidInput(format!(
                "state width must be greater than the capacity, but received m = {m} and \
                 capacity = {capacity}"
            )));
        }
        Self::build(RescueMode::Hash { m, capacity })
    }

    fn build(mode: RescueMode) -> Result<Self, RescueError> {
        let m = match &mode {
            RescueMode::Cipher { key } => key.len(),
            RescueMode::Hash { m, .. } => *m,
        };

        let (alpha, alpha_inverse) = get_alpha_and_inverse(&BaseElement::MODULUS)?;
        let num_rounds = get_num_rounds(&mode, alpha, m);

        let mds = match mds::precomputed(m) {
            Some(matrix) => matrix,
            None => build_cauchy_matrix(m)?,
        };
        let mds_inverse = build_cauchy_matrix_inverse(m)?;

        let constants = sample_constants(&mode, m, num_rounds)?;
        let round_keys = match &mode {
            RescueMode::Cipher { key } => {
                let key_column = Matrix::from_column(key.clone());
                rescue_permutation(&mode, alpha, &alpha_inverse, &mds, &constants, &key_column)?
            }
            RescueMode::Hash { .. } => constants,
        };

        Ok(RescueDesc {
            mode,
            m,
            alpha,
            alpha_inverse,
            num_rounds,
            mds,
            mds_inverse,
            round_keys,
        })
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the operation mode of this descriptor.
    pub fn mode(&self) -> &RescueMode {
        &self.mode
    }

    /// Returns the state width m.
    pub fn state_width(&self) -> usize {
        self.m
    }

    /// Returns the S-box exponent alpha.
    pub fn alpha(&self) -> u64 {
        self.alpha
    }

    /// Returns the inverse S-box exponent alpha^-1 mod (p - 1).
    pub fn alpha_inverse(&self) -> &U256 {
        &self.alpha_inverse
    }

    /// Returns the number of full rounds N; the permutation runs 2N sub-rounds.
    pub fn num_rounds(&self) -> usize {
        self.num_rounds
    }

    /// Returns the MDS matrix.
    pub fn mds_matrix(&self) -> &Matrix {
        &self.mds
    }

    /// Returns the inverse MDS matrix.
    pub fn mds_matrix_inverse(&self) -> &Matrix {
        &self.mds_inverse
    }

    /// Returns the 2N + 1 round keys as column vectors.
    pub fn round_keys(&self) -> &[Matrix] {
        &self.round_keys
    }

    // PERMUTATION
    // --------------------------------------------------------------------------------------------

    /// Applies the Rescue permutation to the specified state column and returns the final
    /// state.
    ///
    /// # Errors
    /// Returns an error if the state is not an m x 1 column vector.
    pub fn permute(&self, state: &Matrix) -> Result<Matrix, RescueError> {
        let mut states = rescue_permutation(
            &self.mode,
            self.alpha,
            &self.alpha_inverse,
            &self.mds,
            &self.round_keys,
            state,
        )?;
        states.pop().ok_or_else(|| {
            RescueError::OperationError(String::from("permutation produced no states"))
        })
    }

    /// Applies the inverse Rescue permutation to the specified state column and returns the
    /// final state.
    ///
    /// # Errors
    /// Returns an error if the state is not an m x 1 column vector.
    pub fn permute_inverse(&self, state: &Matrix) -> Result<Matrix, RescueError> {
        let mut states = rescue_permutation_inverse(
            &self.mode,
            self.alpha,
            &self.alpha_inverse,
            &self.mds_inverse,
            &self.round_keys,
            state,
        )?;
        states.pop().ok_or_else(|| {
            RescueError::OperationError(String::from("permutation produced no states"))
        })
    }
}

// PARAMETER DERIVATION
// ================================================================================================

/// Returns the S-box exponent alpha and its inverse modulo p - 1.
///
/// Alpha is the smallest prime which does not divide p - 1; for p = 2^255 - 19 this is 5. The
/// inverse comes from the extended Euclidean algorithm: the first quotient of gcd(p - 1,
/// alpha) is the only large one, so the Bezout coefficient folds into `s - t * ((p - 1) /
/// alpha)` with s and t produced by the remaining small-operand tail.
///
/// # Errors
/// Returns an error if no candidate prime is coprime with p - 1.
pub fn get_alpha_and_inverse(p: &U256) -> Result<(u64, U256), RescueError> {
    let p_minus_one = *p - U256::ONE;

    for &alpha in ALPHA_CANDIDATES.iter() {
        let (_, rem) = p_minus_one.div_rem_u64(alpha);
        if rem != 0 {
            let alpha_inverse = mod_inverse_u64(alpha, &p_minus_one)?;
            return Ok((alpha, alpha_inverse));
        }
    }

    Err(RescueError::OperationError(String::from(
        "no candidate prime is coprime with p - 1",
    )))
}

/// Returns the number of full Rescue rounds N for the specified mode.
///
/// Cipher mode: N = 2 * max(L0, L1, 5) with L0 and L1 from the degree and Groebner-basis
/// bounds of the Rescue-Prime paper. Hash mode: L1 is the smallest round count whose
/// Groebner-basis cost exceeds the security target, capped at 23, and N = ceil(1.5 * max(5,
/// L1)). The binomial coefficients in the hash-mode bound are evaluated over 512-bit
/// integers.
///
/// # Panics
/// Panics if `alpha` is not one of the candidate primes produced by
/// [get_alpha_and_inverse].
pub fn get_num_rounds(mode: &RescueMode, alpha: u64, m: usize) -> usize {
    match mode {
        RescueMode::Cipher { .. } => {
            let l0 = ceil_pos(
                (2 * CIPHER_SECURITY_LEVEL) as f64
                    / ((m as f64 + 1.0) * (255.0 - log2_alpha_minus_one(alpha))),
            );
            let l1 = if alpha == 3 {
                (CIPHER_SECURITY_LEVEL + 2).div_ceil(4 * m)
            } else {
                // ceil((security + 3) / (5.5 * m)) with the fraction cleared
                (2 * (CIPHER_SECURITY_LEVEL + 3)).div_ceil(11 * m)
            };
            2 * l0.max(l1).max(5)
        }
        RescueMode::Hash { capacity, .. } => {
            let rate = m - capacity;
            // alpha is an odd prime, so the halving in d(n) is exact
            let dcon = |n: usize| (alpha as usize - 1) / 2 * m * (n - 1) + 2;
            let v = |n: usize| m * (n - 1) + rate;

            // C(v + d, v)^2 > 2^256 for integers iff C(v + d, v) > 2^128
            let target = U512::new([0, 0, 1, 0, 0, 0, 0, 0]);

            let mut l1 = 1;
            let mut cost = binomial(v(l1) + dcon(l1), v(l1));
            while cost <= target && l1 <= 23 {
                l1 += 1;
                cost = binomial(v(l1) + dcon(l1), v(l1));
            }

            // N = ceil(1.5 * max(5, L1))
            (3 * l1.max(5)).div_ceil(2)
        }
    }
}

/// Builds the m x m Cauchy MDS matrix with entries 1/(i + j) for i, j in 1..=m.
pub fn build_cauchy_matrix(size: usize) -> Result<Matrix, RescueError> {
    let mut rows = Vec::with_capacity(size);
    for i in 1..=size {
        let mut row = Vec::with_capacity(size);
        for j in 1..=size {
            row.push(BaseElement::from((i + j) as u64).inv()?);
        }
        rows.push(row);
    }
    Ok(Matrix::from_rows(rows)?)
}

/// Builds the inverse of the m x m Cauchy MDS matrix from the closed-form expression
///
/// ```text
/// (M^-1)[i][j] = prod_k (-i - k) * prod_k (j + k)
///              / (prod_{k != j} (j - k) * prod_{k != i} (k - i) * (-i - j))
/// ```
///
/// evaluated in the field, with negative factors mapped through field negation.
pub fn build_cauchy_matrix_inverse(size: usize) -> Result<Matrix, RescueError> {
    let fp = |value: usize| BaseElement::from(value as u64);

    let mut rows = Vec::with_capacity(size);
    for i in 1..=size {
        let mut row = Vec::with_capacity(size);
        for j in 1..=size {
            let mut numerator = BaseElement::ONE;
            for k in 1..=size {
                numerator *= -fp(i + k);
            }
            for k in 1..=size {
                numerator *= fp(j + k);
            }

            let mut denominator = -fp(i + j);
            for k in 1..=size {
                if k != j {
                    denominator *= fp(j) - fp(k);
                }
            }
            for k in 1..=size {
                if k != i {
                    denominator *= fp(k) - fp(i);
                }
            }

            // every denominator factor is non-zero, so inversion cannot fail
            row.push(numerator * denominator.inv()?);
        }
        rows.push(row);
    }
    Ok(Matrix::from_rows(rows)?)
}

// ROUND CONSTANTS
// ================================================================================================

/// Samples the 2N + 1 raw round constants for the specified mode.
///
/// Cipher mode absorbs a fixed ASCII seed into SHAKE256 and squeezes an m x m matrix C plus
/// two m-vectors r0 and c in one shot; the constants are the affine orbit R0 = r0,
/// R_{i+1} = C * R_i + c. A singular C is resampled from the OS CSPRNG (the reference
/// implementation cannot continue the XOF stream after squeezing, and neither can this one).
/// Hash mode seeds SHAKE256 with `Rescue-XLIX(<p>,<m>,<capacity>,256)`, prepends an all-zero
/// constant, and decodes the remaining 2 N m elements directly from the stream.
fn sample_constants(
    mode: &RescueMode,
    m: usize,
    num_rounds: usize,
) -> Result<Vec<Matrix>, RescueError> {
    match mode {
        RescueMode::Cipher { .. } => {
            let num_elements = m * m + 2 * m;
            let randomness = shake256(CIPHER_SEED, num_elements * CHUNK_BYTES);
            let elements = decode_wide_chunks(&randomness);

            let mut constant_matrix = chunk_into_rows(&elements[..m * m], m)?;
            let initial_constant = Matrix::from_column(elements[m * m..m * m + m].to_vec());
            let affine_constant = Matrix::from_column(elements[m * m + m..].to_vec());

            // a singular sample is astronomically unlikely, but checked; resample rather
            // than fail
            while constant_matrix.det()? == BaseElement::ZERO {
                let fresh = random::random_bytes(m * m * CHUNK_BYTES)?;
                constant_matrix = chunk_into_rows(&decode_wide_chunks(&fresh), m)?;
            }

            let mut constants = Vec::with_capacity(2 * num_rounds + 1);
            constants.push(initial_constant);
            for r in 0..2 * num_rounds {
                let next = constant_matrix.mat_mul(&constants[r])?.add(&affine_constant)?;
                constants.push(next);
            }
            Ok(constants)
        }
        RescueMode::Hash { capacity, .. } => {
            let seed = format!(
                "Rescue-XLIX({},{},{},{})",
                BaseElement::MODULUS,
                m,
                capacity,
                HASH_SECURITY_LEVEL
            );

            let num_elements = 2 * m * num_rounds;
            let randomness = shake256(seed.as_bytes(), num_elements * CHUNK_BYTES);
            let elements = decode_wide_chunks(&randomness);

            let mut constants = Vec::with_capacity(2 * num_rounds + 1);
            constants.push(Matrix::from_column(vec![BaseElement::ZERO; m]));
            for r in 0..2 * num_rounds {
                constants.push(Matrix::from_column(elements[r * m..(r + 1) * m].to_vec()));
            }
            Ok(constants)
        }
    }
}

// PERMUTATION
// ================================================================================================

/// Applies the forward Rescue permutation and returns all 2N + 1 intermediate states, the
/// last of which is the permutation output.
///
/// The initial state is `state + subkeys[0]`; each of the 2N sub-rounds applies the S-box for
/// its parity, multiplies by the MDS matrix, and adds the next subkey.
///
/// # Errors
/// Returns an error if no subkeys are provided or the state shape does not match the subkey
/// shape.
pub fn rescue_permutation(
    mode: &RescueMode,
    alpha: u64,
    alpha_inverse: &U256,
    mds: &Matrix,
    subkeys: &[Matrix],
    state: &Matrix,
) -> Result<Vec<Matrix>, RescueError> {
    if subkeys.is_empty() {
        return Err(RescueError::InvalidInput(String::from(
            "at least one subkey is required",
        )));
    }
    let (exp_even, exp_odd) = sub_round_exponents(mode, alpha, alpha_inverse);

    let mut states = Vec::with_capacity(subkeys.len());
    states.push(state.add(&subkeys[0])?);

    for r in 0..subkeys.len() - 1 {
        let s = if r % 2 == 0 {
            exp_even.apply(&states[r])
        } else {
            exp_odd.apply(&states[r])
        };
        states.push(mds.mat_mul(&s)?.add(&subkeys[r + 1])?);
    }

    Ok(states)
}

/// Applies the inverse Rescue permutation and returns all 2N + 1 intermediate states, the
/// last of which is the recovered input.
///
/// Subkeys are consumed from the end: each sub-round subtracts the next subkey, multiplies by
/// the inverse MDS matrix, and applies the S-box for its parity; the final step subtracts
/// `subkeys[0]`. The parity-to-exponent assignment is the same as in the forward direction
/// because sub-round r here undoes forward sub-round 2N - 1 - r, which has the opposite
/// parity.
///
/// # Errors
/// Returns an error if no subkeys are provided or the state shape does not match the subkey
/// shape.
pub fn rescue_permutation_inverse(
    mode: &RescueMode,
    alpha: u64,
    alpha_inverse: &U256,
    mds_inverse: &Matrix,
    subkeys: &[Matrix],
    state: &Matrix,
) -> Result<Vec<Matrix>, RescueError> {
    if subkeys.is_empty() {
        return Err(RescueError::InvalidInput(String::from(
            "at least one subkey is required",
        )));
    }
    let (exp_even, exp_odd) = sub_round_exponents(mode, alpha, alpha_inverse);

    let mut states = Vec::with_capacity(subkeys.len() + 1);
    states.push(state.clone());

    for r in 0..subkeys.len() - 1 {
        let s = mds_inverse.mat_mul(&states[r].sub(&subkeys[subkeys.len() - 1 - r])?)?;
        let s = if r % 2 == 0 { exp_even.apply(&s) } else { exp_odd.apply(&s) };
        states.push(s);
    }

    let last = states[states.len() - 1].sub(&subkeys[0])?;
    states.push(last);
    states.remove(0);

    Ok(states)
}

// S-BOX DISPATCH
// ================================================================================================

/// Element-wise S-box exponent for one sub-round.
enum SboxExponent<'a> {
    /// The forward exponent alpha; the common alpha = 5 case takes the two-squarings fast
    /// path.
    Forward(u64),
    /// The inverse exponent alpha^-1, applied through the full-width ladder.
    Inverse(&'a U256),
}

impl SboxExponent<'_> {
    fn apply(&self, state: &Matrix) -> Matrix {
        match self {
            Self::Forward(alpha) => {
                if *alpha == 5 {
                    state.pow5()
                } else {
                    state.pow(&U256::from(*alpha))
                }
            }
            Self::Inverse(exponent) => state.pow(exponent),
        }
    }
}

/// Returns the (even, odd) sub-round exponents: cipher mode applies alpha^-1 on even
/// sub-rounds, hash mode applies alpha.
fn sub_round_exponents<'a>(
    mode: &RescueMode,
    alpha: u64,
    alpha_inverse: &'a U256,
) -> (SboxExponent<'a>, SboxExponent<'a>) {
    match mode {
        RescueMode::Cipher { .. } => {
            (SboxExponent::Inverse(alpha_inverse), SboxExponent::Forward(alpha))
        }
        RescueMode::Hash { .. } => {
            (SboxExponent::Forward(alpha), SboxExponent::Inverse(alpha_inverse))
        }
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Decodes 48-byte SHAKE256 output chunks into field elements via wide reduction.
fn decode_wide_chunks(bytes: &[u8]) -> Vec<BaseElement> {
    bytes
        .chunks_exact(CHUNK_BYTES)
        .map(|chunk| {
            let mut buf = [0u8; CHUNK_BYTES];
            buf.copy_from_slice(chunk);
            BaseElement::from_wide_bytes_le(&buf)
        })
        .collect()
}

/// Packs a flat slice of m * m elements into an m x m matrix, row by row.
fn chunk_into_rows(elements: &[BaseElement], m: usize) -> Result<Matrix, RescueError> {
    let rows = (0..m).map(|i| elements[i * m..(i + 1) * m].to_vec()).collect();
    Ok(Matrix::from_rows(rows)?)
}

/// Computes a^-1 mod n for a small odd prime a via the extended Euclidean algorithm.
fn mod_inverse_u64(a: u64, n: &U256) -> Result<U256, RescueError> {
    // n = q1 * a + r1; the quotient q1 is the only operand wider than a machine word
    let (q1, r1) = n.div_rem_u64(a);
    if r1 == 0 {
        return Err(RescueError::InvalidInput(format!("{a} is not invertible modulo p - 1")));
    }

    // Bezout for the small tail: s * a + t * r1 = gcd(a, r1)
    let (gcd, s, t) = egcd_i128(a as i128, r1 as i128);
    if gcd != 1 {
        return Err(RescueError::InvalidInput(format!("{a} is not invertible modulo p - 1")));
    }

    // substituting r1 = n - q1 * a gives a * (s - t * q1) = 1 (mod n)
    let s_mod = signed_mod(s, n);
    let t_q1 = mul_mod_u64(&q1, t.unsigned_abs() as u64, n);
    if t >= 0 {
        Ok(sub_mod(&s_mod, &t_q1, n))
    } else {
        Ok(add_mod(&s_mod, &t_q1, n))
    }
}

/// Textbook recursive extended gcd on machine-word operands.
fn egcd_i128(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (gcd, x, y) = egcd_i128(b, a % b);
        (gcd, y, x - (a / b) * y)
    }
}

/// Computes value * factor mod n for value < n; the product spans at most 256 + 64 bits and
/// is reduced by repeated subtraction (factor is tiny, so the loop is short).
fn mul_mod_u64(value: &U256, factor: u64, n: &U256) -> U256 {
    let mut limbs = [0u64; 4];
    let mut carry = 0u128;
    for (i, limb) in limbs.iter_mut().enumerate() {
        let prod = (value.limb(i) as u128) * (factor as u128) + carry;
        *limb = prod as u64;
        carry = prod >> 64;
    }

    let mut high = carry as u64;
    let mut low = U256::new(limbs);
    while high > 0 || low >= *n {
        let (diff, borrow) = U256::sub_with_borrow(&low, n);
        high -= borrow as u64;
        low = diff;
    }
    low
}

/// Maps a small signed value into [0, n).
fn signed_mod(value: i128, n: &U256) -> U256 {
    if value >= 0 {
        U256::from(value as u64)
    } else {
        *n - U256::from(value.unsigned_abs() as u64)
    }
}

/// Computes (a + b) mod n for a, b in [0, n) with n < 2^255.
fn add_mod(a: &U256, b: &U256, n: &U256) -> U256 {
    let sum = *a + *b;
    if sum >= *n {
        sum - *n
    } else {
        sum
    }
}

/// Computes (a - b) mod n for a, b in [0, n).
fn sub_mod(a: &U256, b: &U256, n: &U256) -> U256 {
    if a >= b {
        *a - *b
    } else {
        *a + *n - *b
    }
}

/// Computes the binomial coefficient C(n, k) over 512-bit integers; coefficients which
/// outgrow 512 bits saturate to the maximum value, which is far above any security target
/// the round-count search compares against.
fn binomial(n: usize, k: usize) -> U512 {
    let k = k.min(n - k);
    let mut result = U512::ONE;
    for i in 1..=k {
        result = match result.checked_mul_u64((n - k + i) as u64) {
            // the running product is C(n - k + i, i), so each division is exact
            Some(product) => product.div_rem_u64(i as u64).0,
            None => return U512::new([u64::MAX; 8]),
        };
    }
    result
}

/// Returns log2(alpha - 1) for a candidate S-box exponent.
///
/// # Panics
/// Panics if `alpha` is not one of the candidate primes.
fn log2_alpha_minus_one(alpha: u64) -> f64 {
    match alpha {
        2 => 0.0,
        3 => 1.0,
        5 => 2.0,
        7 => 2.584962500721156,
        11 => 3.321928094887362,
        13 => 3.584962500721156,
        17 => 4.0,
        19 => 4.169925001442312,
        23 => 4.459431618637297,
        29 => 4.807354922057604,
        31 => 4.906890595608519,
        37 => 5.169925001442312,
        41 => 5.321928094887362,
        43 => 5.392317422778761,
        47 => 5.523561956057013,
        _ => unreachable!("alpha must be one of the candidate primes"),
    }
}

/// Ceiling of a non-negative float without the std math intrinsics.
fn ceil_pos(value: f64) -> usize {
    let truncated = value as usize;
    if value > truncated as f64 {
        truncated + 1
    } else {
        truncated
    }
}
