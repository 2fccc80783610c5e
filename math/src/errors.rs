// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::string::String;
use core::fmt;

// MATH ERROR
// ================================================================================================

/// Defines errors which can occur in the bignum, field, and matrix layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// An input value is malformed: wrong byte length, bad hex, inversion of zero, and similar.
    InvalidInput(String),
    /// A matrix accessor was called with an index beyond the matrix dimensions.
    IndexOutOfRange(String),
    /// Two matrices have incompatible shapes for the requested operation.
    DimensionMismatch(String),
    /// A value does not fit into the requested number of bytes.
    Overflow(usize),
}

impl fmt::Display for MathError {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(err_msg) => {
                write!(f, "{err_msg}")
            }
            Self::IndexOutOfRange(err_msg) => {
                write!(f, "{err_msg}")
            }
            Self::DimensionMismatch(err_msg) => {
                write!(f, "{err_msg}")
            }
            Self::Overflow(num_bytes) => {
                write!(f, "value does not fit into {num_bytes} bytes")
            }
        }
    }
}

impl core::error::Error for MathError {}
