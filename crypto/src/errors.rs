// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::string::String;
use core::fmt;

use math::MathError;

// RESCUE ERROR
// ================================================================================================

/// Defines errors which can occur in the Rescue descriptor, hash, and cipher layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RescueError {
    /// An input value is malformed: wrong secret or nonce length, out-of-range parameters,
    /// and similar.
    InvalidInput(String),
    /// An operation could not be carried out: CSPRNG failure or invalid internal state.
    OperationError(String),
}

impl fmt::Display for RescueError {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(err_msg) => {
                write!(f, "{err_msg}")
            }
            Self::OperationError(err_msg) => {
                write!(f, "{err_msg}")
            }
        }
    }
}

impl core::error::Error for RescueError {}

impl From<MathError> for RescueError {
    fn from(error: MathError) -> Self {
        match error {
            MathError::InvalidInput(err_msg) => Self::InvalidInput(err_msg),
            other => Self::OperationError(format!("{other}")),
        }
    }
}
