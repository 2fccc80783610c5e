// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

mod shake;
pub use shake::{sha256, shake256, Shake256};

mod rescue_prime;
pub use rescue_prime::{
    RescuePrime, DIGEST_LENGTH, HASH_CAPACITY, HASH_RATE, HASH_STATE_WIDTH,
};
