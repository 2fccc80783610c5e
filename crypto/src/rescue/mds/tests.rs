// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{has_precomputed, precomputed};
use crate::rescue::build_cauchy_matrix;

#[test]
fn availability() {
    assert!(has_precomputed(5));
    assert!(has_precomputed(12));
    assert!(!has_precomputed(4));
    assert!(!has_precomputed(0));
    assert!(precomputed(7).is_none());
}

#[test]
fn tables_match_runtime_construction() {
    // the baked tables must be byte-for-byte the matrices the fallback path would compute
    for size in [5, 12] {
        let baked = precomputed(size).unwrap();
        let computed = build_cauchy_matrix(size).unwrap();
        assert_eq!(computed, baked, "baked table for m = {size} diverges from 1/(i + j)");
    }
}
