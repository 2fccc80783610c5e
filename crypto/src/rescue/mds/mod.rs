// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Precomputed Cauchy MDS matrices for the standard Rescue configurations.
//!
//! The Cauchy matrix entry (i, j) is 1/(i + j) mod p for i, j in 1..=m. Building it at run
//! time costs m^2 modular inversions, so the two state widths every descriptor in this suite
//! actually uses -- m = 5 (cipher mode) and m = 12 (default hash mode) -- are baked in as
//! compile-time constants. Descriptor construction falls back to
//! [build_cauchy_matrix](super::build_cauchy_matrix) for any other width. Inverse MDS
//! matrices are always derived from the closed-form Cauchy inverse and are not baked.

use alloc::vec::Vec;

use math::{fields::f25519::BaseElement, Matrix};

#[cfg(test)]
mod tests;

// PRECOMPUTED MATRICES
// ================================================================================================

/// 5x5 Cauchy MDS matrix for the cipher-mode state width.
#[rustfmt::skip]
pub const MDS_5X5: [[BaseElement; 5]; 5] = [
    [
        BaseElement::from_raw_unchecked([0xfffffffffffffff7, 0xffffffffffffffff, 0xffffffffffffffff, 0x3fffffffffffffff]),
        BaseElement::from_raw_unchecked([0x5555555555555549, 0x5555555555555555, 0x5555555555555555, 0x5555555555555555]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        BaseElement::from_raw_unchecked([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
    ],
    [
        BaseElement::from_raw_unchecked([0x5555555555555549, 0x5555555555555555, 0x5555555555555555, 0x5555555555555555]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        BaseElement::from_raw_unchecked([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        BaseElement::from_raw_unchecked([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
    ],
    [
        BaseElement::from_raw_unchecked([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        BaseElement::from_raw_unchecked([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        BaseElement::from_raw_unchecked([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
    ],
    [
        BaseElement::from_raw_unchecked([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        BaseElement::from_raw_unchecked([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        BaseElement::from_raw_unchecked([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
    ],
    [
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        BaseElement::from_raw_unchecked([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        BaseElement::from_raw_unchecked([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        BaseElement::from_raw_unchecked([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
    ],
];

/// 12x12 Cauchy MDS matrix for the default hash-mode state width.
#[rustfmt::skip]
pub const MDS_12X12: [[BaseElement; 12]; 12] = [
    [
        BaseElement::from_raw_unchecked([0xfffffffffffffff7, 0xffffffffffffffff, 0xffffffffffffffff, 0x3fffffffffffffff]),
        BaseElement::from_raw_unchecked([0x5555555555555549, 0x5555555555555555, 0x5555555555555555, 0x5555555555555555]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        BaseElement::from_raw_unchecked([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        BaseElement::from_raw_unchecked([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        BaseElement::from_raw_unchecked([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        BaseElement::from_raw_unchecked([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        BaseElement::from_raw_unchecked([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
    ],
    [
        BaseElement::from_raw_unchecked([0x5555555555555549, 0x5555555555555555, 0x5555555555555555, 0x5555555555555555]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        BaseElement::from_raw_unchecked([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        BaseElement::from_raw_unchecked([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        BaseElement::from_raw_unchecked([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        BaseElement::from_raw_unchecked([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        BaseElement::from_raw_unchecked([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
    ],
    [
        BaseElement::from_raw_unchecked([0xfffffffffffffff2, 0xffffffffffffffff, 0xffffffffffffffff, 0x5fffffffffffffff]),
        BaseElement::from_raw_unchecked([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        BaseElement::from_raw_unchecked([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        BaseElement::from_raw_unchecked([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        BaseElement::from_raw_unchecked([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        BaseElement::from_raw_unchecked([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        BaseElement::from_raw_unchecked([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
    ],
    [
        BaseElement::from_raw_unchecked([0x9999999999999996, 0x9999999999999999, 0x9999999999999999, 0x1999999999999999]),
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        BaseElement::from_raw_unchecked([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        BaseElement::from_raw_unchecked([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        BaseElement::from_raw_unchecked([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        BaseElement::from_raw_unchecked([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        BaseElement::from_raw_unchecked([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
    ],
    [
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaa9b, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x6aaaaaaaaaaaaaaa]),
        BaseElement::from_raw_unchecked([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        BaseElement::from_raw_unchecked([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        BaseElement::from_raw_unchecked([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        BaseElement::from_raw_unchecked([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        BaseElement::from_raw_unchecked([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        BaseElement::from_raw_unchecked([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
    ],
    [
        BaseElement::from_raw_unchecked([0x249249249249248d, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        BaseElement::from_raw_unchecked([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        BaseElement::from_raw_unchecked([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        BaseElement::from_raw_unchecked([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        BaseElement::from_raw_unchecked([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        BaseElement::from_raw_unchecked([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        BaseElement::from_raw_unchecked([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
    ],
    [
        BaseElement::from_raw_unchecked([0xfffffffffffffff9, 0xffffffffffffffff, 0xffffffffffffffff, 0x2fffffffffffffff]),
        BaseElement::from_raw_unchecked([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        BaseElement::from_raw_unchecked([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        BaseElement::from_raw_unchecked([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        BaseElement::from_raw_unchecked([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        BaseElement::from_raw_unchecked([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        BaseElement::from_raw_unchecked([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        BaseElement::from_raw_unchecked([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
    ],
    [
        BaseElement::from_raw_unchecked([0xc71c71c71c71c712, 0x1c71c71c71c71c71, 0x71c71c71c71c71c7, 0x471c71c71c71c71c]),
        BaseElement::from_raw_unchecked([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        BaseElement::from_raw_unchecked([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        BaseElement::from_raw_unchecked([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        BaseElement::from_raw_unchecked([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        BaseElement::from_raw_unchecked([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        BaseElement::from_raw_unchecked([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
        BaseElement::from_raw_unchecked([0x666666666666665c, 0x6666666666666666, 0x6666666666666666, 0x4666666666666666]),
    ],
    [
        BaseElement::from_raw_unchecked([0xcccccccccccccccb, 0xcccccccccccccccc, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        BaseElement::from_raw_unchecked([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        BaseElement::from_raw_unchecked([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        BaseElement::from_raw_unchecked([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        BaseElement::from_raw_unchecked([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        BaseElement::from_raw_unchecked([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
        BaseElement::from_raw_unchecked([0x666666666666665c, 0x6666666666666666, 0x6666666666666666, 0x4666666666666666]),
        BaseElement::from_raw_unchecked([0x0c30c30c30c30c2f, 0x30c30c30c30c30c3, 0xc30c30c30c30c30c, 0x0c30c30c30c30c30]),
    ],
    [
        BaseElement::from_raw_unchecked([0xe8ba2e8ba2e8ba26, 0x2e8ba2e8ba2e8ba2, 0xa2e8ba2e8ba2e8ba, 0x3a2e8ba2e8ba2e8b]),
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        BaseElement::from_raw_unchecked([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        BaseElement::from_raw_unchecked([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        BaseElement::from_raw_unchecked([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        BaseElement::from_raw_unchecked([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
        BaseElement::from_raw_unchecked([0x666666666666665c, 0x6666666666666666, 0x6666666666666666, 0x4666666666666666]),
        BaseElement::from_raw_unchecked([0x0c30c30c30c30c2f, 0x30c30c30c30c30c3, 0xc30c30c30c30c30c, 0x0c30c30c30c30c30]),
        BaseElement::from_raw_unchecked([0x745d1745d1745d13, 0x1745d1745d1745d1, 0xd1745d1745d1745d, 0x1d1745d1745d1745]),
    ],
    [
        BaseElement::from_raw_unchecked([0x5555555555555544, 0x5555555555555555, 0x5555555555555555, 0x7555555555555555]),
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        BaseElement::from_raw_unchecked([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        BaseElement::from_raw_unchecked([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        BaseElement::from_raw_unchecked([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        BaseElement::from_raw_unchecked([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
        BaseElement::from_raw_unchecked([0x666666666666665c, 0x6666666666666666, 0x6666666666666666, 0x4666666666666666]),
        BaseElement::from_raw_unchecked([0x0c30c30c30c30c2f, 0x30c30c30c30c30c3, 0xc30c30c30c30c30c, 0x0c30c30c30c30c30]),
        BaseElement::from_raw_unchecked([0x745d1745d1745d13, 0x1745d1745d1745d1, 0xd1745d1745d1745d, 0x1d1745d1745d1745]),
        BaseElement::from_raw_unchecked([0xe9bd37a6f4de9bc3, 0xa6f4de9bd37a6f4d, 0x9bd37a6f4de9bd37, 0x6f4de9bd37a6f4de]),
    ],
    [
        BaseElement::from_raw_unchecked([0x3b13b13b13b13b0b, 0x13b13b13b13b13b1, 0xb13b13b13b13b13b, 0x3b13b13b13b13b13]),
        BaseElement::from_raw_unchecked([0x924924924924923d, 0x4924924924924924, 0x2492492492492492, 0x5249249249249249]),
        BaseElement::from_raw_unchecked([0xddddddddddddddd0, 0xdddddddddddddddd, 0xdddddddddddddddd, 0x5ddddddddddddddd]),
        BaseElement::from_raw_unchecked([0xfffffffffffffff3, 0xffffffffffffffff, 0xffffffffffffffff, 0x57ffffffffffffff]),
        BaseElement::from_raw_unchecked([0x5a5a5a5a5a5a5a4d, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a, 0x5a5a5a5a5a5a5a5a]),
        BaseElement::from_raw_unchecked([0xe38e38e38e38e389, 0x8e38e38e38e38e38, 0x38e38e38e38e38e3, 0x238e38e38e38e38e]),
        BaseElement::from_raw_unchecked([0x86bca1af286bca14, 0xbca1af286bca1af2, 0xa1af286bca1af286, 0x2f286bca1af286bc]),
        BaseElement::from_raw_unchecked([0x666666666666665c, 0x6666666666666666, 0x6666666666666666, 0x4666666666666666]),
        BaseElement::from_raw_unchecked([0x0c30c30c30c30c2f, 0x30c30c30c30c30c3, 0xc30c30c30c30c30c, 0x0c30c30c30c30c30]),
        BaseElement::from_raw_unchecked([0x745d1745d1745d13, 0x1745d1745d1745d1, 0xd1745d1745d1745d, 0x1d1745d1745d1745]),
        BaseElement::from_raw_unchecked([0xe9bd37a6f4de9bc3, 0xa6f4de9bd37a6f4d, 0x9bd37a6f4de9bd37, 0x6f4de9bd37a6f4de]),
        BaseElement::from_raw_unchecked([0xaaaaaaaaaaaaaaa2, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x3aaaaaaaaaaaaaaa]),
    ],
];

// PUBLIC FUNCTIONS
// ================================================================================================

/// Returns true if a precomputed MDS matrix is available for the specified state width.
pub const fn has_precomputed(size: usize) -> bool {
    size == 5 || size == 12
}

/// Returns the precomputed MDS matrix for the specified state width, if one is available.
pub fn precomputed(size: usize) -> Option<Matrix> {
    match size {
        5 => rows_to_matrix(MDS_5X5.iter().map(|row| row.to_vec()).collect()),
        12 => rows_to_matrix(MDS_12X12.iter().map(|row| row.to_vec()).collect()),
        _ => None,
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn rows_to_matrix(rows: Vec<Vec<BaseElement>>) -> Option<Matrix> {
    Matrix::from_rows(rows).ok()
}
