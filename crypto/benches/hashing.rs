// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use crypto::RescuePrime;
use math::{fields::f25519::BaseElement, Matrix};
use rand_utils::rand_vector;

fn rescue_prime(c: &mut Criterion) {
    let hasher = RescuePrime::new_default().expect("failed to build hasher");

    for &num_elements in &[1usize, 7, 64] {
        c.bench_function(&format!("rescue-prime - digest {num_elements} elements"), |bench| {
            bench.iter_batched(
                || rand_vector::<BaseElement>(num_elements),
                |message| hasher.digest(black_box(&message)),
                BatchSize::SmallInput,
            )
        });
    }

    c.bench_function("rescue-prime - permutation", |bench| {
        let desc = hasher.descriptor();
        bench.iter_batched(
            || Matrix::from_column(rand_vector::<BaseElement>(desc.state_width())),
            |state| desc.permute(black_box(&state)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("rescue-prime - construction", |bench| {
        bench.iter(|| RescuePrime::new_default())
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = rescue_prime);
criterion_main!(benches);
