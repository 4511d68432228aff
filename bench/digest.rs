// Copyright 2023 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gsz::digest;

static ALGORITHMS: &[(&str, &digest::Algorithm)] = &[
    ("groestl224", &digest::GROESTL224),
    ("groestl256", &digest::GROESTL256),
    ("groestl384", &digest::GROESTL384),
    ("groestl512", &digest::GROESTL512),
];

const INPUT_LENGTHS: &[usize] = &[
    // Benchmark that emphasizes overhead.
    0,
    32,
    55, // The longest input that pads to one 64-byte block.
    64,
    119, // The longest input that pads to one 128-byte block.
    128,
    1024,
    2048,
    4096,
    8192,
    1024 * 1024,
];

const SMALL_MAX: usize = 8192;

#[repr(align(64))]
struct Small([u8; SMALL_MAX]);

fn chunked(c: &mut Criterion) {
    let input = Small([0; SMALL_MAX]);
    for &(alg_name, algorithm) in ALGORITHMS {
        for chunk_len in [1, 17, algorithm.block_len()] {
            c.bench_with_input(
                BenchmarkId::new(format!("digest::chunked::{alg_name}"), chunk_len),
                &chunk_len,
                |b, &chunk_len| {
                    b.iter(|| -> usize {
                        let mut ctx = digest::Context::new(algorithm);
                        input.0.chunks(chunk_len).for_each(|chunk| ctx.update(chunk));
                        black_box(ctx.finish().as_ref().len())
                    })
                },
            );
        }
    }
}

fn oneshot(c: &mut Criterion) {
    for &(alg_name, algorithm) in ALGORITHMS {
        for input_len in INPUT_LENGTHS {
            c.bench_with_input(
                BenchmarkId::new(format!("digest::oneshot::{alg_name}"), input_len),
                input_len,
                |b, &input_len| {
                    let small;
                    let v;
                    let input = if input_len <= SMALL_MAX {
                        // Use an aligned buffer to minimize alignment-related variance.
                        small = Small([0; SMALL_MAX]);
                        &small.0[..input_len]
                    } else {
                        v = vec![0u8; input_len];
                        &v[..]
                    };
                    b.iter(|| -> usize {
                        let digest = digest::digest(algorithm, &input);
                        black_box(digest.as_ref().len())
                    })
                },
            );
        }
    }
}

criterion_group!(digest, oneshot, chunked);
criterion_main!(digest);
