// Copyright 2025 Brian Smith.
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

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gsz::stream;

static ALGORITHMS: &[(&str, &stream::Algorithm)] =
    &[("snow3g", &stream::SNOW3G), ("zuc", &stream::ZUC)];

const KEY: [u8; stream::KEY_LEN] = [0x2b; stream::KEY_LEN];
const IV: [u8; stream::IV_LEN] = [0x72; stream::IV_LEN];

const INPUT_LENGTHS: &[usize] = &[16, 128, 1350, 8192];

// Includes the cost of keying, which dominates short messages.
fn encrypt(c: &mut Criterion) {
    for &(alg_name, algorithm) in ALGORITHMS {
        let mut group = c.benchmark_group(format!("stream::encrypt::{alg_name}"));
        for &input_len in INPUT_LENGTHS {
            group.throughput(Throughput::Bytes(input_len as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(input_len),
                &input_len,
                |b, &input_len| {
                    let mut in_out = vec![0u8; input_len];
                    b.iter(|| {
                        let mut key =
                            stream::StreamingKey::new(algorithm, &KEY, &IV).unwrap();
                        key.xor_keystream_in_place(&mut in_out);
                        black_box(in_out[0])
                    })
                },
            );
        }
        group.finish();
    }
}

fn keystream_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream::next_block");
    group.throughput(Throughput::Bytes(stream::BLOCK_LEN as u64));
    for &(alg_name, algorithm) in ALGORITHMS {
        let mut keystream = stream::Keystream::new(algorithm, &KEY, &IV);
        group.bench_function(alg_name, |b| {
            b.iter(|| black_box(keystream.next_block()))
        });
    }
    group.finish();
}

criterion_group!(stream, encrypt, keystream_blocks);
criterion_main!(stream);
