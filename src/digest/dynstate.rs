// Copyright 2015-2025 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

use super::{groestl, Output, MAX_CHAINING_LEN, MAX_OUTPUT_LEN};
use crate::polyfill::slice;

// Invariant: When constructed with `new_short` (resp. `new_long`), `Short`
// (resp. `Long`) is the active variant.
// Invariant: The active variant never changes after initialization.
#[derive(Clone)]
pub(super) enum DynState {
    Short(groestl::ShortState),
    Long(groestl::LongState),
}

impl DynState {
    pub const fn new_short(output_len: usize) -> Self {
        Self::Short(groestl::initial_state(output_len))
    }

    pub const fn new_long(output_len: usize) -> Self {
        Self::Long(groestl::initial_state(output_len))
    }

    /// Applies the output transformation and truncates the result to the
    /// rightmost `output_len` bytes.
    pub fn format_output(self, output_len: usize) -> Output {
        match self {
            Self::Short(mut state) => {
                groestl::output_transform_short(&mut state);
                format_output(&state, output_len)
            }
            Self::Long(mut state) => {
                groestl::output_transform_long(&mut state);
                format_output(&state, output_len)
            }
        }
    }
}

fn format_output<const N: usize>(state: &[u64; N], output_len: usize) -> Output {
    let mut chaining = [0u8; MAX_CHAINING_LEN];
    let chaining_len = N * 8;
    chaining
        .chunks_exact_mut(8)
        .zip(state.iter())
        .for_each(|(out, word)| out.copy_from_slice(&word.to_be_bytes()));

    let mut output = [0u8; MAX_OUTPUT_LEN];
    output[..output_len].copy_from_slice(&chaining[(chaining_len - output_len)..chaining_len]);
    output
}

pub(super) fn short_block_data_order<'d>(state: &mut DynState, data: &'d [u8]) -> (usize, &'d [u8]) {
    let state = match state {
        DynState::Short(state) => state,
        _ => {
            unreachable!();
        }
    };

    let (full_blocks, leftover) = slice::as_chunks(data);
    groestl::block_data_order_short(state, full_blocks);
    (full_blocks.len(), leftover)
}

pub(super) fn long_block_data_order<'d>(state: &mut DynState, data: &'d [u8]) -> (usize, &'d [u8]) {
    let state = match state {
        DynState::Long(state) => state,
        _ => {
            unreachable!();
        }
    };

    let (full_blocks, leftover) = slice::as_chunks(data);
    groestl::block_data_order_long(state, full_blocks);
    (full_blocks.len(), leftover)
}
