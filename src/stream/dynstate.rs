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

use super::{snow3g, zuc, BLOCK_LEN, IV_LEN, KEY_LEN};

// Invariant: The active variant is determined by the algorithm that
// constructed the state and never changes.
pub(super) enum DynState {
    Snow3g(snow3g::State),
    Zuc(zuc::State),
}

pub(super) fn snow3g_init(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN]) -> DynState {
    DynState::Snow3g(snow3g::State::new(key, iv))
}

pub(super) fn zuc_init(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN]) -> DynState {
    DynState::Zuc(zuc::State::new(key, iv))
}

pub(super) fn snow3g_keystream_block(state: &mut DynState, block: &mut [u8; BLOCK_LEN]) {
    let state = match state {
        DynState::Snow3g(state) => state,
        _ => {
            unreachable!();
        }
    };
    fill_block(block, || state.next_word());
}

pub(super) fn zuc_keystream_block(state: &mut DynState, block: &mut [u8; BLOCK_LEN]) {
    let state = match state {
        DynState::Zuc(state) => state,
        _ => {
            unreachable!();
        }
    };
    fill_block(block, || state.next_word());
}

fn fill_block(block: &mut [u8; BLOCK_LEN], mut next_word: impl FnMut() -> u32) {
    block
        .chunks_exact_mut(4)
        .for_each(|out| out.copy_from_slice(&next_word().to_be_bytes()));
}
