// Copyright 2018-2025 Brian Smith.
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

//! Unauthenticated keystream generators: SNOW 3G and ZUC.
//!
//! # Warning
//!
//! These are the raw keystream generators underlying UEA2/UIA2 and
//! 128-EEA3/128-EIA3. They provide no authentication, and reusing a key/IV
//! pair for two messages reveals the XOR of the plaintexts.
//!
//! [`Keystream`] produces the native keystream one [`BLOCK_LEN`]-byte block at
//! a time. [`StreamingKey`] wraps a `Keystream` and XORs it into buffers of
//! any length, carrying unused keystream over from one call to the next.
//!
//! # Key and IV layout
//!
//! Both algorithms take a 128-bit key and a 128-bit IV as byte strings in the
//! order used by the 3GPP confidentiality algorithms: for SNOW 3G the first
//! four bytes are the most significant key word `k3` and the last four bytes
//! are `k0` (likewise for the IV); for ZUC byte `i` is the key byte that
//! seeds LFSR cell `s_i`.

use self::dynstate::DynState;
use crate::error;

mod dynstate;
mod snow3g;
mod zuc;

/// The length of the key of every algorithm in this module.
pub const KEY_LEN: usize = 128 / 8;

/// The length of the IV of every algorithm in this module.
pub const IV_LEN: usize = 128 / 8;

/// The length of a native keystream block, which is 32 keystream words.
pub const BLOCK_LEN: usize = 4 * BLOCK_WORDS;

const BLOCK_WORDS: usize = 32;

/// The number of clocks a generator runs in initialization mode.
const INIT_CLOCKS: usize = 32;

/// A native keystream generator for one key and IV.
///
/// Each call to [`Self::next_block`] returns the next [`BLOCK_LEN`] bytes of
/// the keystream; keystream words are serialized big-endian.
pub struct Keystream {
    state: DynState,
    algorithm: &'static Algorithm,
}

derive_debug_via_field!(Keystream, algorithm);

impl Keystream {
    /// Keys and initializes the generator, running the initialization clocks
    /// so that the first call to `next_block` returns the first keystream
    /// word.
    pub fn new(algorithm: &'static Algorithm, key: &[u8; KEY_LEN], iv: &[u8; IV_LEN]) -> Self {
        Self {
            state: (algorithm.init)(key, iv),
            algorithm,
        }
    }

    /// Generates the next block of keystream.
    #[inline]
    pub fn next_block(&mut self) -> [u8; BLOCK_LEN] {
        let mut block = [0u8; BLOCK_LEN];
        (self.algorithm.keystream_block)(&mut self.state, &mut block);
        block
    }

    /// The generator's algorithm.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.algorithm
    }
}

/// A keyed stream cipher that can encrypt (or, equivalently, decrypt)
/// messages split into pieces of any length.
///
/// # Examples
///
/// ```
/// use gsz::stream;
///
/// let key = [0x17; stream::KEY_LEN];
/// let iv = [0x66; stream::IV_LEN];
///
/// let mut in_out = *b"attack at dawn";
/// let mut sealing = stream::StreamingKey::new(&stream::ZUC, &key, &iv).unwrap();
/// sealing.xor_keystream_in_place(&mut in_out[..6]);
/// sealing.xor_keystream_in_place(&mut in_out[6..]);
///
/// let mut opening = stream::StreamingKey::new(&stream::ZUC, &key, &iv).unwrap();
/// opening.xor_keystream_in_place(&mut in_out);
/// assert_eq!(&in_out, b"attack at dawn");
/// ```
pub struct StreamingKey {
    keystream: Keystream,
    block: [u8; BLOCK_LEN],

    // Invariant: `self.used <= BLOCK_LEN`. `self.block[self.used..]` is the
    // keystream that has been generated but not yet used.
    used: usize,
}

impl StreamingKey {
    /// Constructs a new key from `key_bytes` and `iv_bytes`, which must be
    /// exactly `algorithm.key_len()` and `algorithm.iv_len()` bytes long.
    pub fn new(
        algorithm: &'static Algorithm,
        key_bytes: &[u8],
        iv_bytes: &[u8],
    ) -> Result<Self, error::KeyRejected> {
        let key = key_bytes
            .try_into()
            .map_err(|_| error::KeyRejected::wrong_key_length())?;
        let iv = iv_bytes
            .try_into()
            .map_err(|_| error::KeyRejected::wrong_iv_length())?;
        Ok(Self::from(Keystream::new(algorithm, key, iv)))
    }

    /// XORs the next `in_out.len()` bytes of keystream into `in_out`.
    pub fn xor_keystream_in_place(&mut self, in_out: &mut [u8]) {
        let unused = &self.block[self.used..];
        let (head, tail) = in_out.split_at_mut(core::cmp::min(unused.len(), in_out.len()));
        xor_in_place(head, unused);
        self.used += head.len();

        tail.chunks_mut(BLOCK_LEN).for_each(|chunk| {
            self.block = self.keystream.next_block();
            xor_in_place(chunk, &self.block);
            self.used = chunk.len();
        });
    }

    /// The key's algorithm.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.keystream.algorithm
    }
}

impl From<Keystream> for StreamingKey {
    fn from(keystream: Keystream) -> Self {
        Self {
            keystream,
            block: [0u8; BLOCK_LEN],
            used: BLOCK_LEN,
        }
    }
}

derive_debug_via_field!(StreamingKey, keystream);

// `keystream` may be longer than `in_out`.
fn xor_in_place(in_out: &mut [u8], keystream: &[u8]) {
    in_out
        .iter_mut()
        .zip(keystream)
        .for_each(|(b, k)| *b ^= k);
}

/// A keystream generator algorithm.
pub struct Algorithm {
    init: fn(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN]) -> DynState,
    keystream_block: fn(state: &mut DynState, block: &mut [u8; BLOCK_LEN]),
    id: AlgorithmID,
}

impl Algorithm {
    /// The length of the key.
    #[inline(always)]
    pub fn key_len(&self) -> usize {
        KEY_LEN
    }

    /// The length of the IV.
    #[inline(always)]
    pub fn iv_len(&self) -> usize {
        IV_LEN
    }

    /// The length of the block produced by [`Keystream::next_block`].
    #[inline(always)]
    pub fn block_len(&self) -> usize {
        BLOCK_LEN
    }
}

derive_debug_via_id!(Algorithm);

#[derive(Debug, Eq, PartialEq)]
enum AlgorithmID {
    SNOW3G,
    ZUC,
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Algorithm {}

/// SNOW 3G, as specified in ETSI/SAGE "Specification of the 3GPP
/// Confidentiality and Integrity Algorithms UEA2 & UIA2, Document 2".
pub static SNOW3G: Algorithm = Algorithm {
    init: dynstate::snow3g_init,
    keystream_block: dynstate::snow3g_keystream_block,
    id: AlgorithmID::SNOW3G,
};

/// ZUC, as specified in ETSI/SAGE "Specification of the 3GPP Confidentiality
/// and Integrity Algorithms 128-EEA3 & 128-EIA3, Document 2: ZUC
/// Specification", version 1.6.
pub static ZUC: Algorithm = Algorithm {
    init: dynstate::zuc_init,
    keystream_block: dynstate::zuc_keystream_block,
    id: AlgorithmID::ZUC,
};

/// How the LFSR of a generator is clocked.
#[derive(Clone, Copy)]
enum Clocking {
    /// The nonlinear function's output is mixed into the feedback.
    Initialization(u32),
    Keystream,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn test_split_matches_next_block() {
        let key = [0u8; KEY_LEN];
        let iv = [0u8; IV_LEN];

        let mut keystream = Keystream::new(&SNOW3G, &key, &iv);
        let mut expected = [0u8; 3 * BLOCK_LEN];
        expected
            .chunks_mut(BLOCK_LEN)
            .for_each(|chunk| chunk.copy_from_slice(&keystream.next_block()));

        let mut actual = [0u8; 3 * BLOCK_LEN];
        let mut streaming = StreamingKey::from(Keystream::new(&SNOW3G, &key, &iv));
        let (a, rest) = actual.split_at_mut(1);
        let (b, rest) = rest.split_at_mut(BLOCK_LEN);
        let (c, d) = rest.split_at_mut(BLOCK_LEN - 1);
        for part in [a, b, c, d] {
            streaming.xor_keystream_in_place(part);
        }
        assert_eq!(&actual[..], &expected[..]);
        assert_eq!(streaming.used, BLOCK_LEN);
    }

    #[test]
    fn test_debug_does_not_reveal_state() {
        let key = StreamingKey::new(&ZUC, &[0xff; KEY_LEN], &[0xff; IV_LEN]).unwrap();
        assert_eq!(
            "StreamingKey { keystream: Keystream { algorithm: ZUC, .. }, .. }",
            &format!("{:?}", key)
        );
    }
}
