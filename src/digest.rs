// Copyright 2015-2019 Brian Smith.
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

//! The Groestl digest algorithms.
//!
//! If all the data is available in a single contiguous slice then the `digest`
//! function should be used. Otherwise, the digest can be calculated in
//! multiple steps using `Context`.

use self::dynstate::DynState;
use crate::{error::InputTooLongError, polyfill};

mod dynstate;
mod groestl;

/// The length of the block counter that ends the final padding block.
const BLOCK_COUNTER_LEN: usize = 64 / 8;

#[derive(Clone)]
pub(crate) struct BlockContext {
    state: DynState,

    // Groestl encodes the number of blocks processed, padding blocks
    // included, as a 64-bit big-endian integer. We refuse to process more
    // blocks than that counter can represent.
    completed_blocks: u64,

    /// The context's algorithm.
    pub algorithm: &'static Algorithm,
}

impl BlockContext {
    pub(crate) fn new(algorithm: &'static Algorithm) -> Self {
        Self {
            state: algorithm.initial_state.clone(),
            completed_blocks: 0,
            algorithm,
        }
    }

    /// Processes all the whole blocks at the start of `input` and returns the
    /// remaining (less than one block of) input.
    pub(crate) fn update<'i>(
        &mut self,
        input: &'i [u8],
    ) -> Result<&'i [u8], InputTooLongError<u64>> {
        let num_blocks = polyfill::u64_from_usize(input.len() / self.algorithm.block_len);
        self.completed_blocks = self
            .completed_blocks
            .checked_add(num_blocks)
            .ok_or_else(|| InputTooLongError::new(self.completed_blocks))?;

        let (blocks_processed, leftover) = (self.algorithm.block_data_order)(&mut self.state, input);
        debug_assert_eq!(polyfill::u64_from_usize(blocks_processed), num_blocks);
        Ok(leftover)
    }

    /// Pads the final `num_pending` bytes of input, which are at the start of
    /// `pending`, and processes the padding block(s). `pending` must be at
    /// least `self.algorithm.block_len` bytes long and `num_pending` must be
    /// less than the block length.
    pub(crate) fn finish(
        mut self,
        pending: &mut [u8],
        num_pending: usize,
    ) -> Result<Digest, InputTooLongError<u64>> {
        let block_len = self.algorithm.block_len;
        let pending = &mut pending[..block_len];
        assert!(num_pending < block_len);

        let mut padding_pos = num_pending;
        pending[padding_pos] = 0x80;
        padding_pos += 1;

        if padding_pos > block_len - BLOCK_COUNTER_LEN {
            pending[padding_pos..].fill(0);
            let _: &[u8] = self.update(pending)?;
            padding_pos = 0;
        }

        pending[padding_pos..(block_len - BLOCK_COUNTER_LEN)].fill(0);

        // The counter includes the block it is written into.
        let total_blocks = self
            .completed_blocks
            .checked_add(1)
            .ok_or_else(|| InputTooLongError::new(self.completed_blocks))?;
        pending[(block_len - BLOCK_COUNTER_LEN)..].copy_from_slice(&total_blocks.to_be_bytes());
        let _: &[u8] = self.update(pending)?;

        Ok(Digest {
            algorithm: self.algorithm,
            value: self.state.format_output(self.algorithm.output_len),
        })
    }
}

/// A context for multi-step (Init-Update-Finish) digest calculations.
///
/// # Examples
///
/// ```
/// use gsz::digest;
///
/// let one_shot = digest::digest(&digest::GROESTL384, b"hello, world");
///
/// let mut ctx = digest::Context::new(&digest::GROESTL384);
/// ctx.update(b"hello");
/// ctx.update(b", ");
/// ctx.update(b"world");
/// let multi_part = ctx.finish();
///
/// assert_eq!(&one_shot.as_ref(), &multi_part.as_ref());
/// ```
#[derive(Clone)]
pub struct Context {
    block: BlockContext,
    pending: [u8; MAX_BLOCK_LEN],

    // Invariant: `self.num_pending < self.block.algorithm.block_len`.
    num_pending: usize,
}

impl Context {
    /// Constructs a new context.
    pub fn new(algorithm: &'static Algorithm) -> Self {
        Self {
            block: BlockContext::new(algorithm),
            pending: [0u8; MAX_BLOCK_LEN],
            num_pending: 0,
        }
    }

    /// Updates the digest with all the data in `data`.
    #[inline(always)]
    pub fn update(&mut self, data: &[u8]) {
        self.try_update(data)
            .unwrap_or_else(|err| input_too_long_panic(err))
    }

    fn try_update(&mut self, data: &[u8]) -> Result<(), InputTooLongError<u64>> {
        let block_len = self.block.algorithm.block_len;
        let buffer = &mut self.pending[..block_len];

        let to_fill = &mut buffer[self.num_pending..];
        if data.len() < to_fill.len() {
            to_fill[..data.len()].copy_from_slice(data);
            self.num_pending += data.len();
            return Ok(());
        }

        let remaining = if self.num_pending > 0 {
            let (to_copy, remaining) = data.split_at(to_fill.len());
            to_fill.copy_from_slice(to_copy);
            let leftover = self.block.update(buffer)?;
            debug_assert!(leftover.is_empty());
            self.num_pending = 0;
            remaining
        } else {
            data
        };

        let leftover = self.block.update(remaining)?;
        self.pending[..leftover.len()].copy_from_slice(leftover);
        self.num_pending = leftover.len();
        Ok(())
    }

    /// Finalizes the digest calculation and returns the digest value.
    ///
    /// `finish` consumes the context so it cannot be (mis-)used after `finish`
    /// has been called.
    pub fn finish(self) -> Digest {
        let Self {
            block,
            mut pending,
            num_pending,
        } = self;
        block
            .finish(&mut pending, num_pending)
            .unwrap_or_else(|err| input_too_long_panic(err))
    }

    /// The algorithm that this context is using.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.block.algorithm
    }
}

#[cold]
#[inline(never)]
fn input_too_long_panic(err: InputTooLongError<u64>) -> ! {
    panic!("digest input too long: {:?}", err)
}

/// Returns the digest of `data` using the given digest algorithm.
///
/// # Examples:
///
/// ```
/// # #[cfg(feature = "alloc")]
/// # {
/// use gsz::{digest, test};
/// let expected_hex = "1a52d11d550039be16107f9c58db9ebcc417f16f736adb2502567119f0083467";
/// let expected: Vec<u8> = test::from_hex(expected_hex).unwrap();
/// let actual = digest::digest(&digest::GROESTL256, b"");
///
/// assert_eq!(&expected, &actual.as_ref());
/// # }
/// ```
pub fn digest(algorithm: &'static Algorithm, data: &[u8]) -> Digest {
    let mut ctx = Context::new(algorithm);
    ctx.update(data);
    ctx.finish()
}

/// A calculated digest value.
///
/// Use [`Self::as_ref`] to get the value as a `&[u8]`.
#[derive(Clone, Copy)]
pub struct Digest {
    value: Output,
    algorithm: &'static Algorithm,
}

impl Digest {
    /// The algorithm that was used to calculate the digest value.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.algorithm
    }
}

impl AsRef<[u8]> for Digest {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.value[..self.algorithm.output_len]
    }
}

impl core::fmt::Debug for Digest {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(fmt, "{:?}:", self.algorithm)?;
        for byte in self.as_ref() {
            write!(fmt, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// A digest algorithm.
pub struct Algorithm {
    output_len: usize,
    chaining_len: usize,
    block_len: usize,

    /// Processes the whole blocks at the start of `data`, returning the number
    /// of blocks processed and the leftover input.
    block_data_order: for<'d> fn(state: &mut DynState, data: &'d [u8]) -> (usize, &'d [u8]),

    initial_state: DynState,

    id: AlgorithmID,
}

#[derive(Debug, Eq, PartialEq)]
enum AlgorithmID {
    GROESTL224,
    GROESTL256,
    GROESTL384,
    GROESTL512,
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Algorithm {}

derive_debug_via_id!(Algorithm);

impl Algorithm {
    /// The internal block length.
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// The size of the chaining value of the digest function, in bytes.
    ///
    /// Groestl is a wide-pipe construction, so this is always twice
    /// `output_len` rounded up to the width of the permutation: 64 bytes for
    /// Groestl-224 and Groestl-256, 128 bytes for Groestl-384 and Groestl-512.
    pub fn chaining_len(&self) -> usize {
        self.chaining_len
    }

    /// The length of a finalized digest.
    pub fn output_len(&self) -> usize {
        self.output_len
    }
}

/// Groestl-224, which uses the 512-bit permutations P512 and Q512.
pub static GROESTL224: Algorithm = Algorithm {
    output_len: 224 / 8,
    chaining_len: groestl::SHORT_BLOCK_LEN,
    block_len: groestl::SHORT_BLOCK_LEN,
    block_data_order: dynstate::short_block_data_order,
    initial_state: DynState::new_short(224 / 8),
    id: AlgorithmID::GROESTL224,
};

/// Groestl-256, which uses the 512-bit permutations P512 and Q512.
pub static GROESTL256: Algorithm = Algorithm {
    output_len: 256 / 8,
    chaining_len: groestl::SHORT_BLOCK_LEN,
    block_len: groestl::SHORT_BLOCK_LEN,
    block_data_order: dynstate::short_block_data_order,
    initial_state: DynState::new_short(256 / 8),
    id: AlgorithmID::GROESTL256,
};

/// Groestl-384, which uses the 1024-bit permutations P1024 and Q1024.
pub static GROESTL384: Algorithm = Algorithm {
    output_len: 384 / 8,
    chaining_len: groestl::LONG_BLOCK_LEN,
    block_len: groestl::LONG_BLOCK_LEN,
    block_data_order: dynstate::long_block_data_order,
    initial_state: DynState::new_long(384 / 8),
    id: AlgorithmID::GROESTL384,
};

/// Groestl-512, which uses the 1024-bit permutations P1024 and Q1024.
pub static GROESTL512: Algorithm = Algorithm {
    output_len: 512 / 8,
    chaining_len: groestl::LONG_BLOCK_LEN,
    block_len: groestl::LONG_BLOCK_LEN,
    block_data_order: dynstate::long_block_data_order,
    initial_state: DynState::new_long(512 / 8),
    id: AlgorithmID::GROESTL512,
};

/// The maximum block length ([`Algorithm::block_len()`]) of all the algorithms
/// in this module.
pub const MAX_BLOCK_LEN: usize = 1024 / 8;

/// The maximum output length ([`Algorithm::output_len()`]) of all the
/// algorithms in this module.
pub const MAX_OUTPUT_LEN: usize = 512 / 8;

/// The maximum chaining length ([`Algorithm::chaining_len()`]) of all the
/// algorithms in this module.
pub const MAX_CHAINING_LEN: usize = 1024 / 8;

type Output = [u8; MAX_OUTPUT_LEN];
