// Copyright 2015-2016 Brian Smith.
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

#![allow(unsafe_code)]

// TODO(MSRV-1.88): Use `slice::as_chunks`.
#[inline]
pub fn as_chunks<T, const N: usize>(slice: &[T]) -> (&[[T; N]], &[T]) {
    assert!(N != 0);
    let len = slice.len();
    let remainder_len = len % N;
    let (chunks, remainder) = slice.split_at(len - remainder_len);
    let chunks = <*const T>::cast::<[T; N]>(chunks.as_ptr());
    // SAFETY: `chunks` is exactly `len / N` arrays of `N` elements long, and
    // `[T; N]` has the same alignment as `T`.
    let chunks = unsafe { core::slice::from_raw_parts(chunks, len / N) };
    (chunks, remainder)
}
