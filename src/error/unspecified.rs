// Copyright 2016-2024 Brian Smith.
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

#[cfg(feature = "std")]
extern crate std;

/// An error with absolutely no details.
///
/// This crate uses this unit type as the error type in results where the
/// reason for a failure is obvious from context. `Result<T,
/// gsz::error::Unspecified>` is mostly equivalent to `Result<T, ()>`.
/// However, `gsz::error::Unspecified` implements [`std::error::Error`] (with
/// the `std` feature) and users can implement `From<gsz::error::Unspecified>`
/// to map this to their own error types:
///
/// ```
/// use gsz::{error, stream};
///
/// enum Error {
///     CryptoError,
///     // [...]
/// }
///
/// impl From<error::Unspecified> for Error {
///     fn from(_: error::Unspecified) -> Self { Error::CryptoError }
/// }
///
/// fn first_keystream_block(key: &[u8], iv: &[u8]) -> Result<[u8; 8], Error> {
///     let mut key = stream::StreamingKey::new(&stream::ZUC, key, iv)
///         .map_err(error::Unspecified::from)?;
///     let mut block = [0; 8];
///     key.xor_keystream_in_place(&mut block);
///     Ok(block)
/// }
///
/// assert!(first_keystream_block(&[0; 16], &[0; 16]).is_ok());
/// assert!(first_keystream_block(&[0; 15], &[0; 16]).is_err());
/// ```
///
/// [`std::error::Error`]: https://doc.rust-lang.org/std/error/trait.Error.html
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unspecified;

// This is required for the implementation of `std::error::Error`.
impl core::fmt::Display for Unspecified {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("gsz::error::Unspecified")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Unspecified {}
