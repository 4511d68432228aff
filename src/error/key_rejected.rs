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

//! Error reporting.

#[cfg(feature = "std")]
extern crate std;

/// An error validating a key or IV.
///
/// The `Display` implementation returns a short string naming the reason the
/// key was rejected. The set of reasons may grow over time; do not match on
/// the string.
///
/// Currently the only reasons are length mismatches:
///
/// * `WrongKeyLength`: the key is not exactly `Algorithm::key_len()` bytes.
///
/// * `WrongIvLength`: the IV is not exactly `Algorithm::iv_len()` bytes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyRejected(&'static str);

impl KeyRejected {
    pub(crate) fn wrong_key_length() -> Self {
        Self("WrongKeyLength")
    }

    pub(crate) fn wrong_iv_length() -> Self {
        Self("WrongIvLength")
    }

    /// The reason the key was rejected.
    pub fn description_(&self) -> &'static str {
        self.0
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KeyRejected {}

impl core::fmt::Display for KeyRejected {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.0)
    }
}
