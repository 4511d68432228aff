// Copyright 2016-2025 Brian Smith.
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

#![allow(missing_docs)]

use gsz::{error, stream, test, test_file};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use wasm_bindgen_test::{wasm_bindgen_test as test, wasm_bindgen_test_configure};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
wasm_bindgen_test_configure!(run_in_browser);

static ALL_ALGORITHMS: [&stream::Algorithm; 2] = [&stream::SNOW3G, &stream::ZUC];

#[test]
fn stream_snow3g_keystream() {
    test_keystream(&stream::SNOW3G, test_file!("snow3g_tests.txt"));
}

#[test]
fn stream_zuc_keystream() {
    test_keystream(&stream::ZUC, test_file!("zuc_tests.txt"));
}

fn test_keystream(alg: &'static stream::Algorithm, test_file: test::File) {
    test::run(test_file, |section, test_case| {
        assert_eq!(section, "");
        let key = test_case.consume_bytes("Key");
        let iv = test_case.consume_bytes("IV");
        let offset = test_case.consume_usize("Offset");
        let expected = test_case.consume_bytes("Keystream");

        let key: &[u8; stream::KEY_LEN] = key.as_slice().try_into().unwrap();
        let iv: &[u8; stream::IV_LEN] = iv.as_slice().try_into().unwrap();

        // Whole native blocks.
        let mut keystream = stream::Keystream::new(alg, key, iv);
        let mut actual = Vec::new();
        while actual.len() < offset + expected.len() {
            actual.extend_from_slice(&keystream.next_block());
        }
        assert_eq!(&expected[..], &actual[offset..][..expected.len()]);

        // Arbitrarily-sized pieces.
        let mut streaming = stream::StreamingKey::new(alg, key, iv)?;
        let mut skipped = vec![0u8; offset];
        for chunk in skipped.chunks_mut(17) {
            streaming.xor_keystream_in_place(chunk);
        }
        assert_eq!(&skipped[..], &actual[..offset]);
        let mut in_out = vec![0u8; expected.len()];
        streaming.xor_keystream_in_place(&mut in_out);
        assert_eq!(&expected[..], &in_out[..]);

        Ok(())
    });
}

#[test]
fn stream_encryption() {
    test::run(
        test_file!("stream_encryption_tests.txt"),
        |section, test_case| {
            assert_eq!(section, "");
            let alg = test_case.consume_stream_alg("Cipher");
            let key = test_case.consume_bytes("Key");
            let iv = test_case.consume_bytes("IV");
            let plaintext = test_case.consume_bytes("Plaintext");
            let ciphertext = test_case.consume_bytes("Ciphertext");

            let mut in_out = plaintext.clone();
            let mut sealing = stream::StreamingKey::new(alg, &key, &iv)?;
            sealing.xor_keystream_in_place(&mut in_out);
            assert_eq!(&ciphertext[..], &in_out[..]);

            let mut opening = stream::StreamingKey::new(alg, &key, &iv)?;
            let third = in_out.len() / 3;
            let (a, b) = in_out.split_at_mut(third);
            opening.xor_keystream_in_place(a);
            opening.xor_keystream_in_place(b);
            assert_eq!(&plaintext[..], &in_out[..]);

            Ok(())
        },
    );
}

/// The all-zero key and IV, applied to a buffer split at an odd position.
#[test]
fn stream_zero_key_first_words_split() {
    for (alg, expected) in [
        (&stream::SNOW3G, "c764a037b12fc857"),
        (&stream::ZUC, "27bede74018082da"),
    ] {
        let expected = test::from_hex(expected).unwrap();
        let mut in_out = vec![0u8; expected.len()];
        let mut key = stream::StreamingKey::new(alg, &[0; 16], &[0; 16]).unwrap();
        let split = in_out.len() / 3;
        let (a, b) = in_out.split_at_mut(split);
        key.xor_keystream_in_place(a);
        key.xor_keystream_in_place(b);
        assert_eq!(&expected[..], &in_out[..]);
    }
}

/// Two generators with the same key and IV produce the same stream, and
/// different IVs produce different streams.
#[test]
fn stream_deterministic() {
    for alg in ALL_ALGORITHMS {
        let key = [0x42; stream::KEY_LEN];
        let iv = [0x24; stream::IV_LEN];
        let mut a = stream::Keystream::new(alg, &key, &iv);
        let mut b = stream::Keystream::new(alg, &key, &iv);
        for _ in 0..4 {
            assert_eq!(a.next_block(), b.next_block());
        }

        let mut other_iv = iv;
        other_iv[stream::IV_LEN - 1] ^= 1;
        let mut a = stream::Keystream::new(alg, &key, &iv);
        let mut c = stream::Keystream::new(alg, &key, &other_iv);
        assert_ne!(a.next_block(), c.next_block());
    }
}

/// Consecutive blocks continue the stream rather than restarting it.
#[test]
fn stream_blocks_continue() {
    for alg in ALL_ALGORITHMS {
        let mut keystream = stream::Keystream::new(alg, &[0; 16], &[0; 16]);
        let first = keystream.next_block();
        let second = keystream.next_block();
        assert_ne!(first, second);
    }
}

#[test]
fn stream_involution() {
    let plaintext: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
    for alg in ALL_ALGORITHMS {
        let key = [0x0f; stream::KEY_LEN];
        let iv = [0xf0; stream::IV_LEN];

        let mut in_out = plaintext.clone();
        stream::StreamingKey::new(alg, &key, &iv)
            .unwrap()
            .xor_keystream_in_place(&mut in_out);
        assert_ne!(&plaintext[..], &in_out[..]);
        stream::StreamingKey::new(alg, &key, &iv)
            .unwrap()
            .xor_keystream_in_place(&mut in_out);
        assert_eq!(&plaintext[..], &in_out[..]);
    }
}

#[test]
fn stream_empty_input_consumes_nothing() {
    for alg in ALL_ALGORITHMS {
        let mut streaming = stream::StreamingKey::new(alg, &[1; 16], &[2; 16]).unwrap();
        streaming.xor_keystream_in_place(&mut [0u8; 0]);
        let mut in_out = [0u8; 4];
        streaming.xor_keystream_in_place(&mut in_out);

        let mut keystream = stream::Keystream::new(alg, &[1; 16], &[2; 16]);
        assert_eq!(&in_out[..], &keystream.next_block()[..4]);
    }
}

#[test]
fn stream_key_sizes() {
    for alg in ALL_ALGORITHMS {
        let bytes = [0u8; 2 * stream::KEY_LEN];
        let key_len = alg.key_len();
        let iv = &bytes[..alg.iv_len()];

        assert!(stream::StreamingKey::new(alg, &bytes[..key_len], iv).is_ok());
        for wrong in [0, 1, key_len - 1, key_len + 1, 2 * key_len] {
            let err = stream::StreamingKey::new(alg, &bytes[..wrong], iv).unwrap_err();
            assert_eq!("WrongKeyLength", &format!("{}", err));
            assert_eq!("WrongKeyLength", err.description_());
        }
    }
}

#[test]
fn stream_iv_sizes() {
    for alg in ALL_ALGORITHMS {
        let bytes = [0u8; 2 * stream::IV_LEN];
        let key = &bytes[..alg.key_len()];
        let iv_len = alg.iv_len();

        assert!(stream::StreamingKey::new(alg, key, &bytes[..iv_len]).is_ok());
        for wrong in [0, 1, iv_len / 2, iv_len - 1, iv_len + 1, 2 * iv_len] {
            let err = stream::StreamingKey::new(alg, key, &bytes[..wrong]).unwrap_err();
            assert_eq!("WrongIvLength", &format!("{}", err));
            let _: error::Unspecified = err.into();
        }
    }
}

#[test]
fn stream_algorithm_properties() {
    for alg in ALL_ALGORITHMS {
        assert_eq!(alg.key_len(), 16);
        assert_eq!(alg.iv_len(), 16);
        assert_eq!(alg.block_len(), stream::BLOCK_LEN);
        assert_eq!(stream::BLOCK_LEN, 128);

        let keystream = stream::Keystream::new(alg, &[0; 16], &[0; 16]);
        assert_eq!(keystream.algorithm(), alg);
        let streaming = stream::StreamingKey::from(keystream);
        assert_eq!(streaming.algorithm(), alg);
    }
    assert_ne!(&stream::SNOW3G, &stream::ZUC);
}

#[test]
fn stream_test_fmt() {
    assert_eq!("SNOW3G", &format!("{:?}", stream::SNOW3G));
    assert_eq!("ZUC", &format!("{:?}", stream::ZUC));
    assert_eq!(
        "Keystream { algorithm: SNOW3G, .. }",
        &format!(
            "{:?}",
            stream::Keystream::new(&stream::SNOW3G, &[0; 16], &[0; 16])
        )
    );
}
