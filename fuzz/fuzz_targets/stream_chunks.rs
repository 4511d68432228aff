#![no_main]
use gsz::stream;
use libfuzzer_sys::fuzz_target;

// The input is a selector byte, a key and an IV, then a message that is
// encrypted in pieces and compared against whole-message encryption.
fuzz_target!(|data: &[u8]| {
    const HEADER_LEN: usize = 1 + stream::KEY_LEN + stream::IV_LEN;
    if data.len() < HEADER_LEN {
        return;
    }
    let (header, msg) = data.split_at(HEADER_LEN);
    let alg = if header[0] & 1 == 0 {
        &stream::SNOW3G
    } else {
        &stream::ZUC
    };
    let chunk_len = usize::from(header[0] >> 1) + 1;
    let key = &header[1..][..stream::KEY_LEN];
    let iv = &header[(1 + stream::KEY_LEN)..];

    let mut whole = msg.to_vec();
    let Ok(mut key_whole) = stream::StreamingKey::new(alg, key, iv) else {
        return;
    };
    key_whole.xor_keystream_in_place(&mut whole);

    let mut pieces = msg.to_vec();
    let Ok(mut key_pieces) = stream::StreamingKey::new(alg, key, iv) else {
        return;
    };
    pieces
        .chunks_mut(chunk_len)
        .for_each(|chunk| key_pieces.xor_keystream_in_place(chunk));

    assert_eq!(whole, pieces);
});
