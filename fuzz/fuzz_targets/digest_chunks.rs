#![no_main]
use gsz::digest;
use libfuzzer_sys::fuzz_target;

// The first byte selects the algorithm and the chunk length used to feed the
// rest of the input to an incremental context.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, msg)) = data.split_first() else {
        return;
    };
    let alg = match selector & 3 {
        0 => &digest::GROESTL224,
        1 => &digest::GROESTL256,
        2 => &digest::GROESTL384,
        _ => &digest::GROESTL512,
    };
    let chunk_len = usize::from(selector >> 2) + 1;

    let mut ctx = digest::Context::new(alg);
    msg.chunks(chunk_len).for_each(|chunk| ctx.update(chunk));
    let chunked = ctx.finish();

    assert_eq!(chunked.as_ref(), digest::digest(alg, msg).as_ref());
});
