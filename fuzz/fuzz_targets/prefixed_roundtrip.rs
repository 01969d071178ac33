#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Round-trip through the length-prefixed convenience codec; any valid
    // input must come back byte-identical.
    let framed = match lz4_bridge::compress_prefixed(data) {
        Ok(f) => f,
        // Only oversize inputs may fail, and the fuzzer never produces those.
        Err(e) => panic!("compress_prefixed failed on {} bytes: {e}", data.len()),
    };

    let recovered =
        lz4_bridge::decompress_prefixed(&framed).expect("framed output must decompress");

    assert_eq!(
        recovered,
        data,
        "prefixed round-trip mismatch: {} bytes framed to {}, recovered {}",
        data.len(),
        framed.len(),
        recovered.len()
    );
});
