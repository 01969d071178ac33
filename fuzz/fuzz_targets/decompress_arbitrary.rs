#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4_bridge::{decompress, Region, RegionMut};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the bridge decompressor.
    // Err results are expected and fine; what we verify is no panics and no
    // out-of-bounds writes.
    let len = match i32::try_from(data.len()) {
        Ok(n) => n,
        Err(_) => return,
    };

    // Zero-capacity destination.
    {
        let mut dst = [0u8; 0];
        let _ = decompress(
            Region::new(data, 0, len).unwrap(),
            RegionMut::new(&mut dst, 0, 0).unwrap(),
        );
    }

    // 4 KiB destination — covers most real block sizes.
    {
        let mut dst = vec![0u8; 4096];
        let _ = decompress(
            Region::new(data, 0, len).unwrap(),
            RegionMut::new(&mut dst, 0, 4096).unwrap(),
        );
    }

    // Destination region carved out of a larger buffer with guard bands; a
    // successful or failed call must leave the bands untouched.
    {
        let cap = (data.len().saturating_mul(4)).min(1 << 16) as i32;
        let mut dst = vec![0x5Au8; 32 + cap as usize + 32];
        let _ = decompress(
            Region::new(data, 0, len).unwrap(),
            RegionMut::new(&mut dst, 32, cap).unwrap(),
        );
        assert!(dst[..32].iter().all(|&b| b == 0x5A), "front guard clobbered");
        assert!(
            dst[32 + cap as usize..].iter().all(|&b| b == 0x5A),
            "rear guard clobbered"
        );
    }

    // Also interpret the input as a prefixed frame; must never panic.
    // Cap the declared length at 1 MiB so the fuzzer doesn't allocate
    // gigabytes for a 4-byte input that claims a huge output.
    if data.len() >= 4 {
        let declared = i32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        if (0..=1 << 20).contains(&declared) {
            let _ = lz4_bridge::decompress_prefixed(data);
        }
    } else {
        let _ = lz4_bridge::decompress_prefixed(data);
    }
});
