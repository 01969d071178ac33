//! E2E Test Suite 01: Bridge One-Shot Operations
//!
//! Validates the core bridge operations over caller-owned buffers:
//! - compute_bound
//! - compress
//! - decompress
//! - compress_prefixed / decompress_prefixed
//!
//! These tests exercise the happy paths: round-trips through bound-sized
//! destinations, region offsets, and the bound function's properties.

use lz4_bridge::{
    compress, compress_prefixed, compute_bound, decompress, decompress_prefixed, Region, RegionMut,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: round-trip — typical compressible data
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_typical_data() {
    init_logs();
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(20);
    let len = original.len() as i32;

    let bound = compute_bound(len).expect("bound should succeed");
    assert!(bound >= len);

    let mut compressed = vec![0u8; bound as usize];
    let written = compress(
        Region::new(&original, 0, len).unwrap(),
        RegionMut::new(&mut compressed, 0, bound).unwrap(),
    )
    .expect("compression should succeed");

    // Repetitive data must shrink.
    assert!((written as usize) < original.len());

    let mut recovered = vec![0u8; original.len()];
    let produced = decompress(
        Region::new(&compressed, 0, written).unwrap(),
        RegionMut::new(&mut recovered, 0, len).unwrap(),
    )
    .expect("decompression should succeed");

    assert_eq!(produced, len);
    assert_eq!(recovered, original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: round-trip — incompressible data stays within the bound
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_incompressible_data() {
    let original: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let len = original.len() as i32;

    let bound = compute_bound(len).unwrap();
    let mut compressed = vec![0u8; bound as usize];
    let written = compress(
        Region::new(&original, 0, len).unwrap(),
        RegionMut::new(&mut compressed, 0, bound).unwrap(),
    )
    .expect("compression should succeed even when data expands");

    assert!(written <= bound);

    let mut recovered = vec![0u8; original.len()];
    let produced = decompress(
        Region::new(&compressed, 0, written).unwrap(),
        RegionMut::new(&mut recovered, 0, len).unwrap(),
    )
    .unwrap();

    assert_eq!(produced, len);
    assert_eq!(recovered, original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: round-trip — empty input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_empty_input() {
    let original: [u8; 0] = [];
    let bound = compute_bound(0).unwrap();
    assert!(bound > 0, "bound of 0 bytes still needs token room");

    let mut compressed = vec![0u8; bound as usize];
    let written = compress(
        Region::new(&original, 0, 0).unwrap(),
        RegionMut::new(&mut compressed, 0, bound).unwrap(),
    )
    .expect("empty input should compress to a single token");
    assert!(written >= 1);

    let mut recovered = [0u8; 0];
    let produced = decompress(
        Region::new(&compressed, 0, written).unwrap(),
        RegionMut::new(&mut recovered, 0, 0).unwrap(),
    )
    .expect("empty block should decompress");
    assert_eq!(produced, 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: compute_bound properties — lower bound, monotone, deterministic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_bound_is_at_least_input_size() {
    for n in [0, 1, 10, 255, 256, 4096, 1 << 20] {
        let bound = compute_bound(n).unwrap();
        assert!(bound >= n, "bound({n}) = {bound} < {n}");
    }
}

#[test]
fn test_bound_is_monotonically_non_decreasing() {
    let mut prev = compute_bound(0).unwrap();
    for n in 1..2048 {
        let bound = compute_bound(n).unwrap();
        assert!(bound >= prev, "bound({n}) = {bound} < bound({}) = {prev}", n - 1);
        prev = bound;
    }
}

#[test]
fn test_bound_is_deterministic() {
    for n in [0, 10, 65_536] {
        assert_eq!(compute_bound(n).unwrap(), compute_bound(n).unwrap());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: concrete scenario — ten 'A' bytes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ten_a_bytes_scenario() {
    let original = b"AAAAAAAAAA";
    let bound = compute_bound(10).unwrap();
    assert!(bound >= 10);

    let mut compressed = vec![0u8; bound as usize];
    let written = compress(
        Region::new(original, 0, 10).unwrap(),
        RegionMut::new(&mut compressed, 0, bound).unwrap(),
    )
    .unwrap();
    assert!(written <= bound);

    let mut recovered = [0u8; 10];
    let produced = decompress(
        Region::new(&compressed, 0, written).unwrap(),
        RegionMut::new(&mut recovered, 0, 10).unwrap(),
    )
    .unwrap();

    assert_eq!(produced, 10);
    assert_eq!(&recovered, original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: regions with non-zero offsets, ending exactly at capacity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_offset_regions_roundtrip() {
    // Payload occupies the tail of a larger buffer; offset + length lands
    // exactly on the capacity.
    let payload = b"offset region payload, repeated a few times. ".repeat(8);
    let payload_len = payload.len() as i32;
    let mut src_buf = vec![0xAAu8; 64 + payload.len()];
    src_buf[64..].copy_from_slice(&payload);

    let bound = compute_bound(payload_len).unwrap();
    let mut dst_buf = vec![0u8; 32 + bound as usize];

    let written = compress(
        Region::new(&src_buf, 64, payload_len).unwrap(),
        RegionMut::new(&mut dst_buf, 32, bound).unwrap(),
    )
    .unwrap();

    // Bytes outside the destination region must be untouched.
    assert!(dst_buf[..32].iter().all(|&b| b == 0));

    let mut recovered_buf = vec![0u8; 16 + payload.len()];
    let produced = decompress(
        Region::new(&dst_buf, 32, written).unwrap(),
        RegionMut::new(&mut recovered_buf, 16, payload_len).unwrap(),
    )
    .unwrap();

    assert_eq!(produced, payload_len);
    assert_eq!(&recovered_buf[16..], &payload[..]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 7: decompression count can be smaller than the destination capacity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_into_oversized_destination() {
    let original = b"short payload";
    let len = original.len() as i32;

    let bound = compute_bound(len).unwrap();
    let mut compressed = vec![0u8; bound as usize];
    let written = compress(
        Region::new(original, 0, len).unwrap(),
        RegionMut::new(&mut compressed, 0, bound).unwrap(),
    )
    .unwrap();

    // Destination four times larger than needed, prefilled with a marker.
    let mut recovered = vec![0xEEu8; original.len() * 4];
    let cap = recovered.len() as i32;
    let produced = decompress(
        Region::new(&compressed, 0, written).unwrap(),
        RegionMut::new(&mut recovered, 0, cap).unwrap(),
    )
    .unwrap();

    assert_eq!(produced, len);
    assert_eq!(&recovered[..original.len()], &original[..]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 8: length-prefixed convenience round-trips
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_prefixed_roundtrip() {
    init_logs();
    let original = b"prefixed codec payload ".repeat(50);

    let framed = compress_prefixed(&original).expect("prefixed compression should succeed");
    assert_eq!(
        &framed[..4],
        &(original.len() as i32).to_be_bytes(),
        "prefix must hold the original length, big-endian"
    );
    assert!(framed.len() < original.len() + 4);

    let recovered = decompress_prefixed(&framed).expect("prefixed decompression should succeed");
    assert_eq!(recovered, original);
}

#[test]
fn test_prefixed_roundtrip_empty_input() {
    let framed = compress_prefixed(&[]).unwrap();
    assert_eq!(&framed[..4], &[0, 0, 0, 0]);

    let recovered = decompress_prefixed(&framed).unwrap();
    assert!(recovered.is_empty());
}

#[test]
fn test_prefixed_roundtrip_single_byte() {
    let framed = compress_prefixed(b"x").unwrap();
    let recovered = decompress_prefixed(&framed).unwrap();
    assert_eq!(recovered, b"x");
}
