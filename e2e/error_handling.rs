//! E2E Test Suite 02: Error Handling
//!
//! Validates the failure taxonomy of the bridge:
//! - InvalidArgument: negative sizes/offsets/lengths, out-of-bounds regions
//! - CapacityExceeded: destination too small for the compressed result
//! - CorruptInput: malformed streams, declared output beyond capacity
//!
//! Every failure must be reported before or instead of an out-of-bounds
//! native access — none of these tests may crash.

use lz4_bridge::{
    compress, compress_prefixed, compute_bound, decompress, decompress_prefixed, BridgeError,
    Region, RegionMut,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: compute_bound rejects negative sizes without a native call
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_bound_rejects_negative_size() {
    for n in [-1, -10, i32::MIN] {
        assert!(matches!(
            compute_bound(n),
            Err(BridgeError::InvalidArgument(_))
        ));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: region construction enforces the bounds invariant
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_region_at_exact_capacity_is_accepted() {
    let buf = [7u8; 32];
    assert!(Region::new(&buf, 0, 32).is_ok());
    assert!(Region::new(&buf, 31, 1).is_ok());
}

#[test]
fn test_region_one_past_capacity_is_rejected() {
    let buf = [7u8; 32];
    assert!(matches!(
        Region::new(&buf, 0, 33),
        Err(BridgeError::InvalidArgument(_))
    ));
    assert!(matches!(
        Region::new(&buf, 32, 1),
        Err(BridgeError::InvalidArgument(_))
    ));
}

#[test]
fn test_region_negative_fields_are_rejected() {
    let mut buf = [0u8; 32];
    assert!(Region::new(&buf, -1, 8).is_err());
    assert!(Region::new(&buf, 0, -8).is_err());
    assert!(RegionMut::new(&mut buf, -1, 8).is_err());
    assert!(RegionMut::new(&mut buf, 0, -8).is_err());
}

#[test]
fn test_region_offset_length_sum_cannot_wrap() {
    let buf = [0u8; 32];
    assert!(Region::new(&buf, i32::MAX, 1).is_err());
    assert!(Region::new(&buf, 1, i32::MAX).is_err());
    assert!(Region::new(&buf, i32::MAX, i32::MAX).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: destination too small for the compressed result
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_compress_destination_too_small() {
    // Incompressible input cannot fit into a 10-byte destination.
    let original: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let mut dst = [0u8; 10];

    let result = compress(
        Region::new(&original, 0, 1000).unwrap(),
        RegionMut::new(&mut dst, 0, 10).unwrap(),
    );
    assert_eq!(result, Err(BridgeError::CapacityExceeded));
}

#[test]
fn test_compress_zero_capacity_destination() {
    let mut dst = [0u8; 0];
    let result = compress(
        Region::new(b"data", 0, 4).unwrap(),
        RegionMut::new(&mut dst, 0, 0).unwrap(),
    );
    assert_eq!(result, Err(BridgeError::CapacityExceeded));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: corrupted and truncated compressed streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_garbage_input() {
    // 0xFF tokens declare literal runs far longer than the input itself.
    let garbage = [0xFFu8; 64];
    let mut dst = [0u8; 256];
    let result = decompress(
        Region::new(&garbage, 0, 64).unwrap(),
        RegionMut::new(&mut dst, 0, 256).unwrap(),
    );
    assert_eq!(result, Err(BridgeError::CorruptInput));
}

#[test]
fn test_decompress_truncated_stream() {
    let original = b"a valid block that will be cut short ".repeat(10);
    let len = original.len() as i32;
    let bound = compute_bound(len).unwrap();
    let mut compressed = vec![0u8; bound as usize];
    let written = compress(
        Region::new(&original, 0, len).unwrap(),
        RegionMut::new(&mut compressed, 0, bound).unwrap(),
    )
    .unwrap();

    // Drop the last byte of the stream.
    let mut dst = vec![0u8; original.len()];
    let result = decompress(
        Region::new(&compressed, 0, written - 1).unwrap(),
        RegionMut::new(&mut dst, 0, len).unwrap(),
    );
    assert_eq!(result, Err(BridgeError::CorruptInput));
}

#[test]
fn test_decompress_destination_smaller_than_output() {
    let original = b"this payload does not fit in five bytes".repeat(4);
    let len = original.len() as i32;
    let bound = compute_bound(len).unwrap();
    let mut compressed = vec![0u8; bound as usize];
    let written = compress(
        Region::new(&original, 0, len).unwrap(),
        RegionMut::new(&mut compressed, 0, bound).unwrap(),
    )
    .unwrap();

    // The stream implies far more output than the destination holds; the
    // safe primitive must refuse rather than write past it.
    let mut dst = [0u8; 5];
    let result = decompress(
        Region::new(&compressed, 0, written).unwrap(),
        RegionMut::new(&mut dst, 0, 5).unwrap(),
    );
    assert_eq!(result, Err(BridgeError::CorruptInput));
}

#[test]
fn test_decompress_empty_source() {
    let mut dst = [0u8; 16];
    let result = decompress(
        Region::new(&[], 0, 0).unwrap(),
        RegionMut::new(&mut dst, 0, 16).unwrap(),
    );
    assert_eq!(result, Err(BridgeError::CorruptInput));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: prefixed codec rejects malformed frames
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_prefixed_rejects_input_shorter_than_prefix() {
    for input in [&[][..], &[0x00][..], &[0x00, 0x00, 0x00][..]] {
        assert!(matches!(
            decompress_prefixed(input),
            Err(BridgeError::InvalidArgument(_))
        ));
    }
}

#[test]
fn test_prefixed_rejects_negative_declared_length() {
    let framed = [0xFF, 0xFF, 0xFF, 0xFF, 0x10, 0x61];
    assert!(matches!(
        decompress_prefixed(&framed),
        Err(BridgeError::InvalidArgument(_))
    ));
}

#[test]
fn test_prefixed_rejects_garbage_body() {
    // Plausible prefix, garbage block.
    let mut framed = vec![0x00, 0x00, 0x01, 0x00];
    framed.extend_from_slice(&[0xFF; 32]);
    assert_eq!(decompress_prefixed(&framed), Err(BridgeError::CorruptInput));
}

#[test]
fn test_prefixed_declared_length_smaller_than_stream_output() {
    // Frame a compressible payload, then shrink the declared length; the
    // capacity-checked primitive must reject the stream.
    let original = b"0123456789abcdef".repeat(16);
    let mut framed = compress_prefixed(&original).unwrap();
    framed[..4].copy_from_slice(&8i32.to_be_bytes());
    assert_eq!(decompress_prefixed(&framed), Err(BridgeError::CorruptInput));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: failures leave no residual state — a failing call does not affect
// a following valid one
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_calls_are_independent() {
    let garbage = [0xFFu8; 16];
    let mut scratch = [0u8; 64];
    let _ = decompress(
        Region::new(&garbage, 0, 16).unwrap(),
        RegionMut::new(&mut scratch, 0, 64).unwrap(),
    );

    let original = b"still works after a failure";
    let framed = compress_prefixed(original).unwrap();
    assert_eq!(decompress_prefixed(&framed).unwrap(), original);
}
