//! E2E Test Suite 03: C-ABI Surface
//!
//! Drives the exported symbols the way a foreign runtime would:
//! - lz4b_compress_bound
//! - lz4b_compress
//! - lz4b_decompress
//!
//! Verifies the integer contract: non-negative byte counts on success, the
//! single sentinel -1 for every failure kind, and no out-of-bounds writes.

use std::os::raw::c_char;

use lz4_bridge::abi::{lz4b_compress, lz4b_compress_bound, lz4b_decompress};

fn as_c(buf: &[u8]) -> *const c_char {
    buf.as_ptr() as *const c_char
}

fn as_c_mut(buf: &mut [u8]) -> *mut c_char {
    buf.as_mut_ptr() as *mut c_char
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: compress_bound through the ABI
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abi_bound_non_negative_input() {
    let bound = lz4b_compress_bound(10);
    assert!(bound >= 10);
    assert_eq!(bound, lz4b_compress_bound(10));
}

#[test]
fn test_abi_bound_negative_input_returns_sentinel() {
    assert_eq!(lz4b_compress_bound(-1), -1);
    assert_eq!(lz4b_compress_bound(i32::MIN), -1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: full round-trip through raw pointers, with offsets
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abi_roundtrip_with_offsets() {
    let payload = b"abi surface roundtrip payload ".repeat(16);
    let payload_len = payload.len() as i32;
    let mut src_buf = vec![0u8; 8 + payload.len()];
    src_buf[8..].copy_from_slice(&payload);

    let bound = lz4b_compress_bound(payload_len);
    assert!(bound > 0);
    let mut dst_buf = vec![0u8; 4 + bound as usize];

    let written = unsafe {
        lz4b_compress(
            as_c(&src_buf),
            src_buf.len() as i32,
            8,
            payload_len,
            as_c_mut(&mut dst_buf),
            dst_buf.len() as i32,
            4,
            bound,
        )
    };
    assert!(written > 0 && written <= bound);
    // Bytes before the destination offset must be untouched.
    assert_eq!(&dst_buf[..4], &[0, 0, 0, 0]);

    let mut out_buf = vec![0xEEu8; payload.len()];
    let produced = unsafe {
        lz4b_decompress(
            as_c(&dst_buf),
            dst_buf.len() as i32,
            4,
            written,
            as_c_mut(&mut out_buf),
            out_buf.len() as i32,
            0,
            payload_len,
        )
    };
    assert_eq!(produced, payload_len);
    assert_eq!(out_buf, payload);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: null handles
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abi_null_buffers_return_sentinel() {
    let data = b"data";
    let mut dst = [0u8; 64];

    let r = unsafe {
        lz4b_compress(
            std::ptr::null(),
            4,
            0,
            4,
            as_c_mut(&mut dst),
            64,
            0,
            64,
        )
    };
    assert_eq!(r, -1);

    let r = unsafe {
        lz4b_compress(
            as_c(data),
            4,
            0,
            4,
            std::ptr::null_mut(),
            64,
            0,
            64,
        )
    };
    assert_eq!(r, -1);

    let r = unsafe { lz4b_decompress(std::ptr::null(), 4, 0, 4, as_c_mut(&mut dst), 64, 0, 64) };
    assert_eq!(r, -1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: negative and out-of-bounds region fields
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abi_negative_fields_return_sentinel() {
    let src = [1u8; 32];
    let mut dst = [0u8; 64];

    for (src_cap, s_off, s_len, dst_cap, d_off, d_len) in [
        (-1, 0, 4, 64, 0, 64),  // negative src capacity
        (32, -1, 4, 64, 0, 64), // negative src offset
        (32, 0, -4, 64, 0, 64), // negative src length
        (32, 0, 4, -64, 0, 64), // negative dst capacity
        (32, 0, 4, 64, -1, 64), // negative dst offset
        (32, 0, 4, 64, 0, -1),  // negative dst length
    ] {
        let r = unsafe {
            lz4b_compress(
                as_c(&src),
                src_cap,
                s_off,
                s_len,
                as_c_mut(&mut dst),
                dst_cap,
                d_off,
                d_len,
            )
        };
        assert_eq!(r, -1, "expected sentinel for ({src_cap}, {s_off}, {s_len}, {dst_cap}, {d_off}, {d_len})");
    }
}

#[test]
fn test_abi_region_boundary() {
    let src = [0x61u8; 32];
    let bound = lz4b_compress_bound(32);
    let mut dst = vec![0u8; bound as usize];

    // offset + length exactly at capacity: accepted.
    let ok = unsafe {
        lz4b_compress(
            as_c(&src),
            32,
            0,
            32,
            as_c_mut(&mut dst),
            bound,
            0,
            bound,
        )
    };
    assert!(ok > 0);

    // One byte past capacity on the source: sentinel, no native call.
    let r = unsafe {
        lz4b_compress(
            as_c(&src),
            32,
            1,
            32,
            as_c_mut(&mut dst),
            bound,
            0,
            bound,
        )
    };
    assert_eq!(r, -1);

    // One byte past capacity on the destination: sentinel.
    let r = unsafe {
        lz4b_compress(
            as_c(&src),
            32,
            0,
            32,
            as_c_mut(&mut dst),
            bound,
            1,
            bound,
        )
    };
    assert_eq!(r, -1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: native-reported failures map to the same sentinel
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abi_destination_too_small_returns_sentinel() {
    let src: Vec<u8> = (0..=255u8).cycle().take(512).collect();
    let mut dst = [0u8; 8];
    let r = unsafe {
        lz4b_compress(
            as_c(&src),
            512,
            0,
            512,
            as_c_mut(&mut dst),
            8,
            0,
            8,
        )
    };
    assert_eq!(r, -1);
}

#[test]
fn test_abi_corrupt_stream_returns_sentinel() {
    let garbage = [0xFFu8; 48];
    let mut dst = [0u8; 192];
    let r = unsafe {
        lz4b_decompress(
            as_c(&garbage),
            48,
            0,
            48,
            as_c_mut(&mut dst),
            192,
            0,
            192,
        )
    };
    assert_eq!(r, -1);
}
