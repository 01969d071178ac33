//! C-ABI shims — the integer-sentinel boundary surface.
//!
//! Enabled with the `c-abi` feature (on by default):
//!
//!   cargo build --release
//!
//! The produced cdylib exports three symbols a foreign runtime can call
//! directly.  The contract is 32-bit signed integers throughout: a
//! non-negative return is a byte count, and every failure — null handle,
//! bad region, destination too small, corrupt stream — collapses to the
//! single sentinel `-1`.  Callers cannot distinguish failure kinds across
//! this boundary; the richer [`BridgeError`] taxonomy stays internal.
//!
//! Buffers are passed as `(pointer, capacity)` pairs with a separate
//! `(offset, length)` region selection, validated here before any native
//! memory is touched.  The raw views acquired over caller memory are
//! slices scoped to the exported function body, so they are released on
//! every exit path, early validation failures included.

use std::os::raw::{c_char, c_int};
use std::slice;

use crate::bridge::codec;
use crate::bridge::error::{BridgeError, BRIDGE_ERROR};
use crate::bridge::region::{Region, RegionMut};

// ─── helpers ─────────────────────────────────────────────────────────────────

/// Acquire views over both caller buffers, build the regions, and run `op`.
///
/// Null pointers and negative capacities are rejected before the views are
/// formed; region validation happens before `op` touches the codec.
///
/// # Safety
/// See the exported functions — the pointer/capacity contracts are theirs.
unsafe fn with_views(
    src: *const c_char,
    src_capacity: c_int,
    src_off: c_int,
    src_len: c_int,
    dst: *mut c_char,
    dst_capacity: c_int,
    dst_off: c_int,
    dst_len: c_int,
    op: fn(Region<'_>, RegionMut<'_>) -> Result<i32, BridgeError>,
) -> c_int {
    if src.is_null() || dst.is_null() {
        return BRIDGE_ERROR;
    }
    if src_capacity < 0 || dst_capacity < 0 {
        return BRIDGE_ERROR;
    }
    let src_buf = slice::from_raw_parts(src as *const u8, src_capacity as usize);
    let dst_buf = slice::from_raw_parts_mut(dst as *mut u8, dst_capacity as usize);
    let result = Region::new(src_buf, src_off, src_len).and_then(|s| {
        let d = RegionMut::new(dst_buf, dst_off, dst_len)?;
        op(s, d)
    });
    match result {
        Ok(n) => n as c_int,
        Err(e) => e.sentinel(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// lz4b_compress_bound
//
// int lz4b_compress_bound(int input_size);
//
// Returns the worst-case compressed size for an input of `input_size`
// bytes, or -1 when `input_size` is negative.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub extern "C" fn lz4b_compress_bound(input_size: c_int) -> c_int {
    match codec::compute_bound(input_size) {
        Ok(bound) => bound,
        Err(e) => e.sentinel(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// lz4b_compress
//
// int lz4b_compress(const char *src, int src_capacity, int src_off, int src_len,
//                   char *dst, int dst_capacity, int dst_off, int dst_len);
//
// Compresses `src_len` bytes starting at `src_off` into `dst` at `dst_off`
// with `dst_len` bytes of room.  Returns the number of bytes written, or -1.
// ─────────────────────────────────────────────────────────────────────────────

/// # Safety
/// - `src` must be valid for reads of `src_capacity` bytes and `dst` valid
///   for writes of `dst_capacity` bytes, for the duration of the call.
/// - The two buffers must not overlap.
/// - Neither buffer may be mutated by another thread during the call.
#[no_mangle]
pub unsafe extern "C" fn lz4b_compress(
    src: *const c_char,
    src_capacity: c_int,
    src_off: c_int,
    src_len: c_int,
    dst: *mut c_char,
    dst_capacity: c_int,
    dst_off: c_int,
    dst_len: c_int,
) -> c_int {
    with_views(
        src,
        src_capacity,
        src_off,
        src_len,
        dst,
        dst_capacity,
        dst_off,
        dst_len,
        codec::compress,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// lz4b_decompress
//
// int lz4b_decompress(const char *src, int src_capacity, int src_off, int src_len,
//                     char *dst, int dst_capacity, int dst_off, int dst_len);
//
// Decompresses the LZ4 block held in `src_len` bytes at `src_off` into
// `dst` at `dst_off`, writing at most `dst_len` bytes.  Returns the number
// of bytes produced, or -1.
// ─────────────────────────────────────────────────────────────────────────────

/// # Safety
/// Same contract as [`lz4b_compress`].
#[no_mangle]
pub unsafe extern "C" fn lz4b_decompress(
    src: *const c_char,
    src_capacity: c_int,
    src_off: c_int,
    src_len: c_int,
    dst: *mut c_char,
    dst_capacity: c_int,
    dst_off: c_int,
    dst_len: c_int,
) -> c_int {
    with_views(
        src,
        src_capacity,
        src_off,
        src_len,
        dst,
        dst_capacity,
        dst_off,
        dst_len,
        codec::decompress,
    )
}
