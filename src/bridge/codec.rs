//! Dispatch to the three native LZ4 block primitives.
//!
//! The bridge consumes exactly three functions from liblz4 (via `lz4-sys`):
//!
//! | Rust function     | liblz4 primitive       |
//! |-------------------|------------------------|
//! | [`compute_bound`] | `LZ4_compressBound`    |
//! | [`compress`]      | `LZ4_compress_default` |
//! | [`decompress`]    | `LZ4_decompress_safe`  |
//!
//! Every operation takes pre-validated [`Region`]s, so no bounds are
//! re-checked here; the unsafe blocks rely on the Region invariant and on
//! the primitives' own output-capacity guarantees.  Each call is
//! synchronous and stateless — the bridge holds nothing across calls.

use std::os::raw::{c_char, c_int};

use log::trace;

use super::error::BridgeError;
use super::region::{Region, RegionMut};

/// Largest input size `LZ4_compress_default` accepts (`LZ4_MAX_INPUT_SIZE`
/// in lz4.h, 2 113 929 216 bytes).  `LZ4_compressBound` returns 0 above it.
pub const LZ4_MAX_INPUT_SIZE: i32 = 0x7E00_0000;

/// Worst-case compressed size for an input of `input_size` bytes.
///
/// A pure function of the size — the input's contents are never examined.
/// Monotonically non-decreasing and `>= input_size` for every size up to
/// [`LZ4_MAX_INPUT_SIZE`]; above that the native bound reports 0, which is
/// propagated unchanged for boundary compatibility.
///
/// Fails with [`BridgeError::InvalidArgument`] for negative sizes, without
/// touching the native codec.
pub fn compute_bound(input_size: i32) -> Result<i32, BridgeError> {
    if input_size < 0 {
        return Err(BridgeError::InvalidArgument("negative input size"));
    }
    // SAFETY: LZ4_compressBound dereferences nothing; it is a pure
    // arithmetic function of its argument.
    let bound = unsafe { lz4_sys::LZ4_compressBound(input_size as c_int) };
    trace!("compute_bound({input_size}) -> {bound}");
    Ok(bound)
}

/// Compress `src` into `dst`, returning the number of bytes written.
///
/// Writes at most `dst.len()` bytes; `src` is never mutated.  On success
/// the first `n` bytes of `dst` hold a complete LZ4 block.  On failure no
/// byte of `dst` may be trusted.
///
/// Fails with [`BridgeError::CapacityExceeded`] when the destination cannot
/// hold the compressed result.  Sizing the destination with
/// [`compute_bound`] makes that impossible.
pub fn compress(src: Region<'_>, mut dst: RegionMut<'_>) -> Result<i32, BridgeError> {
    let src_bytes = src.as_slice();
    let dst_bytes = dst.as_mut_slice();
    // SAFETY: both views are valid for their full lengths for the duration
    // of the call (Region invariant), the lengths fit in c_int by
    // construction, and LZ4_compress_default never writes more than
    // dst_bytes.len() bytes.
    let written = unsafe {
        lz4_sys::LZ4_compress_default(
            src_bytes.as_ptr() as *const c_char,
            dst_bytes.as_mut_ptr() as *mut c_char,
            src_bytes.len() as c_int,
            dst_bytes.len() as c_int,
        )
    };
    trace!(
        "compress: {} bytes in, capacity {}, native result {written}",
        src_bytes.len(),
        dst_bytes.len()
    );
    // The native primitive reports failure as 0; a successful compression
    // always writes at least one byte (the empty input encodes to a single
    // zero token).
    if written <= 0 {
        return Err(BridgeError::CapacityExceeded);
    }
    Ok(written)
}

/// Decompress the LZ4 block in `src` into `dst`, returning the exact number
/// of bytes produced.
///
/// Uses the capacity-checked primitive: the compressed stream's internal
/// length and offset fields are re-validated against `dst.len()`, and
/// nothing is written past it even if the stream claims a larger output.
/// The produced count can be smaller than `dst.len()`; no padding is
/// written.
///
/// Fails with [`BridgeError::CorruptInput`] both for a malformed stream and
/// for a stream whose implied output exceeds the destination capacity — the
/// native primitive reports the two identically.
pub fn decompress(src: Region<'_>, mut dst: RegionMut<'_>) -> Result<i32, BridgeError> {
    let src_bytes = src.as_slice();
    let dst_bytes = dst.as_mut_slice();
    // An empty stream is never a valid block; the native primitive would
    // read a token byte unconditionally, so reject here.
    if src_bytes.is_empty() {
        return Err(BridgeError::CorruptInput);
    }
    // SAFETY: both views are valid for their full lengths (Region
    // invariant), the source is non-empty, and LZ4_decompress_safe enforces
    // the dst capacity against the stream's own length fields.
    let produced = unsafe {
        lz4_sys::LZ4_decompress_safe(
            src_bytes.as_ptr() as *const c_char,
            dst_bytes.as_mut_ptr() as *mut c_char,
            src_bytes.len() as c_int,
            dst_bytes.len() as c_int,
        )
    };
    trace!(
        "decompress: {} bytes in, capacity {}, native result {produced}",
        src_bytes.len(),
        dst_bytes.len()
    );
    if produced < 0 {
        return Err(BridgeError::CorruptInput);
    }
    Ok(produced)
}
