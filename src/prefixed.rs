//! Length-prefixed block codec.
//!
//! Convenience layer over the bridge for callers that want whole-buffer
//! round-trips instead of managing regions themselves.  Wire layout:
//!
//! ```text
//! [0..4]   original uncompressed length, big-endian i32
//! [4..end] raw LZ4 block
//! ```
//!
//! This is the only part of the crate that allocates; the bridge core
//! itself never does.

use crate::bridge::codec::{compress, compute_bound, decompress};
use crate::bridge::error::BridgeError;
use crate::bridge::region::{Region, RegionMut};

/// Size of the big-endian original-length prefix.
pub const PREFIX_LEN: usize = 4;

/// Compress `input` and prefix it with its original length.
///
/// The returned buffer is truncated to the actual compressed size plus the
/// prefix; decompressing it with [`decompress_prefixed`] reproduces `input`
/// exactly.
pub fn compress_prefixed(input: &[u8]) -> Result<Vec<u8>, BridgeError> {
    let original_size = i32::try_from(input.len())
        .map_err(|_| BridgeError::InvalidArgument("input exceeds 32-bit size range"))?;
    let bound = compute_bound(original_size)?;
    if bound <= 0 {
        return Err(BridgeError::InvalidArgument(
            "input exceeds LZ4 maximum input size",
        ));
    }

    let mut out = vec![0u8; PREFIX_LEN + bound as usize];
    out[..PREFIX_LEN].copy_from_slice(&original_size.to_be_bytes());

    let written = {
        let src = Region::new(input, 0, original_size)?;
        let dst = RegionMut::new(&mut out[PREFIX_LEN..], 0, bound)?;
        compress(src, dst)?
    };

    out.truncate(PREFIX_LEN + written as usize);
    Ok(out)
}

/// Decompress a buffer produced by [`compress_prefixed`], using its length
/// prefix to size the output.
///
/// The result is trimmed to the byte count the codec actually produced, so
/// a stream that decodes to less than its declared length yields a shorter
/// buffer rather than zero padding.
pub fn decompress_prefixed(input: &[u8]) -> Result<Vec<u8>, BridgeError> {
    if input.len() < PREFIX_LEN {
        return Err(BridgeError::InvalidArgument(
            "input too small to contain length prefix",
        ));
    }

    let declared = i32::from_be_bytes([input[0], input[1], input[2], input[3]]);
    if declared < 0 {
        return Err(BridgeError::InvalidArgument("negative declared length"));
    }

    let compressed_size = i32::try_from(input.len() - PREFIX_LEN)
        .map_err(|_| BridgeError::InvalidArgument("input exceeds 32-bit size range"))?;

    let mut out = vec![0u8; declared as usize];
    let produced = {
        let src = Region::new(input, PREFIX_LEN as i32, compressed_size)?;
        let dst = RegionMut::new(&mut out, 0, declared)?;
        decompress(src, dst)?
    };

    out.truncate(produced as usize);
    Ok(out)
}
