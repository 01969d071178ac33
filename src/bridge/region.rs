//! Validated sub-ranges of caller-owned buffers.
//!
//! A [`Region`] is the `(buffer, offset, length)` triple every codec
//! operation takes, narrowed to a borrowed slice once — and only once —
//! its invariant has been checked:
//!
//! ```text
//! offset >= 0  &&  length >= 0  &&  offset + length <= buffer capacity
//! ```
//!
//! Offsets and lengths arrive as `i32` because the boundary contract is
//! 32-bit signed throughout.  The `offset + length` sum is computed with
//! checked arithmetic, so a pair that would wrap is rejected rather than
//! aliasing a small in-bounds range.
//!
//! Construction is the only validation point: a `Region` that exists is
//! in-bounds, and the codec layer never re-checks.  The borrow held by a
//! `Region` also pins the buffer for the duration of the native call — the
//! acquire-use-release discipline of the C API is the borrow scope itself.

use core::ops::Range;

use log::debug;

use super::error::BridgeError;

/// Check the Region invariant against a buffer of `capacity` bytes and
/// return the narrowed index range.
fn checked_range(capacity: usize, offset: i32, length: i32) -> Result<Range<usize>, BridgeError> {
    if offset < 0 {
        debug!("region rejected: negative offset {offset}");
        return Err(BridgeError::InvalidArgument("negative offset"));
    }
    if length < 0 {
        debug!("region rejected: negative length {length}");
        return Err(BridgeError::InvalidArgument("negative length"));
    }
    let start = offset as usize;
    let end = start
        .checked_add(length as usize)
        .ok_or(BridgeError::InvalidArgument("offset + length overflows"))?;
    if end > capacity {
        debug!("region rejected: offset {offset} + length {length} > capacity {capacity}");
        return Err(BridgeError::InvalidArgument(
            "offset + length exceeds buffer capacity",
        ));
    }
    Ok(start..end)
}

/// A validated read-only sub-range of a caller-owned buffer.
///
/// Used as the compression source and the decompression source.  The
/// underlying buffer is borrowed for the lifetime of the region; the bridge
/// never mutates it.
#[derive(Clone, Copy)]
pub struct Region<'a> {
    bytes: &'a [u8],
}

impl<'a> Region<'a> {
    /// Narrow `buffer` to `[offset, offset + length)`.
    ///
    /// Fails with [`BridgeError::InvalidArgument`] if the triple violates
    /// the Region invariant.  `offset + length == buffer.len()` is valid.
    pub fn new(buffer: &'a [u8], offset: i32, length: i32) -> Result<Self, BridgeError> {
        let range = checked_range(buffer.len(), offset, length)?;
        Ok(Self {
            bytes: &buffer[range],
        })
    }

    /// Length of the region in bytes.  Always fits in `i32`.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the region is zero-length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The narrowed view.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }
}

/// A validated read-write sub-range of a caller-owned buffer.
///
/// Used as the compression destination and the decompression destination.
/// The codec writes at most `len()` bytes into it; on failure no byte of
/// the written range may be trusted.
pub struct RegionMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> RegionMut<'a> {
    /// Narrow `buffer` to `[offset, offset + length)` for writing.
    ///
    /// Same invariant as [`Region::new`].
    pub fn new(buffer: &'a mut [u8], offset: i32, length: i32) -> Result<Self, BridgeError> {
        let range = checked_range(buffer.len(), offset, length)?;
        Ok(Self {
            bytes: &mut buffer[range],
        })
    }

    /// Length of the region in bytes.  Always fits in `i32`.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the region is zero-length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The narrowed writable view.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_buffer_region_is_valid() {
        let buf = [0u8; 16];
        let r = Region::new(&buf, 0, 16).unwrap();
        assert_eq!(r.len(), 16);
    }

    #[test]
    fn offset_plus_length_at_capacity_is_valid() {
        let buf = [0u8; 16];
        let r = Region::new(&buf, 10, 6).unwrap();
        assert_eq!(r.len(), 6);
    }

    #[test]
    fn offset_plus_length_one_past_capacity_is_rejected() {
        let buf = [0u8; 16];
        assert!(Region::new(&buf, 10, 7).is_err());
        assert!(Region::new(&buf, 16, 1).is_err());
        assert!(Region::new(&buf, 17, 0).is_err());
    }

    #[test]
    fn negative_offset_is_rejected() {
        let buf = [0u8; 16];
        assert!(Region::new(&buf, -1, 4).is_err());
    }

    #[test]
    fn negative_length_is_rejected() {
        let buf = [0u8; 16];
        assert!(Region::new(&buf, 0, -1).is_err());
    }

    #[test]
    fn i32_max_pair_does_not_wrap() {
        // On 32-bit targets the usize sum could wrap without checked_add;
        // either way the pair must be rejected against a small buffer.
        let buf = [0u8; 16];
        assert!(Region::new(&buf, i32::MAX, i32::MAX).is_err());
    }

    #[test]
    fn zero_length_region_is_valid_anywhere_in_bounds() {
        let buf = [0u8; 4];
        assert!(Region::new(&buf, 0, 0).is_ok());
        assert!(Region::new(&buf, 4, 0).is_ok());
    }

    #[test]
    fn region_mut_mirrors_region_validation() {
        let mut buf = [0u8; 8];
        assert!(RegionMut::new(&mut buf, 4, 4).is_ok());
        assert!(RegionMut::new(&mut buf, 4, 5).is_err());
        assert!(RegionMut::new(&mut buf, -2, 1).is_err());
    }

    #[test]
    fn region_narrows_to_the_requested_window() {
        let buf: Vec<u8> = (0..32).collect();
        let r = Region::new(&buf, 8, 4).unwrap();
        assert_eq!(r.as_slice(), &[8, 9, 10, 11]);
    }
}
