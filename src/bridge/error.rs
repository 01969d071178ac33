//! Bridge error taxonomy and the integer sentinel it collapses to.
//!
//! Internally the bridge distinguishes three failure kinds; at the C-ABI
//! boundary all of them collapse to [`BRIDGE_ERROR`], because the boundary
//! contract is a plain signed byte count with a single negative failure
//! channel.  Callers on the other side of that boundary cannot (and must
//! not be able to) tell the kinds apart.

use thiserror::Error;

/// Failure sentinel returned across the integer-only boundary.
///
/// Every error in [`BridgeError`] maps to this one value.
pub const BRIDGE_ERROR: i32 = -1;

/// Errors reported by the bridge operations.
///
/// Validation errors (`InvalidArgument`) are raised before any native call
/// is made; the other two surface results reported by the native codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Negative or inconsistent offset/length/capacity, or a null buffer
    /// handle at the C ABI.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The destination region is too small to hold the compressed result.
    #[error("destination region too small for compressed output")]
    CapacityExceeded,

    /// The compressed stream failed the native codec's structural checks,
    /// or its implied output exceeds the destination capacity.  The native
    /// primitive reports both conditions identically.
    #[error("compressed stream is corrupt or exceeds destination capacity")]
    CorruptInput,
}

impl BridgeError {
    /// Collapse this error to the boundary sentinel.
    #[inline]
    pub const fn sentinel(self) -> i32 {
        BRIDGE_ERROR
    }
}
