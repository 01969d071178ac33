// lz4-block-bridge — bounds-checked buffer bridge over the LZ4 block codec

//! A narrow bridge between byte-buffer callers and liblz4's block
//! primitives: worst-case bound, bounded single-shot compression, and
//! capacity-checked decompression.
//!
//! The bridge validates every `(buffer, offset, length)` region before the
//! native codec sees it, borrows caller buffers only for the duration of
//! one call, and reports results as plain byte counts.  It owns no
//! buffers and keeps no state between calls, so concurrent use is safe as
//! long as each call's own buffers are left alone.
//!
//! Three surfaces:
//!
//!   - [`bridge`] — the core: [`Region`]/[`RegionMut`] validation plus
//!     [`compute_bound`], [`compress`], [`decompress`] over validated views.
//!   - [`abi`] (feature `c-abi`, on by default) — `extern "C"` exports with
//!     the 32-bit integer contract: non-negative byte count, or `-1` for
//!     every failure.
//!   - [`prefixed`] — allocating convenience round-trips with a 4-byte
//!     big-endian original-length prefix.

pub mod bridge;
pub mod prefixed;

#[cfg(feature = "c-abi")]
pub mod abi;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use bridge::codec::{compress, compute_bound, decompress, LZ4_MAX_INPUT_SIZE};
pub use bridge::error::{BridgeError, BRIDGE_ERROR};
pub use bridge::region::{Region, RegionMut};
pub use prefixed::{compress_prefixed, decompress_prefixed, PREFIX_LEN};
