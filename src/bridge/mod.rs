//! The buffer-to-codec bridge core.
//!
//! Three layers, each in its own file:
//!
//!   - [`region`] — bounds validation; narrows `(buffer, offset, length)`
//!     triples into borrowed views the codec can trust.
//!   - [`codec`] — dispatch to the native bound / compress / decompress
//!     primitives over validated regions.
//!   - [`error`] — the internal error taxonomy and the single negative
//!     sentinel it collapses to at the integer boundary.
//!
//! The bridge owns no buffers, allocates nothing, and keeps no state
//! between calls.

pub mod codec;
pub mod error;
pub mod region;

// Re-export the most important public API items at the module level.
pub use codec::{compress, compute_bound, decompress, LZ4_MAX_INPUT_SIZE};
pub use error::{BridgeError, BRIDGE_ERROR};
pub use region::{Region, RegionMut};
