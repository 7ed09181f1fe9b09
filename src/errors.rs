//! Error types surfaced by [`DynamicArray`] operations
//!
//! Every failure is reported synchronously to the caller as a `Result`;
//! the container never logs, retries, or recovers internally.
//!
//! [`DynamicArray`]: crate::DynamicArray

use thiserror::Error;

/// Errors produced by dynamic-array operations.
///
/// `IndexOutOfBounds` and `Empty` are recoverable and leave the container
/// unchanged. `AllocationFailed` means the backing buffer could not be
/// grown; the container is left in its prior valid state, but the caller
/// should treat the condition as unrecoverable at this layer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
  /// Indexed access outside the live range `[0, len)`.
  #[error("index out of bounds: the len is {len} but the index is {index}")]
  IndexOutOfBounds {
    /// The requested index.
    index: usize,
    /// The number of live elements at the time of the access.
    len: usize,
  },

  /// Removal from a container with no live elements.
  #[error("cannot {op} from an empty array")]
  Empty {
    /// The operation that was attempted (`"pop"` or `"shift"`).
    op: &'static str,
  },

  /// The backing buffer could not be grown to the requested capacity,
  /// either because the byte size overflows an allocation layout or
  /// because the allocator returned no memory.
  #[error("failed to allocate storage for {requested} elements")]
  AllocationFailed {
    /// The capacity, in elements, that was requested.
    requested: usize,
  },
}
