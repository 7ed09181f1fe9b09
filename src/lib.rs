//! A growable dynamic-array container with explicit capacity control.
//!
//! The crate provides a single component, [`DynamicArray<T>`]: a
//! contiguous, index-addressable sequence that grows automatically as
//! elements are appended or prepended, with amortized constant-time
//! growth by capacity doubling. The container exclusively owns its
//! buffer; cloning deep-copies, and [`DynamicArray::take`] transfers
//! ownership in O(1).
//!
//! ```
//! use dynarr::DynamicArray;
//!
//! # fn main() -> Result<(), dynarr::ArrayError> {
//! let mut arr = DynamicArray::with_capacity(5);
//! arr.push(1)?;
//! arr.push(2)?;
//! arr.unshift(0)?;
//! assert_eq!(arr.as_slice(), &[0, 1, 2]);
//! assert_eq!(arr.find_index(|&x| x == 2), Some(2));
//! assert_eq!(arr.pop()?, 2);
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs)]

mod array;
mod errors;


pub use crate::array::{DynamicArray, DEFAULT_CAPACITY};
pub use crate::errors::ArrayError;
