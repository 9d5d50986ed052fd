//! Contiguous heap-backed storage, namely [`DynamicArray`] for an owning sequence that varies in
//! size at runtime.

pub mod dynamic_array;

pub(crate) mod raw_buf;

#[doc(inline)]
pub use dynamic_array::DynamicArray;
pub use dynamic_array::{CapacityOverflow, InsertError, OutOfRange};
