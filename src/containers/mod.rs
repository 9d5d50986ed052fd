//! The owning value containers themselves.
//!
//! # Purpose
//! Each container here owns its storage outright: it requests raw slots from the allocator,
//! decides which of them hold live values, and runs every constructor and destructor itself.
//! Nothing is shared between instances; copying produces independent storage and moving transfers
//! exclusive ownership.
//!
//! # Method
//! [`DynamicArray`](contiguous::DynamicArray) implements
//! [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which provides the whole read surface
//! of a slice (indexing, iteration in both directions, `first`/`last`, splitting) without
//! repeating it here.

pub mod contiguous;
pub mod optional;
