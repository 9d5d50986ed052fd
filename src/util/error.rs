use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A checked index was at or beyond the live range of a
/// [`DynamicArray`](crate::containers::contiguous::DynamicArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range for array of length {}!", self.index, self.len)
    }
}

impl Error for OutOfRange {}

/// A checked value access was performed on an
/// [`OptionalBox`](crate::containers::optional::OptionalBox) holding nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyAccess;

impl Display for EmptyAccess {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value access on an empty box!")
    }
}

impl Error for EmptyAccess {}

/// A requested memory layout exceeded [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Everything that can go wrong while inserting into a
/// [`DynamicArray`](crate::containers::contiguous::DynamicArray) at an arbitrary position.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum InsertError {
    OutOfRange(OutOfRange),
    CapacityOverflow(CapacityOverflow),
}

pub(crate) trait ErrorExtension: Error + Sized {
    /// Diverges with the error's own [`Display`] message, so that the panicking and the
    /// [`Result`]-returning form of an operation report a precondition failure identically.
    fn raise(self) -> !;
}

impl<E: Error + Sized> ErrorExtension for E {
    fn raise(self) -> ! {
        panic!("{}", self)
    }
}
