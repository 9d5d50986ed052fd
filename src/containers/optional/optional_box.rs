use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop, MaybeUninit};

pub use crate::util::error::EmptyAccess;

/// The marker for an [`OptionalBox`] holding nothing. Comparing a box against `Absent` tests its
/// presence flag without looking at the value.
///
/// # Examples
/// ```
/// # use value_containers::containers::optional::{Absent, OptionalBox};
/// assert!(OptionalBox::<u8>::empty() == Absent);
/// assert!(OptionalBox::new(1) != Absent);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

/// A container for zero or one value of `T`, stored inline.
///
/// The value, when present, lives directly inside the box: there is no heap allocation and no
/// pointer to follow. A presence flag guards a single uninitialized slot, and every operation
/// maintains the invariant that the slot holds a live value exactly while the flag is set. When a
/// value is relocated out (by [`take`](OptionalBox::take), [`swap`](OptionalBox::swap) or
/// [`into_value`](OptionalBox::into_value)), the source box is left observably empty rather than
/// in some unspecified moved-from state.
pub struct OptionalBox<T> {
    present: bool,
    slot: MaybeUninit<T>,
}

impl<T> OptionalBox<T> {
    /// Creates a box holding nothing.
    ///
    /// # Examples
    /// ```
    /// # use value_containers::containers::optional::OptionalBox;
    /// let boxed: OptionalBox<u8> = OptionalBox::empty();
    /// assert!(!boxed.has_value());
    /// ```
    pub const fn empty() -> OptionalBox<T> {
        OptionalBox {
            present: false,
            slot: MaybeUninit::uninit(),
        }
    }

    /// Creates a box holding `value`.
    ///
    /// # Examples
    /// ```
    /// # use value_containers::containers::optional::OptionalBox;
    /// let boxed = OptionalBox::new(5);
    /// assert_eq!(boxed.value(), Ok(&5));
    /// ```
    pub const fn new(value: T) -> OptionalBox<T> {
        OptionalBox {
            present: true,
            slot: MaybeUninit::new(value),
        }
    }

    /// Returns true if the box holds a value. No side effects.
    pub const fn has_value(&self) -> bool {
        self.present
    }

    /// Returns a reference to the held value, or [`None`] if the box is empty.
    pub fn get(&self) -> Option<&T> {
        if self.present {
            // SAFETY: The presence flag guarantees the slot is initialized.
            Some(unsafe { self.slot.assume_init_ref() })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the held value, or [`None`] if the box is empty.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.present {
            // SAFETY: The presence flag guarantees the slot is initialized.
            Some(unsafe { self.slot.assume_init_mut() })
        } else {
            None
        }
    }

    /// Returns a reference to the held value, or [`EmptyAccess`] if the box is empty. A failed
    /// access has no effect on the box.
    ///
    /// # Examples
    /// ```
    /// # use value_containers::containers::optional::{EmptyAccess, OptionalBox};
    /// let boxed = OptionalBox::new("held");
    /// assert_eq!(boxed.value(), Ok(&"held"));
    ///
    /// let empty: OptionalBox<&str> = OptionalBox::empty();
    /// assert_eq!(empty.value(), Err(EmptyAccess));
    /// ```
    pub fn value(&self) -> Result<&T, EmptyAccess> {
        self.get().ok_or(EmptyAccess)
    }

    /// Returns a mutable reference to the held value, or [`EmptyAccess`] if the box is empty.
    pub fn value_mut(&mut self) -> Result<&mut T, EmptyAccess> {
        self.get_mut().ok_or(EmptyAccess)
    }

    /// Consumes the box and returns the held value, or [`EmptyAccess`] if it was empty.
    pub fn into_value(self) -> Result<T, EmptyAccess> {
        let mut this = ManuallyDrop::new(self);

        if this.present {
            this.present = false;
            // SAFETY: The box is consumed and its destructor suppressed, so this read is the only
            // remaining owner of the value.
            Ok(unsafe { this.slot.assume_init_read() })
        } else {
            Err(EmptyAccess)
        }
    }

    /// Returns a reference to the held value without checking the presence flag.
    ///
    /// # Safety
    /// The box must hold a value. Calling this on an empty box is undefined behavior.
    pub unsafe fn value_unchecked(&self) -> &T {
        // SAFETY: Presence is the caller's obligation.
        unsafe { self.slot.assume_init_ref() }
    }

    /// Returns a mutable reference to the held value without checking the presence flag.
    ///
    /// # Safety
    /// The box must hold a value. Calling this on an empty box is undefined behavior.
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        // SAFETY: Presence is the caller's obligation.
        unsafe { self.slot.assume_init_mut() }
    }

    /// Returns a clone of the held value, or `default` if the box is empty. Never fails.
    ///
    /// # Examples
    /// ```
    /// # use value_containers::containers::optional::OptionalBox;
    /// assert_eq!(OptionalBox::new(5).value_or(0), 5);
    /// assert_eq!(OptionalBox::<i32>::empty().value_or(0), 0);
    /// ```
    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        match self.get() {
            Some(value) => value.clone(),
            None => default,
        }
    }

    /// Consumes the box and returns the held value, or `default` if it was empty. The value is
    /// moved out, never cloned.
    pub fn into_value_or(self, default: T) -> T {
        self.into_value().unwrap_or(default)
    }

    /// Drops any current value and stores `value` in its place. The box always holds a value
    /// afterwards. Returns a reference to the stored value.
    ///
    /// # Examples
    /// ```
    /// # use value_containers::containers::optional::OptionalBox;
    /// let mut boxed = OptionalBox::new(1);
    /// boxed.emplace(2);
    /// assert_eq!(boxed.value(), Ok(&2));
    /// ```
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.reset();
        self.present = true;
        self.slot.write(value)
    }

    /// Drops any current value, then stores the result of `construct`. The old value is gone
    /// before the constructor runs: if `construct` unwinds, the box is left empty, not restored.
    pub fn emplace_with<F>(&mut self, construct: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        let value = construct();
        self.present = true;
        self.slot.write(value)
    }

    /// Drops the current value, if any. The box holds nothing afterwards; resetting an empty box
    /// is a no-op.
    pub fn reset(&mut self) {
        if self.present {
            self.present = false;
            // SAFETY: The flag was set, so the slot held a live value; it is dropped exactly once
            // and the cleared flag records that the slot is uninitialized again.
            unsafe { self.slot.assume_init_drop() }
        }
    }

    /// Relocates the held value into a new box, leaving `self` empty. An empty box produces
    /// another empty box.
    ///
    /// # Examples
    /// ```
    /// # use value_containers::containers::optional::OptionalBox;
    /// let mut source = OptionalBox::new(5);
    /// let taken = source.take();
    /// assert!(!source.has_value());
    /// assert_eq!(taken.value(), Ok(&5));
    /// ```
    pub fn take(&mut self) -> OptionalBox<T> {
        if self.present {
            self.present = false;
            // SAFETY: The flag was just cleared, so this read is the only owner of the value.
            OptionalBox::new(unsafe { self.slot.assume_init_read() })
        } else {
            OptionalBox::empty()
        }
    }

    /// Exchanges the contents of two boxes. When both hold values the values are swapped in
    /// place; when exactly one does, its value is relocated into the other box and the old holder
    /// becomes empty; when both are empty nothing happens.
    pub fn swap(&mut self, other: &mut OptionalBox<T>) {
        match (self.present, other.present) {
            (true, true) => {
                // SAFETY: Both flags are set, so both slots hold live values.
                unsafe { mem::swap(self.slot.assume_init_mut(), other.slot.assume_init_mut()) }
            },
            (true, false) => {
                self.present = false;
                // SAFETY: self was present and its flag is now cleared, so the value is relocated
                // rather than duplicated; other's slot was uninitialized.
                other.slot.write(unsafe { self.slot.assume_init_read() });
                other.present = true;
            },
            (false, true) => other.swap(self),
            (false, false) => {},
        }
    }

    /// Applies `f` to the held value and returns the result, or a default-constructed result if
    /// the box is empty.
    ///
    /// # Examples
    /// ```
    /// # use value_containers::containers::optional::OptionalBox;
    /// let boxed = OptionalBox::new(2);
    /// assert_eq!(boxed.and_then(|v| v * 10), 20);
    /// assert_eq!(OptionalBox::<i32>::empty().and_then(|v| v * 10), 0);
    /// ```
    pub fn and_then<U, F>(&self, f: F) -> U
    where
        U: Default,
        F: FnOnce(&T) -> U,
    {
        match self.get() {
            Some(value) => f(value),
            None => U::default(),
        }
    }
}

impl<T> Drop for OptionalBox<T> {
    fn drop(&mut self) {
        if self.present {
            // SAFETY: The flag guarantees exactly one live value in the slot. The storage itself
            // is inline, so there is nothing to deallocate.
            unsafe { self.slot.assume_init_drop() }
        }
    }
}

impl<T> Default for OptionalBox<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for OptionalBox<T> {
    fn from(value: T) -> Self {
        OptionalBox::new(value)
    }
}

impl<T: Clone> Clone for OptionalBox<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => OptionalBox::new(value.clone()),
            None => OptionalBox::empty(),
        }
    }
}

impl<T> PartialEq<Absent> for OptionalBox<T> {
    fn eq(&self, _: &Absent) -> bool {
        !self.present
    }
}

impl<T> PartialEq<OptionalBox<T>> for Absent {
    fn eq(&self, other: &OptionalBox<T>) -> bool {
        !other.present
    }
}

impl<T: PartialEq> PartialEq for OptionalBox<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for OptionalBox<T> {}

/// An empty box orders before any box holding a value; two held values use `T`'s own ordering.
/// This is a total order even though one operand may be empty.
impl<T: PartialOrd> PartialOrd for OptionalBox<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<T: Ord> Ord for OptionalBox<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl<T: Hash> Hash for OptionalBox<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<T: Debug> Debug for OptionalBox<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("OptionalBox").field(value).finish(),
            None => f.write_str("OptionalBox(Absent)"),
        }
    }
}
