use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::{CapacityOverflow, ErrorExtension};

/// An owning handle over `cap` contiguous, uninitialized slots of `T`.
///
/// The buffer manages memory and nothing else: it allocates, reallocates and frees, and never
/// constructs or drops an element. The owning container tracks which slots are live and runs the
/// destructors itself, so a `RawBuf` can be freed at any time without inspecting its contents.
///
/// The pointer dangles while `cap == 0` and for zero-sized `T`; neither case ever touches the
/// allocator.
pub(crate) struct RawBuf<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// A buffer of zero slots. Never allocates.
    pub(crate) const fn new() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// A buffer of exactly `cap` uninitialized slots.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub(crate) fn with_cap(cap: usize) -> RawBuf<T> {
        let mut buf = RawBuf::new();
        buf.realloc(cap);
        buf
    }

    /// A helper to build the [`Layout`] covering `cap` slots of `T`.
    ///
    /// # Panics
    /// Panics with the [`CapacityOverflow`] message if the layout would exceed [`isize::MAX`]
    /// bytes.
    fn make_layout(cap: usize) -> Layout {
        match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => CapacityOverflow.raise(),
        }
    }

    /// Resizes the buffer to exactly `new_cap` slots. Slots beyond the old capacity are
    /// uninitialized; slots below it keep their bytes (the allocator relocates them when it has to
    /// move the block). The caller remains responsible for every live value it has placed in the
    /// buffer; shrinking below an occupied slot without destroying its value first loses that
    /// value.
    ///
    /// # Panics
    /// Panics if the new memory layout size would exceed [`isize::MAX`].
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        let new_ptr = match (self.cap, new_cap) {
            // Zero-sized types never allocate; only the bookkeeping changes.
            (_, _) if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return,
            (0, _) => {
                let layout = Self::make_layout(new_cap);

                // SAFETY: T is not zero-sized and new_cap > 0 (the equal-capacity arm above
                // covers 0 -> 0), so the layout has nonzero size.
                let raw: *mut T = unsafe { alloc::alloc(layout).cast() };

                NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(layout))
            },
            (_, 0) => {
                // SAFETY: cap > 0 and T is not zero-sized, so this block was previously
                // allocated in the global allocator with this exact layout.
                unsafe {
                    alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.cap));
                }

                NonNull::dangling()
            },
            (_, _) => {
                // Validate the new layout before handing the allocator a raw byte count.
                let new_layout = Self::make_layout(new_cap);
                let old_layout = Self::make_layout(self.cap);

                // SAFETY: The block was allocated in the global allocator with old_layout, and
                // the new size is nonzero and was just checked against isize::MAX.
                let raw: *mut T = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: A nonzero layout means the block was allocated in the global allocator with
            // this exact layout and hasn't been freed. Element destructors are the owning
            // container's responsibility, never this one's.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }
    }
}
