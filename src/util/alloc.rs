use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized element type for exercising the no-allocation paths of the containers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSized;

/// An element whose clones all increment one shared tally when dropped, for asserting exactly how
/// many destructors a container operation ran.
#[derive(Debug, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    /// The number of drops recorded so far across this counter and all of its clones.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
