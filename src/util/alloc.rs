use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized marker for exercising the no-allocation paths.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSized;

/// A handle whose clones all bump a shared counter when dropped, for
/// asserting that a collection releases exactly the elements it should.
#[derive(Debug)]
pub struct DropTally(Rc<Cell<usize>>);

impl DropTally {
    pub fn new() -> DropTally {
        DropTally(Rc::new(Cell::new(0)))
    }

    /// The number of handles dropped so far.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Default for DropTally {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DropTally {
    fn clone(&self) -> Self {
        DropTally(Rc::clone(&self.0))
    }
}

impl Drop for DropTally {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
