use std::cell::Cell;
use std::rc::Rc;

/// Monotonic token source. A load takes a token up front and only renders if
/// its token is still the latest one when the data arrives.
#[derive(Debug, Clone, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    pub fn advance(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}
