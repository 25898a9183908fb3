// Scoped ownership for listener lifetimes.
// Free of web types so it can be checked on the host.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedList<T> = Rc<RefCell<SmallVec<[T; 4]>>>;

/// A list that closures hold handles to. Dropping the owner empties it even
/// while handles are still alive.
pub struct ScopedList<T> {
    list: SharedList<T>,
}

impl<T> ScopedList<T> {
    pub fn new() -> Self {
        Self {
            list: Rc::new(RefCell::new(SmallVec::new())),
        }
    }

    #[inline]
    pub fn handle(&self) -> SharedList<T> {
        self.list.clone()
    }
}

impl<T> Default for ScopedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ScopedList<T> {
    fn drop(&mut self) {
        if let Ok(mut list) = self.list.try_borrow_mut() {
            list.clear();
        }
    }
}

/// Runs `f` on drop unless disarmed.
pub struct Defer<F: FnOnce()> {
    f: Option<F>,
}

impl<F: FnOnce()> Defer<F> {
    pub fn new(f: F) -> Self {
        Self { f: Some(f) }
    }

    pub fn disarm(mut self) {
        self.f = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(f) = self.f.take() {
            f();
        }
    }
}
