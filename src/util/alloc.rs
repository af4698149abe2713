use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// Increments the shared counter every time an instance is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A value which panics when cloned if it has been marked as poisoned. Drops are counted through
/// the contained [`CountedDrop`], so tests can check that nothing leaks during an unwinding clone.
#[derive(Debug)]
pub struct PanicOnClone {
    pub poisoned: bool,
    pub counter: CountedDrop,
}

impl PanicOnClone {
    pub fn new(poisoned: bool, counter: &CountedDrop) -> PanicOnClone {
        PanicOnClone {
            poisoned,
            counter: counter.clone(),
        }
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        if self.poisoned {
            panic!("Cloned a poisoned value!");
        }
        PanicOnClone {
            poisoned: false,
            counter: self.counter.clone(),
        }
    }
}
