use std::num::NonZero;

use crate::util::error::CapacityOverflow;

/// The length of a non-empty list. Empty lists are represented by a separate state entirely, so a
/// list that holds a Length always has a head and a tail.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    /// Returns the length after adding one more node, or a [`CapacityOverflow`] if it can't be
    /// represented.
    pub const fn incremented(self) -> Result<Length, CapacityOverflow> {
        match self.0.checked_add(1) {
            Some(res) => Ok(Length(res)),
            None => Err(CapacityOverflow),
        }
    }

    /// Returns the length after removing one node, or [`None`] if that would leave the list empty.
    pub const fn decremented(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
