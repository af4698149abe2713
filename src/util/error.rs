use std::alloc::Layout;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The provided index (or insertion position) lies outside of the valid range for the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl std::error::Error for IndexOutOfBounds {}

/// The requested capacity can't be represented as a valid memory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl fmt::Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl std::error::Error for CapacityOverflow {}

/// The global allocator was unable to provide memory for the given layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocFailure {
    pub layout: Layout,
}

impl fmt::Display for AllocFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to allocate {} bytes with alignment {}!",
            self.layout.size(),
            self.layout.align(),
        )
    }
}

impl std::error::Error for AllocFailure {}

/// An error produced while acquiring storage. When returned, the collection is left exactly as it
/// was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum AllocError {
    CapacityOverflow(CapacityOverflow),
    AllocFailure(AllocFailure),
}

/// Any error that a positional, storage acquiring operation (such as an insertion) can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ContainerError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    AllocFailure(AllocFailure),
}

impl From<AllocError> for ContainerError {
    fn from(value: AllocError) -> Self {
        match value {
            AllocError::CapacityOverflow(err) => ContainerError::CapacityOverflow(err),
            AllocError::AllocFailure(err) => ContainerError::AllocFailure(err),
        }
    }
}
