//! Traits shared by all of the sequence containers.

mod container;

pub use container::*;
