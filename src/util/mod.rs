#[cfg(test)]
pub mod alloc;
pub mod error;
pub mod fmt;
pub mod option;
#[cfg(test)]
pub mod panic;
pub mod result;
