use std::alloc;
use std::error::Error;

use crate::util::error::{AllocError, ContainerError};

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the value, panicking with the [`Display`](std::fmt::Display) message of the error
    /// itself on failure.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}

pub(crate) trait AllocResultExtension<T> {
    /// Unwraps the value produced by an allocating operation. Allocation failures are passed to
    /// [`alloc::handle_alloc_error`], every other error panics with its message.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`] other than an allocation failure.
    fn throw_alloc(self) -> T;
}

impl<T> AllocResultExtension<T> for Result<T, AllocError> {
    fn throw_alloc(self) -> T {
        match self {
            Ok(val) => val,
            Err(AllocError::AllocFailure(failure)) => alloc::handle_alloc_error(failure.layout),
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> AllocResultExtension<T> for Result<T, ContainerError> {
    fn throw_alloc(self) -> T {
        match self {
            Ok(val) => val,
            Err(ContainerError::AllocFailure(failure)) => alloc::handle_alloc_error(failure.layout),
            Err(error) => panic!("{}", error),
        }
    }
}
