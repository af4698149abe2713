//! Contiguous collection types. Namely [`Vector`], a growable array which manages its own raw
//! buffer.
#![warn(missing_docs)]

mod raw_buf;
pub mod vector;

pub(crate) use raw_buf::RawBuf;
#[doc(inline)]
pub use vector::Vector;
