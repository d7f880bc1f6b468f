//! Item storage for ShelfWatch.
//!
//! This crate provides a storage abstraction for inventory items. The
//! production backend is a line-oriented text file; an in-memory
//! implementation is available for tests and development.

mod error;
mod flat_file;
mod memory;
mod traits;

pub use error::*;
pub use flat_file::*;
pub use memory::*;
pub use traits::*;
