//! Core data types and models

pub mod dates;
pub mod generation;
pub mod timed_object;

mod lookup;
mod reassign;

pub use dates::*;
pub use generation::*;
pub use timed_object::*;
