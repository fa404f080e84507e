#![doc = include_str!("../README.md")]

mod error;
mod finder;
mod marker;
mod segment;

pub use error::*;
pub use finder::*;
pub use marker::*;
pub use segment::*;
