#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod collapse;
mod contiguity;
mod display;
mod error;
mod marker;
mod mutation;
mod payload;
mod reorder;
mod set;
mod summary;

pub use collapse::*;
pub use contiguity::*;
pub use display::*;
pub use error::*;
pub use marker::*;
pub use mutation::*;
pub use payload::*;
pub use reorder::*;
pub use set::*;
pub use summary::*;
