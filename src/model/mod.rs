//! # Figure Model
//!
//! The value types a figure is built from. Pure data: no I/O, no state.

pub mod point;
pub mod segment;

pub use point::{Point, EPSILON, ANONYMOUS, approx_eq};
pub use segment::Segment;
