//! # Figure Storage
//!
//! The two registries a figure is built from.
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `PointRegistry` | `points` | Deduplicating point arena, addressed by `PointId` |
//! | `SegmentGraph` | `segments` | Undirected graph as mirrored directed adjacency lists |
//!
//! Both are built incrementally while a figure is decoded and only read
//! afterwards. Neither uses interior mutability, so a finished store can
//! be shared across threads by reference.

pub mod points;
pub mod segments;

pub use points::{PointId, PointRegistry};
pub use segments::{SegmentGraph, Targets};
