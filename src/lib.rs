//! # geofig — 2D Figure Data Model
//!
//! In-memory representation of a geometric figure: a named set of points
//! and the segments connecting them, loaded from JSON and re-emitted as a
//! canonical text dump.
//!
//! ## Design Principles
//!
//! 1. **Coordinates are identity**: two points within `EPSILON` are the same
//!    point, whatever their names
//! 2. **Arena + handles**: registries own points, everything else refers to
//!    them by `PointId` or by borrow
//! 3. **Undirected as mirrored arcs**: an edge is two directed arcs, and
//!    every listing walks arcs in insertion order
//! 4. **Decode owns validation**: the model types never fail; malformed input
//!    is rejected once, at the codec boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use geofig::codec;
//!
//! # fn example() -> geofig::Result<()> {
//! let figure = codec::parse(r#"{ "Figure": {
//!     "Description": "Right Triangle in the first quadrant.",
//!     "Points": [
//!         { "name": "A", "x": 0, "y": 0 },
//!         { "name": "B", "x": 1, "y": 1 },
//!         { "name": "C", "x": 1, "y": 0 }
//!     ],
//!     "Segments": [ { "A": ["B", "C"] }, { "B": ["C"] } ]
//! } }"#)?;
//!
//! assert_eq!(figure.segments().as_unique_segment_list().len(), 3);
//! println!("{figure}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod figure;
pub mod codec;
pub mod export;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Point, Segment, EPSILON};
pub use storage::{PointId, PointRegistry, SegmentGraph};
pub use figure::Figure;
pub use export::{DumpConfig, Indent, Unparse};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed document, missing key, or unresolvable point name.
    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
