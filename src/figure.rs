//! Figure — a described set of points and the segments between them.

use std::fmt;

use crate::export::{DumpConfig, Unparse};
use crate::storage::{PointRegistry, SegmentGraph};

/// Root of a decoded figure.
///
/// Points referenced by the segment graph are expected to exist in
/// `points`; the decoder guarantees it, the constructor does not check.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    description: String,
    points: PointRegistry,
    segments: SegmentGraph,
}

impl Figure {
    pub fn new(
        description: impl Into<String>,
        points: PointRegistry,
        segments: SegmentGraph,
    ) -> Self {
        Self { description: description.into(), points, segments }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn points(&self) -> &PointRegistry {
        &self.points
    }

    pub fn segments(&self) -> &SegmentGraph {
        &self.segments
    }

    /// Take the figure apart again.
    pub fn into_parts(self) -> (String, PointRegistry, SegmentGraph) {
        (self.description, self.points, self.segments)
    }

    /// Canonical dump at indent level 0 with the given layout.
    pub fn to_dump_string(&self, config: &DumpConfig) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.unparse(&mut out, 0, config);
        out
    }
}

/// The canonical dump with the default layout.
impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.unparse(f, 0, &DumpConfig::default())
    }
}
