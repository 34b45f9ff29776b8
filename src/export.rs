//! Canonical text dump — render a figure as an indented block listing.
//!
//! The dump is the stable textual form used for golden-file comparison and
//! round-trip checks. It is not the JSON interchange format (see
//! [`codec`](crate::codec)).
//!
//! ```text
//! Figure
//! {
//!   Description: "Right Triangle in the first quadrant."
//!   Points:
//!   {
//!     Point(A)(0.0, 0.0)
//!     Point(B)(1.0, 1.0)
//!   }
//!   Segments:
//!   {
//!     A : B
//!     B : A
//!   }
//! }
//! ```

use std::fmt;
use std::io;

use crate::figure::Figure;
use crate::model::Point;
use crate::model::point::Coord;
use crate::storage::{PointRegistry, SegmentGraph};
use crate::Result;

// ============================================================================
// Layout configuration
// ============================================================================

/// One level of leading whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Tab,
    Spaces(usize),
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

impl Indent {
    fn write(self, out: &mut dyn fmt::Write, level: usize) -> fmt::Result {
        for _ in 0..level {
            match self {
                Indent::Tab => out.write_char('\t')?,
                Indent::Spaces(n) => {
                    for _ in 0..n {
                        out.write_char(' ')?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Layout of the canonical dump.
#[derive(Debug, Clone, Default)]
pub struct DumpConfig {
    pub indent: Indent,
}

impl DumpConfig {
    pub fn with_indent(indent: Indent) -> Self {
        Self { indent }
    }
}

// ============================================================================
// Unparse
// ============================================================================

/// Components that can write themselves into the canonical dump.
pub trait Unparse {
    /// Write this component at indent `level`. Every emitted line ends
    /// with `\n`; nested blocks go one level deeper.
    fn unparse(&self, out: &mut dyn fmt::Write, level: usize, config: &DumpConfig) -> fmt::Result;
}

impl Unparse for Point {
    fn unparse(&self, out: &mut dyn fmt::Write, level: usize, config: &DumpConfig) -> fmt::Result {
        config.indent.write(out, level)?;
        writeln!(out, "Point({})({}, {})", self.dump_name(), Coord(self.x()), Coord(self.y()))
    }
}

impl Unparse for PointRegistry {
    fn unparse(&self, out: &mut dyn fmt::Write, level: usize, config: &DumpConfig) -> fmt::Result {
        open(out, level, config)?;
        for point in self {
            point.unparse(out, level + 1, config)?;
        }
        close(out, level, config)
    }
}

impl Unparse for SegmentGraph {
    fn unparse(&self, out: &mut dyn fmt::Write, level: usize, config: &DumpConfig) -> fmt::Result {
        open(out, level, config)?;
        for (source, targets) in self.adjacency_lists() {
            config.indent.write(out, level + 1)?;
            write!(out, "{} :", source.dump_name())?;
            for target in targets {
                write!(out, " {}", target.dump_name())?;
            }
            out.write_char('\n')?;
        }
        close(out, level, config)
    }
}

impl Unparse for Figure {
    fn unparse(&self, out: &mut dyn fmt::Write, level: usize, config: &DumpConfig) -> fmt::Result {
        config.indent.write(out, level)?;
        out.write_str("Figure\n")?;
        open(out, level, config)?;

        config.indent.write(out, level + 1)?;
        writeln!(out, "Description: \"{}\"", self.description())?;

        config.indent.write(out, level + 1)?;
        out.write_str("Points:\n")?;
        self.points().unparse(out, level + 1, config)?;

        config.indent.write(out, level + 1)?;
        out.write_str("Segments:\n")?;
        self.segments().unparse(out, level + 1, config)?;

        close(out, level, config)
    }
}

fn open(out: &mut dyn fmt::Write, level: usize, config: &DumpConfig) -> fmt::Result {
    config.indent.write(out, level)?;
    out.write_str("{\n")
}

fn close(out: &mut dyn fmt::Write, level: usize, config: &DumpConfig) -> fmt::Result {
    config.indent.write(out, level)?;
    out.write_str("}\n")
}

/// Write the canonical dump of `figure` to `writer`.
pub fn export_figure_dump(
    figure: &Figure,
    writer: &mut dyn io::Write,
    config: &DumpConfig,
) -> Result<()> {
    io::Write::write_all(writer, figure.to_dump_string(config).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(component: &dyn Unparse, level: usize, config: &DumpConfig) -> String {
        let mut out = String::new();
        component.unparse(&mut out, level, config).unwrap();
        out
    }

    #[test]
    fn test_point_line() {
        let config = DumpConfig::default();
        assert_eq!(render(&Point::named("A", 1.0, 2.5), 0, &config), "Point(A)(1.0, 2.5)\n");
        assert_eq!(render(&Point::new(0.0, 0.0), 1, &config), "  Point(__UNNAMED)(0.0, 0.0)\n");
    }

    #[test]
    fn test_point_line_keeps_sub_tolerance_coordinates() {
        let registry = PointRegistry::from_points([
            Point::named("P", -9e-7, 0.0),
            Point::named("Q", 9e-7, 0.0),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            render(&registry, 0, &DumpConfig::default()),
            "{\n  Point(P)(-9.0E-7, 0.0)\n  Point(Q)(9.0E-7, 0.0)\n}\n"
        );
    }

    #[test]
    fn test_point_line_extreme_magnitudes() {
        let line = render(&Point::named("F", 1e16, 2.5e-5), 0, &DumpConfig::default());
        assert_eq!(line, "Point(F)(1.0E16, 2.5E-5)\n");
    }

    #[test]
    fn test_tab_indent() {
        let config = DumpConfig::with_indent(Indent::Tab);
        let registry = PointRegistry::from_points([Point::named("A", 0.0, 0.0)]);
        assert_eq!(render(&registry, 1, &config), "\t{\n\t\tPoint(A)(0.0, 0.0)\n\t}\n");
    }

    #[test]
    fn test_segment_lines() {
        let graph = SegmentGraph::from_adjacency([
            (
                Point::named("A", 0.0, 0.0),
                vec![Point::named("B", 1.0, 0.0), Point::named("C", 0.0, 1.0)],
            ),
            (Point::named("C", 0.0, 1.0), vec![]),
        ]);
        let config = DumpConfig::with_indent(Indent::Spaces(1));
        assert_eq!(render(&graph, 0, &config), "{\n A : B C\n C :\n}\n");
    }

    #[test]
    fn test_export_to_writer() {
        let figure = Figure::new("Empty.", PointRegistry::new(), SegmentGraph::new());
        let mut buf = Vec::new();
        export_figure_dump(&figure, &mut buf, &DumpConfig::default()).unwrap();
        let dump = String::from_utf8(buf).unwrap();
        assert_eq!(
            dump,
            "Figure\n{\n  Description: \"Empty.\"\n  Points:\n  {\n  }\n  Segments:\n  {\n  }\n}\n"
        );
    }
}
