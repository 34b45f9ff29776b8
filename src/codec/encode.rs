//! Figure → wire schema, the inverse of [`decode`](super::decode).
//!
//! Each adjacency entry becomes one segment record listing its targets.
//! Decoding re-inserts every listed pair as an undirected edge, so a graph
//! holding one-way arcs comes back symmetric.

use hashbrown::HashSet;

use crate::figure::Figure;
use crate::model::Point;
use crate::{Error, Result};

use super::schema::{AdjacencyRecord, Document, FigureRecord, PointRecord};

/// Fails with [`Error::Encode`] unless every stored point carries a unique
/// name and every segment endpoint is one of those points: the wire format
/// refers to points by name only.
pub fn encode(figure: &Figure) -> Result<Document> {
    let mut seen = HashSet::new();
    let mut points = Vec::with_capacity(figure.points().len());
    for p in figure.points() {
        let name = p
            .name()
            .ok_or_else(|| Error::Encode(format!("point {p} has no name")))?;
        if !seen.insert(name) {
            return Err(Error::Encode(format!("duplicate point name `{name}`")));
        }
        points.push(PointRecord { name: name.to_string(), x: p.x(), y: p.y() });
    }

    let mut segments = Vec::new();
    for (source, targets) in figure.segments().adjacency_lists() {
        let names = targets
            .map(|t| endpoint_name(figure, t).map(str::to_string))
            .collect::<Result<Vec<_>>>()?;
        segments.push(AdjacencyRecord::single(endpoint_name(figure, source)?, names));
    }

    Ok(Document {
        figure: FigureRecord {
            description: figure.description().to_string(),
            points,
            segments,
        },
    })
}

fn endpoint_name<'a>(figure: &Figure, point: &'a Point) -> Result<&'a str> {
    match point.name() {
        Some(name) if figure.points().get_point_by_name(name) == Some(point) => Ok(name),
        _ => Err(Error::Encode(format!("segment endpoint {point} is not a named figure point"))),
    }
}
