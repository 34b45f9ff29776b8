//! Validating conversion from the wire schema into a [`Figure`].

use crate::figure::Figure;
use crate::model::Point;
use crate::storage::{PointRegistry, SegmentGraph};
use crate::{Error, Result};

use super::schema::{AdjacencyRecord, Document, PointRecord};

/// Build a figure from a parsed document.
///
/// Points are registered first; every segment record is then resolved by
/// name against that registry. A name that resolves to nothing fails the
/// whole decode.
pub fn decode(document: Document) -> Result<Figure> {
    let record = document.figure;
    let points = decode_points(record.points);
    let segments = decode_segments(&record.segments, &points)?;

    tracing::debug!(
        points = points.len(),
        records = record.segments.len(),
        arcs = segments.num_arcs(),
        "figure decoded"
    );

    Ok(Figure::new(record.description, points, segments))
}

fn decode_points(records: Vec<PointRecord>) -> PointRegistry {
    records
        .into_iter()
        .map(|r| Point::named(r.name, r.x, r.y))
        .collect()
}

fn decode_segments(records: &[AdjacencyRecord], points: &PointRegistry) -> Result<SegmentGraph> {
    let mut graph = SegmentGraph::new();

    for (index, record) in records.iter().enumerate() {
        let mut entries = record.0.iter();
        let (root_name, adjacent_names) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(Error::Decode(format!(
                    "segment record {index} must have exactly one root point, found {}",
                    record.0.len()
                )));
            }
        };

        let root = resolve(points, root_name)?;
        let adjacent = adjacent_names
            .iter()
            .map(|name| resolve(points, name))
            .collect::<Result<Vec<_>>>()?;

        graph.add_adjacency_list(root, adjacent);
    }

    Ok(graph)
}

fn resolve<'a>(points: &'a PointRegistry, name: &str) -> Result<&'a Point> {
    points
        .get_point_by_name(name)
        .ok_or_else(|| Error::Decode(format!("segment references unknown point `{name}`")))
}
