//! Segment graph — undirected edges stored as mirrored directed arcs.
//!
//! The graph owns its vertices in a private [`PointRegistry`]. Every point
//! handed to an insertion is interned there by coordinate equality, so two
//! vertices are never equal and arcs are plain [`PointId`] pairs.
//!
//! ## Enumeration order
//!
//! Sources are visited in the order they first received an adjacency entry,
//! targets in the order they were added to that source. Every listing
//! (`arcs`, both segment lists, the edge count, the dump) uses this order.

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::model::{Point, Segment};
use super::{PointId, PointRegistry};

type TargetSet = SmallVec<[PointId; 4]>;

/// Adjacency-list store of an undirected graph over points.
///
/// [`add_undirected_edge`](Self::add_undirected_edge) keeps the graph
/// symmetric; [`from_adjacency`](Self::from_adjacency) accepts arbitrary
/// directed lists, so symmetry is not guaranteed in general.
#[derive(Debug, Clone, Default)]
pub struct SegmentGraph {
    vertices: PointRegistry,
    adjacency: Vec<(PointId, TargetSet)>,
    /// source → position in `adjacency`
    slots: HashMap<PointId, usize>,
}

impl SegmentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from directed adjacency lists, taken as given.
    ///
    /// Sources keep the iteration order of `lists`; a source with no
    /// targets still gets an (empty) entry. No reverse arcs are added.
    pub fn from_adjacency<I, T>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Point, T)>,
        T: IntoIterator<Item = Point>,
    {
        let mut graph = Self::new();
        for (source, targets) in lists {
            let src = graph.intern(&source);
            graph.slot(src);
            for target in targets {
                let dst = graph.intern(&target);
                graph.add_arc(src, dst);
            }
        }
        graph
    }

    /// Insert arcs `p1 → p2` and `p2 → p1`. Existing arcs are not repeated.
    pub fn add_undirected_edge(&mut self, p1: &Point, p2: &Point) {
        let a = self.intern(p1);
        let b = self.intern(p2);
        self.add_arc(a, b);
        self.add_arc(b, a);
    }

    /// [`add_undirected_edge`](Self::add_undirected_edge) from `point` to
    /// each neighbor, in order.
    pub fn add_adjacency_list<'p>(
        &mut self,
        point: &Point,
        neighbors: impl IntoIterator<Item = &'p Point>,
    ) {
        for neighbor in neighbors {
            self.add_undirected_edge(point, neighbor);
        }
    }

    fn intern(&mut self, point: &Point) -> PointId {
        match self.vertices.id_of(point) {
            Some(id) => id,
            None => self.vertices.put(point.clone()),
        }
    }

    fn slot(&mut self, src: PointId) -> usize {
        if let Some(&slot) = self.slots.get(&src) {
            return slot;
        }
        let slot = self.adjacency.len();
        self.adjacency.push((src, TargetSet::new()));
        self.slots.insert(src, slot);
        slot
    }

    fn add_arc(&mut self, src: PointId, dst: PointId) {
        let slot = self.slot(src);
        let targets = &mut self.adjacency[slot].1;
        if !targets.contains(&dst) {
            targets.push(dst);
            tracing::trace!(%src, %dst, "arc added");
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The interned vertices, in first-seen order.
    pub fn vertices(&self) -> &PointRegistry {
        &self.vertices
    }

    /// No adjacency entries at all.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of sources with an adjacency entry (possibly empty).
    pub fn num_sources(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.adjacency.iter().map(|(_, t)| t.len()).sum()
    }

    /// Adjacency entries: each source with its targets.
    pub fn adjacency_lists(&self) -> impl Iterator<Item = (&Point, Targets<'_>)> + '_ {
        self.adjacency
            .iter()
            .map(|(src, targets)| (&self.vertices[*src], self.targets(targets)))
    }

    /// Targets of `point`, or `None` when it has no adjacency entry.
    pub fn neighbors(&self, point: &Point) -> Option<Targets<'_>> {
        let src = self.vertices.id_of(point)?;
        let slot = *self.slots.get(&src)?;
        Some(self.targets(&self.adjacency[slot].1))
    }

    pub fn contains_arc(&self, from: &Point, to: &Point) -> bool {
        match (self.vertices.id_of(from), self.vertices.id_of(to)) {
            (Some(src), Some(dst)) => self
                .slots
                .get(&src)
                .is_some_and(|&slot| self.adjacency[slot].1.contains(&dst)),
            _ => false,
        }
    }

    fn targets<'a>(&'a self, ids: &'a TargetSet) -> Targets<'a> {
        Targets { vertices: &self.vertices, ids: ids.iter() }
    }

    fn arc_ids(&self) -> impl Iterator<Item = (PointId, PointId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(src, targets)| targets.iter().map(move |dst| (*src, *dst)))
    }

    /// Every directed arc as `(source, target)`.
    pub fn arcs(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.arc_ids()
            .map(|(src, dst)| (&self.vertices[src], &self.vertices[dst]))
    }

    // ========================================================================
    // Segment views
    // ========================================================================

    /// One segment per directed arc. A mirrored pair of arcs yields two
    /// segments that compare equal.
    pub fn as_directed_segment_list(&self) -> Vec<Segment<'_>> {
        self.arcs().map(|(a, b)| Segment::new(a, b)).collect()
    }

    /// One segment per undirected edge, in order of first occurrence
    /// among the directed arcs.
    pub fn as_unique_segment_list(&self) -> Vec<Segment<'_>> {
        let mut seen = HashSet::new();
        self.arc_ids()
            .filter(|&(src, dst)| seen.insert(edge_key(src, dst)))
            .map(|(src, dst)| Segment::new(&self.vertices[src], &self.vertices[dst]))
            .collect()
    }

    /// Number of arcs whose undirected edge was already seen earlier in the
    /// enumeration, i.e. arcs minus unique edges.
    ///
    /// A mirrored pair counts once; an arc without its reverse counts zero.
    pub fn num_undirected_edges(&self) -> usize {
        let mut seen = HashSet::new();
        self.arc_ids()
            .filter(|&(src, dst)| !seen.insert(edge_key(src, dst)))
            .count()
    }
}

/// Order-independent key of the edge between two vertices.
fn edge_key(a: PointId, b: PointId) -> (PointId, PointId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Targets of one adjacency entry, in insertion order.
#[derive(Debug, Clone)]
pub struct Targets<'a> {
    vertices: &'a PointRegistry,
    ids: std::slice::Iter<'a, PointId>,
}

impl<'a> Iterator for Targets<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<&'a Point> {
        self.ids.next().map(|id| &self.vertices[*id])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for Targets<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> SegmentGraph {
        let a = Point::named("A", 0.0, 0.0);
        let b = Point::named("B", 1.0, 0.0);
        let c = Point::named("C", 0.0, 1.0);
        let mut graph = SegmentGraph::new();
        graph.add_adjacency_list(&a, [&b, &c]);
        graph.add_undirected_edge(&b, &c);
        graph
    }

    #[test]
    fn test_empty() {
        let graph = SegmentGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.num_arcs(), 0);
        assert_eq!(graph.num_undirected_edges(), 0);
        assert!(graph.as_directed_segment_list().is_empty());
        assert!(graph.as_unique_segment_list().is_empty());
    }

    #[test]
    fn test_undirected_edge_is_two_arcs() {
        let graph = triangle();
        assert_eq!(graph.num_arcs(), 6);
        assert_eq!(graph.num_undirected_edges(), 3);
        assert_eq!(graph.as_unique_segment_list().len(), 3);
        assert!(graph.contains_arc(&Point::new(1.0, 0.0), &Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_repeat_edge_not_duplicated() {
        let mut graph = triangle();
        graph.add_undirected_edge(&Point::new(0.0, 1.0), &Point::new(1.0, 0.0));
        assert_eq!(graph.num_arcs(), 6);
    }

    #[test]
    fn test_interning_keeps_first_name() {
        let mut graph = triangle();
        graph.add_undirected_edge(&Point::named("Other", 0.0, 0.0), &Point::named("D", 5.0, 5.0));
        assert_eq!(graph.vertices().len(), 4);
        let names: Vec<_> = graph
            .neighbors(&Point::new(5.0, 5.0))
            .unwrap()
            .map(Point::dump_name)
            .collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn test_neighbors_order() {
        let graph = triangle();
        let names: Vec<_> = graph
            .neighbors(&Point::new(1.0, 0.0))
            .unwrap()
            .map(Point::dump_name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(graph.neighbors(&Point::new(7.0, 7.0)).is_none());
    }

    #[test]
    fn test_self_loop_counts_zero() {
        let p = Point::named("P", 2.0, 2.0);
        let mut graph = SegmentGraph::new();
        graph.add_undirected_edge(&p, &p);
        assert_eq!(graph.num_arcs(), 1);
        assert_eq!(graph.num_undirected_edges(), 0);
        assert_eq!(graph.as_unique_segment_list().len(), 1);
    }

    #[test]
    fn test_source_without_targets() {
        let graph = SegmentGraph::from_adjacency([
            (Point::named("A", 0.0, 0.0), vec![Point::named("B", 1.0, 0.0)]),
            (Point::named("C", 3.0, 3.0), vec![]),
        ]);
        assert_eq!(graph.num_sources(), 2);
        assert_eq!(graph.num_arcs(), 1);
        assert_eq!(graph.neighbors(&Point::new(3.0, 3.0)).map(|t| t.len()), Some(0));
        assert!(graph.neighbors(&Point::new(1.0, 0.0)).is_none());
    }
}
