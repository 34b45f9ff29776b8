//! Point registry — the arena every other structure addresses points through.
//!
//! Points are stored once, in insertion order, and handed out by
//! [`PointId`]. Identity is coordinate equality within
//! [`EPSILON`](crate::model::EPSILON); the first point inserted at a
//! location keeps its name, later duplicates are dropped.
//!
//! ## Lookup
//!
//! An exact-bit index answers repeats of the same coordinates in O(1).
//! Anything else falls back to a linear equality scan, because tolerance
//! equality cannot be partitioned into hash buckets.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::Point;
use crate::model::point::canonical_bits;

/// Opaque handle of a point inside one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PointId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Deduplicating, insertion-ordered collection of points.
#[derive(Debug, Clone, Default)]
pub struct PointRegistry {
    points: Vec<Point>,
    /// (x bits, y bits) → id
    exact: HashMap<(u64, u64), PointId>,
    /// name → first point carrying it
    by_name: HashMap<String, PointId>,
}

impl PointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `points`, duplicates collapsed onto the first one.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut registry = Self::new();
        registry.extend(points);
        registry
    }

    /// Insert `point` unless an equal one is already stored.
    ///
    /// Returns the handle of the stored point, which on a duplicate is the
    /// earlier entry (whose name is retained).
    pub fn put(&mut self, point: Point) -> PointId {
        if let Some(id) = self.id_of_xy(point.x(), point.y()) {
            tracing::trace!(%point, existing = %id, "duplicate point ignored");
            return id;
        }

        let id = PointId(self.points.len() as u32);
        self.exact.insert(bits(point.x(), point.y()), id);
        if let Some(name) = point.name() {
            self.by_name.entry(name.to_string()).or_insert(id);
        }
        self.points.push(point);
        id
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.contains_xy(point.x(), point.y())
    }

    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.id_of_xy(x, y).is_some()
    }

    /// The stored point equal to `point`, carrying its registered name.
    pub fn get_point(&self, point: &Point) -> Option<&Point> {
        self.get_point_xy(point.x(), point.y())
    }

    pub fn get_point_xy(&self, x: f64, y: f64) -> Option<&Point> {
        self.id_of_xy(x, y).map(|id| &self.points[id.index()])
    }

    /// First stored point (in insertion order) named `name`.
    pub fn get_point_by_name(&self, name: &str) -> Option<&Point> {
        self.by_name.get(name).map(|id| &self.points[id.index()])
    }

    /// Registered name of the point equal to `point`.
    ///
    /// A stored point without a name reports `__UNNAMED`; `None` means no
    /// such point is stored.
    pub fn get_name(&self, point: &Point) -> Option<&str> {
        self.get_point(point).map(Point::dump_name)
    }

    pub fn get_name_xy(&self, x: f64, y: f64) -> Option<&str> {
        self.get_point_xy(x, y).map(Point::dump_name)
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.index())
    }

    pub fn id_of(&self, point: &Point) -> Option<PointId> {
        self.id_of_xy(point.x(), point.y())
    }

    pub fn id_of_xy(&self, x: f64, y: f64) -> Option<PointId> {
        if let Some(&id) = self.exact.get(&bits(x, y)) {
            return Some(id);
        }
        self.points
            .iter()
            .position(|p| p.at(x, y))
            .map(|i| PointId(i as u32))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Stored points in insertion order. Each call starts over.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Stored points with their handles, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (PointId, &Point)> + '_ {
        self.points.iter().enumerate().map(|(i, p)| (PointId(i as u32), p))
    }
}

fn bits(x: f64, y: f64) -> (u64, u64) {
    (canonical_bits(x), canonical_bits(y))
}

/// Panics on a handle issued by a different registry.
impl std::ops::Index<PointId> for PointRegistry {
    type Output = Point;

    fn index(&self, id: PointId) -> &Point {
        &self.points[id.index()]
    }
}

impl Extend<Point> for PointRegistry {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.put(point);
        }
    }
}

impl FromIterator<Point> for PointRegistry {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl<'a> IntoIterator for &'a PointRegistry {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named() -> Vec<Point> {
        vec![
            Point::named("A", 0.0, 0.0),
            Point::named("B", 1.0, 1.0),
            Point::named("C", 0.0, 1.0),
        ]
    }

    #[test]
    fn test_put_and_contains() {
        let mut registry = PointRegistry::new();
        for p in named() {
            registry.put(p);
        }
        for p in named() {
            assert!(registry.contains(&p), "registry should contain {p}");
            assert!(registry.contains_xy(p.x(), p.y()));
        }
        assert!(!registry.contains_xy(2.0, 2.0));
    }

    #[test]
    fn test_duplicate_keeps_first_name() {
        let mut registry = PointRegistry::new();
        let first = registry.put(Point::named("A", 3.0, 4.0));
        let second = registry.put(Point::named("Z", 3.0, 4.0 + 1e-9));

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_name_xy(3.0, 4.0), Some("A"));
        assert!(registry.get_point_by_name("Z").is_none());
    }

    #[test]
    fn test_get_name() {
        let registry = PointRegistry::from_points(named());
        for p in named() {
            assert_eq!(registry.get_name(&p), p.name());
            assert_eq!(registry.get_name_xy(p.x(), p.y()), p.name());
        }
        assert_eq!(registry.get_name_xy(9.0, 9.0), None);

        let unnamed = PointRegistry::from_points([Point::new(1.0, 2.0)]);
        assert_eq!(unnamed.get_name_xy(1.0, 2.0), Some(crate::model::ANONYMOUS));
    }

    #[test]
    fn test_get_point() {
        let registry = PointRegistry::from_points(named());
        for p in named() {
            assert_eq!(registry.get_point(&p), Some(&p));
            assert_eq!(registry.get_point_xy(p.x(), p.y()), Some(&p));
        }
        let b = registry.get_point(&Point::new(1.0, 1.0)).unwrap();
        assert_eq!(b.name(), Some("B"));
    }

    #[test]
    fn test_get_point_by_name_first_match() {
        let registry = PointRegistry::from_points([
            Point::named("A", 0.0, 0.0),
            Point::named("A", 5.0, 5.0),
        ]);
        let a = registry.get_point_by_name("A").unwrap();
        assert_eq!((a.x(), a.y()), (0.0, 0.0));
        assert!(registry.get_point_by_name("Q").is_none());
    }

    #[test]
    fn test_tolerance_lookup_without_exact_hit() {
        let registry = PointRegistry::from_points([Point::named("P", 1.0, 1.0)]);
        assert_eq!(registry.id_of_xy(1.0 + 1e-8, 1.0 - 1e-8), Some(PointId(0)));
    }

    #[test]
    fn test_iteration_is_ordered_and_restartable() {
        let registry: PointRegistry = named().into_iter().collect();
        let first: Vec<_> = registry.iter().filter_map(Point::name).collect();
        let second: Vec<_> = (&registry).into_iter().filter_map(Point::name).collect();
        assert_eq!(first, vec!["A", "B", "C"]);
        assert_eq!(first, second);

        let ids: Vec<_> = registry.entries().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![PointId(0), PointId(1), PointId(2)]);
        assert_eq!(registry.get(PointId(2)).and_then(Point::name), Some("C"));
    }
}
