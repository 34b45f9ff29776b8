//! Segment — an undirected edge between two points.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Point;

/// An unordered pair of borrowed points.
///
/// Either endpoint may be absent. Equality ignores endpoint order, display
/// keeps the construction order.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    point1: Option<&'a Point>,
    point2: Option<&'a Point>,
}

impl<'a> Segment<'a> {
    pub fn new(point1: &'a Point, point2: &'a Point) -> Self {
        Self { point1: Some(point1), point2: Some(point2) }
    }

    /// Segment with possibly missing endpoints.
    pub fn from_options(point1: Option<&'a Point>, point2: Option<&'a Point>) -> Self {
        Self { point1, point2 }
    }

    pub fn point1(&self) -> Option<&'a Point> {
        self.point1
    }

    pub fn point2(&self) -> Option<&'a Point> {
        self.point2
    }

    /// The endpoint opposite `from`, if `from` is one of the endpoints.
    pub fn other_point(&self, from: &Point) -> Option<&'a Point> {
        match (self.point1, self.point2) {
            (Some(a), b) if a == from => b,
            (a, Some(b)) if b == from => a,
            _ => None,
        }
    }
}

impl PartialEq for Segment<'_> {
    fn eq(&self, other: &Self) -> bool {
        (self.point1 == other.point1 && self.point2 == other.point2)
            || (self.point1 == other.point2 && self.point2 == other.point1)
    }
}

/// Order-independent: the endpoint hashes are summed.
impl Hash for Segment<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let h1 = self.point1.map_or(0, Point::coord_hash);
        let h2 = self.point2.map_or(0, Point::coord_hash);
        state.write_u64(h1.wrapping_add(h2));
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment [{}, {}]", Endpoint(self.point1), Endpoint(self.point2))
    }
}

struct Endpoint<'a>(Option<&'a Point>);

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => fmt::Display::fmt(p, f),
            None => f.write_str("null"),
        }
    }
}
