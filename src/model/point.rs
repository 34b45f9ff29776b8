//! Point in the plane.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Coordinate tolerance for point identity.
pub const EPSILON: f64 = 1e-6;

/// Name rendered in the canonical dump for points without a name.
pub const ANONYMOUS: &str = "__UNNAMED";

/// `true` when `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A 2D point with an optional display name.
///
/// Equality is coordinate-based within [`EPSILON`] and ignores the name.
/// Note that this relation is not transitive near the tolerance boundary:
/// `a == b` and `b == c` does not imply `a == c`. Containers in this crate
/// resolve points with an equality scan rather than trusting hash buckets,
/// so strict set behaviour only holds for well-separated points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Point {
    /// Unnamed point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, name: None }
    }

    /// Named point.
    pub fn named(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self { x, y, name: Some(name.into()) }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// Name used by the dump and the encoder, `__UNNAMED` when absent.
    pub fn dump_name(&self) -> &str {
        self.name().unwrap_or(ANONYMOUS)
    }

    /// Whether `(x, y)` lies within tolerance of this point.
    pub fn at(&self, x: f64, y: f64) -> bool {
        approx_eq(self.x, x) && approx_eq(self.y, y)
    }

    /// Raw-bit hash of the coordinates, the value [`Hash`] feeds.
    ///
    /// Two points that compare equal only through the tolerance (different
    /// bit patterns) hash differently.
    pub(crate) fn coord_hash(&self) -> u64 {
        canonical_bits(self.x).rotate_left(32) ^ canonical_bits(self.y)
    }
}

/// `-0.0` and `0.0` compare equal, so they must hash equal too.
pub(crate) fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.at(other.x, other.y)
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.coord_hash());
    }
}

/// Renders `name(x, y)` or `(x, y)`, with sub-tolerance noise printed as
/// zero.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            f.write_str(name)?;
        }
        write!(f, "({}, {})", Coord(snap(self.x)), Coord(snap(self.y)))
    }
}

fn snap(v: f64) -> f64 {
    if v.abs() < EPSILON { 0.0 } else { v }
}

/// Coordinate as written: always at least one fractional digit. Magnitudes
/// outside `[1e-3, 1e7)` use exponent form with an upper-case `E`.
pub(crate) struct Coord(pub f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if !v.is_finite() || v == 0.0 || (1e-3..1e7).contains(&v.abs()) {
            return write!(f, "{v:?}");
        }
        let exp = format!("{v:e}");
        let (mantissa, power) = exp.split_once('e').unwrap_or((&exp, "0"));
        if mantissa.contains('.') {
            write!(f, "{mantissa}E{power}")
        } else {
            write!(f, "{mantissa}.0E{power}")
        }
    }
}
