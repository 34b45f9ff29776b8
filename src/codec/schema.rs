//! Wire schema of the JSON figure format.
//!
//! ```json
//! { "Figure": {
//!     "Description": "Right Triangle in the first quadrant.",
//!     "Points":   [ { "name": "A", "x": 0, "y": 0 }, ... ],
//!     "Segments": [ { "A": ["B", "C"] }, ... ]
//! } }
//! ```
//!
//! These types only describe shape. Name resolution and the remaining
//! checks happen in [`decode`](super::decode).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "Figure")]
    pub figure: FigureRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureRecord {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Points")]
    pub points: Vec<PointRecord>,
    #[serde(rename = "Segments")]
    pub segments: Vec<AdjacencyRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// `{ "<root>": ["<adjacent>", ...] }`. Must hold exactly one key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyRecord(pub BTreeMap<String, Vec<String>>);

impl AdjacencyRecord {
    pub fn single(root: impl Into<String>, adjacent: Vec<String>) -> Self {
        Self(BTreeMap::from([(root.into(), adjacent)]))
    }
}
