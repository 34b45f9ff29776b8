//! # JSON Figure Codec
//!
//! Reads and writes the JSON figure format. Parsing is two-phase:
//! `serde_json` deserializes into the typed [`schema`], then
//! [`decode`](decode::decode) resolves point names and builds the
//! [`Figure`]. Every failure in either phase surfaces as
//! [`Error::Decode`].

pub mod schema;
pub mod decode;
pub mod encode;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::figure::Figure;
use crate::{Error, Result};
use schema::Document;

/// Parse a JSON figure document.
pub fn parse(input: &str) -> Result<Figure> {
    let document: Document =
        serde_json::from_str(input).map_err(|e| Error::Decode(e.to_string()))?;
    decode::decode(document)
}

/// Read and parse a figure file. `//` line comments are allowed.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Figure> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "reading figure file");
    parse(&strip_comments(&text))
}

/// Serialize a figure back into the JSON format [`parse`] accepts.
///
/// Fails with [`Error::Encode`] when a point cannot be referred to by a
/// unique name.
pub fn to_json(figure: &Figure) -> Result<String> {
    let document = encode::encode(figure)?;
    serde_json::to_string_pretty(&document).map_err(|e| Error::Encode(e.to_string()))
}

/// Remove `//` comments (to end of line) that sit outside string literals.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                // Skip to the newline, which is kept.
                while chars.peek().is_some_and(|&n| n != '\n') {
                    chars.next();
                }
            }
            _ => out.push(c),
        }
    }

    out
}

impl FromStr for Figure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_fails() {
        let err = parse("{}").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().starts_with("Parse error:"), "{err}");
    }

    #[test]
    fn test_malformed_inputs_fail() {
        let inputs =
            ["", "[]", "not json", r#"{"Figure": 3}"#, r#"{"Figure": {"Description": "x"}}"#];
        for input in inputs {
            assert!(matches!(parse(input), Err(Error::Decode(_))), "input {input:?} should fail");
        }
    }

    #[test]
    fn test_bad_point_shape_fails() {
        let input = r#"{"Figure": {"Description": "d",
            "Points": [{"name": "A", "x": "zero", "y": 0}],
            "Segments": []}}"#;
        assert!(matches!(parse(input), Err(Error::Decode(_))));
    }

    #[test]
    fn test_integer_coordinates_accepted() {
        let input = r#"{"Figure": {"Description": "d",
            "Points": [{"name": "A", "x": 3, "y": -4}],
            "Segments": []}}"#;
        let figure: Figure = input.parse().unwrap();
        assert!(figure.points().contains_xy(3.0, -4.0));
    }

    #[test]
    fn test_strip_comments() {
        let text = "{ // header\n  \"url\": \"http://x\", // trailing\n  \"q\": \"a\\\"//b\"\n}";
        assert_eq!(strip_comments(text), "{ \n  \"url\": \"http://x\", \n  \"q\": \"a\\\"//b\"\n}");
    }
}
