//! Coordinate block parsing.
//!
//! KML encodes a path as whitespace-separated `lon,lat[,alt]` tokens. The
//! parser keeps every token whose two leading parts are finite numbers,
//! swaps them into (lat, lon) order, and drops the rest: a bad token
//! reduces the path, it never aborts the scan.

use tracing::warn;

use super::Coordinate;

/// A coordinate token that was dropped during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoordinateWarning {
    /// The offending token, verbatim.
    pub token: String,
    /// Zero-based index of the token within its coordinates block.
    pub index: usize,
}

/// Result of parsing one coordinates block.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedBlock {
    pub coordinates: Vec<Coordinate>,
    pub warnings: Vec<CoordinateWarning>,
}

/// Parse a whitespace-separated block of `lon,lat[,alt]` tokens.
///
/// Valid tokens become [`Coordinate`]s in source order. Invalid tokens are
/// dropped and reported, both in the returned warnings and at warn level.
pub fn parse_block(block: &str) -> ParsedBlock {
    let mut parsed = ParsedBlock::default();
    for (index, token) in block.split_whitespace().enumerate() {
        match parse_token(token) {
            Some(coordinate) => parsed.coordinates.push(coordinate),
            None => {
                warn!(token, index, "invalid coordinate token dropped");
                parsed.warnings.push(CoordinateWarning {
                    token: token.to_string(),
                    index,
                });
            }
        }
    }
    parsed
}

/// Parse one `lon,lat[,alt]` token, swapping into (lat, lon) order.
///
/// Valid iff the first two comma-separated parts parse as finite numbers.
/// Parts past the second (altitude) are ignored.
fn parse_token(token: &str) -> Option<Coordinate> {
    let mut parts = token.split(',');
    let lon: f64 = parts.next()?.parse().ok()?;
    let lat: f64 = parts.next()?.parse().ok()?;
    if !lon.is_finite() || !lat.is_finite() {
        return None;
    }
    Some(Coordinate { lat, lon })
}
