//! Geometry extraction and measurement.
//!
//! Scans a parsed document for `<Placemark>` elements, extracts every
//! descendant `<LineString>` path as an ordered (latitude, longitude)
//! sequence, and measures each path with great-circle summation.
//!
//! Extraction is tolerant: a LineString without coordinates contributes
//! nothing, and a malformed coordinate token is dropped and reported as a
//! [`CoordinateWarning`] without aborting the rest of the scan.

pub mod coords;
pub mod distance;

use tracing::{debug, trace};

use crate::dom::{Document, Element};

pub use coords::CoordinateWarning;

// ============================================================================
// RECORD TYPES
// ============================================================================

/// A geographic position in degrees, latitude first.
///
/// Converted from KML's `lon,lat[,alt]` source order; altitude is dropped.
/// Ranges are not enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Discriminant for extracted geometries.
///
/// Only line paths are extracted today; point and polygon kinds would slot
/// in here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GeometryKind {
    LineString,
}

impl GeometryKind {
    /// The kind as its KML tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryKind::LineString => "LineString",
        }
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted geometry, ready for map rendering.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeometryRecord {
    pub kind: GeometryKind,
    /// Path positions in document order, never reordered.
    pub coordinates: Vec<Coordinate>,
}

/// One extracted geometry's measurement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetailRecord {
    pub kind: GeometryKind,
    /// Cumulative great-circle length in kilometers.
    pub length_km: f64,
}

impl std::fmt::Display for DetailRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{:.2} km", self.kind, self.length_km)
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Everything the extractor produces for one document.
///
/// `details` and `geometries` are parallel sequences: index *i* of each
/// describes the same LineString, in document order across Placemarks and,
/// within a Placemark, across its LineStrings. `warnings` records the
/// coordinate tokens dropped along the way.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Extraction {
    pub details: Vec<DetailRecord>,
    pub geometries: Vec<GeometryRecord>,
    pub warnings: Vec<CoordinateWarning>,
}

impl Extraction {
    /// Scan `document` for Placemark line paths.
    ///
    /// A pure read-only pass; scanning the same tree twice yields
    /// structurally identical results.
    pub fn of(document: &Document) -> Self {
        let mut extraction = Extraction::default();
        for placemark in document.descendants_named(KML_PLACEMARK) {
            extraction.scan_placemark(placemark);
        }
        debug!(
            geometries = extraction.geometries.len(),
            dropped_tokens = extraction.warnings.len(),
            "geometry extraction finished"
        );
        extraction
    }

    fn scan_placemark(&mut self, placemark: &Element) {
        for line_string in placemark.descendants_named(KML_LINE_STRING) {
            let Some(coordinates) = line_string.first_child_named(KML_COORDINATES) else {
                trace!("LineString without a coordinates child, skipped");
                continue;
            };
            let block = coordinates.text_trimmed();
            if block.is_empty() {
                trace!("LineString with empty coordinates, skipped");
                continue;
            }
            let parsed = coords::parse_block(block);
            let length_km = distance::path_length_km(&parsed.coordinates);
            self.warnings.extend(parsed.warnings);
            self.details.push(DetailRecord {
                kind: GeometryKind::LineString,
                length_km,
            });
            self.geometries.push(GeometryRecord {
                kind: GeometryKind::LineString,
                coordinates: parsed.coordinates,
            });
        }
    }

    /// True when the document yielded no geometries at all.
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Sum of all measured path lengths, in kilometers.
    pub fn total_length_km(&self) -> f64 {
        self.details.iter().map(|detail| detail.length_km).sum()
    }
}

const KML_PLACEMARK: &str = "Placemark";
const KML_LINE_STRING: &str = "LineString";
const KML_COORDINATES: &str = "coordinates";
