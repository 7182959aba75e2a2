//! # kmlsurvey
//!
//! Core library for KML parsing, element summaries, and geodesic path
//! measurement.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! geometry  → LineString extraction, coordinate parsing, haversine lengths
//!   ↓
//! summary   → recognized-tag vocabulary, element counting
//!   ↓
//! dom       → document tree, typed queries, XML tree builder
//!   ↓
//! error     → KmlError taxonomy
//! ```
//!
//! ## Usage
//!
//! ```
//! use kmlsurvey::{KmlTag, extract_geometry, summarize};
//!
//! let kml = "<kml><Placemark><LineString>\
//!     <coordinates>0,0 0,1 0,2</coordinates>\
//!     </LineString></Placemark></kml>";
//!
//! let summary = summarize(kml)?;
//! assert_eq!(summary.count(KmlTag::Placemark), 1);
//!
//! let extraction = extract_geometry(kml)?;
//! assert_eq!(extraction.geometries.len(), 1);
//! # Ok::<(), kmlsurvey::KmlError>(())
//! ```
//!
//! The two scans are independent read-only passes: callers that need both
//! can parse once with [`Document::parse`] and run [`ElementSummary::of`]
//! and [`Extraction::of`] over the same tree, in either order or
//! concurrently.

// ============================================================================
// MODULES (dependency order: error → dom → summary → geometry)
// ============================================================================

/// Error taxonomy: fatal document-level failures
pub mod error;

/// Document tree: typed queries, quick-xml tree builder
pub mod dom;

/// Element counting over the fixed recognized-tag vocabulary
pub mod summary;

/// Geometry extraction, coordinate parsing, haversine measurement
pub mod geometry;

// Re-export the public surface
pub use dom::{Document, Element, ParseOptions};
pub use error::KmlError;
pub use geometry::{
    Coordinate, CoordinateWarning, DetailRecord, Extraction, GeometryKind, GeometryRecord,
};
pub use summary::{ElementSummary, KmlTag};

/// Parse `text` and count every recognized KML tag in it.
///
/// Fails with [`KmlError`] when `text` is not well-formed XML; a valid
/// document with none of the recognized tags returns a summary with all
/// counts at zero, which is a different observable outcome.
pub fn summarize(text: &str) -> Result<ElementSummary, KmlError> {
    let document = Document::parse(text)?;
    Ok(ElementSummary::of(&document))
}

/// Parse `text` and extract every Placemark line path from it.
///
/// Returns the parallel detail/geometry sequences plus any coordinate
/// warnings collected along the way. Fails with [`KmlError`] only when
/// `text` is not well-formed XML; partial data quality problems never abort
/// the call.
pub fn extract_geometry(text: &str) -> Result<Extraction, KmlError> {
    let document = Document::parse(text)?;
    Ok(Extraction::of(&document))
}
