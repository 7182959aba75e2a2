//! Element counting over a parsed document.
//!
//! The recognized vocabulary is a fixed closed set of seven KML tag names.
//! Matching is exact-string and case-sensitive on the literal tag name, so
//! namespace-prefixed variants (`kml:Placemark`) are not folded into the
//! unprefixed entries.

use indexmap::IndexMap;
use tracing::debug;

use crate::dom::Document;

// ============================================================================
// RECOGNIZED VOCABULARY
// ============================================================================

/// A recognized KML tag name.
///
/// Closed set: the counter only tallies these seven names. Anything else in
/// the document is walked over but never counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum KmlTag {
    Placemark,
    Folder,
    Document,
    Style,
    LookAt,
    LineString,
    MultiGeometry,
}

impl KmlTag {
    /// Every recognized tag, in the order summaries report them.
    pub const ALL: [KmlTag; 7] = [
        KmlTag::Placemark,
        KmlTag::Folder,
        KmlTag::Document,
        KmlTag::Style,
        KmlTag::LookAt,
        KmlTag::LineString,
        KmlTag::MultiGeometry,
    ];

    /// Map a literal tag name to its recognized tag, if any.
    pub fn from_name(name: &str) -> Option<KmlTag> {
        match name {
            "Placemark" => Some(KmlTag::Placemark),
            "Folder" => Some(KmlTag::Folder),
            "Document" => Some(KmlTag::Document),
            "Style" => Some(KmlTag::Style),
            "LookAt" => Some(KmlTag::LookAt),
            "LineString" => Some(KmlTag::LineString),
            "MultiGeometry" => Some(KmlTag::MultiGeometry),
            _ => None,
        }
    }

    /// The tag name as it appears in KML text.
    pub fn as_str(self) -> &'static str {
        match self {
            KmlTag::Placemark => "Placemark",
            KmlTag::Folder => "Folder",
            KmlTag::Document => "Document",
            KmlTag::Style => "Style",
            KmlTag::LookAt => "LookAt",
            KmlTag::LineString => "LineString",
            KmlTag::MultiGeometry => "MultiGeometry",
        }
    }
}

impl std::fmt::Display for KmlTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Occurrence counts for every recognized tag.
///
/// All seven keys are always present, zero-valued when the document has no
/// such element. Iteration order is [`KmlTag::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ElementSummary {
    counts: IndexMap<KmlTag, usize>,
}

impl ElementSummary {
    /// Count every recognized tag in `document`, root included.
    ///
    /// A single walk over the tree; no state survives the call, so counting
    /// the same tree twice yields identical results.
    pub fn of(document: &Document) -> Self {
        let mut counts: IndexMap<KmlTag, usize> =
            KmlTag::ALL.iter().map(|tag| (*tag, 0)).collect();
        for element in document.descendants() {
            if let Some(tag) = KmlTag::from_name(element.tag()) {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        debug!(
            placemarks = counts[&KmlTag::Placemark],
            line_strings = counts[&KmlTag::LineString],
            "element summary computed"
        );
        Self { counts }
    }

    /// Occurrences of one recognized tag.
    pub fn count(&self, tag: KmlTag) -> usize {
        self.counts.get(&tag).copied().unwrap_or(0)
    }

    /// `(tag, count)` pairs in [`KmlTag::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (KmlTag, usize)> + '_ {
        self.counts.iter().map(|(tag, count)| (*tag, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_round_trip() {
        for tag in KmlTag::ALL {
            assert_eq!(KmlTag::from_name(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_unrecognized_names() {
        assert_eq!(KmlTag::from_name("placemark"), None);
        assert_eq!(KmlTag::from_name("kml:Placemark"), None);
        assert_eq!(KmlTag::from_name("Point"), None);
    }
}
