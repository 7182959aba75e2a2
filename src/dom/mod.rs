//! KML document tree.
//!
//! [`Document::parse`] turns raw XML text into an immutable tree of
//! [`Element`]s. Traversal goes through typed queries (`descendants_named`,
//! `first_child_named`, `text_trimmed`) rather than stringly-typed node-list
//! lookups, so downstream scans are statically checked.
//!
//! The tree is plain owned data: once built it is read-only, and the
//! independent consumers (element counter, geometry extractor) can walk it
//! in either order or concurrently.

mod parser;

use smol_str::SmolStr;

use crate::error::KmlError;

/// Limits applied while building the document tree.
///
/// Parsing is bounded CPU-only work over an in-memory string, but hostile
/// input can still nest absurdly deep. The defaults admit any ordinary KML
/// file.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum element nesting depth.
    pub max_depth: usize,
    /// Maximum input length in bytes, if any.
    pub max_input_len: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_input_len: None,
        }
    }
}

/// One XML element: tag name, attributes, accumulated text, ordered
/// children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) tag: SmolStr,
    pub(crate) attributes: Vec<(SmolStr, String)>,
    pub(crate) text: String,
    pub(crate) children: Vec<Element>,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: SmolStr::new(tag),
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// The literal tag name, namespace prefix included if the source had
    /// one.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by exact name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in source order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Direct children in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Text content with surrounding whitespace removed.
    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// First direct child with the given tag name.
    pub fn first_child_named(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.tag.as_str() == tag)
    }

    /// Depth-first, document-order traversal of this element and its
    /// subtree.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Descendants (self included) with the given tag name, document order.
    pub fn descendants_named<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants()
            .filter(move |element| element.tag.as_str() == tag)
    }
}

/// Document-order iterator over a subtree. See [`Element::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        // Children pushed in reverse so the first child is popped next.
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// A parsed KML document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse XML text into a document tree with default [`ParseOptions`].
    ///
    /// Malformed XML is a hard error. An invalid document and a valid
    /// document that happens to contain no recognized elements are
    /// observably different results and are never conflated.
    pub fn parse(text: &str) -> Result<Self, KmlError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parse with explicit limits.
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, KmlError> {
        parser::build_tree(text, options)
    }

    /// The document's root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Depth-first, document-order traversal of the whole tree.
    pub fn descendants(&self) -> Descendants<'_> {
        self.root.descendants()
    }

    /// All elements with the given tag name, document order, root included.
    pub fn descendants_named<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.root.descendants_named(tag)
    }
}
