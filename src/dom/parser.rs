//! XML tree builder.
//!
//! A single quick-xml event pass with an open-element stack. Unlike a
//! browser `DOMParser`, malformed input never yields a parser-error
//! pseudo-document: every ill-formed condition surfaces as a [`KmlError`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smol_str::SmolStr;
use tracing::trace;

use super::{Document, Element, ParseOptions};
use crate::error::KmlError;

pub(super) fn build_tree(text: &str, options: &ParseOptions) -> Result<Document, KmlError> {
    if let Some(limit) = options.max_input_len {
        if text.len() > limit {
            return Err(KmlError::InputTooLarge {
                len: text.len(),
                limit,
            });
        }
    }

    let mut reader = Reader::from_str(text);
    let config = reader.config_mut();
    config.trim_text(true);
    config.check_end_names = true;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(KmlError::TrailingContent {
                        position: reader.buffer_position(),
                    });
                }
                if stack.len() >= options.max_depth {
                    return Err(KmlError::DepthLimitExceeded {
                        limit: options.max_depth,
                    });
                }
                stack.push(open_element(e, &reader)?);
            }
            Ok(Event::Empty(ref e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(KmlError::TrailingContent {
                        position: reader.buffer_position(),
                    });
                }
                let element = open_element(e, &reader)?;
                close_element(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => match stack.pop() {
                Some(element) => close_element(&mut stack, &mut root, element),
                None => {
                    return Err(KmlError::syntax(
                        reader.buffer_position(),
                        "unmatched closing tag",
                    ));
                }
            },
            Ok(Event::Text(ref e)) => {
                let value = e
                    .unescape()
                    .map_err(|err| KmlError::syntax(reader.buffer_position(), err))?;
                match stack.last_mut() {
                    Some(parent) => parent.text.push_str(&value),
                    None if root.is_some() => {
                        return Err(KmlError::TrailingContent {
                            position: reader.buffer_position(),
                        });
                    }
                    None => {
                        return Err(KmlError::syntax(
                            reader.buffer_position(),
                            "text before the root element",
                        ));
                    }
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::Eof) => break,
            // XML declaration, comments, processing instructions, DOCTYPE.
            Ok(_) => {}
            Err(err) => {
                return Err(KmlError::syntax(reader.error_position(), err));
            }
        }
    }

    if let Some(open) = stack.into_iter().next() {
        // Outermost unclosed element is the most useful one to report.
        return Err(KmlError::UnclosedElement {
            tag: open.tag.to_string(),
        });
    }
    match root {
        Some(root) => {
            trace!(root = root.tag.as_str(), "document tree built");
            Ok(Document { root })
        }
        None => Err(KmlError::EmptyDocument),
    }
}

fn open_element(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Element, KmlError> {
    let name = e.name();
    let tag = std::str::from_utf8(name.as_ref()).map_err(|err| {
        KmlError::syntax(reader.buffer_position(), format!("invalid tag name: {err}"))
    })?;
    let mut element = Element::new(tag);
    for attr in e.attributes() {
        let attr = attr.map_err(|err| {
            KmlError::syntax(
                reader.buffer_position(),
                format!("malformed attribute: {err}"),
            )
        })?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|err| {
            KmlError::syntax(
                reader.buffer_position(),
                format!("invalid attribute name: {err}"),
            )
        })?;
        let value = attr
            .unescape_value()
            .map_err(|err| KmlError::syntax(reader.buffer_position(), err))?;
        element
            .attributes
            .push((SmolStr::new(key), value.into_owned()));
    }
    Ok(element)
}

fn close_element(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_tree_shape() {
        let doc = build_tree(
            "<kml><Placemark id=\"p1\"><name>route</name></Placemark></kml>",
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(doc.root().tag(), "kml");
        let placemark = doc.root().first_child_named("Placemark").unwrap();
        assert_eq!(placemark.attribute("id"), Some("p1"));
        let name = placemark.first_child_named("name").unwrap();
        assert_eq!(name.text_trimmed(), "route");
    }

    #[test]
    fn test_unclosed_element_reported_by_tag() {
        let err = build_tree("<kml><Placemark>", &ParseOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            KmlError::UnclosedElement { .. } | KmlError::Syntax { .. }
        ));
    }

    #[test]
    fn test_empty_input_is_empty_document() {
        let err = build_tree("", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, KmlError::EmptyDocument));
    }

    #[test]
    fn test_declaration_only_is_empty_document() {
        let err = build_tree("<?xml version=\"1.0\"?>", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, KmlError::EmptyDocument));
    }

    #[test]
    fn test_second_root_is_trailing_content() {
        let err = build_tree("<a/><b/>", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, KmlError::TrailingContent { .. }));
    }
}
