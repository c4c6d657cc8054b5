//! SVG parsing from XML.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, BytesText, Event};

use crate::ast::*;
use crate::error::IconError;

/// Parse an SVG string into a Document.
///
/// The whole input is read: anything besides comments, processing
/// instructions and whitespace around the single root element is an error.
pub fn parse_svg(svg: &str) -> Result<Document, IconError> {
    let mut reader = Reader::from_str(svg);

    let root = loop {
        match reader.read_event()? {
            Event::Start(start) => break parse_element(&mut reader, &start)?,
            Event::Empty(start) => break parse_element_start(&start)?,
            Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
            Event::Text(text) if is_blank(&text) => {}
            Event::Eof => return Err(IconError::InvalidSvg("No root element found".into())),
            other => {
                return Err(IconError::InvalidSvg(format!(
                    "Unexpected content before root element: {:?}",
                    other
                )));
            }
        }
    };

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Comment(_) | Event::PI(_) => {}
            Event::Text(text) if is_blank(&text) => {}
            other => {
                return Err(IconError::InvalidSvg(format!(
                    "Junk after root element <{}>: {:?}",
                    root.name.full_name(),
                    other
                )));
            }
        }
    }

    Ok(Document { root })
}

fn is_blank(text: &BytesText) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

fn parse_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Element, IconError> {
    let mut element = parse_element_start(start)?;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                element.children.push(parse_element(reader, &start)?);
            }
            Event::Empty(start) => {
                element.children.push(parse_element_start(&start)?);
            }
            Event::End(_) => break,
            Event::Text(text) => {
                // Not kept, but undefined entities still fail the parse
                text.unescape()?;
            }
            Event::Eof => {
                return Err(IconError::InvalidSvg(format!(
                    "Unexpected end of file inside <{}>",
                    element.name.full_name()
                )));
            }
            _ => {}
        }
    }

    Ok(element)
}

fn parse_element_start(start: &BytesStart) -> Result<Element, IconError> {
    let name_bytes = start.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;

    let mut element = Element {
        name: QName::parse(name),
        attributes: Vec::new(),
        children: Vec::new(),
    };

    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        element.attributes.push(Attribute {
            name: QName::parse(key),
            value: value.into_owned(),
        });
    }

    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_icon_sheet() {
        let svg = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512">
    <!-- icons -->
    <g id="set">
        <path id="check" d="M0,0 L10,10"/>
    </g>
</svg>"#;

        let doc = parse_svg(svg).unwrap();
        assert!(doc.root.is("svg"));
        assert_eq!(doc.root.get_attr("viewBox"), Some("0 0 512 512"));

        let group = doc.root.child_elements().next().unwrap();
        assert!(group.is("g"));
        let path = group.child_elements().next().unwrap();
        assert_eq!(path.get_attr("id"), Some("check"));
        assert_eq!(path.get_attr("d"), Some("M0,0 L10,10"));
    }

    #[test]
    fn test_parse_unescapes_attributes() {
        let svg = r#"<svg><path id="a&amp;b" d="M0,0"/></svg>"#;
        let doc = parse_svg(svg).unwrap();
        let path = doc.root.child_elements().next().unwrap();
        assert_eq!(path.get_attr("id"), Some("a&b"));
    }

    #[test]
    fn test_parse_prefixed_names() {
        let svg = r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"><svg:path xml:id="x"/></svg:svg>"#;
        let doc = parse_svg(svg).unwrap();
        assert_eq!(doc.root.name.full_name(), "svg:svg");
        assert!(!doc.root.is("svg"));
        let path = doc.root.child_elements().next().unwrap();
        assert_eq!(path.get_attr("id"), None);
    }

    #[test]
    fn test_parse_empty_root() {
        let doc = parse_svg(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#).unwrap();
        assert!(doc.root.children.is_empty());
    }

    #[test]
    fn test_parse_no_root() {
        let err = parse_svg("<!-- nothing here -->").unwrap_err();
        assert!(matches!(err, IconError::InvalidSvg(_)));
    }

    #[test]
    fn test_parse_unclosed() {
        let err = parse_svg("<svg><g><path d=\"M0,0\"/>").unwrap_err();
        assert!(matches!(err, IconError::InvalidSvg(_) | IconError::XmlParse(_)));
    }

    #[test]
    fn test_parse_mismatched_end_tag() {
        assert!(parse_svg("<svg><g></svg>").is_err());
    }

    #[test]
    fn test_parse_second_root() {
        let err = parse_svg("<svg/><svg/>").unwrap_err();
        assert!(matches!(err, IconError::InvalidSvg(_)));

        let svg = r#"<svg><path id="a" d="M0,0"/></svg><path id="b" d="M1,1"/>"#;
        assert!(parse_svg(svg).is_err());
    }

    #[test]
    fn test_parse_stray_end_tag_after_root() {
        assert!(parse_svg("<svg/></g>").is_err());
        assert!(parse_svg("<svg><path d=\"M0,0\"/></svg></g>garbage").is_err());
    }

    #[test]
    fn test_parse_text_around_root() {
        let err = parse_svg("junk<svg/>").unwrap_err();
        assert!(matches!(err, IconError::InvalidSvg(_)));

        let err = parse_svg("<svg/>junk").unwrap_err();
        assert!(matches!(err, IconError::InvalidSvg(_)));
    }

    #[test]
    fn test_parse_allows_trailing_comments_and_whitespace() {
        let svg = "\n  <svg><path d=\"M0,0\"/></svg>\n<!-- generated -->\n<?pi data?>\n";
        let doc = parse_svg(svg).unwrap();
        assert_eq!(doc.root.children.len(), 1);
    }

    #[test]
    fn test_parse_drops_text_content() {
        let doc = parse_svg("<svg><title>Icons</title><path d=\"M0,0\"/></svg>").unwrap();
        let title = doc.root.child_elements().next().unwrap();
        assert!(title.is("title"));
        assert!(title.children.is_empty());
        assert_eq!(doc.root.children.len(), 2);
    }
}
