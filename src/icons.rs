//! Icon path records pulled out of an icon sheet.

use log::warn;

use crate::ast::Document;

/// One `<path>` of the icon sheet: the icon name and its path data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPath {
    pub id: String,
    pub d: String,
}

impl IconPath {
    pub fn new(id: impl Into<String>, d: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            d: d.into(),
        }
    }
}

/// Collect every `<path>` element, at any depth, in document order.
///
/// A missing `id` or `d` attribute becomes an empty string.
pub fn collect_icons(doc: &Document) -> Vec<IconPath> {
    doc.elements_named("path")
        .into_iter()
        .map(|elem| {
            let id = elem.get_attr("id").unwrap_or_default();
            let d = elem.get_attr("d").unwrap_or_default();
            if id.is_empty() || d.is_empty() {
                warn!("<path> with missing id or d (id={:?}, d={:?})", id, d);
            }
            IconPath::new(id, d)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_svg;

    #[test]
    fn test_collect_document_order() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
    <path id="red" d="M1,1"/>
    <g>
        <path id="blue" d="M2,2"/>
        <g><path id="green" d="M3,3"></path></g>
    </g>
    <rect id="not-a-path"/>
    <path id="grey" d="M4,4"/>
</svg>"#;

        let doc = parse_svg(svg).unwrap();
        let ids: Vec<_> = collect_icons(&doc).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["red", "blue", "green", "grey"]);
    }

    #[test]
    fn test_missing_attributes_are_empty() {
        let svg = r#"<svg><path d="M0,0"/><path id="only-id"/><path/></svg>"#;
        let doc = parse_svg(svg).unwrap();
        assert_eq!(
            collect_icons(&doc),
            vec![
                IconPath::new("", "M0,0"),
                IconPath::new("only-id", ""),
                IconPath::new("", ""),
            ]
        );
    }

    #[test]
    fn test_root_path() {
        let doc = parse_svg(r#"<path id="solo" d="M0,0"/>"#).unwrap();
        assert_eq!(collect_icons(&doc), vec![IconPath::new("solo", "M0,0")]);
    }

    #[test]
    fn test_no_paths() {
        let doc = parse_svg(r#"<svg><circle r="5"/></svg>"#).unwrap();
        assert!(collect_icons(&doc).is_empty());
    }
}
