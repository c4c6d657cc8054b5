//! Minimal XML element tree for icon sheets.

/// A parsed SVG document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The root element (usually `<svg>`)
    pub root: Element,
}

/// An SVG/XML element.
#[derive(Debug, Clone)]
pub struct Element {
    /// Element name with optional prefix (e.g., "svg", "svg:path")
    pub name: QName,
    /// Attributes on this element
    pub attributes: Vec<Attribute>,
    /// Child elements. Text, comments, CDATA and processing instructions
    /// are dropped while parsing.
    pub children: Vec<Element>,
}

/// A qualified name (possibly with namespace prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub prefix: Option<String>,
    pub local: String,
}

impl QName {
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local: local.into(),
        }
    }

    /// Parse a qualified name from a string like "prefix:local" or just "local".
    pub fn parse(s: &str) -> Self {
        match s.split_once(':') {
            Some((prefix, local)) => Self {
                prefix: Some(prefix.to_string()),
                local: local.to_string(),
            },
            None => Self::new(s),
        }
    }

    /// Get the full name as a string.
    pub fn full_name(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{}:{}", p, self.local),
            None => self.local.clone(),
        }
    }
}

/// An attribute on an element.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Element {
    /// Get an unprefixed attribute value by name.
    ///
    /// `get_attr("id")` does not match `xml:id`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.prefix.is_none() && a.name.local == name)
            .map(|a| a.value.as_str())
    }

    /// Check if this is an unprefixed element with the given tag name.
    pub fn is(&self, name: &str) -> bool {
        self.name.prefix.is_none() && self.name.local == name
    }

    /// Iterate over child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }
}

impl Document {
    /// Visit every element in document order, root first.
    pub fn for_each_element<'a>(&'a self, mut f: impl FnMut(&'a Element)) {
        fn visit<'a>(elem: &'a Element, f: &mut impl FnMut(&'a Element)) {
            f(elem);
            for child in elem.child_elements() {
                visit(child, f);
            }
        }
        visit(&self.root, &mut f);
    }

    /// Collect every element with the given tag name, in document order.
    pub fn elements_named(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.for_each_element(|e| {
            if e.is(name) {
                found.push(e);
            }
        });
        found
    }
}
