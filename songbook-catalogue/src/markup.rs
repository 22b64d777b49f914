//! A minimal HTML tree, serialised the way a static renderer would: no
//! whitespace between tags, void elements self-closed.

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Text, escaped on output.
    Text(String),
    /// Markup inserted as-is. Only for trusted input.
    Raw(String),
}
impl Node {
    /// Append this node's HTML to `out`.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.render_into(out),
            Node::Text(text) => escape_into(out, text),
            Node::Raw(html) => out.push_str(html),
        }
    }
}
impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}
impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Shorthand for [`Node::Raw`].
pub fn raw(html: impl Into<String>) -> Node {
    Node::Raw(html.into())
}

/// An HTML element, built up with chained calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
}
impl Element {
    /// Start an element with no attributes or children.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: vec![],
            children: vec![],
        }
    }

    /// Add an attribute. The value is escaped on output.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Add an attribute if `value` is present.
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Add a child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Add several children.
    pub fn children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Render to a string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(out, value);
            out.push('"');
        }

        if VOID_ELEMENTS.contains(&self.tag) {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Escape `text` for use in element content or a quoted attribute value.
fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
}
