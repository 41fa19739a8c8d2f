//! Display tree produced by the renderer.
//!
//! The tree is plain data shaped like a small markup document: elements with
//! a tag, attributes and children, plus text leaves. Backends in
//! [`crate::view::text`] and [`crate::view::html`] serialize it.

/// A node of the display tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Node {
    /// Build an element from a tag, attributes and children.
    pub fn element<A, V>(tag: &'static str, attrs: A, children: Vec<Node>) -> Node
    where
        A: IntoIterator<Item = (&'static str, V)>,
        V: Into<String>,
    {
        Node::Element(Element {
            tag,
            attrs: attrs.into_iter().map(|(k, v)| (k, v.into())).collect(),
            children,
        })
    }

    /// Element without attributes.
    pub fn bare(tag: &'static str, children: Vec<Node>) -> Node {
        Node::element(tag, Vec::<(&'static str, String)>::new(), children)
    }

    pub fn text(value: impl Into<String>) -> Node {
        Node::Text(value.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Append a child. No-op on text nodes.
    pub fn push(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All descendant elements (including `self`) with the given tag, in
    /// document order.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |element: &'a Element| {
            if element.tag == tag {
                found.push(element);
            }
        });
        found
    }

    /// All descendant elements (including `self`) carrying the class.
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |element: &'a Element| {
            if element.has_class(class) {
                found.push(element);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        if let Node::Element(element) = self {
            visit(element);
            for child in &element.children {
                child.walk(visit);
            }
        }
    }
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}
