use profile_widgets_types::NavigationRequest;
use serde::Serialize;

/// Rendered content produced by the widgets.
///
/// A small, framework-neutral tree: enough structure for the renderers to
/// emit HTML, text or JSON, and for click dispatch to find handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Text { text: String },
    Element(Element),
    Fragment { children: Vec<Node> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Span,
    A,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Span => "span",
            Tag::A => "a",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Deferred behavior attached to an element, run only on activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClickAction {
    Navigate(NavigationRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<ClickAction>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn with_classes(mut self, classes: &[String]) -> Self {
        self.classes.extend(classes.iter().cloned());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_on_click(mut self, action: ClickAction) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment { children }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text { .. } => &[],
            Node::Element(element) => &element.children,
            Node::Fragment { children } => children,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn on_click(&self) -> Option<&ClickAction> {
        self.as_element().and_then(|element| element.on_click.as_ref())
    }

    /// Concatenated text of the whole subtree, in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Every click action in the subtree, in document order
    pub fn links(&self) -> Vec<&ClickAction> {
        let mut out = Vec::new();
        self.collect_links(&mut out);
        out
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<&'a ClickAction>) {
        if let Some(action) = self.on_click() {
            out.push(action);
        }
        for child in self.children() {
            child.collect_links(out);
        }
    }

    pub fn is_clickable(&self) -> bool {
        !self.links().is_empty()
    }

    /// Child-index path to the first element carrying a click handler
    pub fn first_clickable(&self) -> Option<Vec<usize>> {
        if self.on_click().is_some() {
            return Some(Vec::new());
        }
        self.children()
            .iter()
            .enumerate()
            .find_map(|(index, child)| {
                child.first_clickable().map(|mut path| {
                    path.insert(0, index);
                    path
                })
            })
    }
}
