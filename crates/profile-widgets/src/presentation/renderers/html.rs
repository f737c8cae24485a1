use super::traits::Renderer;
use crate::Result;
use crate::presentation::formatters::{escape_attr, escape_text};
use crate::presentation::view_models::{Element, Node};

/// Serializes the tree to an HTML fragment.
///
/// Fragments leave no trace in the output. Click handlers are not emitted;
/// the `data-href`/`href` and `data-navigation` attributes carry the target
/// for whatever script binds activation on the page.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, node: &Node) -> Result<String> {
        let mut out = String::new();
        write_node(node, &mut out);
        Ok(out)
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(&escape_text(text)),
        Node::Element(element) => write_element(element, out),
        Node::Fragment { children } => {
            for child in children {
                write_node(child, out);
            }
        }
    }
}

fn write_element(element: &Element, out: &mut String) {
    let tag = element.tag.as_str();

    out.push('<');
    out.push_str(tag);
    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(&element.classes.join(" ")));
        out.push('"');
    }
    for attr in &element.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        out.push_str(&escape_attr(&attr.value));
        out.push('"');
    }
    out.push('>');

    for child in &element.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
