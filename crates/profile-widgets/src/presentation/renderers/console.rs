use owo_colors::OwoColorize;

use super::traits::Renderer;
use crate::Result;
use crate::presentation::view_models::Node;

/// Terminal preview: links underlined in cyan, badges in brackets.
pub struct ConsoleRenderer {
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, node: &Node, out: &mut String) {
        match node {
            Node::Text { text } => out.push_str(text),
            Node::Fragment { children } => {
                for child in children {
                    self.paint(child, out);
                }
            }
            Node::Element(element) => {
                let mut inner = String::new();
                for child in &element.children {
                    self.paint(child, &mut inner);
                }

                if element.on_click.is_some() {
                    if self.color {
                        out.push_str(&inner.cyan().underline().to_string());
                    } else {
                        out.push_str(&inner);
                    }
                } else if self.color {
                    out.push_str(&format!("[{}]", inner.bold()));
                } else {
                    out.push_str(&format!("[{}]", inner));
                }
            }
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&self, node: &Node) -> Result<String> {
        let mut out = String::new();
        self.paint(node, &mut out);
        Ok(out)
    }
}
