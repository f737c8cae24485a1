use super::traits::Renderer;
use crate::Result;
use crate::presentation::view_models::Node;

/// Plain text: what a reader sees, without markup.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, node: &Node) -> Result<String> {
        Ok(node.text_content())
    }
}
