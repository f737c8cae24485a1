use super::traits::Renderer;
use crate::Result;
use crate::presentation::view_models::Node;

pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, node: &Node) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(node)?
        } else {
            serde_json::to_string(node)?
        };
        Ok(json)
    }
}
