use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Result;
use crate::presentation::view_models::Node;

pub trait Renderer {
    fn render(&self, node: &Node) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Html,
    Text,
    Json,
    Console,
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFormat::Html => write!(f, "html"),
            RenderFormat::Text => write!(f, "text"),
            RenderFormat::Json => write!(f, "json"),
            RenderFormat::Console => write!(f, "console"),
        }
    }
}
