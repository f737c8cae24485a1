pub mod console;
pub mod html;
pub mod json;
pub mod text;
pub mod traits;

pub use console::ConsoleRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;
pub use traits::{RenderFormat, Renderer};

/// Pick the renderer for an output format.
pub fn renderer_for(format: RenderFormat, color: bool) -> Box<dyn Renderer> {
    match format {
        RenderFormat::Html => Box::new(HtmlRenderer),
        RenderFormat::Text => Box::new(TextRenderer),
        RenderFormat::Json => Box::new(JsonRenderer::new(true)),
        RenderFormat::Console => Box::new(ConsoleRenderer::new(color)),
    }
}
