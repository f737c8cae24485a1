pub mod node;
pub mod options;

pub use node::{Attribute, ClickAction, Element, Node, Tag};
pub use options::{DisplayOptions, PictureOptions};
