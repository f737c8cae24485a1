pub mod html;
pub mod user;

pub use html::{escape_attr, escape_text};
pub use user::{avatar_initial, full_name, handle};
