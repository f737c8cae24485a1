//! Presentational widgets for users: a profile link, a name-and-handle
//! display and an avatar badge.
//!
//! ```
//! use profile_widgets::{DisplayOptions, HtmlRenderer, Renderer, WidgetConfig, present_user_display};
//! use profile_widgets::types::User;
//!
//! let user = User::new("abc").with_name("Jane", "Doe");
//! let node = present_user_display(&user, DisplayOptions::new().with_full_name(), &WidgetConfig::default());
//!
//! assert_eq!(node.text_content(), "Jane Doe @abc");
//! let html = HtmlRenderer.render(&node).unwrap();
//! assert!(html.contains("data-href=\"/profile/abc\""));
//! ```

pub mod config;
pub mod error;
pub mod navigation;
pub mod presentation;

pub use profile_widgets_types as types;

pub use config::{LinkStyle, WidgetConfig};
pub use error::{Error, Result};
pub use navigation::{Navigator, RecordingNavigator, TracingNavigator};
pub use presentation::renderers::{
    ConsoleRenderer, HtmlRenderer, JsonRenderer, TextRenderer, renderer_for,
};
pub use presentation::{
    ClickAction, DisplayOptions, Element, Node, PictureOptions, RenderFormat, Renderer, Tag,
    present_user_display, present_user_link, present_user_picture,
};
