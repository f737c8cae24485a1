//! # Presentation Layer
//!
//! Widgets are built with the same one-way flow as the rest of the crate:
//!
//! ```text
//! [ User + Options ] --> [ Presenter ] --> [ Node tree ] --> [ Renderer ] --> [ Output ]
//!       (input)           (component)      (view model)      (strategy)     (HTML/Text/JSON)
//! ```
//!
//! ## Directory Guide
//!
//! ### `view_models/`
//! * `Node`, `Element`, `ClickAction`: the rendered content tree.
//! * `DisplayOptions`, `PictureOptions`: typed widget options.
//! * Pure data. Everything implements `Serialize`.
//!
//! ### `presenters/`
//! * `present_user_link`, `present_user_display`, `present_user_picture`.
//! * Pure functions of their inputs: identical input gives an identical tree,
//!   and rendering never navigates.
//!
//! ### `renderers/`
//! * `HtmlRenderer`, `TextRenderer`, `JsonRenderer`, `ConsoleRenderer`
//!   behind the `Renderer` trait.
//!
//! ### `formatters/`
//! * Small string helpers: full name, handle, avatar initial, HTML escaping.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;

pub use presenters::{present_user_display, present_user_link, present_user_picture};
pub use renderers::{RenderFormat, Renderer};
pub use view_models::{ClickAction, DisplayOptions, Element, Node, PictureOptions, Tag};
