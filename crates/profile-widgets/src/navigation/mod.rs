//! Navigation happens only when a rendered link is activated. The host
//! injects a [`Navigator`]; the widgets never touch a page or a router
//! directly.

pub mod dispatch;
pub mod navigator;

pub use navigator::{Navigator, RecordingNavigator, TracingNavigator};
