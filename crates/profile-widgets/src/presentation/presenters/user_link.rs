use profile_widgets_types::NavigationRequest;

use crate::config::{LinkStyle, WidgetConfig};
use crate::presentation::view_models::{ClickAction, Element, Node, Tag};

/// Wrap `children` in a clickable region that navigates to the profile page
/// of `username`.
///
/// The username goes into the path untouched; an empty one yields the bare
/// prefix (`/profile/`). Nothing navigates until the region is activated.
pub fn present_user_link(username: &str, children: Node, config: &WidgetConfig) -> Node {
    let path = config.profile_path(username);

    let (tag, target_attr) = match config.link_style {
        LinkStyle::Span => (Tag::Span, "data-href"),
        LinkStyle::Anchor => (Tag::A, "href"),
    };

    Element::new(tag)
        .with_classes(&config.link_classes)
        .with_attribute(target_attr, path.as_str())
        .with_attribute("data-navigation", config.navigation.as_str())
        .with_on_click(ClickAction::Navigate(NavigationRequest::new(
            path,
            config.navigation,
        )))
        .with_child(children)
        .into()
}
