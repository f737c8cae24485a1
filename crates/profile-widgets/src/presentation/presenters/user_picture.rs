use profile_widgets_types::User;

use super::present_user_link;
use crate::config::WidgetConfig;
use crate::presentation::formatters::avatar_initial;
use crate::presentation::view_models::{Element, Node, PictureOptions, Tag};

/// Render the avatar badge: the username's first character in a round
/// badge, linked to the profile page unless `hide_link` is set.
pub fn present_user_picture(user: &User, options: PictureOptions, config: &WidgetConfig) -> Node {
    let initial = avatar_initial(user.username(), &config.empty_initial);

    let badge: Node = Element::new(Tag::Span)
        .with_classes(&config.badge_classes)
        .with_child(Node::text(initial))
        .into();

    if options.hide_link {
        badge
    } else {
        present_user_link(user.username(), badge, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_holds_first_character() {
        let node = present_user_picture(
            &User::new("zed"),
            PictureOptions::new().without_link(),
            &WidgetConfig::default(),
        );
        let badge = node.as_element().unwrap();
        assert_eq!(badge.children, vec![Node::text("z")]);
        assert!(badge.classes.contains(&"circle".to_string()));
        assert!(!node.is_clickable());
    }

    #[test]
    fn test_linked_badge() {
        let node = present_user_picture(
            &User::new("zed"),
            PictureOptions::new(),
            &WidgetConfig::default(),
        );
        let link = node.as_element().unwrap();
        assert_eq!(link.attribute("data-href"), Some("/profile/zed"));
        assert_eq!(node.children()[0].text_content(), "z");
    }

    #[test]
    fn test_empty_username_uses_placeholder() {
        let config = WidgetConfig {
            empty_initial: "·".to_string(),
            ..WidgetConfig::default()
        };
        let node = present_user_picture(&User::default(), PictureOptions::new(), &config);
        assert_eq!(node.text_content(), "·");
        assert_eq!(
            node.as_element().unwrap().attribute("data-href"),
            Some("/profile/")
        );
    }
}
