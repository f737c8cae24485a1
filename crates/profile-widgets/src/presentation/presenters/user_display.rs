use profile_widgets_types::User;

use super::present_user_link;
use crate::config::WidgetConfig;
use crate::presentation::formatters::{full_name, handle};
use crate::presentation::view_models::{DisplayOptions, Node};

/// Render "<first> <last> @<username>", with the full name optional and the
/// handle optionally linked to the profile page.
pub fn present_user_display(user: &User, options: DisplayOptions, config: &WidgetConfig) -> Node {
    let mut segments = Vec::with_capacity(3);

    if options.include_full_name
        && let Some(name) = full_name(user)
    {
        segments.push(Node::text(name));
        segments.push(Node::text(" "));
    }

    let handle_text = Node::text(handle(user.username()));
    segments.push(if options.hide_link {
        handle_text
    } else {
        present_user_link(user.username(), handle_text, config)
    });

    Node::fragment(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> User {
        User::new("abc").with_name("Jane", "Doe")
    }

    #[test]
    fn test_four_combinations() {
        let config = WidgetConfig::default();
        let cases = [
            (DisplayOptions::new(), "@abc", true),
            (DisplayOptions::new().with_full_name(), "Jane Doe @abc", true),
            (DisplayOptions::new().without_link(), "@abc", false),
            (
                DisplayOptions::new().with_full_name().without_link(),
                "Jane Doe @abc",
                false,
            ),
        ];

        for (options, text, clickable) in cases {
            let node = present_user_display(&jane(), options, &config);
            assert_eq!(node.text_content(), text, "{:?}", options);
            assert_eq!(node.is_clickable(), clickable, "{:?}", options);
        }
    }

    #[test]
    fn test_missing_name_omits_segment_and_separator() {
        let node = present_user_display(
            &User::new("abc"),
            DisplayOptions::new().with_full_name(),
            &WidgetConfig::default(),
        );
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.text_content(), "@abc");
    }
}
