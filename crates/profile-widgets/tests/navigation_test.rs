use profile_widgets::types::{NavigationMode, NavigationRequest, User};
use profile_widgets::{
    DisplayOptions, Error, Node, PictureOptions, RecordingNavigator, WidgetConfig,
    present_user_display, present_user_link, present_user_picture,
};
use profile_widgets_testing::fixtures::{jane_doe, user_named};

#[test]
fn test_link_activation_navigates_to_exact_profile_path() {
    let config = WidgetConfig::default();

    for username in ["abc", "zed", "two words", "a/b", "ümlaut", "q?x=1", ""] {
        let navigator = RecordingNavigator::new();
        let node = present_user_link(username, Node::text("x"), &config);

        let fired = node.activate(&navigator).unwrap();

        assert_eq!(fired, 1);
        assert_eq!(navigator.paths(), vec![format!("/profile/{}", username)]);
    }
}

#[test]
fn test_rendering_alone_never_navigates() {
    let navigator = RecordingNavigator::new();
    let config = WidgetConfig::default();

    let _ = present_user_display(&jane_doe(), DisplayOptions::new(), &config);
    let _ = present_user_picture(&jane_doe(), PictureOptions::new(), &config);

    assert!(navigator.requests().is_empty());
}

#[test]
fn test_clicking_handle_in_display() {
    let navigator = RecordingNavigator::new();
    let node = present_user_display(
        &jane_doe(),
        DisplayOptions::new().with_full_name(),
        &WidgetConfig::default(),
    );

    // [0] full name, [1] separator, [2] link, [2, 0] handle text
    assert_eq!(node.dispatch_click(&[2, 0], &navigator).unwrap(), 1);
    assert_eq!(node.dispatch_click(&[0], &navigator).unwrap(), 0);

    assert_eq!(
        navigator.requests(),
        vec![NavigationRequest::new(
            WidgetConfig::default().profile_path("abc"),
            NavigationMode::FullPage
        )]
    );
}

#[test]
fn test_clicking_badge_bubbles_to_link() {
    let navigator = RecordingNavigator::new();
    let node = present_user_picture(&user_named("zed"), PictureOptions::new(), &WidgetConfig::default());

    // [0] badge, [0, 0] initial
    assert_eq!(node.dispatch_click(&[0, 0], &navigator).unwrap(), 1);
    assert_eq!(navigator.paths(), vec!["/profile/zed"]);
}

#[test]
fn test_each_activation_navigates_once() {
    let navigator = RecordingNavigator::new();
    let node = present_user_picture(&user_named("zed"), PictureOptions::new(), &WidgetConfig::default());

    node.activate(&navigator).unwrap();
    node.activate(&navigator).unwrap();

    assert_eq!(navigator.paths(), vec!["/profile/zed", "/profile/zed"]);
}

#[test]
fn test_hidden_link_has_nothing_to_activate() {
    let navigator = RecordingNavigator::new();
    let node = present_user_display(
        &jane_doe(),
        DisplayOptions::new().without_link(),
        &WidgetConfig::default(),
    );

    assert_eq!(node.activate(&navigator).unwrap(), 0);
    assert!(navigator.last().is_none());
}

#[test]
fn test_nested_links_fire_innermost_first() {
    let navigator = RecordingNavigator::new();
    let config = WidgetConfig::default();
    let inner = present_user_link("inner", Node::text("x"), &config);
    let outer = present_user_link("outer", inner, &config);

    assert_eq!(outer.dispatch_click(&[0, 0], &navigator).unwrap(), 2);
    assert_eq!(navigator.paths(), vec!["/profile/inner", "/profile/outer"]);
}

#[test]
fn test_invalid_target_is_an_error() {
    let navigator = RecordingNavigator::new();
    let node = present_user_link("abc", Node::text("x"), &WidgetConfig::default());

    let err = node.dispatch_click(&[3], &navigator).unwrap_err();

    assert!(matches!(err, Error::InvalidTarget(_)));
    assert!(navigator.requests().is_empty());
}

#[test]
fn test_client_route_mode_reaches_navigator() {
    let config = WidgetConfig {
        navigation: NavigationMode::ClientRoute,
        ..WidgetConfig::default()
    };
    let navigator = RecordingNavigator::new();

    present_user_display(&User::new("abc"), DisplayOptions::new(), &config)
        .activate(&navigator)
        .unwrap();

    let request = navigator.last().unwrap();
    assert_eq!(request.mode, NavigationMode::ClientRoute);
    assert_eq!(request.path.as_str(), "/profile/abc");
}

#[test]
fn test_injected_closure_navigator() {
    let location = std::cell::RefCell::new(String::new());
    let assign_location = |request: &NavigationRequest| {
        location.replace(request.path.to_string());
    };

    present_user_link("abc", Node::text("x"), &WidgetConfig::default())
        .activate(&assign_location)
        .unwrap();

    assert_eq!(location.into_inner(), "/profile/abc");
}
