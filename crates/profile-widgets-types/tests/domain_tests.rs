use profile_widgets_types::{NavigationMode, NavigationRequest, ProfilePath, User};

#[test]
fn test_profile_path_is_identity_on_username() {
    for username in ["abc", "zed", "with space", "ünïcode", "a/b?c=d", ""] {
        let path = ProfilePath::for_username(username);
        assert_eq!(path.as_str(), format!("/profile/{}", username));
    }
}

#[test]
fn test_empty_username_degenerates_to_prefix() {
    assert_eq!(ProfilePath::for_username("").as_str(), "/profile/");
}

#[test]
fn test_custom_prefix() {
    let path = ProfilePath::with_prefix("/u/", "abc");
    assert_eq!(path.to_string(), "/u/abc");
}

#[test]
fn test_navigation_mode_serializes_kebab_case() {
    let json = serde_json::to_string(&NavigationMode::ClientRoute).unwrap();
    assert_eq!(json, "\"client-route\"");
    assert_eq!(NavigationMode::default(), NavigationMode::FullPage);
}

#[test]
fn test_navigation_request_display() {
    let request = NavigationRequest::full_page(ProfilePath::for_username("abc"));
    assert_eq!(request.to_string(), "full-page /profile/abc");
}

#[test]
fn test_user_from_api_json_ignores_unknown_fields() {
    let json = r#"{
        "id": 7,
        "username": "abc",
        "first_name": "Jane",
        "last_name": "Doe",
        "follower_count": 3
    }"#;

    let user = User::from_json(json).unwrap();
    assert_eq!(user, User::new("abc").with_name("Jane", "Doe"));
}

#[test]
fn test_user_from_json_accepts_nulls_and_missing_fields() {
    let user = User::from_json(r#"{"username": "abc", "first_name": null}"#).unwrap();
    assert_eq!(user.username(), "abc");
    assert_eq!(user.first_name(), None);
    assert_eq!(user.last_name(), None);

    let empty = User::from_json("{}").unwrap();
    assert_eq!(empty.username(), "");
}

#[test]
fn test_user_from_json_rejects_malformed_input() {
    let err = User::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("Invalid user record"));
}
