use profile_widgets_types::User;

/// The canonical sample: `abc`, Jane Doe.
pub fn jane_doe() -> User {
    User::new("abc").with_name("Jane", "Doe")
}

/// A user with a username and nothing else.
pub fn user_named(username: &str) -> User {
    User::new(username)
}

/// Users whose fields exercise the fallback paths.
pub fn edge_case_users() -> Vec<(&'static str, User)> {
    vec![
        ("no fields", User::default()),
        ("empty username", User::new("")),
        ("first name only", User::new("solo").with_first_name("Cher")),
        ("last name only", User::new("lastly").with_last_name("Smith")),
        ("empty names", User::new("blank").with_name("", "")),
        ("padded names", User::new("pad").with_name(" Jane ", " Doe ")),
        ("markup in fields", User::new("<b>").with_name("A&B", "\"C\"")),
        ("multibyte username", User::new("ñandú")),
    ]
}

/// JSON shaped like the user objects served by the profile API.
pub fn api_user_json(username: &str, first_name: &str, last_name: &str) -> String {
    serde_json::json!({
        "id": 1,
        "username": username,
        "first_name": first_name,
        "last_name": last_name,
        "follower_count": 0,
        "following_count": 0,
    })
    .to_string()
}
