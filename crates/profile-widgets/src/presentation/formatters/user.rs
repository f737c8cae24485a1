use profile_widgets_types::User;

/// "<first> <last>" from whichever name parts are present, verbatim.
///
/// Returns `None` when neither part is present so callers can omit the
/// name segment instead of printing placeholders.
pub fn full_name(user: &User) -> Option<String> {
    match (user.first_name(), user.last_name()) {
        (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

pub fn handle(username: &str) -> String {
    format!("@{}", username)
}

/// First character of the username, or `placeholder` when it is empty.
pub fn avatar_initial(username: &str, placeholder: &str) -> String {
    match username.chars().next() {
        Some(initial) => initial.to_string(),
        None => placeholder.to_string(),
    }
}
