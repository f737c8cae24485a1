use serde::{Deserialize, Serialize};
use std::fmt;

/// Path prefix profile pages live under.
pub const DEFAULT_PROFILE_PREFIX: &str = "/profile/";

/// Target path of a profile page, e.g. `/profile/abc`.
///
/// The username is appended verbatim: no escaping and no URL encoding.
/// Callers are responsible for URL-safe usernames.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfilePath(String);

impl ProfilePath {
    /// Profile path under the default `/profile/` prefix
    pub fn for_username(username: &str) -> Self {
        Self::with_prefix(DEFAULT_PROFILE_PREFIX, username)
    }

    pub fn with_prefix(prefix: &str, username: &str) -> Self {
        Self(format!("{}{}", prefix, username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProfilePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How the host should carry out a navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationMode {
    /// Full page load, replacing the current document
    #[default]
    FullPage,
    /// Transition handled by a client-side router
    ClientRoute,
}

impl NavigationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationMode::FullPage => "full-page",
            NavigationMode::ClientRoute => "client-route",
        }
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A deferred navigation, delivered to a navigator when a link is activated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub path: ProfilePath,
    pub mode: NavigationMode,
}

impl NavigationRequest {
    pub fn new(path: ProfilePath, mode: NavigationMode) -> Self {
        Self { path, mode }
    }

    pub fn full_page(path: ProfilePath) -> Self {
        Self::new(path, NavigationMode::FullPage)
    }
}

impl fmt::Display for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mode, self.path)
    }
}
