use std::fmt;

/// Result type for profile-widgets operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring, rendering or dispatching
#[derive(Debug)]
pub enum Error {
    /// Types layer error
    Types(profile_widgets_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// JSON serialization failed
    Json(serde_json::Error),

    /// Click target path does not address a node in the tree
    InvalidTarget(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::InvalidTarget(msg) => write!(f, "Invalid click target: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Config(_) | Error::InvalidTarget(_) => None,
        }
    }
}

impl From<profile_widgets_types::Error> for Error {
    fn from(err: profile_widgets_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
