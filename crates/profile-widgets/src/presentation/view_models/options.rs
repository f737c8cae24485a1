use serde::{Deserialize, Serialize};

/// Options for the user display widget. Both flags default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Prepend "<first> <last>" before the handle
    #[serde(default)]
    pub include_full_name: bool,

    /// Render the handle as plain text instead of a profile link
    #[serde(default)]
    pub hide_link: bool,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_full_name(mut self) -> Self {
        self.include_full_name = true;
        self
    }

    pub fn without_link(mut self) -> Self {
        self.hide_link = true;
        self
    }
}

/// Options for the avatar badge widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureOptions {
    #[serde(default)]
    pub hide_link: bool,
}

impl PictureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_link(mut self) -> Self {
        self.hide_link = true;
        self
    }
}
