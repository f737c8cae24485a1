use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::Result;

/// A user record as supplied by the caller.
///
/// Every field is optional because the records come from an external data
/// layer that may omit any of them. Rendering never fails on a `User`;
/// missing fields fall back to well-defined output instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            first_name: None,
            last_name: None,
        }
    }

    pub fn with_name(self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.with_first_name(first_name).with_last_name(last_name)
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Username as used in handles and profile paths; absent reads as `""`.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }

    /// First name, or `None` when absent or empty.
    pub fn first_name(&self) -> Option<&str> {
        non_empty(self.first_name.as_deref())
    }

    /// Last name, or `None` when absent or empty.
    pub fn last_name(&self) -> Option<&str> {
        non_empty(self.last_name.as_deref())
    }

    /// Decode a user record from JSON. Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
