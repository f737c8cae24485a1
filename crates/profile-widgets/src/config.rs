use crate::{Error, Result};
use profile_widgets_types::{DEFAULT_PROFILE_PREFIX, NavigationMode, ProfilePath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default config file location
pub const CONFIG_ENV_VAR: &str = "PROFILE_WIDGETS_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PROFILE_WIDGETS_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.profile-widgets/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("profile-widgets").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home)
            .join(".profile-widgets")
            .join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Element used for the clickable profile region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkStyle {
    /// Plain `span` with a click handler; no native link affordances
    #[default]
    Span,
    /// Native `a` element with `href`
    Anchor,
}

/// Rendering configuration shared by all widgets.
///
/// Every field has a default, so a partial TOML file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub profile_path_prefix: String,
    pub navigation: NavigationMode,
    pub link_style: LinkStyle,
    pub link_classes: Vec<String>,
    pub badge_classes: Vec<String>,
    /// Shown in the avatar badge when the username is empty
    pub empty_initial: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            profile_path_prefix: DEFAULT_PROFILE_PREFIX.to_string(),
            navigation: NavigationMode::FullPage,
            link_style: LinkStyle::Span,
            link_classes: vec!["pointer".to_string()],
            badge_classes: ["mx-1", "px-3", "py-2", "rounded", "circle", "bg-dark", "text-white"]
                .into_iter()
                .map(String::from)
                .collect(),
            empty_initial: "?".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: WidgetConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded widget config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    /// Profile page path for `username` under the configured prefix
    pub fn profile_path(&self, username: &str) -> ProfilePath {
        ProfilePath::with_prefix(&self.profile_path_prefix, username)
    }
}
