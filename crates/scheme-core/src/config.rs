//! Session configuration for a scheme.

use scheme_fs::constants::CONFIG_EXTENSION;
use scheme_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;

fn default_config_dir() -> String {
    "config".to_string()
}

fn default_config_file() -> String {
    "scheme".to_string()
}

fn default_options_file() -> String {
    "options".to_string()
}

/// Where themes live and how their configuration files are named.
///
/// ```toml
/// theme_root = "/srv/site/themes"
/// theme_root_url = "https://example.com/themes"
/// active_theme = "child"
/// config_dir = "config"
/// config_file = "scheme"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// Directory containing one directory per theme
    pub theme_root: NormalizedPath,

    /// URL prefix under which `theme_root` is served
    #[serde(default)]
    pub theme_root_url: String,

    /// Theme whose inheritance chain is loaded
    pub active_theme: String,

    /// Config subdirectory inside each theme
    #[serde(default = "default_config_dir")]
    pub config_dir: String,

    /// Stem of the directive file inside `config_dir`
    #[serde(default = "default_config_file")]
    pub config_file: String,

    /// Stem of the options file inside `config_dir`
    #[serde(default = "default_options_file")]
    pub options_file: String,
}

impl SchemeConfig {
    /// Create a configuration with default file names.
    pub fn new(theme_root: impl Into<NormalizedPath>, active_theme: impl Into<String>) -> Self {
        Self {
            theme_root: theme_root.into(),
            theme_root_url: String::new(),
            active_theme: active_theme.into(),
            config_dir: default_config_dir(),
            config_file: default_config_file(),
            options_file: default_options_file(),
        }
    }

    /// Load a configuration file (TOML, JSON or YAML).
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    pub fn with_root_url(mut self, url: impl Into<String>) -> Self {
        self.theme_root_url = url.into();
        self
    }

    pub fn with_config_dir(mut self, dir: impl Into<String>) -> Self {
        self.config_dir = dir.into();
        self
    }

    pub fn with_config_file(mut self, stem: impl Into<String>) -> Self {
        self.config_file = stem.into();
        self
    }

    pub fn with_options_file(mut self, stem: impl Into<String>) -> Self {
        self.options_file = stem.into();
        self
    }

    /// File name of the directive file, e.g. `scheme.ini`.
    pub fn config_file_name(&self) -> String {
        format!("{}.{CONFIG_EXTENSION}", self.config_file)
    }

    /// File name of an options file with the given stem.
    pub fn options_file_name(&self, stem: &str) -> String {
        format!("{stem}.{CONFIG_EXTENSION}")
    }
}
