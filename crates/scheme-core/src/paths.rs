//! Path and URL accessors for individual themes.
//!
//! These are plain joins against the theme root; no stack resolution
//! happens here.

use scheme_fs::{NormalizedPath, SchemeDir};

use crate::config::SchemeConfig;

/// Builds filesystem paths and URLs inside a theme directory.
#[derive(Debug, Clone, Copy)]
pub struct ThemePaths<'a> {
    config: &'a SchemeConfig,
}

impl<'a> ThemePaths<'a> {
    pub fn new(config: &'a SchemeConfig) -> Self {
        Self { config }
    }

    /// Root directory of `theme`.
    pub fn theme_dir(&self, theme: &str) -> NormalizedPath {
        self.config.theme_root.join(theme)
    }

    /// URL of the root directory of `theme`.
    pub fn theme_dir_url(&self, theme: &str) -> String {
        format!("{}/{}", self.config.theme_root_url.trim_end_matches('/'), theme)
    }

    /// Path of a file inside `theme`; parts may contain separators.
    pub fn theme_file<I, S>(&self, theme: &str, parts: I) -> NormalizedPath
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relative = NormalizedPath::relative(parts);
        self.theme_dir(theme).join(relative.as_str())
    }

    /// URL of a file inside `theme`.
    pub fn theme_file_url<I, S>(&self, theme: &str, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relative = NormalizedPath::relative(parts);
        if relative.is_empty() {
            self.theme_dir_url(theme)
        } else {
            format!("{}/{}", self.theme_dir_url(theme), relative)
        }
    }

    /// Path of a well-known directory; `theme` defaults to the active theme.
    pub fn dir(&self, kind: SchemeDir, theme: Option<&str>) -> NormalizedPath {
        let theme = theme.unwrap_or(self.config.active_theme.as_str());
        self.theme_file(theme, self.segments(kind))
    }

    /// URL of a well-known directory; `theme` defaults to the active theme.
    pub fn dir_url(&self, kind: SchemeDir, theme: Option<&str>) -> String {
        let theme = theme.unwrap_or(self.config.active_theme.as_str());
        self.theme_file_url(theme, self.segments(kind))
    }

    pub fn css_dir(&self, theme: Option<&str>) -> NormalizedPath {
        self.dir(SchemeDir::Css, theme)
    }

    pub fn css_url(&self, theme: Option<&str>) -> String {
        self.dir_url(SchemeDir::Css, theme)
    }

    pub fn js_dir(&self, theme: Option<&str>) -> NormalizedPath {
        self.dir(SchemeDir::Js, theme)
    }

    pub fn js_url(&self, theme: Option<&str>) -> String {
        self.dir_url(SchemeDir::Js, theme)
    }

    pub fn images_dir(&self, theme: Option<&str>) -> NormalizedPath {
        self.dir(SchemeDir::Images, theme)
    }

    pub fn images_url(&self, theme: Option<&str>) -> String {
        self.dir_url(SchemeDir::Images, theme)
    }

    fn segments(&self, kind: SchemeDir) -> Vec<&str> {
        match kind {
            kind if kind.is_asset() => vec![SchemeDir::Assets.as_str(), kind.as_str()],
            SchemeDir::Docs => vec![self.config.config_dir.as_str(), kind.as_str()],
            _ => vec![kind.as_str()],
        }
    }
}
