//! Locating files across the theme stack.

use scheme_fs::{NormalizedPath, SchemeDir};

use crate::config::SchemeConfig;
use crate::paths::ThemePaths;
use crate::stack::ThemeStack;

/// Searches the theme stack for files, most specific theme first.
///
/// A miss is a normal outcome and yields `None`.
#[derive(Debug, Clone, Copy)]
pub struct FileLocator<'a> {
    config: &'a SchemeConfig,
    stack: &'a ThemeStack,
}

impl<'a> FileLocator<'a> {
    pub fn new(config: &'a SchemeConfig, stack: &'a ThemeStack) -> Self {
        Self { config, stack }
    }

    pub fn stack(&self) -> &'a ThemeStack {
        self.stack
    }

    pub fn paths(&self) -> ThemePaths<'a> {
        ThemePaths::new(self.config)
    }

    /// First readable `<theme>/<parts…>` scanning top-down.
    ///
    /// Parts may be pre-split segments or separator-joined strings.
    pub fn locate_file<I, S>(&self, parts: I) -> Option<NormalizedPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relative = NormalizedPath::relative(parts);
        let paths = self.paths();

        let found = self.stack.top_down().find_map(|theme| {
            let candidate = paths.theme_file(theme, [relative.as_str()]);
            tracing::trace!(theme, %candidate, "Probing for file");
            candidate.is_readable().then_some(candidate)
        });

        if found.is_none() {
            tracing::debug!(%relative, "File not found in any theme");
        }
        found
    }

    /// Like [`locate_file`](Self::locate_file), relative to each theme's config dir.
    pub fn locate_config_file<I, S>(&self, parts: I) -> Option<NormalizedPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relative = NormalizedPath::relative(parts);
        self.locate_file([self.config.config_dir.as_str(), relative.as_str()])
    }

    /// `<theme>/<parts…>` for every theme, top-down, without existence checks.
    pub fn theme_dirs<I, S>(&self, parts: I) -> Vec<NormalizedPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relative = NormalizedPath::relative(parts);
        let paths = self.paths();
        self.stack
            .top_down()
            .map(|theme| paths.theme_file(theme, [relative.as_str()]))
            .collect()
    }

    /// Every theme's config directory, top-down.
    pub fn theme_config_dirs(&self) -> Vec<NormalizedPath> {
        self.theme_dirs([self.config.config_dir.as_str()])
    }

    /// Every theme's documentation directory, top-down.
    pub fn theme_documentation_dirs(&self) -> Vec<NormalizedPath> {
        self.theme_dirs([self.config.config_dir.as_str(), SchemeDir::Docs.as_str()])
    }

    /// Every theme's readable `<theme>/<parts…>`, bottom-up.
    ///
    /// Used for per-theme bootstrap files that each ancestor contributes
    /// before its descendants.
    pub fn bootstrap_files<I, S>(&self, parts: I) -> Vec<NormalizedPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relative = NormalizedPath::relative(parts);
        let paths = self.paths();
        self.stack
            .bottom_up()
            .map(|theme| paths.theme_file(theme, [relative.as_str()]))
            .filter(NormalizedPath::is_readable)
            .collect()
    }
}
