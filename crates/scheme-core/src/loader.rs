//! Recursive theme configuration loading.
//!
//! Loading a theme first loads its declared parent (and, transitively, every
//! ancestor), then pushes the theme onto the stack and registers its
//! directives. The resulting stack is therefore always ancestor-first.

use scheme_fs::{NormalizedPath, io};

use crate::config::SchemeConfig;
use crate::directive::DirectiveStore;
use crate::document::ConfigDocument;
use crate::error::{Error, Result};
use crate::paths::ThemePaths;
use crate::stack::ThemeStack;

/// Populates a [`ThemeStack`] and [`DirectiveStore`] from theme config files.
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader<'a> {
    config: &'a SchemeConfig,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(config: &'a SchemeConfig) -> Self {
        Self { config }
    }

    /// Path of the directive file for `theme`.
    pub fn config_path(&self, theme: &str) -> NormalizedPath {
        ThemePaths::new(self.config).theme_file(
            theme,
            [self.config.config_dir.as_str(), self.config.config_file_name().as_str()],
        )
    }

    /// Load `theme` and all of its ancestors.
    ///
    /// A theme without a readable config file is pushed as a root with no
    /// directives. Malformed config files abort the whole load, as does an
    /// ancestor chain that leads back to a theme still being loaded.
    pub fn load(
        &self,
        theme: &str,
        stack: &mut ThemeStack,
        directives: &mut DirectiveStore,
    ) -> Result<()> {
        let mut loading = Vec::new();
        self.load_chain(theme, &mut loading, stack, directives)
    }

    fn load_chain(
        &self,
        theme: &str,
        loading: &mut Vec<String>,
        stack: &mut ThemeStack,
        directives: &mut DirectiveStore,
    ) -> Result<()> {
        if loading.iter().any(|t| t == theme) {
            let mut chain = loading.clone();
            chain.push(theme.to_string());
            return Err(Error::CyclicInheritance {
                chain: chain.join(" -> "),
            });
        }
        loading.push(theme.to_string());

        let path = self.config_path(theme);
        let document = match io::read_optional(&path) {
            Some(content) => Some(ConfigDocument::parse(&path, &content)?),
            None => {
                tracing::debug!(theme, %path, "No readable theme config, loading as root theme");
                None
            }
        };

        if let Some(parent) = document.as_ref().and_then(ConfigDocument::parent_theme) {
            tracing::debug!(theme, parent, "Loading parent theme first");
            self.load_chain(parent, loading, stack, directives)?;
        }

        stack.push(theme);

        if let Some(document) = &document {
            for (name, value) in document.flattened() {
                directives.set_directive(theme, name, value.clone(), true)?;
            }
            tracing::debug!(
                theme,
                count = document.directives().len() + document.advanced().len(),
                "Registered theme directives"
            );
        }

        loading.pop();
        Ok(())
    }
}
