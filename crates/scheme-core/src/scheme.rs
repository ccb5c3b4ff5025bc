//! The resolution session.
//!
//! A [`Scheme`] owns one theme stack and directive store built from a single
//! [`SchemeConfig`]. It is built once by [`Scheme::load`] and is read-only
//! afterwards; independent sessions share no state.

use scheme_fs::NormalizedPath;

use crate::config::SchemeConfig;
use crate::directive::{DirectiveStore, DirectiveValue};
use crate::error::Result;
use crate::loader::ConfigLoader;
use crate::locator::FileLocator;
use crate::options::{OptionsLoader, OptionsRegistry};
use crate::paths::ThemePaths;
use crate::stack::ThemeStack;
use crate::template::{TemplateFilter, TemplateHook, TemplateResolver};

/// Composite view over a theme inheritance chain.
#[derive(Debug, Clone)]
pub struct Scheme {
    config: SchemeConfig,
    themes: ThemeStack,
    directives: DirectiveStore,
}

impl Scheme {
    /// Load the active theme named in `config` and all its ancestors.
    pub fn load(config: SchemeConfig) -> Result<Self> {
        let theme = config.active_theme.clone();
        Self::load_from(config, &theme)
    }

    /// Load the chain starting at `theme` instead of the active theme.
    pub fn load_from(config: SchemeConfig, theme: &str) -> Result<Self> {
        let mut themes = ThemeStack::new();
        let mut directives = DirectiveStore::new();
        ConfigLoader::new(&config).load(theme, &mut themes, &mut directives)?;

        tracing::debug!(
            theme,
            stack = ?themes.to_vec(false),
            directives = directives.len(),
            "Scheme loaded"
        );

        Ok(Self {
            config,
            themes,
            directives,
        })
    }

    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    pub fn themes(&self) -> &ThemeStack {
        &self.themes
    }

    pub fn directives(&self) -> &DirectiveStore {
        &self.directives
    }

    pub fn has_directive(&self, name: &str) -> bool {
        self.directives.has_directive(name)
    }

    /// Value of `name` from the most specific theme that sets it.
    pub fn directive(&self, name: &str) -> Option<&DirectiveValue> {
        self.directives.get_directive(name, &self.themes)
    }

    pub fn paths(&self) -> ThemePaths<'_> {
        ThemePaths::new(&self.config)
    }

    pub fn locator(&self) -> FileLocator<'_> {
        FileLocator::new(&self.config, &self.themes)
    }

    pub fn templates(&self) -> TemplateResolver<'_> {
        TemplateResolver::new(self.locator())
    }

    pub fn locate_file<I, S>(&self, parts: I) -> Option<NormalizedPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.locator().locate_file(parts)
    }

    pub fn locate_config_file<I, S>(&self, parts: I) -> Option<NormalizedPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.locator().locate_config_file(parts)
    }

    pub fn locate_template<I, S>(&self, candidates: I) -> Option<NormalizedPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.templates().locate_template(candidates)
    }

    /// Merge every theme's options file into `registry`, ancestor first.
    ///
    /// `file_stem` defaults to the configured options file.
    pub fn load_options(
        &self,
        registry: &mut impl OptionsRegistry,
        file_stem: Option<&str>,
    ) -> Result<usize> {
        let stem = file_stem.unwrap_or(self.config.options_file.as_str());
        OptionsLoader::new(&self.config, &self.themes).load_options(registry, stem)
    }

    /// Template hooks the host should route through [`TemplateFilter`].
    ///
    /// Empty when no theme was loaded.
    pub fn filtered_hooks(&self) -> &'static [TemplateHook] {
        if self.themes.is_empty() {
            &[]
        } else {
            &TemplateHook::ALL
        }
    }
}

impl TemplateFilter for Scheme {
    fn filter_template(&self, template: &str) -> String {
        self.templates().filter_template(template)
    }
}
