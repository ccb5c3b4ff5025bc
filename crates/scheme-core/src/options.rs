//! Bottom-up merging of per-theme option definitions.
//!
//! Unlike directives, which are composed at lookup time, option
//! definitions are merged eagerly: each theme's options file is handed to
//! an [`OptionsRegistry`] in stack order, ancestor first, so a more
//! specific theme overlays whatever its ancestors defined.

use std::collections::BTreeMap;

use scheme_fs::{ConfigStore, NormalizedPath};
use serde::Serialize;

use crate::config::SchemeConfig;
use crate::directive::DirectiveValue;
use crate::document::{RawValue, directive_value};
use crate::error::{Error, Result};
use crate::paths::ThemePaths;
use crate::stack::ThemeStack;

/// Receives option definition files, one theme at a time.
pub trait OptionsRegistry {
    /// Load the definitions in `path` on behalf of `theme`.
    fn load_config_file(&mut self, path: &NormalizedPath, theme: &str) -> Result<()>;
}

/// Feeds every theme's options file to a registry, bottom-up.
#[derive(Debug, Clone, Copy)]
pub struct OptionsLoader<'a> {
    config: &'a SchemeConfig,
    stack: &'a ThemeStack,
}

impl<'a> OptionsLoader<'a> {
    pub fn new(config: &'a SchemeConfig, stack: &'a ThemeStack) -> Self {
        Self { config, stack }
    }

    /// Load `<theme>/<config_dir>/<file_stem>.ini` for each theme that has one.
    ///
    /// Returns the number of files handed to the registry.
    pub fn load_options(
        &self,
        registry: &mut impl OptionsRegistry,
        file_stem: &str,
    ) -> Result<usize> {
        let paths = ThemePaths::new(self.config);
        let file_name = self.config.options_file_name(file_stem);
        let mut loaded = 0;

        for theme in self.stack.bottom_up() {
            let path = paths.theme_file(theme, [self.config.config_dir.as_str(), file_name.as_str()]);
            if path.is_readable() {
                tracing::debug!(theme, %path, "Loading theme options");
                registry.load_config_file(&path, theme)?;
                loaded += 1;
            }
        }

        Ok(loaded)
    }
}

/// One merged option definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionDefinition {
    pub name: String,
    /// The most specific theme that contributed to this option
    pub theme: String,
    pub fields: BTreeMap<String, DirectiveValue>,
}

impl OptionDefinition {
    pub fn field(&self, name: &str) -> Option<&DirectiveValue> {
        self.fields.get(name)
    }
}

/// In-memory [`OptionsRegistry`].
///
/// Each section of an options file defines one option:
///
/// ```ini
/// [layout]
/// title = Layout
/// default = wide
/// choices[] = wide
/// choices[] = narrow
/// ```
///
/// Loading a later file overlays its fields on an existing option of the
/// same name; fields it does not mention are kept.
#[derive(Debug, Clone, Default)]
pub struct OptionsTable {
    options: BTreeMap<String, OptionDefinition>,
    store: ConfigStore,
}

impl OptionsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&OptionDefinition> {
        self.options.get(name)
    }

    /// A single field of an option.
    pub fn field(&self, option: &str, field: &str) -> Option<&DirectiveValue> {
        self.get(option)?.field(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionDefinition> + '_ {
        self.options.values()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl OptionsRegistry for OptionsTable {
    fn load_config_file(&mut self, path: &NormalizedPath, theme: &str) -> Result<()> {
        let raw: BTreeMap<String, BTreeMap<String, RawValue>> = self.store.load(path)?;

        for (name, raw_fields) in raw {
            let mut fields = BTreeMap::new();
            for (field, value) in raw_fields {
                let value = directive_value(&field, value).map_err(|message| Error::InvalidConfig {
                    path: path.to_native(),
                    message,
                })?;
                fields.insert(field, value);
            }

            match self.options.get_mut(&name) {
                Some(existing) => {
                    existing.theme = theme.to_string();
                    existing.fields.extend(fields);
                }
                None => {
                    self.options.insert(
                        name.clone(),
                        OptionDefinition {
                            name,
                            theme: theme.to_string(),
                            fields,
                        },
                    );
                }
            }
        }

        Ok(())
    }
}
