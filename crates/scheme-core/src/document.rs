//! Parsed representation of one theme's configuration file.
//!
//! ```ini
//! parent_theme = base
//! layout = wide
//! features[] = comments
//! features[] = gallery
//!
//! [colors]
//! primary = "#333"
//!
//! [advanced]
//! cache = on
//! ```
//!
//! Top-level scalars become scalar directives, sections and `key[]` lists
//! become grouped directives. Members of the reserved `advanced` section are
//! registered as ordinary top-level directives. Files with a `.toml`,
//! `.json` or `.yaml` extension are read with the same shape.

use std::collections::BTreeMap;

use scheme_fs::{ConfigStore, NormalizedPath};
use serde::Deserialize;

use crate::directive::{DirectiveValue, Scalar};
use crate::error::{Error, Result};

/// Reserved key naming the parent theme.
pub const PARENT_THEME: &str = "parent_theme";

/// Reserved key introducing the group of flattened directives.
pub const ADVANCED: &str = "advanced";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawValue {
    Scalar(Scalar),
    List(Vec<RawValue>),
    Table(BTreeMap<String, RawValue>),
}

/// One theme's configuration file after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    path: NormalizedPath,
    parent_theme: Option<String>,
    directives: BTreeMap<String, DirectiveValue>,
    advanced: BTreeMap<String, DirectiveValue>,
}

impl ConfigDocument {
    /// Load and parse the document at `path` (format chosen by extension).
    pub fn load(store: &ConfigStore, path: &NormalizedPath) -> Result<Self> {
        let raw: BTreeMap<String, RawValue> = store.load(path)?;
        Self::from_raw(path, raw)
    }

    /// Parse `content` in the format named by `path`'s extension.
    pub fn parse(path: &NormalizedPath, content: &str) -> Result<Self> {
        let format = ConfigStore::detect(path)?;
        let raw: BTreeMap<String, RawValue> = ConfigStore::new().parse(path, format, content)?;
        Self::from_raw(path, raw)
    }

    fn from_raw(path: &NormalizedPath, raw: BTreeMap<String, RawValue>) -> Result<Self> {
        let invalid = |message: String| Error::InvalidConfig {
            path: path.to_native(),
            message,
        };

        let mut document = Self {
            path: path.clone(),
            parent_theme: None,
            directives: BTreeMap::new(),
            advanced: BTreeMap::new(),
        };

        for (name, value) in raw {
            if name == ADVANCED {
                match value {
                    RawValue::Table(members) => {
                        for (member, member_value) in members {
                            let converted = directive_value(&member, member_value).map_err(invalid)?;
                            document.advanced.insert(member, converted);
                        }
                    }
                    _ => tracing::debug!(%path, "Ignoring non-table '{ADVANCED}' entry"),
                }
                continue;
            }

            let converted = directive_value(&name, value).map_err(invalid)?;
            if name == PARENT_THEME {
                document.parent_theme = parent_name(&converted).map_err(invalid)?;
            }
            document.directives.insert(name, converted);
        }

        Ok(document)
    }

    /// Path the document was read from.
    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// The declared parent theme, if any.
    pub fn parent_theme(&self) -> Option<&str> {
        self.parent_theme.as_deref()
    }

    /// Top-level directives (including `parent_theme` itself).
    pub fn directives(&self) -> &BTreeMap<String, DirectiveValue> {
        &self.directives
    }

    /// Members of the `advanced` group.
    pub fn advanced(&self) -> &BTreeMap<String, DirectiveValue> {
        &self.advanced
    }

    /// Every directive with the `advanced` group flattened in.
    pub fn flattened(&self) -> impl Iterator<Item = (&str, &DirectiveValue)> + '_ {
        self.directives
            .iter()
            .chain(self.advanced.iter())
            .map(|(name, value)| (name.as_str(), value))
    }
}

pub(crate) fn directive_value(name: &str, raw: RawValue) -> std::result::Result<DirectiveValue, String> {
    let nested = || format!("directive '{name}' nests groups more than one level deep");

    match raw {
        RawValue::Scalar(scalar) => Ok(DirectiveValue::Scalar(scalar)),
        RawValue::List(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                RawValue::Scalar(scalar) => Ok((index.to_string(), scalar)),
                _ => Err(nested()),
            })
            .collect::<std::result::Result<BTreeMap<_, _>, _>>()
            .map(DirectiveValue::Group),
        RawValue::Table(members) => members
            .into_iter()
            .map(|(key, member)| match member {
                RawValue::Scalar(scalar) => Ok((key, scalar)),
                _ => Err(nested()),
            })
            .collect::<std::result::Result<BTreeMap<_, _>, _>>()
            .map(DirectiveValue::Group),
    }
}

fn parent_name(value: &DirectiveValue) -> std::result::Result<Option<String>, String> {
    match value {
        DirectiveValue::Scalar(Scalar::Text(name)) if name.trim().is_empty() => Ok(None),
        DirectiveValue::Scalar(Scalar::Text(name)) if is_theme_name(name.trim()) => {
            Ok(Some(name.trim().to_string()))
        }
        DirectiveValue::Scalar(Scalar::Bool(false)) => Ok(None),
        other => Err(format!(
            "'{PARENT_THEME}' must be a theme directory name, got {other}"
        )),
    }
}

/// A single directory name: no separators, not `.` or `..`.
fn is_theme_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
