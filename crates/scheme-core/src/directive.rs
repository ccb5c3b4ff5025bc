//! Directive values and the per-theme directive store.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stack::ThemeStack;

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

/// Value of a directive: a scalar or a group of named scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    Scalar(Scalar),
    Group(BTreeMap<String, Scalar>),
}

impl DirectiveValue {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Group(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    pub fn as_group(&self) -> Option<&BTreeMap<String, Scalar>> {
        match self {
            Self::Group(g) => Some(g),
            Self::Scalar(_) => None,
        }
    }

    /// Member of a grouped value.
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.as_group().and_then(|g| g.get(key))
    }
}

impl fmt::Display for DirectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Group(group) => {
                let members: Vec<String> =
                    group.iter().map(|(k, v)| format!("{k} = {v}")).collect();
                write!(f, "{{ {} }}", members.join(", "))
            }
        }
    }
}

impl From<Scalar> for DirectiveValue {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for DirectiveValue {
    fn from(s: &str) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<String> for DirectiveValue {
    fn from(s: String) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<bool> for DirectiveValue {
    fn from(b: bool) -> Self {
        Self::Scalar(b.into())
    }
}

impl From<i64> for DirectiveValue {
    fn from(i: i64) -> Self {
        Self::Scalar(i.into())
    }
}

impl From<BTreeMap<String, Scalar>> for DirectiveValue {
    fn from(group: BTreeMap<String, Scalar>) -> Self {
        Self::Group(group)
    }
}

/// One theme's value for a directive.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: String,
    pub value: DirectiveValue,
    pub read_only: bool,
}

/// Directive name -> theme -> value.
///
/// Values are stored per theme and composed lazily: [`get_directive`]
/// scans the theme stack top-down on every lookup, so a more specific
/// theme masks an ancestor's value regardless of registration order.
///
/// Overwriting an existing entry for the same theme and name is allowed
/// only when that entry is writable; read-only entries reject the write
/// with [`Error::DirectiveImmutable`].
///
/// [`get_directive`]: DirectiveStore::get_directive
#[derive(Debug, Clone, Default)]
pub struct DirectiveStore {
    directives: HashMap<String, HashMap<String, Directive>>,
}

impl DirectiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` for `name` on behalf of `theme`.
    pub fn set_directive(
        &mut self,
        theme: &str,
        name: &str,
        value: impl Into<DirectiveValue>,
        read_only: bool,
    ) -> Result<()> {
        let value = value.into();
        let by_theme = self.directives.entry(name.to_string()).or_default();

        match by_theme.get_mut(theme) {
            Some(existing) if existing.read_only => Err(Error::DirectiveImmutable {
                theme: theme.to_string(),
                name: name.to_string(),
            }),
            Some(existing) => {
                existing.value = value;
                Ok(())
            }
            None => {
                by_theme.insert(
                    theme.to_string(),
                    Directive {
                        name: name.to_string(),
                        value,
                        read_only,
                    },
                );
                Ok(())
            }
        }
    }

    /// Whether any theme registered a value for `name`.
    pub fn has_directive(&self, name: &str) -> bool {
        self.directives.get(name).is_some_and(|m| !m.is_empty())
    }

    /// Resolve `name` against `stack`, most specific theme first.
    pub fn get_directive(&self, name: &str, stack: &ThemeStack) -> Option<&DirectiveValue> {
        let by_theme = self.directives.get(name)?;
        stack
            .top_down()
            .find_map(|theme| by_theme.get(theme))
            .map(|directive| &directive.value)
    }

    /// The raw entry a single theme registered, without stack resolution.
    pub fn entry(&self, theme: &str, name: &str) -> Option<&Directive> {
        self.directives.get(name)?.get(theme)
    }

    /// All directive names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.directives.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of distinct directive names.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}
