//! The theme stack: an inheritance chain from ancestor to active theme.

/// Ordered inheritance chain of theme identifiers.
///
/// Themes are appended ancestor-first, so insertion order is "bottom-up"
/// (most general first) and reverse order is "top-down" (most specific
/// first). The stack performs no de-duplication; the loader is responsible
/// for pushing each ancestor before its descendants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeStack {
    themes: Vec<String>,
}

impl ThemeStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a theme above everything already on the stack.
    pub fn push(&mut self, theme: impl Into<String>) {
        self.themes.push(theme.into());
    }

    /// Snapshot of the stack, ancestor-first or, with `reverse`, most-specific-first.
    pub fn to_vec(&self, reverse: bool) -> Vec<&str> {
        if reverse {
            self.top_down().collect()
        } else {
            self.bottom_up().collect()
        }
    }

    /// Iterate from the most specific theme to the most general.
    pub fn top_down(&self) -> impl Iterator<Item = &str> + '_ {
        self.themes.iter().rev().map(String::as_str)
    }

    /// Iterate from the most general theme to the most specific.
    pub fn bottom_up(&self) -> impl Iterator<Item = &str> + '_ {
        self.themes.iter().map(String::as_str)
    }

    /// The most specific theme, if any.
    pub fn top(&self) -> Option<&str> {
        self.themes.last().map(String::as_str)
    }

    pub fn contains(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
