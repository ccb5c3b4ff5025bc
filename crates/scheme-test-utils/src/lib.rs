//! Shared test utilities for the theme scheme workspace.
//!
//! Provides [`TestThemeRoot`], a temporary theme root with helpers for
//! writing theme directories, config files and templates. It is a
//! dev-dependency only and never published.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default config directory name used by the helpers.
pub const CONFIG_DIR: &str = "config";

/// A temporary directory laid out as a theme root.
///
/// # Example
///
/// ```rust,no_run
/// use scheme_test_utils::TestThemeRoot;
///
/// let root = TestThemeRoot::new();
/// root.write_config("base", "layout = \"narrow\"\n");
/// root.write_config("child", "parent_theme = \"base\"\n");
/// root.write_file("base", "header.php", "<header/>");
/// ```
pub struct TestThemeRoot {
    temp_dir: TempDir,
}

impl Default for TestThemeRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl TestThemeRoot {
    /// Create an empty theme root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the theme root path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory of `theme` (not necessarily created).
    pub fn theme_dir(&self, theme: &str) -> PathBuf {
        self.root().join(theme)
    }

    /// Create an empty theme directory.
    pub fn create_theme(&self, theme: &str) -> PathBuf {
        let dir = self.theme_dir(theme);
        fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("Could not create theme {}: {e}", dir.display()));
        dir
    }

    /// Write `<theme>/<relative>` with `content`, creating parent directories.
    pub fn write_file(&self, theme: &str, relative: &str, content: &str) -> PathBuf {
        let path = self.theme_dir(theme).join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
        path
    }

    /// Write the theme's directive file (`config/scheme.ini`).
    pub fn write_config(&self, theme: &str, content: &str) -> PathBuf {
        self.write_file(theme, &format!("{CONFIG_DIR}/scheme.ini"), content)
    }

    /// Write the theme's options file (`config/options.ini`).
    pub fn write_options(&self, theme: &str, content: &str) -> PathBuf {
        self.write_file(theme, &format!("{CONFIG_DIR}/options.ini"), content)
    }

    /// Assert that `<theme>/<relative>` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, theme: &str, relative: &str) {
        let full_path = self.theme_dir(theme).join(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_file_creates_parents() {
        let root = TestThemeRoot::new();
        root.write_file("base", "parts/loop/page.php", "x");
        root.assert_file_exists("base", "parts/loop/page.php");
    }

    #[test]
    fn write_config_uses_config_dir() {
        let root = TestThemeRoot::new();
        let path = root.write_config("base", "");
        assert!(path.ends_with("base/config/scheme.ini"));
    }
}
