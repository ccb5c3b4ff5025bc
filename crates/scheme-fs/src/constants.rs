//! Well-known directory names inside a theme.

use std::path::Path;

/// Extension of directive and options files.
pub const CONFIG_EXTENSION: &str = "ini";

/// Standard theme subdirectories exposed through path and URL accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeDir {
    /// The `assets` directory (parent of css, js and images)
    Assets,
    /// The `css` directory under assets
    Css,
    /// The `js` directory under assets
    Js,
    /// The `images` directory under assets
    Images,
    /// The `docs` directory under the config directory
    Docs,
}

impl SchemeDir {
    /// Get the directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assets => "assets",
            Self::Css => "css",
            Self::Js => "js",
            Self::Images => "images",
            Self::Docs => "docs",
        }
    }

    /// Whether this directory lives under `assets/`.
    pub fn is_asset(&self) -> bool {
        matches!(self, Self::Css | Self::Js | Self::Images)
    }
}

impl AsRef<Path> for SchemeDir {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for SchemeDir {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for SchemeDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
