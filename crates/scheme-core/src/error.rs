//! Error types for scheme-core

use std::path::PathBuf;

/// Result type for scheme-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a scheme.
///
/// Absent resources (missing config files, templates, directives) are not
/// errors; lookups return `None` for them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A theme configuration file has malformed syntax
    #[error("Failed to parse theme config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A theme configuration file parsed but has an unusable shape
    #[error("Invalid theme config at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// A theme's ancestor chain leads back to itself
    #[error("Cyclic theme inheritance: {chain}")]
    CyclicInheritance { chain: String },

    /// A read-only directive was set twice for the same theme
    #[error("Directive '{name}' is read-only for theme '{theme}'")]
    DirectiveImmutable { theme: String, name: String },

    /// Filesystem error from scheme-fs
    #[error(transparent)]
    Fs(scheme_fs::Error),
}

impl From<scheme_fs::Error> for Error {
    fn from(err: scheme_fs::Error) -> Self {
        match err {
            scheme_fs::Error::ConfigParse { path, message, .. } => {
                Self::ConfigParse { path, message }
            }
            other => Self::Fs(other),
        }
    }
}
