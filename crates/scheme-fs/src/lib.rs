//! Filesystem layer for the theme scheme resolver
//!
//! Provides normalized path handling, well-known theme directory names,
//! readability probes and format-agnostic config loading (INI, TOML, JSON
//! and YAML).

pub mod config;
pub mod constants;
pub mod error;
pub mod ini_value;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use constants::SchemeDir;
pub use error::{Error, Result};
pub use path::{NormalizedPath, split_segments};
