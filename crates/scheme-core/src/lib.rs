//! Hierarchical override resolution for theme inheritance chains
//!
//! A theme names its parent in its config file; loading the active theme
//! loads the whole chain into a stack (ancestor first). On top of that
//! stack this crate resolves:
//!
//! - **Directives**: configuration values where the most specific theme wins
//! - **Files**: the first readable file scanning themes top-down
//! - **Templates**: candidate names tried in order, each across the whole stack
//! - **Options**: per-theme definition files merged bottom-up into a registry
//!
//! # Layout
//!
//! ```text
//! <theme_root>/
//!   base/
//!     config/scheme.ini      # directives, parent_theme = ...
//!     config/options.ini     # option definitions
//!     header.php
//!   child/
//!     config/scheme.ini      # parent_theme = base
//! ```
//!
//! # Example
//!
//! ```ignore
//! use scheme_core::{Scheme, SchemeConfig};
//!
//! let scheme = Scheme::load(SchemeConfig::new("/srv/themes", "child"))?;
//! let layout = scheme.directive("layout");
//! let header = scheme.locate_template(["header-home.php", "header.php"]);
//! ```

pub mod config;
pub mod directive;
pub mod document;
pub mod error;
pub mod loader;
pub mod locator;
pub mod options;
pub mod paths;
pub mod scheme;
pub mod stack;
pub mod template;

pub use config::SchemeConfig;
pub use directive::{Directive, DirectiveStore, DirectiveValue, Scalar};
pub use document::ConfigDocument;
pub use error::{Error, Result};
pub use loader::ConfigLoader;
pub use locator::FileLocator;
pub use options::{OptionDefinition, OptionsLoader, OptionsRegistry, OptionsTable};
pub use paths::ThemePaths;
pub use scheme::Scheme;
pub use stack::ThemeStack;
pub use template::{
    PartOutcome, TemplateFilter, TemplateHook, TemplateHost, TemplateLoader, TemplatePart,
    TemplateResolver,
};
