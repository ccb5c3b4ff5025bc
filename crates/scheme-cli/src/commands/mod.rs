//! Command implementations for scheme-cli

pub mod inspect;
pub mod locate;
pub mod options;

pub use inspect::{run_dirs, run_get, run_stack, run_urls};
pub use locate::{run_locate, run_locate_config, run_template};
pub use options::run_options;
