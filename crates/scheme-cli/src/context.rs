//! Session configuration from flags, environment and config file.

use scheme_core::SchemeConfig;
use scheme_fs::NormalizedPath;

use crate::cli::SessionArgs;
use crate::error::{CliError, Result};

impl SessionArgs {
    /// Build the scheme configuration for this invocation.
    ///
    /// `--config` provides a base; `--root` and `--theme` (or their
    /// environment variables) are required when no config file is given.
    pub fn scheme_config(&self) -> Result<SchemeConfig> {
        let mut config = match &self.config {
            Some(file) => {
                tracing::debug!(file = %file.display(), "Loading session config");
                SchemeConfig::load(&NormalizedPath::new(file))?
            }
            None => {
                let root = self.root.as_ref().ok_or_else(|| {
                    CliError::user("no theme root given; pass --root or set SCHEME_ROOT")
                })?;
                let theme = self.theme.as_ref().ok_or_else(|| {
                    CliError::user("no active theme given; pass --theme or set SCHEME_THEME")
                })?;
                SchemeConfig::new(root.as_path(), theme.as_str())
            }
        };

        if let Some(root) = &self.root {
            config.theme_root = NormalizedPath::new(root);
        }
        if let Some(theme) = &self.theme {
            config.active_theme = theme.clone();
        }
        if let Some(url) = &self.url {
            config = config.with_root_url(url.as_str());
        }
        if let Some(dir) = &self.config_dir {
            config = config.with_config_dir(dir.as_str());
        }
        if let Some(stem) = &self.config_file {
            config = config.with_config_file(stem.as_str());
        }
        if let Some(stem) = &self.options_file {
            config = config.with_options_file(stem.as_str());
        }

        Ok(config)
    }
}
