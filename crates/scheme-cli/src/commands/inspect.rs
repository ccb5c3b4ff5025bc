//! Commands that describe the loaded theme chain

use std::collections::BTreeMap;

use colored::Colorize;
use scheme_core::{DirectiveValue, Scheme};
use scheme_fs::SchemeDir;

use crate::cli::DirKind;
use crate::error::{CliError, Result};

/// Run the stack command
pub fn run_stack(scheme: &Scheme, json: bool) -> Result<()> {
    let themes = scheme.themes().to_vec(true);

    if json {
        println!("{}", serde_json::to_string_pretty(&themes)?);
        return Ok(());
    }

    let active = scheme.themes().top();
    for theme in &themes {
        if active == Some(*theme) {
            println!("{} {}", theme.green().bold(), "(active)".dimmed());
        } else {
            println!("{}", theme);
        }
    }
    Ok(())
}

/// Run the get command
pub fn run_get(scheme: &Scheme, name: Option<&str>, json: bool) -> Result<()> {
    match name {
        Some(name) => {
            let value = scheme.directive(name).ok_or_else(|| {
                CliError::user(format!("directive '{}' is not set by any theme", name))
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(value)?);
            } else {
                println!("{}", value);
            }
        }
        None => {
            let resolved: BTreeMap<&str, &DirectiveValue> = scheme
                .directives()
                .names()
                .into_iter()
                .filter_map(|name| scheme.directive(name).map(|value| (name, value)))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                for (name, value) in resolved {
                    println!("{} = {}", name.cyan(), value);
                }
            }
        }
    }
    Ok(())
}

/// Run the dirs command
pub fn run_dirs(scheme: &Scheme, kind: DirKind) -> Result<()> {
    let locator = scheme.locator();
    let dirs = match kind {
        DirKind::All => locator.theme_dirs(std::iter::empty::<&str>()),
        DirKind::Config => locator.theme_config_dirs(),
        DirKind::Docs => locator.theme_documentation_dirs(),
    };

    for dir in dirs {
        if dir.is_dir() {
            println!("{}", dir);
        } else {
            println!("{} {}", dir, "(missing)".dimmed());
        }
    }
    Ok(())
}

/// Run the urls command
pub fn run_urls(scheme: &Scheme) -> Result<()> {
    let paths = scheme.paths();
    println!("{:<8} {}", "theme".cyan(), paths.theme_dir_url(&scheme.config().active_theme));
    for kind in [SchemeDir::Css, SchemeDir::Js, SchemeDir::Images] {
        println!("{:<8} {}", kind.as_str().cyan(), paths.dir_url(kind, None));
    }
    Ok(())
}
