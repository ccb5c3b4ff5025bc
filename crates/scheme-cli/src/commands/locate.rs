//! File and template lookup commands

use scheme_core::Scheme;

use crate::error::{CliError, Result};

/// Run the locate command
pub fn run_locate(scheme: &Scheme, parts: &[String]) -> Result<()> {
    let located = scheme
        .locate_file(parts)
        .ok_or_else(|| not_found(parts))?;
    println!("{}", located);
    Ok(())
}

/// Run the locate-config command
pub fn run_locate_config(scheme: &Scheme, parts: &[String]) -> Result<()> {
    let located = scheme
        .locate_config_file(parts)
        .ok_or_else(|| not_found(parts))?;
    println!("{}", located);
    Ok(())
}

/// Run the template command
pub fn run_template(scheme: &Scheme, names: &[String], default: Option<&str>) -> Result<()> {
    let templates = scheme.templates();
    let located = match default {
        Some(default) => templates.locate_template_or(names, default),
        None => templates
            .locate_template(names)
            .map(|path| path.to_string())
            .ok_or_else(|| {
                CliError::user(format!("no template among {} in any theme", names.join(", ")))
            })?,
    };
    println!("{}", located);
    Ok(())
}

fn not_found(parts: &[String]) -> CliError {
    CliError::user(format!("'{}' not found in any theme", parts.join("/")))
}
