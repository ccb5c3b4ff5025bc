//! Merged theme options

use colored::Colorize;
use scheme_core::{OptionDefinition, OptionsTable, Scheme};

use crate::error::Result;

/// Run the options command
pub fn run_options(scheme: &Scheme, file: Option<&str>, json: bool) -> Result<()> {
    let mut table = OptionsTable::new();
    let loaded = scheme.load_options(&mut table, file)?;
    tracing::debug!(loaded, options = table.len(), "Options merged");

    if json {
        let options: Vec<&OptionDefinition> = table.iter().collect();
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    if table.is_empty() {
        println!("{}", "No options defined.".dimmed());
        return Ok(());
    }

    for option in table.iter() {
        println!("{} {}", option.name.green().bold(), format!("({})", option.theme).dimmed());
        for (field, value) in &option.fields {
            println!("  {} = {}", field.cyan(), value);
        }
    }
    Ok(())
}
