//! Scheme CLI
//!
//! Inspects a theme root: the active theme's inheritance chain, resolved
//! directives, file and template lookups, and merged options.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use scheme_core::Scheme;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    let config = cli.session.scheme_config()?;
    tracing::debug!(root = %config.theme_root, theme = %config.active_theme, "Loading scheme");
    let scheme = Scheme::load(config)?;

    execute_command(&scheme, cli.command)
}

fn execute_command(scheme: &Scheme, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Stack { json } => commands::run_stack(scheme, json),
        Commands::Get { name, json } => commands::run_get(scheme, name.as_deref(), json),
        Commands::Locate { parts } => commands::run_locate(scheme, &parts),
        Commands::LocateConfig { parts } => commands::run_locate_config(scheme, &parts),
        Commands::Template { names, default } => {
            commands::run_template(scheme, &names, default.as_deref())
        }
        Commands::Dirs { kind } => commands::run_dirs(scheme, kind),
        Commands::Urls => commands::run_urls(scheme),
        Commands::Options { file, json } => commands::run_options(scheme, file.as_deref(), json),
    }
}
