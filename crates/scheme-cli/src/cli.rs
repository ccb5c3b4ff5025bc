//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Scheme - inspect theme inheritance chains
#[derive(Parser, Debug)]
#[command(name = "scheme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub session: SessionArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the themes are and which one is active.
///
/// Flags override values read from `--config`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionArgs {
    /// Session config file (TOML, JSON or YAML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory containing one directory per theme
    #[arg(long, global = true, env = "SCHEME_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Active theme
    #[arg(long, global = true, env = "SCHEME_THEME")]
    pub theme: Option<String>,

    /// URL under which the theme root is served
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Config subdirectory inside each theme
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Stem of the directive file
    #[arg(long, global = true)]
    pub config_file: Option<String>,

    /// Stem of the options file
    #[arg(long, global = true)]
    pub options_file: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the theme stack, most specific first
    Stack {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve a directive through the theme stack
    ///
    /// Without a name, every directive is resolved.
    Get {
        /// Directive name
        name: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Find a file in the most specific theme that has it
    ///
    /// Examples:
    ///   scheme locate assets/css style.css
    ///   scheme locate functions.php
    Locate {
        /// Path parts, joined with '/'
        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Find a file inside the themes' config directories
    LocateConfig {
        /// Path parts, joined with '/'
        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Find the first candidate template that exists in any theme
    Template {
        /// Candidate template names, most preferred first
        #[arg(required = true)]
        names: Vec<String>,

        /// Print this instead of failing when nothing matches
        #[arg(long)]
        default: Option<String>,
    },

    /// List per-theme directories, most specific first
    Dirs {
        /// Which directory to list for each theme
        #[arg(short, long, value_enum, default_value_t = DirKind::All)]
        kind: DirKind,
    },

    /// Show the URLs of the active theme's asset directories
    Urls,

    /// Merge every theme's options file and show the result
    Options {
        /// Options file stem (defaults to the configured one)
        #[arg(long)]
        file: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    /// The theme directories themselves
    All,
    /// Config directories
    Config,
    /// Documentation directories
    Docs,
}
