use std::ffi::OsString;
use std::io;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Always,
    Never,
    Auto,
}

/// Explain regular expressions and show what they match.
#[derive(Debug, Parser)]
#[command(name = "greg", version, about)]
pub struct Cli {
    /// Patterns to explain, each run against the same content
    pub patterns: Vec<String>,

    /// Read content from this file instead of standard input
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// Only print the pattern breakdown, not the highlighted content
    #[arg(long)]
    pub explain_only: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub patterns: Vec<String>,
    pub file: Option<PathBuf>,
    pub color: ColorWhen,
    pub explain_only: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            patterns: cli.patterns,
            file: cli.file,
            color: cli.color,
            explain_only: cli.explain_only,
        }
    }
}

pub fn parse_args<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(Config::from)
}

pub fn resolve_use_color(color: &ColorWhen) -> bool {
    match color {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => io::stdout().is_terminal(),
    }
}
