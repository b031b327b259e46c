use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};
use crate::scanner::ScanOptions;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Style checker for Python source files")]
#[command(long_about = "Checks Python files against a fixed catalog of style rules \
    (S001-S012) and prints one line per issue.\n\n\
    Exit codes:\n  \
    0 - Run completed (issues found or not)\n  \
    2 - Missing path, unreadable file, syntax error or bad option")]
pub struct Cli {
    /// Print each checked file and a closing summary on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Print the rule catalog and exit
    #[arg(long)]
    pub list_rules: bool,

    #[command(flatten)]
    pub check: CheckArgs,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Python file or directory to check
    #[arg(required_unless_present = "list_rules")]
    pub path: Option<PathBuf>,

    /// Exclude patterns for directory scans (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl CheckArgs {
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            exclude: self.exclude.clone(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
