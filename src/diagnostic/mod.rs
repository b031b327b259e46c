//! Report unit and the fixed rule catalog.
//!
//! Every check in the crate produces [`Diagnostic`] values tagged with a
//! [`RuleCode`]. The catalog is closed: codes, their order and their message
//! templates are fixed at compile time.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Maximum allowed characters on a line before `S001` fires.
pub const MAX_LINE_LENGTH: usize = 79;

/// Indentation unit checked by `S002`.
pub const INDENT_WIDTH: usize = 4;

/// Longest blank run tolerated before `S006` fires.
pub const MAX_BLANK_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RuleCode {
    S001,
    S002,
    S003,
    S004,
    S005,
    S006,
    S007,
    S008,
    S009,
    S010,
    S011,
    S012,
}

impl RuleCode {
    pub const ALL: [Self; 12] = [
        Self::S001,
        Self::S002,
        Self::S003,
        Self::S004,
        Self::S005,
        Self::S006,
        Self::S007,
        Self::S008,
        Self::S009,
        Self::S010,
        Self::S011,
        Self::S012,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S001 => "S001",
            Self::S002 => "S002",
            Self::S003 => "S003",
            Self::S004 => "S004",
            Self::S005 => "S005",
            Self::S006 => "S006",
            Self::S007 => "S007",
            Self::S008 => "S008",
            Self::S009 => "S009",
            Self::S010 => "S010",
            Self::S011 => "S011",
            Self::S012 => "S012",
        }
    }

    /// One-line description of what the rule enforces.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::S001 => "Line longer than 79 characters",
            Self::S002 => "Indentation not a multiple of four spaces",
            Self::S003 => "Statement ends with an unnecessary semicolon",
            Self::S004 => "Fewer than two spaces before an inline comment",
            Self::S005 => "TODO inside a comment",
            Self::S006 => "More than two consecutive blank lines",
            Self::S007 => "More than one space after 'def' or 'class'",
            Self::S008 => "Class name not in CamelCase",
            Self::S009 => "Function name not in snake_case",
            Self::S010 => "Argument name not in snake_case",
            Self::S011 => "Variable name not in snake_case",
            Self::S012 => "Mutable default argument value",
        }
    }

    /// Whether the rule is evaluated on the parsed tree rather than raw lines.
    #[must_use]
    pub const fn is_tree_rule(self) -> bool {
        matches!(self, Self::S010 | Self::S011 | Self::S012)
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message templates, one constructor per rule.
pub mod messages {
    pub const TOO_LONG: &str = "Too long";
    pub const INDENTATION: &str = "Indentation is not a multiple of four";
    pub const SEMICOLON: &str = "Unnecessary semicolon";
    pub const INLINE_COMMENT: &str = "At least two spaces required before inline comments";
    pub const TODO: &str = "TODO found";
    pub const BLANK_LINES: &str = "More than two blank lines used before this line";
    pub const MUTABLE_DEFAULT: &str = "Default argument value is mutable";

    #[must_use]
    pub fn construct_spacing(keyword: &str) -> String {
        format!("Too many spaces after '{keyword}'")
    }

    #[must_use]
    pub fn class_name(name: &str) -> String {
        format!("Class name {name} should be written in CamelCase.")
    }

    #[must_use]
    pub fn function_name(name: &str) -> String {
        format!("Function name {name} should be written in snake_case.")
    }

    #[must_use]
    pub fn argument_name(name: &str) -> String {
        format!("Argument name {name} should be written in snake_case")
    }

    #[must_use]
    pub fn variable_name(name: &str) -> String {
        format!("Variable {name} should be written in snake_case")
    }
}

/// A single rule violation tied to a file and line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub line: usize,
    pub code: RuleCode,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(path: &Path, line: usize, code: RuleCode, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            line,
            code,
            message: message.into(),
        }
    }
}

/// Reference rendering: `<path>: Line <line_no>: <code> <message>`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Line {}: {} {}",
            self.path.display(),
            self.line,
            self.code,
            self.message
        )
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
