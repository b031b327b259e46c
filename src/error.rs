use std::path::PathBuf;

use thiserror::Error;

use crate::syntax::SyntaxError;

#[derive(Error, Debug)]
pub enum StyleGuardError {
    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: SyntaxError,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl StyleGuardError {
    /// Short category name shown as the headline of a fatal error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::PathNotFound { .. } => "PathNotFound",
            Self::FileRead { .. } => "FileRead",
            Self::Parse { .. } => "SyntaxError",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Human-readable message including the underlying cause.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::PathNotFound { path } => format!("'{}' does not exist", path.display()),
            Self::FileRead { path, source } => {
                format!("cannot read '{}': {source}", path.display())
            }
            Self::Parse { path, source } => format!(
                "{}: Line {}: {}",
                path.display(),
                source.line,
                source.message
            ),
            Self::InvalidPattern { pattern, source } => format!("'{pattern}': {source}"),
            Self::Io(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Actionable hint for errors the user can fix directly.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::PathNotFound { .. } => Some("pass an existing Python file or directory"),
            Self::FileRead { .. } => Some("check file permissions and that the file is UTF-8"),
            Self::Parse { .. } => Some("fix the syntax error before checking style"),
            Self::InvalidPattern { .. } => Some("check the --exclude glob syntax"),
            Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StyleGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
