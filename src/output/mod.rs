mod error_output;
mod json;
mod text;
mod verbose;

pub use error_output::ErrorOutput;
pub use json::JsonReporter;
pub use text::TextReporter;
pub use verbose::VerboseReporter;

use std::io::Write;
use std::path::Path;

use crate::diagnostic::Diagnostic;
use crate::error::Result;

/// Sink for diagnostics as a run produces them.
pub trait Reporter {
    /// Called once per file, before any of its diagnostics.
    fn begin_file(&mut self, _path: &Path) {}

    fn report(&mut self, diagnostic: &Diagnostic);

    /// Flush whatever the reporter buffered.
    ///
    /// # Errors
    /// Returns an error if writing or serializing the output fails.
    fn finish(&mut self) -> Result<()>;
}

/// Collects diagnostics in memory.
impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn begin_file(&mut self, path: &Path) {
        (**self).begin_file(path);
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve the mode against a concrete stream.
    #[must_use]
    pub fn use_colors(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Per <https://no-color.org>, presence of the variable disables color.
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal,
        }
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Build the reporter for `format` writing to `writer`.
#[must_use]
pub fn reporter_for<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    use_colors: bool,
) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(writer, use_colors)),
        OutputFormat::Json => Box::new(JsonReporter::new(writer)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
