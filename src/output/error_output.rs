//! Fatal error rendering on stderr.
//!
//! Format: ✖ Error Type: message / help: Suggestion

use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi};
use crate::error::StyleGuardError;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Error output for stderr, colored per `mode`.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    /// Creates an error output formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Prints a fatal run error with its category and suggestion.
    pub fn print_fatal(&self, error: &StyleGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_fatal(&mut stderr, error);
    }

    /// Writes a fatal run error to `w`.
    ///
    /// Format: `✖ {error_type}: {message}`, then `  help: {suggestion}` when
    /// the error carries one.
    pub fn write_fatal<W: Write>(&self, w: &mut W, error: &StyleGuardError) {
        let error_type = error.error_type();
        let message = error.message();
        // Write failures on stderr have nowhere left to go.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {suggestion}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {suggestion}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
