use std::io::{self, Write};

use crate::diagnostic::Diagnostic;
use crate::error::Result;

use super::{Reporter, ansi};

/// Streams one `<path>: Line <n>: <code> <message>` line per diagnostic.
pub struct TextReporter<W: Write> {
    writer: W,
    use_colors: bool,
    write_error: Option<io::Error>,
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub const fn new(writer: W, use_colors: bool) -> Self {
        Self {
            writer,
            use_colors,
            write_error: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn format_line(&self, diagnostic: &Diagnostic) -> String {
        if !self.use_colors {
            return diagnostic.to_string();
        }
        let color = if diagnostic.code.is_tree_rule() {
            ansi::CYAN
        } else {
            ansi::YELLOW
        };
        format!(
            "{}: Line {}: {color}{}{} {}",
            diagnostic.path.display(),
            diagnostic.line,
            diagnostic.code,
            ansi::RESET,
            diagnostic.message
        )
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        // Keep the first failure; `finish` surfaces it.
        if self.write_error.is_some() {
            return;
        }
        let line = self.format_line(diagnostic);
        if let Err(e) = writeln!(self.writer, "{line}") {
            self.write_error = Some(e);
        }
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(e) = self.write_error.take() {
            return Err(e.into());
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
