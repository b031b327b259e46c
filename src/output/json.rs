use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::diagnostic::Diagnostic;
use crate::error::Result;

use super::Reporter;

/// Buffers the run and writes a single JSON document on `finish`.
pub struct JsonReporter<W: Write> {
    writer: W,
    files: usize,
    diagnostics: Vec<Diagnostic>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    diagnostics: usize,
}

impl<W: Write> JsonReporter<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            files: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn begin_file(&mut self, _path: &Path) {
        self.files += 1;
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }

    fn finish(&mut self) -> Result<()> {
        let output = JsonOutput {
            summary: Summary {
                files: self.files,
                diagnostics: self.diagnostics.len(),
            },
            diagnostics: &self.diagnostics,
        };
        let rendered = serde_json::to_string_pretty(&output)?;
        writeln!(self.writer, "{rendered}")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
