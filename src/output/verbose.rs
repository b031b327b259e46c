use std::io::Write;
use std::path::Path;

use crate::diagnostic::Diagnostic;
use crate::error::Result;

use super::Reporter;

/// Wraps another reporter and narrates progress on a side channel.
///
/// Writes `Checking <path>` per file and a closing
/// `N files checked, M issues found` line. Diagnostics pass through unchanged.
pub struct VerboseReporter<R, W: Write> {
    inner: R,
    log: W,
    files: usize,
    issues: usize,
}

impl<R: Reporter> VerboseReporter<R, std::io::Stderr> {
    #[must_use]
    pub fn stderr(inner: R) -> Self {
        Self::new(inner, std::io::stderr())
    }
}

impl<R: Reporter, W: Write> VerboseReporter<R, W> {
    #[must_use]
    pub const fn new(inner: R, log: W) -> Self {
        Self {
            inner,
            log,
            files: 0,
            issues: 0,
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.inner, self.log)
    }
}

impl<R: Reporter, W: Write> Reporter for VerboseReporter<R, W> {
    fn begin_file(&mut self, path: &Path) {
        self.files += 1;
        let _ = writeln!(self.log, "Checking {}", path.display());
        self.inner.begin_file(path);
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        self.issues += 1;
        self.inner.report(diagnostic);
    }

    fn finish(&mut self) -> Result<()> {
        self.inner.finish()?;
        writeln!(
            self.log,
            "{} files checked, {} issues found",
            self.files, self.issues
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
