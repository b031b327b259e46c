use std::path::Path;

use crate::diagnostic::{Diagnostic, MAX_BLANK_LINES, RuleCode, messages};

/// Running count of consecutive whitespace-only lines (`S006`).
///
/// Threaded through a file as a fold: every step consumes the previous
/// accumulator and returns the next one. A fresh file starts from
/// [`BlankRun::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankRun(usize);

impl BlankRun {
    #[must_use]
    pub const fn count(self) -> usize {
        self.0
    }

    /// Advance over one line.
    ///
    /// A non-blank line ending a run longer than two lines yields the
    /// diagnostic, reported at that non-blank line. The count resets on every
    /// non-blank line.
    #[must_use]
    pub fn step(self, path: &Path, line: &str, line_no: usize) -> (Self, Option<Diagnostic>) {
        if line.trim().is_empty() {
            return (Self(self.0 + 1), None);
        }
        let fired = (self.0 > MAX_BLANK_LINES)
            .then(|| Diagnostic::new(path, line_no, RuleCode::S006, messages::BLANK_LINES));
        (Self::default(), fired)
    }
}

#[cfg(test)]
#[path = "blank_tests.rs"]
mod tests;
