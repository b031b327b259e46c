//! Per-file orchestration and whole-run drivers.
//!
//! A file is checked in two phases: the line phase streams S001..S009 and
//! the blank-run fold over every physical line, then the tree phase parses
//! the whole text and runs S010..S012. Diagnostics reach the reporter in
//! exactly that order.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use rayon::prelude::*;

use crate::diagnostic::Diagnostic;
use crate::error::{Result, StyleGuardError};
use crate::output::{ColorMode, ErrorOutput, Reporter};
use crate::rules::{BlankRun, LineRules, tree};
use crate::scanner::SourceEnumerator;
use crate::syntax::{self, SyntaxTree};
use crate::{EXIT_FATAL, EXIT_SUCCESS};

/// Diagnostics of one file, and the error that stopped it if any.
type FileBatch = (Vec<Diagnostic>, Option<StyleGuardError>);

/// Runs the rule catalog over files, holding the compiled line rules.
#[derive(Default)]
pub struct StyleChecker {
    line_rules: LineRules,
    errors: ErrorOutput,
}

impl StyleChecker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line phase: S001..S009 per line, then the blank-run step.
    pub fn check_lines<'l, R>(
        &self,
        path: &Path,
        lines: impl IntoIterator<Item = &'l str>,
        reporter: &mut R,
    ) where
        R: Reporter + ?Sized,
    {
        let mut blank_run = BlankRun::default();
        for (index, line) in lines.into_iter().enumerate() {
            let line_no = index + 1;
            for diagnostic in self.line_rules.check(path, line, line_no) {
                reporter.report(&diagnostic);
            }
            let (next, fired) = blank_run.step(path, line, line_no);
            blank_run = next;
            if let Some(diagnostic) = fired {
                reporter.report(&diagnostic);
            }
        }
    }

    /// Tree phase: S010, then S011, then S012.
    pub fn check_tree<R>(path: &Path, tree: &SyntaxTree, reporter: &mut R)
    where
        R: Reporter + ?Sized,
    {
        for diagnostic in tree::check(path, tree) {
            reporter.report(&diagnostic);
        }
    }

    /// Both phases over in-memory source text.
    ///
    /// Line-phase diagnostics are already reported when a syntax error is
    /// returned.
    ///
    /// # Errors
    /// Returns [`StyleGuardError::Parse`] if the text is not valid Python.
    pub fn check_source<R>(&self, path: &Path, text: &str, reporter: &mut R) -> Result<()>
    where
        R: Reporter + ?Sized,
    {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let text = normalize_newlines(text);
        self.check_lines(path, text.lines(), reporter);
        let tree = syntax::parse(&text).map_err(|source| StyleGuardError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::check_tree(path, &tree, reporter);
        Ok(())
    }

    /// Read `path` as UTF-8 and check it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded, or does not
    /// parse.
    pub fn check_file<R>(&self, path: &Path, reporter: &mut R) -> Result<()>
    where
        R: Reporter + ?Sized,
    {
        let text = fs::read_to_string(path).map_err(|source| StyleGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.check_source(path, &text, reporter)
    }

    /// Check one file into a standalone batch.
    fn check_file_batch(&self, path: &Path) -> FileBatch {
        let mut batch = Vec::new();
        let error = self.check_file(path, &mut batch).err();
        (batch, error)
    }

    /// Render fatal errors with `mode` instead of auto-detecting.
    #[must_use]
    pub fn with_error_colors(mut self, mode: ColorMode) -> Self {
        self.errors = ErrorOutput::new(mode);
        self
    }

    /// See [`run`].
    pub fn run<E, R>(&self, path: &Path, enumerator: &E, reporter: &mut R) -> i32
    where
        E: SourceEnumerator + ?Sized,
        R: Reporter + ?Sized,
    {
        let outcome = enumerator.enumerate(path).and_then(|files| {
            for file in &files {
                reporter.begin_file(file);
                self.check_file(file, reporter)?;
            }
            Ok(())
        });
        self.conclude(outcome, reporter)
    }

    /// See [`run_parallel`].
    pub fn run_parallel<E, R>(&self, path: &Path, enumerator: &E, reporter: &mut R) -> i32
    where
        E: SourceEnumerator + ?Sized,
        R: Reporter + ?Sized,
    {
        let outcome = enumerator
            .enumerate(path)
            .and_then(|files| self.check_files_parallel(&files, reporter));
        self.conclude(outcome, reporter)
    }

    /// Files are checked on the rayon pool while this thread reports each
    /// batch once every earlier file has been reported. Files after the
    /// first failing one are not checked.
    fn check_files_parallel<R>(&self, files: &[PathBuf], reporter: &mut R) -> Result<()>
    where
        R: Reporter + ?Sized,
    {
        let (sender, batches) = mpsc::channel();
        let first_failure = AtomicUsize::new(usize::MAX);
        thread::scope(|scope| {
            scope.spawn(|| {
                files
                    .par_iter()
                    .enumerate()
                    .for_each_with(sender, |sender, (index, file)| {
                        if index > first_failure.load(Ordering::Relaxed) {
                            return;
                        }
                        let batch = self.check_file_batch(file);
                        if batch.1.is_some() {
                            first_failure.fetch_min(index, Ordering::Relaxed);
                        }
                        // Replay hangs up after the first failure.
                        let _ = sender.send((index, batch));
                    });
            });
            Self::replay_in_order(files, batches, reporter)
        })
    }

    fn replay_in_order<R>(
        files: &[PathBuf],
        batches: Receiver<(usize, FileBatch)>,
        reporter: &mut R,
    ) -> Result<()>
    where
        R: Reporter + ?Sized,
    {
        let mut pending = BTreeMap::new();
        let mut next = 0;
        for (index, batch) in batches {
            pending.insert(index, batch);
            while let Some((diagnostics, error)) = pending.remove(&next) {
                reporter.begin_file(&files[next]);
                for diagnostic in &diagnostics {
                    reporter.report(diagnostic);
                }
                if let Some(error) = error {
                    return Err(error);
                }
                next += 1;
            }
        }
        Ok(())
    }

    fn conclude<R>(&self, outcome: Result<()>, reporter: &mut R) -> i32
    where
        R: Reporter + ?Sized,
    {
        // Whatever was reported before a fatal error still gets flushed.
        let finished = reporter.finish();
        match outcome.and(finished) {
            Ok(()) => EXIT_SUCCESS,
            Err(error) => {
                self.errors.print_fatal(&error);
                EXIT_FATAL
            }
        }
    }
}

/// Check every file under `path` in enumeration order.
///
/// Fatal errors are rendered on stderr and stop the run; diagnostics of files
/// already checked stay reported.
pub fn run<E, R>(path: &Path, enumerator: &E, reporter: &mut R) -> i32
where
    E: SourceEnumerator + ?Sized,
    R: Reporter + ?Sized,
{
    StyleChecker::new().run(path, enumerator, reporter)
}

/// Same contract and output as [`run`], with files checked on the rayon pool.
pub fn run_parallel<E, R>(path: &Path, enumerator: &E, reporter: &mut R) -> i32
where
    E: SourceEnumerator + ?Sized,
    R: Reporter + ?Sized,
{
    StyleChecker::new().run_parallel(path, enumerator, reporter)
}

/// `\r\n` and a lone `\r` both end a line, as with Python's universal
/// newlines.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
