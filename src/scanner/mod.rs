mod filter;

pub use filter::{FileFilter, PythonFilter, is_python_source};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StyleGuardError};

/// Extension of the files checked when a directory is given.
pub const SOURCE_EXTENSION: &str = "py";

/// Produces the ordered list of files a run checks.
pub trait SourceEnumerator {
    /// Resolve `root` into the files to check.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist.
    fn enumerate(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Enumeration options gathered from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Globs matched against walked paths; matching files are skipped.
    pub exclude: Vec<String>,
}

/// Walks directories recursively, in path order.
///
/// A file passed directly as the root is always returned, whatever its
/// extension or the exclude patterns say.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl DirectoryScanner<PythonFilter> {
    /// Scanner for `options`.
    ///
    /// # Errors
    /// Returns an error if an exclude pattern is invalid.
    pub fn from_options(options: &ScanOptions) -> Result<Self> {
        Ok(Self::new(PythonFilter::new(&options.exclude)?))
    }
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_dir(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }
}

impl<F: FileFilter> SourceEnumerator for DirectoryScanner<F> {
    fn enumerate(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }
        if !root.is_dir() {
            return Err(StyleGuardError::PathNotFound {
                path: root.to_path_buf(),
            });
        }
        let mut files = self.scan_dir(root);
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
