use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use super::SOURCE_EXTENSION;
use crate::error::{Result, StyleGuardError};

/// Decides which files found while walking a directory get checked.
pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps Python sources that no `--exclude` glob matches.
pub struct PythonFilter {
    excluded: GlobSet,
}

impl PythonFilter {
    /// # Errors
    /// Returns [`StyleGuardError::InvalidPattern`] naming the first glob that
    /// does not compile.
    pub fn new(exclude: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude {
            builder.add(Glob::new(pattern).map_err(|source| {
                StyleGuardError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })?);
        }
        // Every glob compiled on its own, so a set failure is blamed on all of them.
        let excluded = builder
            .build()
            .map_err(|source| StyleGuardError::InvalidPattern {
                pattern: exclude.join(", "),
                source,
            })?;
        Ok(Self { excluded })
    }
}

/// `true` for `*.py` paths. A bare `.py` is a hidden file with no extension.
#[must_use]
pub fn is_python_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

impl FileFilter for PythonFilter {
    fn should_include(&self, path: &Path) -> bool {
        is_python_source(path) && !self.excluded.is_match(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
