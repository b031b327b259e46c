#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
#[macro_export]
macro_rules! style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A module touching every rule once, with the expected text output when
/// checked as `sample.py` from its directory.
pub const EVERY_RULE_SOURCE: &str = r#"import os
x = 1;
y = 2 # trailing
if x:
   z = 3
# todo: tidy up



def  spaced():
    pass
class lower_case:
    pass
def CamelFunc(badArg, items=[]):
    localVar = os.sep
message = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
"#;

pub const EVERY_RULE_EXPECTED: &str = "\
sample.py: Line 2: S003 Unnecessary semicolon
sample.py: Line 3: S004 At least two spaces required before inline comments
sample.py: Line 5: S002 Indentation is not a multiple of four
sample.py: Line 6: S005 TODO found
sample.py: Line 10: S007 Too many spaces after 'def'
sample.py: Line 10: S006 More than two blank lines used before this line
sample.py: Line 12: S008 Class name lower_case should be written in CamelCase.
sample.py: Line 14: S009 Function name CamelFunc should be written in snake_case.
sample.py: Line 16: S001 Too long
sample.py: Line 14: S010 Argument name badArg should be written in snake_case
sample.py: Line 15: S011 Variable localVar should be written in snake_case
sample.py: Line 14: S012 Default argument value is mutable
";
