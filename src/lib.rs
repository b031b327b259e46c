pub mod cli;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod syntax;

pub use diagnostic::{Diagnostic, RuleCode};
pub use engine::{StyleChecker, run, run_parallel};
pub use error::{Result, StyleGuardError};

/// The run completed; diagnostics do not affect the exit status.
pub const EXIT_SUCCESS: i32 = 0;
/// Missing path, unreadable file, syntax error or invalid option.
pub const EXIT_FATAL: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
