use std::path::PathBuf;

use super::*;
use crate::syntax::SyntaxError;

fn make_output(use_colors: bool) -> ErrorOutput {
    ErrorOutput::with_colors(use_colors)
}

fn render_fatal(use_colors: bool, error: &StyleGuardError) -> String {
    let mut buf = Vec::new();
    make_output(use_colors).write_fatal(&mut buf, error);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let error = StyleGuardError::Io(std::io::Error::other("broken pipe"));
    assert_eq!(render_fatal(false, &error), "✖ IO: broken pipe\n");
}

#[test]
fn error_without_colors_full() {
    let error = StyleGuardError::PathNotFound {
        path: PathBuf::from("src/app.py"),
    };
    let result = render_fatal(false, &error);
    assert!(result.starts_with("✖ PathNotFound: 'src/app.py' does not exist\n  help: "));
    assert_eq!(result.lines().count(), 2);
}

#[test]
fn error_with_colors_contains_ansi() {
    let error = StyleGuardError::PathNotFound {
        path: PathBuf::from("gone"),
    };
    let result = render_fatal(true, &error);
    assert!(result.contains("\x1b["));
    assert!(result.contains("✖ PathNotFound:"));
    assert!(result.contains("'gone' does not exist"));
    assert!(result.contains("help:"));
}

// ===== fatal errors

#[test]
fn fatal_syntax_error_names_file_and_line() {
    let error = StyleGuardError::Parse {
        path: PathBuf::from("pkg/broken.py"),
        source: SyntaxError::new(3, "invalid syntax"),
    };
    let result = render_fatal(false, &error);
    assert!(result.starts_with("✖ SyntaxError: pkg/broken.py: Line 3: invalid syntax\n"));
    assert!(result.contains("  help: fix the syntax error before checking style\n"));
}

#[test]
fn fatal_missing_path() {
    let error = StyleGuardError::PathNotFound {
        path: PathBuf::from("nowhere"),
    };
    let result = render_fatal(false, &error);
    assert!(result.starts_with("✖ PathNotFound: 'nowhere' does not exist\n"));
}

#[test]
fn fatal_without_suggestion_has_no_help_line() {
    let error = StyleGuardError::Io(std::io::Error::other("disk full"));
    let result = render_fatal(false, &error);
    assert_eq!(result, "✖ IO: disk full\n");
}

#[test]
fn never_mode_disables_colors() {
    let out = ErrorOutput::new(ColorMode::Never);
    let mut buf = Vec::new();
    out.write_fatal(&mut buf, &StyleGuardError::Io(std::io::Error::other("plain")));
    assert!(!String::from_utf8(buf).unwrap().contains('\x1b'));
}

#[test]
fn always_mode_forces_colors() {
    let out = ErrorOutput::new(ColorMode::Always);
    let mut buf = Vec::new();
    out.write_fatal(&mut buf, &StyleGuardError::Io(std::io::Error::other("colored")));
    assert!(String::from_utf8(buf).unwrap().contains('\x1b'));
}
