use std::path::Path;

use super::*;
use crate::diagnostic::RuleCode;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_from_str_invalid() {
    let err = "xml".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: xml");
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn explicit_color_modes_ignore_terminal() {
    assert!(ColorMode::Always.use_colors(false));
    assert!(!ColorMode::Never.use_colors(true));
    assert!(!ColorMode::Auto.use_colors(false));
}

#[test]
fn vec_reporter_collects_in_order() {
    let mut collected: Vec<Diagnostic> = Vec::new();
    let path = Path::new("a.py");
    collected.report(&Diagnostic::new(path, 1, RuleCode::S001, "Too long"));
    collected.report(&Diagnostic::new(path, 2, RuleCode::S005, "TODO found"));
    collected.finish().unwrap();
    let lines: Vec<usize> = collected.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 2]);
}

#[test]
fn boxed_reporter_forwards_calls() {
    let mut boxed: Box<dyn Reporter> = Box::new(JsonReporter::new(Vec::new()));
    boxed.begin_file(Path::new("a.py"));
    boxed.report(&Diagnostic::new(
        Path::new("a.py"),
        1,
        RuleCode::S003,
        "Unnecessary semicolon",
    ));
    boxed.finish().unwrap();
}
