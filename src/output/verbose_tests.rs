use std::path::Path;

use super::*;
use crate::diagnostic::RuleCode;

#[test]
fn narrates_files_and_summary() {
    let mut reporter = VerboseReporter::new(Vec::<Diagnostic>::new(), Vec::new());
    reporter.begin_file(Path::new("a.py"));
    reporter.report(&Diagnostic::new(Path::new("a.py"), 1, RuleCode::S001, "Too long"));
    reporter.begin_file(Path::new("b.py"));
    reporter.finish().unwrap();

    let (inner, log) = reporter.into_parts();
    assert_eq!(inner.len(), 1);
    assert_eq!(
        String::from_utf8(log).unwrap(),
        "Checking a.py\nChecking b.py\n2 files checked, 1 issues found\n"
    );
}

#[test]
fn diagnostics_pass_through_untouched() {
    let diagnostic = Diagnostic::new(Path::new("x.py"), 9, RuleCode::S009, "msg");
    let mut reporter = VerboseReporter::new(Vec::<Diagnostic>::new(), Vec::new());
    reporter.report(&diagnostic);
    let (inner, _) = reporter.into_parts();
    assert_eq!(inner, vec![diagnostic]);
}
