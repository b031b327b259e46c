use std::path::Path;

use regex::Regex;

use super::naming::{is_camel_case, is_snake_case};
use crate::diagnostic::{Diagnostic, INDENT_WIDTH, MAX_LINE_LENGTH, RuleCode, messages};

/// Block-introducing keyword checked by `S007`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Def,
    Class,
}

impl Construct {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Def => "def",
            Self::Class => "class",
        }
    }
}

/// `S001`: more than 79 characters, terminator excluded.
#[must_use]
pub fn is_too_long(line: &str) -> bool {
    line.chars().count() > MAX_LINE_LENGTH
}

/// `S002`: leading spaces are not a multiple of four.
#[must_use]
pub fn has_bad_indentation(line: &str) -> bool {
    line.chars().take_while(|&c| c == ' ').count() % INDENT_WIDTH != 0
}

/// `S003`: the code before the first `#` ends with a semicolon.
#[must_use]
pub fn has_trailing_semicolon(line: &str) -> bool {
    code_portion(line).trim_end().ends_with(';')
}

/// `S004`: an inline `#` is not preceded by two whitespace characters.
#[must_use]
pub fn lacks_inline_comment_spacing(line: &str) -> bool {
    let Some(hash) = line.find('#') else {
        return false;
    };
    if hash == 0 {
        return false;
    }
    let mut before = line[..hash].chars().rev();
    !matches!(
        (before.next(), before.next()),
        (Some(a), Some(b)) if a.is_whitespace() && b.is_whitespace()
    )
}

/// `S005`: the comment text contains `todo` in any casing.
#[must_use]
pub fn has_todo(line: &str) -> bool {
    line.find('#')
        .is_some_and(|hash| line[hash + 1..].to_ascii_lowercase().contains("todo"))
}

fn code_portion(line: &str) -> &str {
    line.split('#').next().unwrap_or(line)
}

/// The eight stateless per-line checks, run in catalog order.
///
/// Regex-backed predicates are compiled once and shared by every line of
/// every file.
pub struct LineRules {
    def_keyword: Regex,
    class_keyword: Regex,
    def_spacing: Regex,
    class_spacing: Regex,
    class_shape: Regex,
    def_shape: Regex,
    name_before_delimiter: Regex,
    def_name: Regex,
    class_name: Regex,
}

impl Default for LineRules {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRules {
    #[must_use]
    pub fn new() -> Self {
        Self {
            def_keyword: Regex::new(r"^\s*(?:async\s+)?def\b").expect("Invalid regex"),
            class_keyword: Regex::new(r"^\s*class\b").expect("Invalid regex"),
            def_spacing: Regex::new(r"^\s*(?:async\s+)?def \w").expect("Invalid regex"),
            class_spacing: Regex::new(r"^\s*class \w").expect("Invalid regex"),
            class_shape: Regex::new(r"^\s*class\s+[A-Z][A-Za-z0-9]*(?:\(.*\))?:")
                .expect("Invalid regex"),
            def_shape: Regex::new(r"^\s*(?:async\s+)?def\s+[a-z_][a-z0-9_]*\(")
                .expect("Invalid regex"),
            name_before_delimiter: Regex::new(r"(\w+)[(:]").expect("Invalid regex"),
            def_name: Regex::new(r"\bdef\s+(\w+)").expect("Invalid regex"),
            class_name: Regex::new(r"\bclass\s+(\w+)").expect("Invalid regex"),
        }
    }

    /// Run S001..S009 on one line, in execution order.
    #[must_use]
    pub fn check(&self, path: &Path, line: &str, line_no: usize) -> Vec<Diagnostic> {
        let mut found = Vec::new();
        let mut emit = |code, message: String| {
            found.push(Diagnostic::new(path, line_no, code, message));
        };

        if is_too_long(line) {
            emit(RuleCode::S001, messages::TOO_LONG.to_string());
        }
        if has_bad_indentation(line) {
            emit(RuleCode::S002, messages::INDENTATION.to_string());
        }
        if has_trailing_semicolon(line) {
            emit(RuleCode::S003, messages::SEMICOLON.to_string());
        }
        if lacks_inline_comment_spacing(line) {
            emit(RuleCode::S004, messages::INLINE_COMMENT.to_string());
        }
        if has_todo(line) {
            emit(RuleCode::S005, messages::TODO.to_string());
        }
        if let Some(construct) = self.construct_spacing_violation(line) {
            emit(
                RuleCode::S007,
                messages::construct_spacing(construct.keyword()),
            );
        }
        if let Some(name) = self.class_name_violation(line) {
            emit(RuleCode::S008, messages::class_name(name));
        }
        if let Some(name) = self.function_name_violation(line) {
            emit(RuleCode::S009, messages::function_name(name));
        }

        found
    }

    #[must_use]
    pub fn is_def_line(&self, line: &str) -> bool {
        self.def_keyword.is_match(line)
    }

    #[must_use]
    pub fn is_class_line(&self, line: &str) -> bool {
        self.class_keyword.is_match(line)
    }

    /// `S007`: `def` (or, failing that, `class`) not followed by exactly one
    /// space and an identifier character.
    #[must_use]
    pub fn construct_spacing_violation(&self, line: &str) -> Option<Construct> {
        if self.is_def_line(line) {
            return (!self.def_spacing.is_match(line)).then_some(Construct::Def);
        }
        if self.is_class_line(line) {
            return (!self.class_spacing.is_match(line)).then_some(Construct::Class);
        }
        None
    }

    /// `S008`: returns the offending class name when the header is not
    /// `class <CamelCase>[(<bases>)]:`.
    #[must_use]
    pub fn class_name_violation<'l>(&self, line: &'l str) -> Option<&'l str> {
        if !self.is_class_line(line) || self.class_shape.is_match(line) {
            return None;
        }
        let name = self.offending_name(line, &self.class_name)?;
        // A CamelCase name with a malformed header is a spacing problem, not a
        // naming one.
        (!is_camel_case(name)).then_some(name)
    }

    /// `S009`: returns the offending function name when the header is not
    /// `def <snake_case>(`.
    #[must_use]
    pub fn function_name_violation<'l>(&self, line: &'l str) -> Option<&'l str> {
        if !self.is_def_line(line) || self.def_shape.is_match(line) {
            return None;
        }
        let name = self.offending_name(line, &self.def_name)?;
        (!is_snake_case(name)).then_some(name)
    }

    fn offending_name<'l>(&self, line: &'l str, after_keyword: &Regex) -> Option<&'l str> {
        self.name_before_delimiter
            .captures(line)
            .or_else(|| after_keyword.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
