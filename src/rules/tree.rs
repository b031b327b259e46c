use std::path::Path;

use super::naming::is_snake_case;
use crate::diagnostic::{Diagnostic, RuleCode, messages};
use crate::syntax::{AssignTarget, SyntaxTree};

/// Run S010, S011 and S012 in that order, each over its own traversal.
#[must_use]
pub fn check(path: &Path, tree: &SyntaxTree) -> Vec<Diagnostic> {
    let mut found = check_parameter_names(path, tree);
    found.extend(check_assignment_targets(path, tree));
    found.extend(check_mutable_defaults(path, tree));
    found
}

/// `S010`: every named parameter of every function must be `snake_case`.
#[must_use]
pub fn check_parameter_names(path: &Path, tree: &SyntaxTree) -> Vec<Diagnostic> {
    tree.functions()
        .flat_map(|function| {
            function
                .parameters
                .iter()
                .filter(|parameter| !is_snake_case(&parameter.name))
                .map(|parameter| {
                    Diagnostic::new(
                        path,
                        function.line,
                        RuleCode::S010,
                        messages::argument_name(&parameter.name),
                    )
                })
        })
        .collect()
}

/// `S011`: plain and attribute assignment targets must be `snake_case`.
#[must_use]
pub fn check_assignment_targets(path: &Path, tree: &SyntaxTree) -> Vec<Diagnostic> {
    let mut found = Vec::new();
    for assignment in tree.assignments() {
        for target in &assignment.targets {
            let name = match target {
                AssignTarget::SimpleName(name) | AssignTarget::AttributeAccess(name) => name,
                // Unpacking, subscripts and starred targets carry no single name.
                AssignTarget::Other => continue,
            };
            if !is_snake_case(name) {
                found.push(Diagnostic::new(
                    path,
                    assignment.line,
                    RuleCode::S011,
                    messages::variable_name(name),
                ));
            }
        }
    }
    found
}

/// `S012`: at most one diagnostic per function with a list, dict or set
/// literal default.
#[must_use]
pub fn check_mutable_defaults(path: &Path, tree: &SyntaxTree) -> Vec<Diagnostic> {
    tree.functions()
        .filter(|function| function.defaults().any(|default| default.is_mutable_literal()))
        .map(|function| {
            Diagnostic::new(
                path,
                function.line,
                RuleCode::S012,
                messages::MUTABLE_DEFAULT,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
