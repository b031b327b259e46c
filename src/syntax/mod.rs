//! Lightweight Python syntax tree.
//!
//! Source is parsed with tree-sitter's Python grammar and lowered into a tree
//! that only models what the style rules inspect: function definitions with
//! their parameters, plain assignments with their targets, and every other
//! statement as an opaque node that may own nested statements. Anything the
//! grammar had to recover from is a [`SyntaxError`].

mod lower;

use std::collections::VecDeque;

use thiserror::Error;
use tree_sitter::Parser;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub message: String,
}

impl SyntaxError {
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Parse the full text of a Python file.
///
/// # Errors
/// Returns the first [`SyntaxError`] in document order.
///
/// # Panics
/// Panics if the bundled grammar is incompatible with the tree-sitter
/// runtime, which is fixed at build time.
pub fn parse(source: &str) -> Result<SyntaxTree, SyntaxError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .expect("Error loading Python grammar");
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| SyntaxError::new(1, "parser produced no tree"))?;
    let body = lower::module(&tree, source)?;
    Ok(SyntaxTree { body })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    pub body: Vec<Node>,
}

impl SyntaxTree {
    /// Breadth-first traversal over every node, in discovery order.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            queue: self.body.iter().collect(),
        }
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.walk().filter_map(|node| match node {
            Node::FunctionDefinition(function) => Some(function),
            _ => None,
        })
    }

    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.walk().filter_map(|node| match node {
            Node::Assignment(assignment) => Some(assignment),
            _ => None,
        })
    }
}

pub struct Walk<'t> {
    queue: VecDeque<&'t Node>,
}

impl<'t> Iterator for Walk<'t> {
    type Item = &'t Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    FunctionDefinition(FunctionDefinition),
    Assignment(Assignment),
    /// Any other statement. Compound statements keep their nested statements
    /// in `body`; `elif` branches, exception handlers and `case` clauses are
    /// nodes of this kind too.
    Other { line: usize, body: Vec<Node> },
}

impl Node {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::FunctionDefinition(function) => function.line,
            Self::Assignment(assignment) => assignment.line,
            Self::Other { line, .. } => *line,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::FunctionDefinition(function) => &function.body,
            Self::Assignment(_) => &[],
            Self::Other { body, .. } => body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub name: String,
    pub line: usize,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Node>,
}

impl FunctionDefinition {
    /// Default values in parameter order; they belong to the trailing
    /// parameters of each positional or keyword-only group.
    pub fn defaults(&self) -> impl Iterator<Item = &Expression> {
        self.parameters.iter().filter_map(|p| p.default.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Bare name, without the `*` or `**` of a collector.
    pub name: String,
    pub default: Option<Expression>,
}

/// Shape of a default value expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expression {
    List,
    Dict,
    Set,
    Other,
}

impl Expression {
    #[must_use]
    pub const fn is_mutable_literal(self) -> bool {
        matches!(self, Self::List | Self::Dict | Self::Set)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub line: usize,
    pub targets: Vec<AssignTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignTarget {
    /// `name = ...`
    SimpleName(String),
    /// `obj.attr = ...`, holding the final attribute.
    AttributeAccess(String),
    /// Unpacking, subscripts and starred targets.
    Other,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
