//! Lowering of the tree-sitter Python tree into [`Node`]s.
//!
//! Nesting follows Python's own AST so breadth-first order matches it: an
//! `elif` is an `if` inside the previous branch's `else`, every exception
//! handler and `case` sits one level below its statement, and `else` or
//! `finally` bodies share the level of the statement's own body.

use tree_sitter::{Node as CstNode, Tree};

use super::{
    AssignTarget, Assignment, Expression, FunctionDefinition, Node, Parameter, SyntaxError,
};

type LowerResult<T> = Result<T, SyntaxError>;

/// Lower a parsed module, rejecting it if tree-sitter had to recover from
/// anything CPython refuses.
pub fn module(tree: &Tree, source: &str) -> LowerResult<Vec<Node>> {
    let root = tree.root_node();
    reject_invalid(root)?;
    Lowering {
        source: source.as_bytes(),
    }
    .block(root)
}

fn line_of(node: CstNode<'_>) -> usize {
    node.start_position().row + 1
}

/// Named children, comments and line continuations dropped.
fn named(node: CstNode<'_>) -> Vec<CstNode<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

fn has_token(node: CstNode<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|child| child.kind() == kind)
}

/// First problem in document order.
fn reject_invalid(root: CstNode<'_>) -> LowerResult<()> {
    let mut cursor = root.walk();
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if let Some(message) = invalid_reason(node) {
            return Err(SyntaxError::new(line_of(node), message));
        }
        let children: Vec<_> = node.children(&mut cursor).collect();
        pending.extend(children.into_iter().rev());
    }
    Ok(())
}

fn invalid_reason(node: CstNode<'_>) -> Option<String> {
    if node.is_missing() {
        return Some(format!("expected '{}'", node.kind()));
    }
    if node.is_error() {
        return Some("invalid syntax".to_string());
    }
    let message = match node.kind() {
        // The grammar still accepts Python 2 statements.
        "print_statement" => "Missing parentheses in call to 'print'",
        "exec_statement" => "Missing parentheses in call to 'exec'",
        "except_clause" if has_token(node, ",") => {
            "multiple exception types must be parenthesized"
        }
        "block" if named(node).is_empty() => "expected an indented block",
        _ => return None,
    };
    Some(message.to_string())
}

/// `(x)` to `x`. `None` for tuples and empty parentheses.
fn sole_parenthesized(node: CstNode<'_>) -> Option<CstNode<'_>> {
    let mut cursor = node.walk();
    let mut inner = None;
    for child in node.children(&mut cursor) {
        match child.kind() {
            "(" | ")" => {}
            _ if child.is_extra() => {}
            _ if child.is_named() && inner.is_none() => inner = Some(child),
            _ => return None,
        }
    }
    inner
}

fn expression(node: CstNode<'_>) -> Expression {
    match node.kind() {
        "list" => Expression::List,
        "dictionary" => Expression::Dict,
        "set" => Expression::Set,
        "parenthesized_expression" => sole_parenthesized(node).map_or(Expression::Other, expression),
        _ => Expression::Other,
    }
}

fn invalid_parameter(entry: CstNode<'_>) -> SyntaxError {
    SyntaxError::new(line_of(entry), "invalid parameter")
}

/// One entry of a parameter list.
enum Declared<'t> {
    Named {
        name: CstNode<'t>,
        default: Option<CstNode<'t>>,
    },
    /// `*args` or `**kwargs`.
    Collector(CstNode<'t>),
    /// A bare `*`; everything after it is keyword-only.
    KeywordMarker,
    /// The `/` ending positional-only parameters.
    PositionalMarker,
}

fn declared(entry: CstNode<'_>) -> LowerResult<Declared<'_>> {
    let (target, default) = match entry.kind() {
        "default_parameter" | "typed_default_parameter" => (
            entry.child_by_field_name("name"),
            entry.child_by_field_name("value"),
        ),
        "typed_parameter" => (named(entry).into_iter().next(), None),
        _ => (Some(entry), None),
    };
    let target = target.ok_or_else(|| invalid_parameter(entry))?;
    match target.kind() {
        "identifier" => Ok(Declared::Named {
            name: target,
            default,
        }),
        "list_splat_pattern" | "dictionary_splat_pattern" => {
            Ok(named(target)
                .into_iter()
                .next()
                .map_or(Declared::KeywordMarker, Declared::Collector))
        }
        "keyword_separator" => Ok(Declared::KeywordMarker),
        "positional_separator" => Ok(Declared::PositionalMarker),
        _ => Err(invalid_parameter(entry)),
    }
}

struct Lowering<'s> {
    source: &'s [u8],
}

impl Lowering<'_> {
    fn text(&self, node: CstNode<'_>) -> String {
        node.utf8_text(self.source).unwrap_or_default().to_string()
    }

    fn block(&self, block: CstNode<'_>) -> LowerResult<Vec<Node>> {
        named(block)
            .into_iter()
            .map(|statement| self.statement(statement))
            .collect()
    }

    /// Statements of the first block directly under `node`.
    fn body(&self, node: CstNode<'_>) -> LowerResult<Vec<Node>> {
        named(node)
            .into_iter()
            .find(|child| child.kind() == "block")
            .map_or_else(|| Ok(Vec::new()), |block| self.block(block))
    }

    fn statement(&self, node: CstNode<'_>) -> LowerResult<Node> {
        let line = line_of(node);
        let body = match node.kind() {
            "function_definition" => return self.function(node).map(Node::FunctionDefinition),
            "decorated_definition" => {
                if let Some(definition) = node.child_by_field_name("definition") {
                    return self.statement(definition);
                }
                Vec::new()
            }
            "expression_statement" => return self.expression_statement(node),
            "if_statement" => self.if_branches(node)?,
            "for_statement" | "while_statement" | "try_statement" => {
                self.body_with_clauses(node)?
            }
            "match_statement" => self.match_cases(node)?,
            "class_definition" | "with_statement" => self.body(node)?,
            _ => Vec::new(),
        };
        Ok(Node::Other { line, body })
    }

    /// The `if` body followed by its `else` branch, where each `elif` is a
    /// node holding its own body and every branch after it.
    fn if_branches(&self, node: CstNode<'_>) -> LowerResult<Vec<Node>> {
        let mut orelse = Vec::new();
        for clause in named(node).into_iter().rev() {
            match clause.kind() {
                "else_clause" => orelse = self.body(clause)?,
                "elif_clause" => {
                    let mut body = self.body(clause)?;
                    body.append(&mut orelse);
                    orelse = vec![Node::Other {
                        line: line_of(clause),
                        body,
                    }];
                }
                _ => {}
            }
        }
        let mut body = self.body(node)?;
        body.append(&mut orelse);
        Ok(body)
    }

    fn body_with_clauses(&self, node: CstNode<'_>) -> LowerResult<Vec<Node>> {
        let mut body = self.body(node)?;
        for clause in named(node) {
            match clause.kind() {
                "except_clause" | "except_group_clause" => body.push(Node::Other {
                    line: line_of(clause),
                    body: self.body(clause)?,
                }),
                "else_clause" | "finally_clause" => body.extend(self.body(clause)?),
                _ => {}
            }
        }
        Ok(body)
    }

    fn match_cases(&self, node: CstNode<'_>) -> LowerResult<Vec<Node>> {
        let mut cases = Vec::new();
        for child in named(node) {
            let clauses = if child.kind() == "block" {
                named(child)
            } else {
                vec![child]
            };
            for clause in clauses.into_iter().filter(|c| c.kind() == "case_clause") {
                cases.push(Node::Other {
                    line: line_of(clause),
                    body: self.body(clause)?,
                });
            }
        }
        Ok(cases)
    }

    fn function(&self, node: CstNode<'_>) -> LowerResult<FunctionDefinition> {
        let name = node
            .child_by_field_name("name")
            .map(|name| self.text(name))
            .unwrap_or_default();
        let parameters = match node.child_by_field_name("parameters") {
            Some(list) => self.parameters(list)?,
            None => Vec::new(),
        };
        Ok(FunctionDefinition {
            name,
            line: line_of(node),
            parameters,
            body: self.body(node)?,
        })
    }

    fn parameters(&self, list: CstNode<'_>) -> LowerResult<Vec<Parameter>> {
        let mut parameters = Vec::new();
        let mut keyword_only = false;
        let mut seen_default = false;
        for entry in named(list) {
            let (name, default) = match declared(entry)? {
                Declared::Named { name, default } => {
                    if default.is_some() {
                        seen_default = true;
                    } else if seen_default && !keyword_only {
                        return Err(SyntaxError::new(
                            line_of(entry),
                            "non-default argument follows default argument",
                        ));
                    }
                    (name, default)
                }
                Declared::Collector(name) => {
                    keyword_only = true;
                    (name, None)
                }
                Declared::KeywordMarker => {
                    keyword_only = true;
                    continue;
                }
                Declared::PositionalMarker => continue,
            };
            parameters.push(Parameter {
                name: self.text(name),
                default: default.map(expression),
            });
        }
        Ok(parameters)
    }

    /// Plain `=` statements become [`Assignment`]s; annotated and augmented
    /// ones stay opaque.
    fn expression_statement(&self, node: CstNode<'_>) -> LowerResult<Node> {
        let line = line_of(node);
        let children = named(node);
        let [first] = children.as_slice() else {
            return Ok(Node::Other {
                line,
                body: Vec::new(),
            });
        };
        if first.kind() != "assignment" || first.child_by_field_name("type").is_some() {
            return Ok(Node::Other {
                line,
                body: Vec::new(),
            });
        }

        // `a = b = 0` nests to the right.
        let mut targets = Vec::new();
        let mut link = *first;
        loop {
            if let Some(left) = link.child_by_field_name("left") {
                targets.push(self.target(left));
            }
            match link.child_by_field_name("right") {
                Some(right) if right.kind() == "augmented_assignment" => {
                    return Err(SyntaxError::new(line_of(right), "invalid syntax"));
                }
                Some(right) if right.kind() == "assignment" => {
                    if right.child_by_field_name("type").is_some() {
                        return Err(SyntaxError::new(line_of(right), "invalid syntax"));
                    }
                    link = right;
                }
                _ => break,
            }
        }
        Ok(Node::Assignment(Assignment { line, targets }))
    }

    fn target(&self, node: CstNode<'_>) -> AssignTarget {
        match node.kind() {
            "identifier" | "keyword_identifier" => AssignTarget::SimpleName(self.text(node)),
            "attribute" => node
                .child_by_field_name("attribute")
                .map_or(AssignTarget::Other, |attribute| {
                    AssignTarget::AttributeAccess(self.text(attribute))
                }),
            "tuple_pattern" | "parenthesized_expression" => {
                sole_parenthesized(node).map_or(AssignTarget::Other, |inner| self.target(inner))
            }
            _ => AssignTarget::Other,
        }
    }
}

#[cfg(test)]
#[path = "lower_tests.rs"]
mod tests;
