//! Shorthand constructors for assembling trees by hand.
//!
//! The upstream parser is the normal source of trees; these helpers exist
//! for hosts that synthesize small trees and for tests.

use crate::ast::*;

pub fn lit(val: &str) -> Node {
    Node::Literal(Literal {
        val: val.into(),
        lineno: None,
    })
}

pub fn ident(name: &str) -> Node {
    Node::Ident(Ident {
        name: name.into(),
        val: None,
        mixin: false,
        rest: false,
        lineno: None,
    })
}

/// `name = value` on `line`.
pub fn assign(name: &str, value: Vec<Node>, line: usize) -> Node {
    Node::Ident(Ident {
        name: name.into(),
        val: Some(Box::new(Node::Expression(expr(value, line)))),
        mixin: false,
        rest: false,
        lineno: Some(line),
    })
}

/// A number; pass `""` for a unitless value.
pub fn unit(val: f64, unit: &str) -> Node {
    Node::Unit(Unit {
        val,
        unit: (!unit.is_empty()).then(|| unit.to_string()),
    })
}

pub fn string(val: &str, quote: &str) -> Node {
    Node::String(Str {
        val: val.into(),
        quote: quote.into(),
    })
}

pub fn expr(nodes: Vec<Node>, line: usize) -> Expression {
    Expression {
        nodes,
        lineno: Some(line),
    }
}

pub fn expr_node(nodes: Vec<Node>, line: usize) -> Node {
    Node::Expression(expr(nodes, line))
}

pub fn block(nodes: Vec<Node>, line: usize) -> Block {
    Block {
        nodes,
        lineno: Some(line),
    }
}

/// `name: value` on `line`.
pub fn prop(name: &str, value: Vec<Node>, line: usize) -> Node {
    Node::Property(Property {
        segments: vec![lit(name)],
        expr: expr(value, line),
        lineno: Some(line),
    })
}

pub fn selector(text: &str, line: usize) -> Node {
    Node::Selector(Selector {
        segments: vec![Node::Literal(Literal {
            val: text.into(),
            lineno: Some(line),
        })],
        lineno: Some(line),
    })
}

/// A rule set with a single selector.
pub fn group(selector_text: &str, line: usize, body: Vec<Node>) -> Node {
    Node::Group(Group {
        nodes: vec![selector(selector_text, line)],
        block: Some(block(body, line)),
        lineno: Some(line),
    })
}

/// A call whose arguments are each wrapped in an expression on `line`.
pub fn call(name: &str, args: Vec<Node>, line: usize) -> Node {
    Node::Call(Call {
        name: name.into(),
        args: Arguments {
            nodes: args.into_iter().map(|a| expr_node(vec![a], line)).collect(),
        },
        block: None,
        lineno: Some(line),
    })
}

/// A callable definition, bound to its name the way the parser emits it.
pub fn function(name: &str, params: &[&str], body: Vec<Node>, line: usize) -> Node {
    let params = params
        .iter()
        .map(|p| Ident {
            name: p.to_string(),
            val: None,
            mixin: false,
            rest: false,
            lineno: Some(line),
        })
        .collect();
    Node::Ident(Ident {
        name: name.into(),
        val: Some(Box::new(Node::Function(Function {
            name: name.into(),
            params,
            block: Some(block(body, line)),
            lineno: Some(line),
        }))),
        mixin: false,
        rest: false,
        lineno: Some(line),
    })
}

pub fn binop(op: &str, left: Node, right: Node) -> Node {
    Node::BinOp(BinOp {
        op: op.into(),
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn member(left: Node, right: Node) -> Node {
    Node::Member(Member {
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// An object literal whose values are single-operand expressions.
pub fn object(entries: Vec<(&str, Node)>, line: usize) -> Node {
    Node::Object(Object {
        vals: entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), expr_node(vec![v], line)))
            .collect(),
        lineno: Some(line),
    })
}

pub fn comment(text: &str, line: usize) -> Node {
    Node::Comment(Comment {
        text: text.into(),
        suppress: false,
        lineno: Some(line),
    })
}
