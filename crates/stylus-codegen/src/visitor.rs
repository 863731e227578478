//! Dispatch from node kinds to emitters.
//!
//! [`render`] is the single re-entry point: every emitter renders its
//! children through it.

use stylus_ast::ast::Node;

use crate::context::Context;
use crate::{
    at_rules, blocks, comments, control, declarations, expressions, functions, CodegenError,
};

/// Render any node.
pub fn render(node: &Node, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    tracing::trace!(kind = node.kind(), line = ?node.lineno(), "render");
    match node {
        Node::Null => Ok(String::new()),
        Node::Literal(lit) => Ok(lit.val.clone()),
        Node::Ident(ident) => declarations::ident(ident, ctx),
        Node::Unit(unit) => Ok(expressions::unit(unit)),
        Node::String(s) => Ok(expressions::string(s)),
        Node::Boolean(b) => Ok(b.val.to_string()),
        Node::Rgba(color) => Ok(color.raw.clone()),
        Node::Expression(expr) => expressions::expression(expr, ctx),
        Node::Arguments(args) => expressions::arguments(args, ctx),
        Node::Block(block) => blocks::block(block, ctx),
        Node::Selector(sel) => blocks::selector(sel, ctx),
        Node::Group(group) => blocks::group(group, ctx),
        Node::Property(prop) => declarations::property(prop, ctx),
        Node::Call(call) => expressions::call(call, ctx),
        Node::Function(func) => functions::function(func, ctx),
        Node::Return(ret) => functions::return_statement(ret, ctx),
        Node::If(cond) => control::conditional(cond, ctx),
        Node::Each(each) => control::each(each, ctx),
        Node::BinOp(op) => expressions::binary(op, ctx),
        Node::UnaryOp(op) => expressions::unary(op, ctx),
        Node::Keyframes(kf) => at_rules::keyframes(kf, ctx),
        Node::Media(media) => at_rules::media(media, ctx),
        Node::QueryList(list) => at_rules::query_list(list, ctx),
        Node::Query(query) => at_rules::query(query, ctx),
        Node::Feature(feature) => at_rules::feature(feature, ctx),
        Node::Supports(supports) => at_rules::supports(supports, ctx),
        Node::Namespace(ns) => at_rules::namespace(ns, ctx),
        Node::Charset(charset) => Ok(at_rules::charset(charset, ctx)),
        Node::Import(import) => at_rules::import(import, ctx),
        Node::Extend(extend) => at_rules::extend(extend, ctx),
        Node::Atrule(rule) => at_rules::atrule(rule, ctx),
        Node::Comment(comment) => Ok(comments::comment(comment, false, ctx)),
        Node::Member(member) => expressions::member(member, ctx),
        Node::Object(obj) => expressions::object(obj, ctx),
    }
}

/// Render an optional node; absent nodes render as nothing.
pub fn render_opt(node: Option<&Node>, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    match node {
        Some(node) => render(node, ctx),
        None => Ok(String::new()),
    }
}

/// Render a statement list. A comment that starts on the same line as the
/// statement before it stays on that line.
pub fn render_nodes(nodes: &[Node], ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let mut out = String::new();
    for (i, node) in nodes.iter().enumerate() {
        match node {
            Node::Comment(comment) => {
                let inline = i > 0
                    && comment.lineno.is_some()
                    && nodes[i - 1].lineno() == comment.lineno;
                out.push_str(&comments::comment(comment, inline, ctx));
            }
            _ => out.push_str(&render(node, ctx)?),
        }
    }
    Ok(out)
}

/// Render name segments of a declaration, selector, or keyframes rule.
/// Interpolated segments become `#{…}`.
pub fn render_segments(segments: &[Node], ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Node::Expression(expr) => {
                let inner = expressions::expression(expr, ctx)?;
                out.push_str(&format!("#{{{inner}}}"));
            }
            _ => out.push_str(&render(segment, ctx)?),
        }
    }
    Ok(out)
}
