//! Declarations and identifiers.
//!
//! Identifiers are where most naming decisions happen: a bare name may be a
//! variable (sigil), a reference to an earlier declaration (substituted by
//! its value), a mixin placeholder, or plain text. A bound identifier is an
//! assignment or a callable definition.

use stylus_ast::ast::{Expression, Ident, Node, Property};

use crate::context::{Context, Mode};
use crate::visitor::{render, render_segments};
use crate::{classify, expressions, functions, CodegenError};

/// `name: value;`
pub fn property(prop: &Property, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let before = ctx.lead(prop.lineno);
    ctx.with_mode(Mode::DECLARATION_VALUE, |ctx| {
        let name = render_segments(&prop.segments, ctx)?;
        let slot = ctx.symbols.push_declaration(name.clone());

        // `width: w = 10px` declares `w` and then uses it.
        if let Some(inline) = inline_variable(&prop.expr) {
            let assignment = expressions::expression(&prop.expr, ctx)?;
            let reference = ctx.variable(&inline.name);
            ctx.symbols.declare_variable(&inline.name);
            ctx.symbols.settle_declaration(slot, reference.clone());
            return Ok(format!(
                "{before}{}\n{}{name}: {reference};",
                assignment.trim_start(),
                ctx.indentation()
            ));
        }

        let value = expressions::expression(&prop.expr, ctx)?;
        let terminator = if value.ends_with(';') || ends_in_block_call(&prop.expr) {
            ""
        } else {
            ";"
        };
        ctx.symbols.settle_declaration(slot, value.clone());
        Ok(format!("{before}{name}: {value}{terminator}"))
    })
}

/// Whether the value's last operand is a call carrying its own block.
fn ends_in_block_call(value: &Expression) -> bool {
    match value.nodes.last() {
        Some(Node::Call(call)) => call.block.is_some(),
        Some(Node::Expression(inner)) => ends_in_block_call(inner),
        _ => false,
    }
}

/// The identifier of a single-operand value bound to an expression.
fn inline_variable(value: &Expression) -> Option<&Ident> {
    match value.nodes.as_slice() {
        [Node::Ident(ident)] if matches!(ident.val.as_deref(), Some(Node::Expression(_))) => {
            Some(ident)
        }
        _ => None,
    }
}

/// Render an identifier, bound or not.
pub fn ident(ident: &Ident, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    match ident.val.as_deref() {
        None | Some(Node::Null) => Ok(reference(ident, ctx)),
        Some(Node::Expression(value)) => assignment(&ident.name, value, ctx),
        Some(Node::Function(func)) => functions::function(func, ctx),
        Some(other) => {
            let before = ctx.lead(ident.lineno);
            let value = ctx.with_mode(Mode::DECLARATION_VALUE, |ctx| render(other, ctx))?;
            ctx.symbols.declare_variable(&ident.name);
            Ok(format!(
                "{before}{}: {};",
                ctx.variable(&ident.name),
                value.trim_end_matches(';')
            ))
        }
    }
}

fn reference(ident: &Ident, ctx: &mut Context<'_>) -> String {
    let name = ident.name.as_str();
    if ctx.in_mode(Mode::EXPRESSION) {
        if ctx.in_mode(Mode::CALL) {
            return if ctx.symbols.is_param(name) {
                ctx.variable(name)
            } else {
                name.to_string()
            };
        }
        if let Some(value) = ctx.symbols.declared_value(name) {
            return value.to_string();
        }
    }
    if ident.mixin {
        return if name == "block" {
            ctx.options.dialect.content().to_string()
        } else {
            ctx.options.dialect.interpolate(name)
        };
    }
    let mut text = if ctx.symbols.is_variable(name) || ctx.symbols.is_param(name) {
        ctx.variable(name)
    } else {
        name.to_string()
    };
    if ident.rest {
        text.push_str("...");
    }
    text
}

/// `$name: value;`, registering `name` as a variable (and as a map when the
/// value holds an object literal).
fn assignment(
    name: &str,
    value: &Expression,
    ctx: &mut Context<'_>,
) -> Result<String, CodegenError> {
    if classify::holds_object_literal(value) {
        tracing::trace!(name, "registered map");
        ctx.symbols.declare_map(name);
    }
    // Keyword arguments sit inline in their call.
    let before = if ctx.in_mode(Mode::CALL) {
        String::new()
    } else {
        ctx.lead(value.lineno)
    };
    let rendered = ctx.with_mode(Mode::DECLARATION_VALUE, |ctx| {
        value
            .nodes
            .iter()
            .map(|node| render(node, ctx))
            .collect::<Result<Vec<_>, _>>()
    })?;
    ctx.symbols.declare_variable(name);
    Ok(format!(
        "{before}{}: {};",
        ctx.variable(name),
        rendered.join(" ").trim_end_matches(';')
    ))
}
