//! Values: expressions, calls, operators, member access and object literals.

use stylus_ast::ast::{Arguments, BinOp, Call, Expression, Member, Node, Object, Str, Unit, UnaryOp};

use crate::context::{Context, Mode};
use crate::visitor::render;
use crate::{blocks, classify, CodegenError};

/// Format a number the way stylesheets spell it: integers without a
/// fractional part.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

pub fn unit(unit: &Unit) -> String {
    match &unit.unit {
        Some(suffix) => format!("{}{suffix}", format_number(unit.val)),
        None => format_number(unit.val),
    }
}

/// Source strings keep the quote they were written with.
pub fn string(s: &Str) -> String {
    format!("{0}{1}{0}", s.quote, s.val)
}

/// Source spelling of an operator in the output dialects.
pub fn operator(op: &str) -> &str {
    match op {
        "&&" => "and",
        "||" => "or",
        "!" => "not",
        other => other,
    }
}

/// Render an operand list.
///
/// Inside a declaration value, operands that are themselves lists are
/// separated by commas (`a 1s, b 2s`). A statement-level expression in a
/// function body gets the return keyword.
pub fn expression(expr: &Expression, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let statement = !ctx.in_mode(
        Mode::EXPRESSION | Mode::ARGUMENTS | Mode::DECLARATION_VALUE | Mode::OBJECT | Mode::CONDITION,
    );
    let in_value = ctx.in_mode(Mode::DECLARATION_VALUE);
    // Taken before the operands so a call on the same line owes no breaks.
    let returned = match ctx.return_keyword {
        Some(keyword) if statement => Some((ctx.lead(expr.lineno), keyword)),
        _ => None,
    };

    let mut text = ctx.with_mode(Mode::EXPRESSION, |ctx| {
        let mut text = String::new();
        for (i, operand) in expr.nodes.iter().enumerate() {
            let rendered = render(operand, ctx)?;
            if i > 0 {
                if in_value && !operand.children().is_empty() {
                    text.push(',');
                }
                text.push(' ');
            }
            text.push_str(&rendered);
        }
        Ok::<_, CodegenError>(text)
    })?;

    if ctx.in_mode(Mode::CALL) && ctx.call_name.as_deref() == Some("url") {
        text.retain(|c| !c.is_whitespace());
    }

    Ok(match returned {
        Some((before, keyword)) => format!("{before}{keyword}{text}"),
        None => text,
    })
}

/// Comma-separated call arguments.
pub fn arguments(args: &Arguments, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    ctx.with_mode(Mode::ARGUMENTS, |ctx| {
        let parts = args
            .nodes
            .iter()
            .map(|node| Ok(render(node, ctx)?.trim_end_matches(';').to_string()))
            .collect::<Result<Vec<_>, CodegenError>>()?;
        Ok(parts.join(", "))
    })
}

/// A call. In statement position it is a mixin inclusion and carries its own
/// terminator; in value position it is a plain call.
pub fn call(call: &Call, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let mut before = ctx.breaks(call.lineno);
    let statement = !ctx.in_mode(
        Mode::DECLARATION_VALUE
            | Mode::OBJECT
            | Mode::NAMESPACE
            | Mode::KEYFRAMES
            | Mode::ARGUMENTS
            | Mode::CONDITION,
    ) && ctx.return_keyword.is_none();
    if statement {
        if before.is_empty() {
            before.push('\n');
        }
        before.push_str(&ctx.indentation());
        before.push_str(ctx.options.dialect.include());
    }

    let outer = ctx.call_name.replace(call.name.clone());
    let args = ctx.with_mode(Mode::CALL, |ctx| arguments(&call.args, ctx));
    ctx.call_name = outer;
    let args = args?;

    let block = match &call.block {
        Some(block) => blocks::block(block, ctx)?,
        None => String::new(),
    };
    let terminator = if statement && call.block.is_none() { ";" } else { "" };
    Ok(format!("{before}{}({args}){block}{terminator}", call.name))
}

pub fn binary(op: &BinOp, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let left = render(&op.left, ctx)?;
    let right = match op.right.as_ref() {
        Node::Expression(_) => format!("({})", render(&op.right, ctx)?),
        other => render(other, ctx)?,
    };
    Ok(format!("{left} {} {right}", operator(&op.op)))
}

pub fn unary(op: &UnaryOp, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    Ok(format!("{}({})", operator(&op.op), render(&op.expr, ctx)?))
}

/// `left.right`, or a map lookup when the chain's root name holds a map.
pub fn member(member: &Member, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let is_map = classify::member_root(&member.left).is_some_and(|root| ctx.symbols.is_map(root));
    if !is_map {
        let left = render(&member.left, ctx)?;
        let right = render(&member.right, ctx)?;
        return Ok(format!("{left}.{right}"));
    }

    let left = match member.left.as_bare_ident() {
        Some(ident) => ctx.variable(&ident.name),
        None => render(&member.left, ctx)?,
    };
    let key = match member.right.as_bare_ident() {
        Some(ident) => ident.name.clone(),
        None => render(&member.right, ctx)?,
    };
    let q = ctx.options.quote;
    Ok(format!("map-get({left}, {q}{key}{q})"))
}

/// A parenthesized map literal, one `'key': value` pair per line.
///
/// The pairs are laid out on synthesized lines, so the line tracker is moved
/// past them (one line per key plus the two delimiters).
pub fn object(obj: &Object, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    ctx.indent += 1;
    let pad = ctx.indentation();
    let q = ctx.options.quote;
    let pairs = ctx.with_mode(Mode::OBJECT, |ctx| {
        obj.vals
            .iter()
            .map(|(key, value)| {
                let value = render(value, ctx)?.replacen(';', "", 1);
                Ok(format!("\n{pad}{q}{key}{q}: {value}"))
            })
            .collect::<Result<Vec<_>, CodegenError>>()
    });
    ctx.indent -= 1;
    let pairs = pairs?;

    if let Some(line) = obj.lineno {
        ctx.lines.advance_to(line + obj.vals.len() + 2);
    }
    Ok(format!("({}\n{})", pairs.join(","), ctx.indentation()))
}
