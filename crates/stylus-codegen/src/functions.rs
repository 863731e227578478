//! User-defined callables and explicit returns.
//!
//! A Stylus callable becomes either a `@function` or a mixin depending on
//! [`classify_callable`](crate::classify::classify_callable). Function bodies
//! are rendered with the return keyword active, so the last value (or every
//! statement-level expression) returns.

use stylus_ast::ast::{Function, Ident, Node, Return};

use crate::classify::{self, CallableKind};
use crate::context::{Context, Mode};
use crate::visitor::render;
use crate::{blocks, expressions, CodegenError};

pub fn function(func: &Function, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let block = func
        .block
        .as_ref()
        .ok_or_else(|| CodegenError::missing("Function", "block"))?;
    let kind = classify::classify_callable(&block.nodes);

    let mut before = ctx.breaks(func.lineno);
    before.push_str(&ctx.indentation());

    ctx.symbols
        .enter_params(func.params.iter().map(|param| param.name.clone()));
    ctx.return_keyword = match kind {
        CallableKind::Function => Some(ctx.options.dialect.return_keyword()),
        CallableKind::Mixin => None,
    };
    let rendered = ctx.with_mode(Mode::FUNCTION_BODY, |ctx| {
        let params = parameters(&func.params, ctx)?;
        let body = blocks::block(block, ctx)?;
        Ok::<_, CodegenError>((params, body))
    });
    ctx.return_keyword = None;
    ctx.symbols.leave_params();
    let (params, body) = rendered?;

    let head = match kind {
        CallableKind::Function => format!("@function {}({params})", func.name),
        CallableKind::Mixin => ctx.options.dialect.mixin_head(&func.name, &params),
    };
    Ok(format!("{before}{head}{body}"))
}

/// `$a, $b: default, $rest...`
fn parameters(params: &[Ident], ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let mut rendered = Vec::with_capacity(params.len());
    for param in params {
        let mut text = ctx.variable(&param.name);
        match param.val.as_deref() {
            None | Some(Node::Null) => {}
            Some(default) => {
                let value = ctx.with_mode(Mode::DECLARATION_VALUE, |ctx| render(default, ctx))?;
                text.push_str(": ");
                text.push_str(value.trim_end_matches(';'));
            }
        }
        if param.rest {
            text.push_str("...");
        }
        ctx.symbols.declare_variable(&param.name);
        rendered.push(text);
    }
    Ok(rendered.join(", "))
}

/// An explicit `return`.
pub fn return_statement(ret: &Return, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let before = ctx.lead(ret.lineno);
    let value = ctx.with_mode(Mode::EXPRESSION, |ctx| expressions::expression(&ret.expr, ctx))?;
    Ok(format!(
        "{before}{}{};",
        ctx.options.dialect.return_keyword(),
        value.trim_end_matches(';')
    ))
}
