//! Block comments.
//!
//! Comments are emitted as preserved comments (`/*! … */`) so that
//! downstream minifiers keep them.

use stylus_ast::ast::Comment;

use crate::context::Context;

/// Render a comment. An inline comment follows its statement after one space
/// instead of starting a line of its own.
pub fn comment(comment: &Comment, inline: bool, ctx: &mut Context<'_>) -> String {
    let before = if inline {
        " ".to_string()
    } else {
        ctx.lead(comment.lineno)
    };
    if let Some(line) = comment.lineno {
        ctx.lines.set(line + comment.text.matches('\n').count());
    }

    let text = match comment.text.strip_prefix("/*") {
        Some(rest) if !comment.suppress && !rest.starts_with('!') => format!("/*!{rest}"),
        _ => comment.text.clone(),
    };
    format!("{before}{text}")
}
