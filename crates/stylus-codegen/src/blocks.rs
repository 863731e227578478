//! Braced blocks, selectors and rule sets.

use stylus_ast::ast::{Block, Group, Node, Selector};

use crate::context::{Context, Mode};
use crate::visitor::{render, render_nodes, render_segments};
use crate::CodegenError;

/// ` { … }` around a statement list, one level deeper than the caller.
///
/// Inside a function body the last value becomes the return value when no
/// statement returns explicitly.
pub fn block(block: &Block, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    ctx.indent += 1;
    let mut body = render_nodes(&block.nodes, ctx)?;

    if ctx.in_mode(Mode::FUNCTION_BODY) {
        if let Some(keyword) = ctx.return_keyword {
            if !body.contains(keyword.trim_end()) {
                body = inject_return(&body, keyword, ctx);
            }
            if !body.ends_with(';') && !body.ends_with('}') {
                body.push(';');
            }
        }
    }
    if !body.starts_with('\n') {
        body = format!("\n{}{}", ctx.indentation(), body.trim_start());
    }

    ctx.indent -= 1;
    Ok(format!(" {{{body}\n{}}}", ctx.indentation()))
}

fn inject_return(body: &str, keyword: &str, ctx: &mut Context<'_>) -> String {
    let content = body.trim_start();
    let lead = &body[..body.len() - content.len()];
    if lead.contains('\n') {
        format!("{lead}{keyword}{content}")
    } else {
        // The value shared the header's line; it now gets one of its own.
        ctx.lines.bump();
        format!("\n{}{keyword}{content}", ctx.indentation())
    }
}

pub fn selector(selector: &Selector, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let mut before = ctx.breaks(selector.segments.last().and_then(Node::lineno));
    before.push_str(&ctx.indentation());
    Ok(format!("{before}{}", render_segments(&selector.segments, ctx)?))
}

/// A rule set: selector list plus block.
pub fn group(group: &Group, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let block = group
        .block
        .as_ref()
        .ok_or_else(|| CodegenError::missing("Group", "block"))?;
    let before = ctx.lead(group.lineno);

    let mut selectors = String::new();
    for (i, node) in group.nodes.iter().enumerate() {
        let rendered = render(node, ctx)?;
        // A selector on its own source line keeps its line break.
        let text = if rendered.starts_with('\n') {
            rendered.as_str()
        } else {
            rendered.trim_start()
        };
        if i > 0 {
            selectors.push_str(if text.starts_with('\n') { "," } else { ", " });
        }
        selectors.push_str(text);
    }

    let body = self::block(block, ctx)?;
    if ctx.in_mode(Mode::KEYFRAMES) && needs_interpolation(&selectors) {
        return Ok(format!("{before}#{{{selectors}}}{body}"));
    }
    Ok(format!("{before}{selectors}{body}"))
}

/// Keyframe steps computed from variables or arithmetic.
fn needs_interpolation(step: &str) -> bool {
    !step.contains("#{") && step.contains(|c| matches!(c, '-' | '*' | '+' | '/' | '$'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use pretty_assertions::assert_eq;
    use stylus_ast::build::{block, group, lit, prop, selector, unit};

    fn render_all(nodes: &[Node]) -> String {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        render_nodes(nodes, &mut ctx).unwrap()
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(render_all(&[group(".a", 1, vec![])]), ".a {\n  \n}");
    }

    #[test]
    fn test_selector_list_on_one_line() {
        let group = Node::Group(Group {
            nodes: vec![selector(".a", 1), selector(".b", 1)],
            block: Some(block(vec![prop("margin", vec![unit(0.0, "")], 2)], 1)),
            lineno: Some(1),
        });
        assert_eq!(render_all(&[group]), ".a, .b {\n  margin: 0;\n}");
    }

    #[test]
    fn test_selector_list_across_lines() {
        let group = Node::Group(Group {
            nodes: vec![selector(".a", 1), selector(".b", 2)],
            block: Some(block(vec![prop("margin", vec![unit(0.0, "")], 3)], 1)),
            lineno: Some(1),
        });
        assert_eq!(render_all(&[group]), ".a,\n.b {\n  margin: 0;\n}");
    }

    #[test]
    fn test_group_without_block_is_an_error() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        let group = Node::Group(Group {
            nodes: vec![selector(".a", 1)],
            block: None,
            lineno: Some(1),
        });
        assert_eq!(
            render(&group, &mut ctx),
            Err(CodegenError::missing("Group", "block"))
        );
    }

    #[test]
    fn test_function_body_gets_implicit_return() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        ctx.return_keyword = Some("@return ");
        let body = block(vec![lit("a")], 1);
        let out = ctx
            .with_mode(Mode::FUNCTION_BODY, |ctx| super::block(&body, ctx))
            .unwrap();
        assert_eq!(out, " {\n  @return a;\n}");
        assert_eq!(ctx.lines.last(), 2);
    }

    #[test]
    fn test_interpolated_keyframe_step() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        let step = group("$i * 10%", 2, vec![prop("opacity", vec![unit(1.0, "")], 3)]);
        let out = ctx
            .with_mode(Mode::KEYFRAMES, |ctx| render(&step, ctx))
            .unwrap();
        assert_eq!(out, "\n#{$i * 10%} {\n  opacity: 1;\n}");
    }

    #[test]
    fn test_plain_keyframe_step_is_untouched() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        let step = group("50%", 1, vec![prop("opacity", vec![unit(1.0, "")], 2)]);
        let out = ctx
            .with_mode(Mode::KEYFRAMES, |ctx| render(&step, ctx))
            .unwrap();
        assert_eq!(out, "50% {\n  opacity: 1;\n}");
    }
}
