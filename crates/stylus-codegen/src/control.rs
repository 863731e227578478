//! Conditionals and loops.

use stylus_ast::ast::{Each, Expression, If, Node};

use crate::context::{Context, Mode};
use crate::visitor::render;
use crate::{blocks, classify, CodegenError};

/// `@if cond { … } @else if … { … } @else { … }`
pub fn conditional(node: &If, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    branch(node, "@if ", true, ctx)
}

fn branch(
    node: &If,
    keyword: &str,
    leading: bool,
    ctx: &mut Context<'_>,
) -> Result<String, CodegenError> {
    let block = node
        .block
        .as_ref()
        .ok_or_else(|| CodegenError::missing("If", "block"))?;
    let before = if leading {
        ctx.lead(node.lineno)
    } else {
        String::new()
    };

    let cond = ctx.with_mode(Mode::CONDITION, |ctx| render(&node.cond, ctx))?;
    let cond = if node.negate {
        format!("not ({cond})")
    } else {
        cond
    };
    let mut out = format!("{before}{keyword}{cond}{}", blocks::block(block, ctx)?);

    for alternative in &node.elses {
        // `else` sits on the line after the closing brace.
        ctx.lines.bump();
        match alternative {
            Node::If(nested) => out.push_str(&branch(nested, " @else if ", false, ctx)?),
            Node::Block(body) => {
                out.push_str(" @else");
                out.push_str(&blocks::block(body, ctx)?);
            }
            _ => return Err(CodegenError::missing("If", "else block")),
        }
    }
    Ok(out)
}

/// `@for` over a range, `@each` over anything else.
pub fn each(each: &Each, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let iterable = each
        .expr
        .as_ref()
        .ok_or_else(|| CodegenError::missing("Each", "expr"))?;
    let block = each
        .block
        .as_ref()
        .ok_or_else(|| CodegenError::missing("Each", "block"))?;

    let mut before = ctx.breaks(each.lineno);
    before.push_str(&ctx.indentation());

    ctx.symbols.declare_variable(&each.val);
    if let Some(key) = &each.key {
        ctx.symbols.declare_variable(key);
    }

    let head = ctx.with_mode(Mode::CONDITION, |ctx| {
        match classify::range_operator(iterable) {
            Some(range) => {
                tracing::trace!(op = %range.op, var = %each.val, "range loop");
                range_head(each, iterable, ctx)
            }
            None => list_head(each, iterable, ctx),
        }
    })?;
    Ok(format!("{before}{head}{}", blocks::block(block, ctx)?))
}

fn range_head(
    each: &Each,
    iterable: &Expression,
    ctx: &mut Context<'_>,
) -> Result<String, CodegenError> {
    let bounds = iterable
        .nodes
        .iter()
        .map(|node| range_operand(node, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!(
        "@for {} from {}",
        ctx.variable(&each.val),
        bounds.join(", ")
    ))
}

/// `1..10` reads `1 through 10`; `1...10` excludes the end and reads `1 to 10`.
fn range_operand(node: &Node, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    match node {
        Node::BinOp(op) if classify::is_range(&op.op) => {
            let keyword = if op.op == "..." { "to" } else { "through" };
            let start = render(&op.left, ctx)?;
            let end = render(&op.right, ctx)?;
            Ok(format!("{start} {keyword} {end}"))
        }
        Node::Expression(inner) => {
            let parts = inner
                .nodes
                .iter()
                .map(|node| range_operand(node, ctx))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(" "))
        }
        other => render(other, ctx),
    }
}

fn list_head(
    each: &Each,
    iterable: &Expression,
    ctx: &mut Context<'_>,
) -> Result<String, CodegenError> {
    let mut names = ctx.variable(&each.val);
    if let Some(key) = &each.key {
        names.push_str(", ");
        names.push_str(&ctx.variable(key));
    }
    let items = iterable
        .nodes
        .iter()
        .map(|node| match node.as_bare_ident() {
            Some(ident) => Ok(ctx.variable(&ident.name)),
            None => render(node, ctx),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("@each {names} in {}", items.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::visitor::render_nodes;
    use pretty_assertions::assert_eq;
    use stylus_ast::build::{binop, block, expr, expr_node, group, ident, lit, prop, unit};

    fn render_all(nodes: &[Node]) -> String {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        render_nodes(nodes, &mut ctx).unwrap()
    }

    fn equals_one() -> Box<Node> {
        Box::new(expr_node(vec![binop("==", ident("a"), unit(1.0, ""))], 1))
    }

    // =========================================================================
    // Conditionals
    // =========================================================================

    #[test]
    fn test_if_else() {
        let node = Node::If(If {
            cond: equals_one(),
            block: Some(block(vec![prop("color", vec![lit("red")], 2)], 1)),
            elses: vec![Node::Block(block(vec![prop("color", vec![lit("blue")], 4)], 3))],
            negate: false,
            lineno: Some(1),
        });
        assert_eq!(
            render_all(&[node]),
            "@if a == 1 {\n  color: red;\n} @else {\n  color: blue;\n}"
        );
    }

    #[test]
    fn test_else_if_chain() {
        let nested = Node::If(If {
            cond: Box::new(expr_node(vec![binop("==", ident("a"), unit(2.0, ""))], 3)),
            block: Some(block(vec![prop("color", vec![lit("blue")], 4)], 3)),
            elses: vec![],
            negate: false,
            lineno: Some(3),
        });
        let node = Node::If(If {
            cond: equals_one(),
            block: Some(block(vec![prop("color", vec![lit("red")], 2)], 1)),
            elses: vec![nested],
            negate: false,
            lineno: Some(1),
        });
        assert_eq!(
            render_all(&[node]),
            "@if a == 1 {\n  color: red;\n} @else if a == 2 {\n  color: blue;\n}"
        );
    }

    #[test]
    fn test_unless_is_negated() {
        let node = Node::If(If {
            cond: equals_one(),
            block: Some(block(vec![prop("display", vec![lit("none")], 2)], 1)),
            elses: vec![],
            negate: true,
            lineno: Some(1),
        });
        assert_eq!(
            render_all(&[node]),
            "@if not (a == 1) {\n  display: none;\n}"
        );
    }

    #[test]
    fn test_logical_operators_in_condition() {
        let cond = binop(
            "&&",
            ident("a"),
            expr_node(vec![binop("||", ident("b"), ident("c"))], 1),
        );
        let node = Node::If(If {
            cond: Box::new(expr_node(vec![cond], 1)),
            block: Some(block(vec![prop("top", vec![unit(0.0, "")], 2)], 1)),
            elses: vec![],
            negate: false,
            lineno: Some(1),
        });
        assert_eq!(
            render_all(&[node]),
            "@if a and (b or c) {\n  top: 0;\n}"
        );
    }

    #[test]
    fn test_if_without_block_is_an_error() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        let node = If {
            cond: equals_one(),
            block: None,
            elses: vec![],
            negate: false,
            lineno: Some(1),
        };
        assert_eq!(
            conditional(&node, &mut ctx),
            Err(CodegenError::missing("If", "block"))
        );
    }

    // =========================================================================
    // Loops
    // =========================================================================

    #[test]
    fn test_exclusive_range() {
        let node = Node::Each(Each {
            val: "i".into(),
            key: None,
            expr: Some(expr(vec![binop("...", unit(0.0, ""), unit(3.0, ""))], 1)),
            block: Some(block(vec![prop("z-index", vec![ident("i")], 2)], 1)),
            lineno: Some(1),
        });
        assert_eq!(
            render_all(&[node]),
            "@for $i from 0 to 3 {\n  z-index: $i;\n}"
        );
    }

    #[test]
    fn test_key_value_loop() {
        let node = Node::Each(Each {
            val: "name".into(),
            key: Some("color".into()),
            expr: Some(expr(vec![ident("palette")], 1)),
            block: Some(block(
                vec![group(
                    ".#{$name}",
                    2,
                    vec![prop("color", vec![ident("color")], 3)],
                )],
                1,
            )),
            lineno: Some(1),
        });
        assert_eq!(
            render_all(&[node]),
            "@each $name, $color in $palette {\n  .#{$name} {\n    color: $color;\n  }\n}"
        );
    }

    #[test]
    fn test_literal_list_loop() {
        let node = Node::Each(Each {
            val: "side".into(),
            key: None,
            expr: Some(expr(vec![lit("top"), lit("left")], 1)),
            block: Some(block(vec![prop("margin", vec![ident("side")], 2)], 1)),
            lineno: Some(1),
        });
        assert_eq!(
            render_all(&[node]),
            "@each $side in top, left {\n  margin: $side;\n}"
        );
    }

    #[test]
    fn test_loop_without_iterable_is_an_error() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        let node = Each {
            val: "i".into(),
            key: None,
            expr: None,
            block: Some(block(vec![], 1)),
            lineno: Some(1),
        };
        assert_eq!(
            each(&node, &mut ctx),
            Err(CodegenError::missing("Each", "expr"))
        );
    }
}
