//! At-rules: keyframes, media queries, supports, namespace, charset, import,
//! extend, and any other `@name` rule passed through as-is.

use stylus_ast::ast::{
    Atrule, Charset, Extend, Feature, Import, Keyframes, Media, Namespace, Node, Query, QueryList,
    Supports,
};

use crate::context::{Context, Mode};
use crate::visitor::{render, render_opt, render_segments};
use crate::{blocks, expressions, CodegenError};

/// Engine prefixes emitted ahead of the standard `@keyframes`.
pub const VENDOR_PREFIXES: [&str; 5] = ["-webkit-", "-moz-", "-ms-", "-o-", "-khtml-"];

/// `@keyframes name { … }`, preceded by one vendor-prefixed copy per engine
/// when autoprefixing is on. The body is rendered once and shared by every
/// copy.
pub fn keyframes(kf: &Keyframes, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let block = kf
        .block
        .as_ref()
        .ok_or_else(|| CodegenError::missing("Keyframes", "block"))?;

    ctx.with_mode(Mode::KEYFRAMES, |ctx| {
        let before = ctx.lead(kf.lineno);
        let name = render_segments(&kf.segments, ctx)?;
        if matches!(block.nodes.first(), Some(Node::Expression(_))) {
            return Err(CodegenError::UnresolvedKeyframes { name });
        }
        let rule = format!("{name}{}", blocks::block(block, ctx)?);

        let mut out = before;
        if ctx.options.autoprefix {
            for prefix in VENDOR_PREFIXES {
                out.push_str(&format!("@{prefix}keyframes {rule}\n{}", ctx.indentation()));
            }
        }
        out.push_str(&format!("@keyframes {rule}"));
        Ok(out)
    })
}

pub fn media(media: &Media, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let block = media
        .block
        .as_ref()
        .ok_or_else(|| CodegenError::missing("Media", "block"))?;
    let before = ctx.lead(media.lineno);
    let query = render(&media.val, ctx)?;
    Ok(format!("{before}@media {query}{}", blocks::block(block, ctx)?))
}

pub fn query_list(list: &QueryList, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let queries = list
        .nodes
        .iter()
        .map(|node| render(node, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(queries.join(", "))
}

/// `[only|not] type and (feature) and …`
pub fn query(query: &Query, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let media_type = render_opt(query.media_type.as_deref(), ctx)?;

    let mut parts = Vec::with_capacity(query.nodes.len() + 1);
    if !media_type.is_empty() {
        parts.push(media_type);
    }
    for node in &query.nodes {
        parts.push(render(node, ctx)?);
    }
    let conditions = parts.join(" and ");
    // A predicate binds to the whole query, with or without a media type.
    Ok(match &query.predicate {
        Some(predicate) => format!("{predicate} {conditions}"),
        None => conditions,
    })
}

pub fn feature(feature: &Feature, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let name = render_segments(&feature.segments, ctx)?;
    match &feature.expr {
        Some(value) => Ok(format!("({name}: {})", expressions::expression(value, ctx)?)),
        None => Ok(format!("({name})")),
    }
}

pub fn supports(supports: &Supports, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let block = supports
        .block
        .as_ref()
        .ok_or_else(|| CodegenError::missing("Supports", "block"))?;
    let before = ctx.lead(supports.lineno);
    let condition = render(&supports.condition, ctx)?;
    Ok(format!(
        "{before}@supports {condition}{}",
        blocks::block(block, ctx)?
    ))
}

pub fn namespace(ns: &Namespace, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let before = ctx.lead(ns.lineno);
    let value = ctx.with_mode(Mode::NAMESPACE, |ctx| render(&ns.val, ctx))?;
    let prefix = ns
        .prefix
        .as_deref()
        .map(|prefix| format!("{prefix} "))
        .unwrap_or_default();
    Ok(format!(
        "{before}@namespace {prefix}{};",
        value.trim_end_matches(';')
    ))
}

pub fn charset(charset: &Charset, ctx: &mut Context<'_>) -> String {
    let before = ctx.lead(charset.lineno);
    format!("{before}@charset {};", expressions::string(&charset.val))
}

/// `@import 'path';` with a `.styl` suffix rewritten for the output dialect.
/// The quote is taken from the first quoted piece of the path.
pub fn import(import: &Import, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let before = ctx.lead(import.lineno);
    let mut quote = "";
    let mut path = String::new();
    for node in &import.path.nodes {
        match node {
            Node::String(s) => {
                path.push_str(&s.val);
                if quote.is_empty() {
                    quote = s.quote.as_str();
                }
            }
            other => path.push_str(&render(other, ctx)?),
        }
    }

    let path = match path.strip_suffix(".styl") {
        Some(stem) => format!("{stem}{}", ctx.options.dialect.suffix()),
        None => path,
    };
    Ok(format!("{before}@import {quote}{path}{quote};"))
}

pub fn extend(extend: &Extend, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    if extend.selectors.is_empty() {
        return Err(CodegenError::missing("Extend", "selectors"));
    }
    let before = ctx.lead(extend.lineno);
    let selectors = extend
        .selectors
        .iter()
        .map(|selector| render(selector, ctx).map(|text| text.trim_start().to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("{before}@extend {};", selectors.join(", ")))
}

/// Any other at-rule, with or without a block.
pub fn atrule(rule: &Atrule, ctx: &mut Context<'_>) -> Result<String, CodegenError> {
    let before = ctx.lead(rule.lineno);
    let mut head = format!("@{}", rule.name);
    if !rule.segments.is_empty() {
        head.push(' ');
        head.push_str(&render_segments(&rule.segments, ctx)?);
    }
    let tail = match &rule.block {
        Some(block) => blocks::block(block, ctx)?,
        None => ";".to_string(),
    };
    Ok(format!("{before}{head}{tail}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Dialect, Options};
    use crate::visitor::render_nodes;
    use pretty_assertions::assert_eq;
    use stylus_ast::ast::{Literal, Str};
    use stylus_ast::build::{block, expr, expr_node, group, lit, prop, selector, string, unit};

    fn render_with(options: &Options, nodes: &[Node]) -> String {
        let mut ctx = Context::new(options);
        render_nodes(nodes, &mut ctx).unwrap()
    }

    fn render_all(nodes: &[Node]) -> String {
        render_with(&Options::default(), nodes)
    }

    fn import_of(path: Vec<Node>, line: usize) -> Node {
        Node::Import(Import {
            path: expr(path, line),
            lineno: Some(line),
        })
    }

    // =========================================================================
    // Keyframes
    // =========================================================================

    #[test]
    fn test_keyframes_unresolved_body() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        let kf = Keyframes {
            segments: vec![lit("fade")],
            block: Some(block(vec![expr_node(vec![lit("from")], 2)], 1)),
            lineno: Some(1),
        };
        assert_eq!(
            keyframes(&kf, &mut ctx),
            Err(CodegenError::UnresolvedKeyframes {
                name: "fade".into()
            })
        );
    }

    #[test]
    fn test_keyframes_prefixes_are_separated_by_newlines() {
        let kf = Node::Keyframes(Keyframes {
            segments: vec![lit("pulse")],
            block: Some(block(vec![group("to", 1, vec![])], 1)),
            lineno: Some(1),
        });
        let out = render_all(&[kf]);
        let heads: Vec<&str> = out
            .lines()
            .filter(|line| line.contains("keyframes"))
            .collect();
        assert_eq!(
            heads,
            vec![
                "@-webkit-keyframes pulse {",
                "@-moz-keyframes pulse {",
                "@-ms-keyframes pulse {",
                "@-o-keyframes pulse {",
                "@-khtml-keyframes pulse {",
                "@keyframes pulse {",
            ]
        );
    }

    // =========================================================================
    // Media and supports
    // =========================================================================

    #[test]
    fn test_media_query() {
        let query = Node::Query(Query {
            nodes: vec![Node::Feature(Feature {
                segments: vec![lit("max-width")],
                expr: Some(expr(vec![unit(600.0, "px")], 1)),
            })],
            media_type: Some(Box::new(lit("screen"))),
            predicate: None,
        });
        let media = Node::Media(Media {
            val: Box::new(Node::QueryList(QueryList { nodes: vec![query] })),
            block: Some(block(vec![prop("display", vec![lit("none")], 2)], 1)),
            lineno: Some(1),
        });
        assert_eq!(
            render_all(&[media]),
            "@media screen and (max-width: 600px) {\n  display: none;\n}"
        );
    }

    #[test]
    fn test_query_predicate_and_bare_feature() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        let only = Node::Query(Query {
            nodes: vec![Node::Feature(Feature {
                segments: vec![lit("color")],
                expr: None,
            })],
            media_type: Some(Box::new(lit("screen"))),
            predicate: Some("only".into()),
        });
        let print = Node::Query(Query {
            nodes: vec![],
            media_type: Some(Box::new(lit("print"))),
            predicate: None,
        });
        let list = Node::QueryList(QueryList {
            nodes: vec![only, print],
        });
        assert_eq!(
            render(&list, &mut ctx).unwrap(),
            "only screen and (color), print"
        );
    }

    #[test]
    fn test_query_predicate_without_media_type() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        let query = Node::Query(Query {
            nodes: vec![Node::Feature(Feature {
                segments: vec![lit("color")],
                expr: None,
            })],
            media_type: None,
            predicate: Some("not".into()),
        });
        assert_eq!(render(&query, &mut ctx).unwrap(), "not (color)");
    }

    #[test]
    fn test_supports() {
        let supports = Node::Supports(Supports {
            condition: Box::new(lit("(display: grid)")),
            block: Some(block(vec![prop("display", vec![lit("grid")], 2)], 1)),
            lineno: Some(1),
        });
        assert_eq!(
            render_all(&[supports]),
            "@supports (display: grid) {\n  display: grid;\n}"
        );
    }

    // =========================================================================
    // Statements
    // =========================================================================

    #[test]
    fn test_import_rewrites_suffix() {
        let import = import_of(vec![string("base.styl", "'")], 1);
        assert_eq!(render_all(&[import.clone()]), "@import 'base.scss';");

        let less = Options::default().with_dialect(Dialect::Less);
        assert_eq!(render_with(&less, &[import]), "@import 'base.less';");
    }

    #[test]
    fn test_import_keeps_other_paths() {
        let import = import_of(vec![string("reset.css", "\"")], 1);
        assert_eq!(render_all(&[import]), "@import \"reset.css\";");
    }

    #[test]
    fn test_charset_and_namespace() {
        let charset = Node::Charset(Charset {
            val: Str {
                val: "utf-8".into(),
                quote: "\"".into(),
            },
            lineno: Some(1),
        });
        let namespace = Node::Namespace(Namespace {
            val: Box::new(string("http://www.w3.org/2000/svg", "'")),
            prefix: Some("svg".into()),
            lineno: Some(2),
        });
        assert_eq!(
            render_all(&[charset, namespace]),
            "@charset \"utf-8\";\n@namespace svg 'http://www.w3.org/2000/svg';"
        );
    }

    #[test]
    fn test_extend_inside_rule_set() {
        let extend = Node::Extend(Extend {
            selectors: vec![selector(".button", 2), selector(".link", 2)],
            lineno: Some(2),
        });
        let out = render_all(&[group(".primary", 1, vec![extend])]);
        assert_eq!(out, ".primary {\n  @extend .button, .link;\n}");
    }

    #[test]
    fn test_extend_without_selectors_is_an_error() {
        let options = Options::default();
        let mut ctx = Context::new(&options);
        let extend = Extend {
            selectors: vec![],
            lineno: Some(1),
        };
        assert_eq!(
            super::extend(&extend, &mut ctx),
            Err(CodegenError::missing("Extend", "selectors"))
        );
    }

    #[test]
    fn test_generic_at_rules() {
        let page = Node::Atrule(Atrule {
            name: "page".into(),
            segments: vec![Node::Literal(Literal {
                val: ":first".into(),
                lineno: Some(1),
            })],
            block: Some(block(vec![prop("margin", vec![unit(1.0, "in")], 2)], 1)),
            lineno: Some(1),
        });
        let layer = Node::Atrule(Atrule {
            name: "layer".into(),
            segments: vec![lit("base")],
            block: None,
            lineno: Some(4),
        });
        assert_eq!(
            render_all(&[page, layer]),
            "@page :first {\n  margin: 1in;\n}\n\n@layer base;"
        );
    }
}
