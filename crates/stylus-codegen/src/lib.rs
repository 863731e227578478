//! Stylus to SCSS/Less code generator
//!
//! Renders a parsed Stylus tree as brace-and-semicolon source. A single
//! recursive pass walks the tree; each node kind has one emitter, and all
//! emitters share a [`Context`] that carries indentation, the source-line
//! tracker, mode flags, and the symbol registries used to decide how names
//! are spelled.
//!
//! ```text
//! Root → convert() → String
//! ```
//!
//! # Example
//!
//! ```
//! use stylus_ast::build::{group, prop, lit};
//! use stylus_ast::Root;
//! use stylus_codegen::{convert, Options};
//!
//! let root = Root { nodes: vec![group(".a", 1, vec![prop("color", vec![lit("red")], 2)])] };
//! let scss = convert(&root, &Options::default()).unwrap();
//! assert_eq!(scss, ".a {\n  color: red;\n}\n");
//! ```

pub mod at_rules;
pub mod blocks;
pub mod classify;
pub mod comments;
pub mod context;
pub mod control;
pub mod declarations;
pub mod expressions;
pub mod functions;
pub mod options;
pub mod symbols;
pub mod visitor;

pub use context::{Context, Mode};
pub use options::{Dialect, Options};

use stylus_ast::Root;

/// Code generation error. Any error aborts the whole conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    /// A child the construct cannot be rendered without is absent.
    #[error("Codegen error: {construct} is missing its {field}")]
    MissingNode {
        construct: &'static str,
        field: &'static str,
    },

    /// The keyframes body starts with an expression the parser never resolved.
    #[error("Codegen error: please check that @keyframes {name} is written correctly")]
    UnresolvedKeyframes { name: String },
}

impl CodegenError {
    pub fn missing(construct: &'static str, field: &'static str) -> Self {
        CodegenError::MissingNode { construct, field }
    }
}

/// Render a parsed stylesheet in the dialect selected by `options`.
///
/// Every call starts from a fresh [`Context`]; nothing carries over between
/// conversions. The result is indented by `options.host_indent` and ends
/// with exactly one newline.
#[tracing::instrument(level = "trace", skip_all, fields(nodes = root.nodes.len()))]
pub fn convert(root: &Root, options: &Options) -> Result<String, CodegenError> {
    let mut ctx = Context::new(options);
    let rendered = visitor::render_nodes(&root.nodes, &mut ctx)?;
    tracing::debug!(
        variables = ctx.symbols.variable_count(),
        maps = ctx.symbols.map_count(),
        last_line = ctx.lines.last(),
        "conversion finished"
    );

    let mut output = indent_host(&rendered, options.host_indent);
    output.push('\n');
    Ok(output)
}

/// Prefix every line that has visible content with `width` spaces.
fn indent_host(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let pad = " ".repeat(width);
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
