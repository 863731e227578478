//! Stylus syntax tree
//!
//! The input of the emitter: a parsed Stylus stylesheet as a closed tree of
//! node kinds. Trees are produced by an external parser and handed over as
//! JSON (`__type`-tagged objects), or assembled in code with [`build`].
//!
//! # Example
//!
//! ```
//! use stylus_ast::Root;
//!
//! let root = Root::from_json(r#"{ "nodes": [] }"#).unwrap();
//! assert!(root.nodes.is_empty());
//! ```

pub mod ast;
pub mod build;

pub use ast::{Block, Expression, Ident, Node, Root};

/// Tree loading error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Tree error at line {line}, column {column}: {message}")]
pub struct TreeError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for TreeError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}

impl Root {
    /// Load a tree from its JSON form.
    pub fn from_json(source: &str) -> Result<Root, TreeError> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::ast::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_root() {
        let root = Root::from_json("{}").unwrap();
        assert_eq!(root, Root::default());
    }

    #[test]
    fn test_group_with_property() {
        let root = Root::from_json(
            r#"{
              "__type": "Root",
              "nodes": [{
                "__type": "Group",
                "lineno": 1,
                "nodes": [{ "__type": "Selector", "segments": [{ "__type": "Literal", "val": ".a", "lineno": 1 }] }],
                "block": {
                  "__type": "Block",
                  "lineno": 1,
                  "nodes": [{
                    "__type": "Property",
                    "lineno": 2,
                    "segments": [{ "__type": "Literal", "val": "width" }],
                    "expr": { "__type": "Expression", "lineno": 2, "nodes": [{ "__type": "Unit", "val": 10, "type": "px" }] }
                  }]
                }
              }]
            }"#,
        )
        .unwrap();

        assert_eq!(root.nodes.len(), 1);
        let Node::Group(group) = &root.nodes[0] else {
            panic!("expected group, got {}", root.nodes[0].kind());
        };
        assert_eq!(group.lineno, Some(1));
        let block = group.block.as_ref().unwrap();
        let Node::Property(prop) = &block.nodes[0] else {
            panic!("expected property");
        };
        assert_eq!(prop.lineno, Some(2));
        assert_eq!(
            prop.expr.nodes[0],
            Node::Unit(Unit {
                val: 10.0,
                unit: Some("px".into())
            })
        );
    }

    #[test]
    fn test_object_keeps_key_order() {
        let root = Root::from_json(
            r#"{ "nodes": [{ "__type": "Object", "lineno": 3, "vals": {
                "zeta": { "__type": "Null" },
                "alpha": { "__type": "Boolean", "val": true }
            } }] }"#,
        )
        .unwrap();
        let Node::Object(obj) = &root.nodes[0] else {
            panic!("expected object");
        };
        let keys: Vec<&str> = obj.vals.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_renamed_fields() {
        let root = Root::from_json(
            r##"{ "nodes": [
                { "__type": "Comment", "str": "/* hi */", "suppress": true, "lineno": 1 },
                { "__type": "Atrule", "type": "font-face", "lineno": 2 },
                { "__type": "RGBA", "raw": "#fff" }
            ] }"##,
        )
        .unwrap();
        assert!(matches!(&root.nodes[0], Node::Comment(c) if c.text == "/* hi */" && c.suppress));
        assert!(matches!(&root.nodes[1], Node::Atrule(a) if a.name == "font-face" && a.block.is_none()));
        assert_eq!(root.nodes[2].kind(), "RGBA");
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = Root::from_json(r#"{ "nodes": [{ "__type": "Bogus" }] }"#).unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.message.contains("Bogus"));
    }

    #[test]
    fn test_children_and_lineno() {
        let node = build::expr_node(vec![build::lit("a"), build::lit("b")], 4);
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.lineno(), Some(4));
        assert!(build::unit(1.0, "").children().is_empty());
        assert_eq!(build::unit(1.0, "").lineno(), None);
    }

    #[test]
    fn test_ident_value_presence() {
        let bare = build::ident("a");
        assert!(bare.as_bare_ident().is_some());

        let null_bound = Node::Ident(Ident {
            name: "a".into(),
            val: Some(Box::new(Node::Null)),
            mixin: false,
            rest: false,
            lineno: None,
        });
        assert!(null_bound.as_bare_ident().is_some());

        let bound = build::assign("a", vec![build::unit(1.0, "")], 1);
        assert!(bound.as_bare_ident().is_none());
    }
}
