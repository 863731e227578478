//! Syntax tree for parsed Stylus sources.
//!
//! Nodes arrive from the upstream parser as `__type`-tagged objects and are
//! never mutated by the emitter. Every source-derived node records the line it
//! started on; synthetic nodes leave `lineno` empty.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

/// A complete parsed stylesheet: the ordered top-level statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

// ---------------------------------------------------------------------------
// Node kinds
// ---------------------------------------------------------------------------

/// Any node of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__type")]
pub enum Node {
    /// Absent value (`null` in the source tree).
    Null,

    /// Raw text: selector segments, keywords, property names.
    Literal(Literal),

    /// A name, optionally bound to a value (`foo = 10px`, `add(a, b)`).
    Ident(Ident),

    /// Number with an optional unit: `10px`, `1.5`.
    Unit(Unit),

    /// Quoted string: `'a.png'`.
    String(Str),

    /// `true` / `false`
    Boolean(Boolean),

    /// Color literal, carried as written.
    #[serde(rename = "RGBA")]
    Rgba(Rgba),

    /// Space separated operands: `1px solid red`.
    Expression(Expression),

    /// Call arguments.
    Arguments(Arguments),

    /// Statement list of a rule, callable, or at-rule.
    Block(Block),

    /// One selector of a rule set.
    Selector(Selector),

    /// A rule set: comma separated selectors plus a block.
    Group(Group),

    /// A declaration: `color: red`.
    Property(Property),

    /// A call: `darken(c, 10%)`, or a mixin call with an optional block.
    Call(Call),

    /// A user function or mixin definition.
    Function(Function),

    /// `return expr`
    Return(Return),

    /// `if` / `unless` with chained alternatives.
    If(If),

    /// `for val[, key] in expr`
    Each(Each),

    /// Binary operation: `a + b`, `1..10`, `a && b`.
    BinOp(BinOp),

    /// Unary operation: `!a`, `-a`.
    UnaryOp(UnaryOp),

    /// `@keyframes name`
    Keyframes(Keyframes),

    /// `@media query-list`
    Media(Media),

    /// Comma separated media queries.
    QueryList(QueryList),

    /// One media query: `screen and (max-width: 600px)`.
    Query(Query),

    /// Media feature: `(max-width: 600px)`.
    Feature(Feature),

    /// `@supports condition`
    Supports(Supports),

    /// `@namespace [prefix] value`
    Namespace(Namespace),

    /// `@charset 'utf-8'`
    Charset(Charset),

    /// `@import 'path'`
    Import(Import),

    /// `@extend selector`
    Extend(Extend),

    /// Any other at-rule: `@font-face`, `@page`.
    Atrule(Atrule),

    /// Block comment.
    Comment(Comment),

    /// Member access: `theme.primary`.
    Member(Member),

    /// Object literal: `{ primary: red }`.
    Object(Object),
}

impl Node {
    /// The node's kind tag, as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "Null",
            Node::Literal(_) => "Literal",
            Node::Ident(_) => "Ident",
            Node::Unit(_) => "Unit",
            Node::String(_) => "String",
            Node::Boolean(_) => "Boolean",
            Node::Rgba(_) => "RGBA",
            Node::Expression(_) => "Expression",
            Node::Arguments(_) => "Arguments",
            Node::Block(_) => "Block",
            Node::Selector(_) => "Selector",
            Node::Group(_) => "Group",
            Node::Property(_) => "Property",
            Node::Call(_) => "Call",
            Node::Function(_) => "Function",
            Node::Return(_) => "Return",
            Node::If(_) => "If",
            Node::Each(_) => "Each",
            Node::BinOp(_) => "BinOp",
            Node::UnaryOp(_) => "UnaryOp",
            Node::Keyframes(_) => "Keyframes",
            Node::Media(_) => "Media",
            Node::QueryList(_) => "QueryList",
            Node::Query(_) => "Query",
            Node::Feature(_) => "Feature",
            Node::Supports(_) => "Supports",
            Node::Namespace(_) => "Namespace",
            Node::Charset(_) => "Charset",
            Node::Import(_) => "Import",
            Node::Extend(_) => "Extend",
            Node::Atrule(_) => "Atrule",
            Node::Comment(_) => "Comment",
            Node::Member(_) => "Member",
            Node::Object(_) => "Object",
        }
    }

    /// The ordered child list. Leaf kinds have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Expression(e) => &e.nodes,
            Node::Arguments(a) => &a.nodes,
            Node::Block(b) => &b.nodes,
            Node::Group(g) => &g.nodes,
            Node::QueryList(q) => &q.nodes,
            Node::Query(q) => &q.nodes,
            _ => &[],
        }
    }

    /// Source line the node starts on, if it came from source text.
    pub fn lineno(&self) -> Option<usize> {
        match self {
            Node::Literal(n) => n.lineno,
            Node::Ident(n) => n.lineno,
            Node::Expression(n) => n.lineno,
            Node::Block(n) => n.lineno,
            Node::Selector(n) => n.lineno,
            Node::Group(n) => n.lineno,
            Node::Property(n) => n.lineno,
            Node::Call(n) => n.lineno,
            Node::Function(n) => n.lineno,
            Node::Return(n) => n.lineno,
            Node::If(n) => n.lineno,
            Node::Each(n) => n.lineno,
            Node::Keyframes(n) => n.lineno,
            Node::Media(n) => n.lineno,
            Node::Supports(n) => n.lineno,
            Node::Namespace(n) => n.lineno,
            Node::Charset(n) => n.lineno,
            Node::Import(n) => n.lineno,
            Node::Extend(n) => n.lineno,
            Node::Atrule(n) => n.lineno,
            Node::Comment(n) => n.lineno,
            Node::Object(n) => n.lineno,
            _ => None,
        }
    }

    /// The identifier, when this node is a bare name without a bound value.
    pub fn as_bare_ident(&self) -> Option<&Ident> {
        match self {
            Node::Ident(ident) if !ident.has_value() => Some(ident),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Leaves
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub val: String,
    pub lineno: Option<usize>,
}

/// An identifier. `val` holds the bound value of an assignment, a function
/// definition, or a parameter default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
    #[serde(default)]
    pub val: Option<Box<Node>>,
    /// Set for placeholders inside mixin bodies (`block`, interpolated args).
    #[serde(default)]
    pub mixin: bool,
    /// Rest parameter: `args...`
    #[serde(default)]
    pub rest: bool,
    pub lineno: Option<usize>,
}

impl Ident {
    /// Whether the identifier is bound to something other than `null`.
    pub fn has_value(&self) -> bool {
        !matches!(self.val.as_deref(), None | Some(Node::Null))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub val: f64,
    #[serde(default, rename = "type")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Str {
    pub val: String,
    #[serde(default)]
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boolean {
    pub val: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub raw: String,
}

// ---------------------------------------------------------------------------
// Composites
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    #[serde(default)]
    pub nodes: Vec<Node>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arguments {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub nodes: Vec<Node>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    #[serde(default)]
    pub segments: Vec<Node>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// The selectors, in source order.
    #[serde(default)]
    pub nodes: Vec<Node>,
    pub block: Option<Block>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Name pieces; interpolated pieces are `Expression` nodes.
    #[serde(default)]
    pub segments: Vec<Node>,
    #[serde(default)]
    pub expr: Expression,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    #[serde(default)]
    pub args: Arguments,
    /// Block passed to a mixin call.
    pub block: Option<Block>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Ident>,
    pub block: Option<Block>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    #[serde(default)]
    pub expr: Expression,
    pub lineno: Option<usize>,
}

/// A conditional. `elses` holds nested `If` nodes (`else if`) and a final
/// `Block` (`else`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub cond: Box<Node>,
    pub block: Option<Block>,
    #[serde(default)]
    pub elses: Vec<Node>,
    /// `unless`
    #[serde(default)]
    pub negate: bool,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Each {
    /// Loop variable.
    pub val: String,
    /// Optional second loop variable.
    #[serde(default)]
    pub key: Option<String>,
    /// The iterable.
    pub expr: Option<Expression>,
    pub block: Option<Block>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinOp {
    pub op: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOp {
    pub op: String,
    pub expr: Box<Node>,
}

// ---------------------------------------------------------------------------
// At-rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframes {
    #[serde(default)]
    pub segments: Vec<Node>,
    pub block: Option<Block>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub val: Box<Node>,
    pub block: Option<Block>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryList {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Features, joined with `and`.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Media type: `screen`, `print`.
    #[serde(default, rename = "type")]
    pub media_type: Option<Box<Node>>,
    /// `only` / `not`
    #[serde(default)]
    pub predicate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub segments: Vec<Node>,
    #[serde(default)]
    pub expr: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supports {
    pub condition: Box<Node>,
    pub block: Option<Block>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub val: Box<Node>,
    #[serde(default)]
    pub prefix: Option<String>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charset {
    pub val: Str,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    /// String or literal pieces of the path.
    pub path: Expression,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extend {
    #[serde(default)]
    pub selectors: Vec<Node>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atrule {
    /// Rule name without `@`.
    #[serde(rename = "type")]
    pub name: String,
    #[serde(default)]
    pub segments: Vec<Node>,
    pub block: Option<Block>,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Full comment text including delimiters.
    #[serde(rename = "str")]
    pub text: String,
    /// Dropped by compressed output unless preserved.
    #[serde(default)]
    pub suppress: bool,
    pub lineno: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Key/value pairs in source order.
    #[serde(default)]
    pub vals: IndexMap<String, Node>,
    pub lineno: Option<usize>,
}
