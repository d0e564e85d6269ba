//! Simplified intermediate representation.
//!
//! The IR is a closed set of value nodes. Statements and expressions share
//! one `Node` type: a top-level program is just `Vec<Node>`, and bodies of
//! `If` / `For` / `While` are nested `Vec<Node>` in source order.

pub mod display;

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

// ─── Nodes ─────────────────────────────────────────────────────────

/// A single IR node.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Node {
    Literal(Literal),
    Reference(String),
    Reserved(Reserved),
    Operation {
        op: Op,
        args: Vec<Node>,
    },
    Assignment {
        name: String,
        value: Box<Node>,
    },
    Call {
        callee: Box<Node>,
        args: Vec<Node>,
        kwargs: Vec<Keyword>,
    },
    Return(Box<Node>),
    If {
        test: Box<Node>,
        body: Vec<Node>,
        orelse: Vec<Node>,
    },
    /// `target` is always a single name; destructuring targets never reach the IR.
    For {
        target: String,
        iter: Box<Node>,
        body: Vec<Node>,
    },
    While {
        test: Box<Node>,
        body: Vec<Node>,
    },
    Tuple(Vec<Node>),
    List(Vec<Node>),
    Set(BTreeSet<Node>),
    Mapping(#[serde(serialize_with = "serialize_pairs")] BTreeMap<Node, Node>),
}

/// A keyword argument of a call: `name=value`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Keyword {
    pub name: String,
    pub value: Node,
}

impl Node {
    pub fn int(value: i64) -> Self {
        Node::Literal(Literal::Int(value))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Node::Literal(Literal::Str(value.into()))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Node::Reference(name.into())
    }

    pub fn operation(op: Op, args: Vec<Node>) -> Self {
        debug_assert!(
            op.arity().accepts(args.len()),
            "{} applied to {} operands",
            op.name(),
            args.len()
        );
        Node::Operation { op, args }
    }

    pub fn assignment(name: impl Into<String>, value: Node) -> Self {
        Node::Assignment {
            name: name.into(),
            value: Box::new(value),
        }
    }

    /// Whether this node only appears in statement position.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            Node::Assignment { .. }
                | Node::Return(_)
                | Node::If { .. }
                | Node::For { .. }
                | Node::While { .. }
                | Node::Reserved(Reserved::Break | Reserved::Continue | Reserved::Pass)
        )
    }

    /// Values of the keyword arguments of a call, without their names.
    ///
    /// Empty for every node that is not a `Call`.
    pub fn kwarg_values(&self) -> Vec<&Node> {
        match self {
            Node::Call { kwargs, .. } => kwargs.iter().map(|kw| &kw.value).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        Node::Literal(literal)
    }
}

impl From<Reserved> for Node {
    fn from(reserved: Reserved) -> Self {
        Node::Reserved(reserved)
    }
}

fn serialize_pairs<S: Serializer>(
    map: &BTreeMap<Node, Node>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(map.iter())
}

// ─── Literals ──────────────────────────────────────────────────────

/// A source literal. Floats compare by bit pattern so that literals can be
/// used as mapping keys and set members.
#[derive(Clone, Debug, Serialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl Literal {
    fn rank(&self) -> u8 {
        match self {
            Literal::Int(_) => 0,
            Literal::Float(_) => 1,
            Literal::Str(_) => 2,
            Literal::Bytes(_) => 3,
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Literal {}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Literal::Int(a), Literal::Int(b)) => a.cmp(b),
            (Literal::Float(a), Literal::Float(b)) => a.total_cmp(b),
            (Literal::Str(a), Literal::Str(b)) => a.cmp(b),
            (Literal::Bytes(a), Literal::Bytes(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Literal::Int(n) => n.hash(state),
            Literal::Float(x) => x.to_bits().hash(state),
            Literal::Str(s) => s.hash(state),
            Literal::Bytes(b) => b.hash(state),
        }
    }
}

// ─── Reserved tokens ───────────────────────────────────────────────

/// Keyword literals and bare control-flow statements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Reserved {
    True,
    False,
    None,
    Break,
    Continue,
    Pass,
}

impl Reserved {
    pub fn name(self) -> &'static str {
        match self {
            Reserved::True => "True",
            Reserved::False => "False",
            Reserved::None => "None",
            Reserved::Break => "Break",
            Reserved::Continue => "Continue",
            Reserved::Pass => "Pass",
        }
    }

    pub fn from_bool(value: bool) -> Self {
        if value {
            Reserved::True
        } else {
            Reserved::False
        }
    }
}

// ─── Operators ─────────────────────────────────────────────────────

/// Operator names, exactly as the host grammar spells them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Op {
    // ── Arithmetic / bitwise ──
    Add,
    Sub,
    Mult,
    MatMult,
    Div,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
    FloorDiv,

    // ── Unary ──
    Invert,
    Not,
    UAdd,
    USub,

    // ── Comparison ──
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,

    // ── Boolean chains ──
    And,
    Or,
}

/// How many operands an operator takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    /// Boolean chains: one or more operands.
    Variadic,
}

impl Arity {
    pub fn accepts(self, operands: usize) -> bool {
        match self {
            Arity::Unary => operands == 1,
            Arity::Binary => operands == 2,
            Arity::Variadic => operands >= 1,
        }
    }
}

impl Op {
    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "Add",
            Op::Sub => "Sub",
            Op::Mult => "Mult",
            Op::MatMult => "MatMult",
            Op::Div => "Div",
            Op::Mod => "Mod",
            Op::Pow => "Pow",
            Op::LShift => "LShift",
            Op::RShift => "RShift",
            Op::BitOr => "BitOr",
            Op::BitXor => "BitXor",
            Op::BitAnd => "BitAnd",
            Op::FloorDiv => "FloorDiv",
            Op::Invert => "Invert",
            Op::Not => "Not",
            Op::UAdd => "UAdd",
            Op::USub => "USub",
            Op::Eq => "Eq",
            Op::NotEq => "NotEq",
            Op::Lt => "Lt",
            Op::LtE => "LtE",
            Op::Gt => "Gt",
            Op::GtE => "GtE",
            Op::Is => "Is",
            Op::IsNot => "IsNot",
            Op::In => "In",
            Op::NotIn => "NotIn",
            Op::And => "And",
            Op::Or => "Or",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Op::Invert | Op::Not | Op::UAdd | Op::USub => Arity::Unary,
            Op::And | Op::Or => Arity::Variadic,
            _ => Arity::Binary,
        }
    }
}
