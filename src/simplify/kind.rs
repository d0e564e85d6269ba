//! The closed set of generic syntax tree node kinds the simplifier knows.
//!
//! Every module, statement and expression kind of the host grammar has a
//! variant here. The simplifier only reduces the kinds for which
//! [`NodeKind::is_supported`] is true; everything else is rejected with the
//! kind attached to the error.

use std::fmt;

use rustpython_parser::ast::{Expr, Mod, Stmt};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // ── Roots ──
    Module,
    Interactive,
    Expression,
    FunctionType,

    // ── Statements ──
    FunctionDef,
    AsyncFunctionDef,
    ClassDef,
    Return,
    Delete,
    Assign,
    AugAssign,
    AnnAssign,
    For,
    AsyncFor,
    While,
    If,
    With,
    AsyncWith,
    Match,
    Raise,
    Try,
    TryStar,
    Assert,
    Import,
    ImportFrom,
    Global,
    Nonlocal,
    Expr,
    Pass,
    Break,
    Continue,

    // ── Expressions ──
    BoolOp,
    NamedExpr,
    BinOp,
    UnaryOp,
    Lambda,
    IfExp,
    Dict,
    Set,
    ListComp,
    SetComp,
    DictComp,
    GeneratorExp,
    Await,
    Yield,
    YieldFrom,
    Compare,
    Call,
    FormattedValue,
    JoinedStr,
    Constant,
    Attribute,
    Subscript,
    Starred,
    Name,
    List,
    Tuple,
    Slice,

    // ── Auxiliary ──
    Keyword,
    /// A statement kind newer than this enumeration.
    UnknownStmt,
    /// An expression kind newer than this enumeration.
    UnknownExpr,
}

impl NodeKind {
    pub fn of_mod(node: &Mod) -> Self {
        match node {
            Mod::Module(_) => NodeKind::Module,
            Mod::Interactive(_) => NodeKind::Interactive,
            Mod::Expression(_) => NodeKind::Expression,
            Mod::FunctionType(_) => NodeKind::FunctionType,
        }
    }

    #[allow(unreachable_patterns)]
    pub fn of_stmt(stmt: &Stmt) -> Self {
        match stmt {
            Stmt::FunctionDef(_) => NodeKind::FunctionDef,
            Stmt::AsyncFunctionDef(_) => NodeKind::AsyncFunctionDef,
            Stmt::ClassDef(_) => NodeKind::ClassDef,
            Stmt::Return(_) => NodeKind::Return,
            Stmt::Delete(_) => NodeKind::Delete,
            Stmt::Assign(_) => NodeKind::Assign,
            Stmt::AugAssign(_) => NodeKind::AugAssign,
            Stmt::AnnAssign(_) => NodeKind::AnnAssign,
            Stmt::For(_) => NodeKind::For,
            Stmt::AsyncFor(_) => NodeKind::AsyncFor,
            Stmt::While(_) => NodeKind::While,
            Stmt::If(_) => NodeKind::If,
            Stmt::With(_) => NodeKind::With,
            Stmt::AsyncWith(_) => NodeKind::AsyncWith,
            Stmt::Match(_) => NodeKind::Match,
            Stmt::Raise(_) => NodeKind::Raise,
            Stmt::Try(_) => NodeKind::Try,
            Stmt::TryStar(_) => NodeKind::TryStar,
            Stmt::Assert(_) => NodeKind::Assert,
            Stmt::Import(_) => NodeKind::Import,
            Stmt::ImportFrom(_) => NodeKind::ImportFrom,
            Stmt::Global(_) => NodeKind::Global,
            Stmt::Nonlocal(_) => NodeKind::Nonlocal,
            Stmt::Expr(_) => NodeKind::Expr,
            Stmt::Pass(_) => NodeKind::Pass,
            Stmt::Break(_) => NodeKind::Break,
            Stmt::Continue(_) => NodeKind::Continue,
            _ => NodeKind::UnknownStmt,
        }
    }

    #[allow(unreachable_patterns)]
    pub fn of_expr(expr: &Expr) -> Self {
        match expr {
            Expr::BoolOp(_) => NodeKind::BoolOp,
            Expr::NamedExpr(_) => NodeKind::NamedExpr,
            Expr::BinOp(_) => NodeKind::BinOp,
            Expr::UnaryOp(_) => NodeKind::UnaryOp,
            Expr::Lambda(_) => NodeKind::Lambda,
            Expr::IfExp(_) => NodeKind::IfExp,
            Expr::Dict(_) => NodeKind::Dict,
            Expr::Set(_) => NodeKind::Set,
            Expr::ListComp(_) => NodeKind::ListComp,
            Expr::SetComp(_) => NodeKind::SetComp,
            Expr::DictComp(_) => NodeKind::DictComp,
            Expr::GeneratorExp(_) => NodeKind::GeneratorExp,
            Expr::Await(_) => NodeKind::Await,
            Expr::Yield(_) => NodeKind::Yield,
            Expr::YieldFrom(_) => NodeKind::YieldFrom,
            Expr::Compare(_) => NodeKind::Compare,
            Expr::Call(_) => NodeKind::Call,
            Expr::FormattedValue(_) => NodeKind::FormattedValue,
            Expr::JoinedStr(_) => NodeKind::JoinedStr,
            Expr::Constant(_) => NodeKind::Constant,
            Expr::Attribute(_) => NodeKind::Attribute,
            Expr::Subscript(_) => NodeKind::Subscript,
            Expr::Starred(_) => NodeKind::Starred,
            Expr::Name(_) => NodeKind::Name,
            Expr::List(_) => NodeKind::List,
            Expr::Tuple(_) => NodeKind::Tuple,
            Expr::Slice(_) => NodeKind::Slice,
            _ => NodeKind::UnknownExpr,
        }
    }

    /// The host grammar's name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Module => "Module",
            NodeKind::Interactive => "Interactive",
            NodeKind::Expression => "Expression",
            NodeKind::FunctionType => "FunctionType",
            NodeKind::FunctionDef => "FunctionDef",
            NodeKind::AsyncFunctionDef => "AsyncFunctionDef",
            NodeKind::ClassDef => "ClassDef",
            NodeKind::Return => "Return",
            NodeKind::Delete => "Delete",
            NodeKind::Assign => "Assign",
            NodeKind::AugAssign => "AugAssign",
            NodeKind::AnnAssign => "AnnAssign",
            NodeKind::For => "For",
            NodeKind::AsyncFor => "AsyncFor",
            NodeKind::While => "While",
            NodeKind::If => "If",
            NodeKind::With => "With",
            NodeKind::AsyncWith => "AsyncWith",
            NodeKind::Match => "Match",
            NodeKind::Raise => "Raise",
            NodeKind::Try => "Try",
            NodeKind::TryStar => "TryStar",
            NodeKind::Assert => "Assert",
            NodeKind::Import => "Import",
            NodeKind::ImportFrom => "ImportFrom",
            NodeKind::Global => "Global",
            NodeKind::Nonlocal => "Nonlocal",
            NodeKind::Expr => "Expr",
            NodeKind::Pass => "Pass",
            NodeKind::Break => "Break",
            NodeKind::Continue => "Continue",
            NodeKind::BoolOp => "BoolOp",
            NodeKind::NamedExpr => "NamedExpr",
            NodeKind::BinOp => "BinOp",
            NodeKind::UnaryOp => "UnaryOp",
            NodeKind::Lambda => "Lambda",
            NodeKind::IfExp => "IfExp",
            NodeKind::Dict => "Dict",
            NodeKind::Set => "Set",
            NodeKind::ListComp => "ListComp",
            NodeKind::SetComp => "SetComp",
            NodeKind::DictComp => "DictComp",
            NodeKind::GeneratorExp => "GeneratorExp",
            NodeKind::Await => "Await",
            NodeKind::Yield => "Yield",
            NodeKind::YieldFrom => "YieldFrom",
            NodeKind::Compare => "Compare",
            NodeKind::Call => "Call",
            NodeKind::FormattedValue => "FormattedValue",
            NodeKind::JoinedStr => "JoinedStr",
            NodeKind::Constant => "Constant",
            NodeKind::Attribute => "Attribute",
            NodeKind::Subscript => "Subscript",
            NodeKind::Starred => "Starred",
            NodeKind::Name => "Name",
            NodeKind::List => "List",
            NodeKind::Tuple => "Tuple",
            NodeKind::Slice => "Slice",
            NodeKind::Keyword => "keyword",
            NodeKind::UnknownStmt => "Stmt",
            NodeKind::UnknownExpr => "Expr",
        }
    }

    /// Kinds the simplifier reduces. A supported kind can still be rejected
    /// for its shape (loop-else, chained comparison, destructuring target).
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            NodeKind::Module
                | NodeKind::Interactive
                | NodeKind::Expression
                | NodeKind::Return
                | NodeKind::Assign
                | NodeKind::AugAssign
                | NodeKind::For
                | NodeKind::While
                | NodeKind::If
                | NodeKind::Expr
                | NodeKind::Pass
                | NodeKind::Break
                | NodeKind::Continue
                | NodeKind::BoolOp
                | NodeKind::BinOp
                | NodeKind::UnaryOp
                | NodeKind::Dict
                | NodeKind::Set
                | NodeKind::Compare
                | NodeKind::Call
                | NodeKind::Constant
                | NodeKind::Name
                | NodeKind::List
                | NodeKind::Tuple
                | NodeKind::Keyword
        )
    }

    /// What the construct is called in an error message.
    pub fn describe(self) -> &'static str {
        match self {
            NodeKind::FunctionType => "function type annotation",
            NodeKind::FunctionDef | NodeKind::AsyncFunctionDef => "function definition",
            NodeKind::ClassDef => "class definition",
            NodeKind::Delete => "`del` statement",
            NodeKind::AnnAssign => "annotated assignment",
            NodeKind::AsyncFor => "`async for` loop",
            NodeKind::With | NodeKind::AsyncWith => "`with` statement",
            NodeKind::Match => "`match` statement",
            NodeKind::Raise => "`raise` statement",
            NodeKind::Try | NodeKind::TryStar => "exception handling",
            NodeKind::Assert => "`assert` statement",
            NodeKind::Import | NodeKind::ImportFrom => "import",
            NodeKind::Global | NodeKind::Nonlocal => "scope declaration",
            NodeKind::NamedExpr => "assignment expression",
            NodeKind::Lambda => "lambda",
            NodeKind::IfExp => "conditional expression",
            NodeKind::ListComp
            | NodeKind::SetComp
            | NodeKind::DictComp
            | NodeKind::GeneratorExp => "comprehension",
            NodeKind::Await => "`await` expression",
            NodeKind::Yield | NodeKind::YieldFrom => "`yield` expression",
            NodeKind::FormattedValue | NodeKind::JoinedStr => "f-string",
            NodeKind::Attribute => "attribute access",
            NodeKind::Subscript => "subscript",
            NodeKind::Starred => "unpacking",
            NodeKind::Slice => "slice",
            NodeKind::UnknownStmt => "statement",
            NodeKind::UnknownExpr => "expression",
            other => other.name(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
