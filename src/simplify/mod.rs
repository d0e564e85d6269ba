//! Simplifier: reduces a generic syntax tree into `Vec<Node>`.
//!
//! Every reduction visits its children first, in source order (left operand
//! before right, test before body before orelse, callee before positional
//! arguments before keyword arguments), and only then builds its own node.
//! Reductions are plain recursive functions returning owned IR, so the
//! ordering contract holds by construction.
//!
//! A `Simplifier` is consumed by a single traversal. It owns all traversal
//! state, so independent traversals never share anything.

mod error;
mod expr;
mod kind;
mod stmt;

use rustpython_parser::ast::{self, Expr, Mod, Stmt};

use crate::config::SimplifyOptions;
use crate::ir::Node;
use crate::span::{LineIndex, Span};

pub use self::error::{ErrorKind, SimplifyError};
pub use self::kind::NodeKind;

pub type Result<T> = std::result::Result<T, SimplifyError>;

// ─── Simplifier ────────────────────────────────────────────────────

/// Reduces one generic tree root into IR.
#[derive(Clone, Debug, Default)]
pub struct Simplifier {
    /// Traversal limits.
    pub(crate) options: SimplifyOptions,
    /// Line index of the source text, when known; used to locate errors.
    pub(crate) lines: Option<LineIndex>,
    /// Current nesting depth of the traversal.
    pub(crate) depth: usize,
}

impl Simplifier {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Builder-pattern configuration ─────────────────────────────

    pub fn with_options(mut self, options: SimplifyOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach the source text the tree was parsed from, so that errors
    /// carry line numbers.
    pub fn with_source(mut self, source: &str) -> Self {
        self.lines = Some(LineIndex::new(source));
        self
    }

    // ── Entry points ──────────────────────────────────────────────

    /// Simplify a statement list (a module body).
    pub fn simplify_suite(mut self, body: &[Stmt]) -> Result<Vec<Node>> {
        let result = self.build_block(body);
        let nodes = self.locate(result)?;
        log::debug!(
            "simplified {} statements into {} nodes",
            body.len(),
            nodes.len()
        );
        Ok(nodes)
    }

    /// Simplify a single free-standing expression.
    pub fn simplify_expr(mut self, expr: &Expr) -> Result<Node> {
        let result = self.build_expr(expr);
        self.locate(result)
    }

    /// Simplify any root the parser can produce.
    pub fn simplify_mod(self, root: &Mod) -> Result<Vec<Node>> {
        match root {
            Mod::Module(ast::ModModule { body, .. }) => self.simplify_suite(body),
            Mod::Interactive(ast::ModInteractive { body, .. }) => self.simplify_suite(body),
            Mod::Expression(ast::ModExpression { body, .. }) => {
                self.simplify_expr(body).map(|node| vec![node])
            }
            Mod::FunctionType(_) => Err(SimplifyError::unsupported_kind(
                NodeKind::of_mod(root),
                Span::dummy(),
            )),
        }
    }

    // ── Traversal helpers ─────────────────────────────────────────

    /// Run `reduce` one nesting level deeper, enforcing `max_depth`.
    pub(crate) fn descend<T>(
        &mut self,
        kind: NodeKind,
        span: Span,
        reduce: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.depth >= self.options.max_depth {
            return Err(SimplifyError::malformed(
                kind,
                span,
                format!(
                    "nesting exceeds the limit of {} levels",
                    self.options.max_depth
                ),
            ));
        }
        self.depth += 1;
        let result = reduce(self);
        self.depth -= 1;
        result
    }

    /// Fill in the line number of a failure.
    fn locate<T>(&self, result: Result<T>) -> Result<T> {
        result.map_err(|err| {
            log::debug!("simplification rejected: {}", err);
            match &self.lines {
                Some(lines) if err.line.is_none() => {
                    let line = lines.line_of(err.span.start);
                    err.with_line(line)
                }
                _ => err,
            }
        })
    }
}
