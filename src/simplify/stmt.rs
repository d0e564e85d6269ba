//! Statement reduction: build_block, build_stmt, assignments and loops.

use rustpython_parser::ast::{self, Expr, Operator, Stmt};

use super::expr::{binary_op, checked_name};
use super::{NodeKind, Result, SimplifyError, Simplifier};
use crate::ir::{Node, Reserved};
use crate::span::Span;

/// Where a binding target appears; decides how a bad target is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Binding {
    Assign,
    AugAssign,
    ForLoop,
}

impl Binding {
    fn describe(self) -> &'static str {
        match self {
            Binding::Assign => "assignment",
            Binding::AugAssign => "augmented assignment",
            Binding::ForLoop => "for-loop",
        }
    }
}

impl Simplifier {
    /// Reduce a statement list in source order.
    pub(crate) fn build_block(&mut self, body: &[Stmt]) -> Result<Vec<Node>> {
        let mut out = Vec::with_capacity(body.len());
        for stmt in body {
            self.build_stmt(stmt, &mut out)?;
        }
        Ok(out)
    }

    /// Reduce one statement, appending its nodes to `out`. Most statements
    /// produce exactly one node; a multi-target assignment produces one per
    /// target.
    pub(crate) fn build_stmt(&mut self, stmt: &Stmt, out: &mut Vec<Node>) -> Result<()> {
        let kind = NodeKind::of_stmt(stmt);
        let span = Span::of(stmt);
        log::trace!("reducing {} at {}..{}", kind, span.start, span.end);
        self.descend(kind, span, |this| this.reduce_stmt(stmt, kind, span, out))
    }

    fn reduce_stmt(
        &mut self,
        stmt: &Stmt,
        kind: NodeKind,
        span: Span,
        out: &mut Vec<Node>,
    ) -> Result<()> {
        match stmt {
            Stmt::Expr(ast::StmtExpr { value, .. }) => {
                out.push(self.build_expr(value)?);
            }

            Stmt::Assign(ast::StmtAssign { targets, value, .. }) => {
                self.build_assign(targets, value, out)?;
            }

            Stmt::AugAssign(ast::StmtAugAssign {
                target, op, value, ..
            }) => {
                out.push(self.build_aug_assign(target, op, value)?);
            }

            Stmt::Return(ast::StmtReturn { value, .. }) => {
                let value = match value {
                    Some(value) => self.build_expr(value)?,
                    None => Reserved::None.into(),
                };
                out.push(Node::Return(Box::new(value)));
            }

            Stmt::If(ast::StmtIf {
                test, body, orelse, ..
            }) => {
                let test = self.build_expr(test)?;
                let body = self.build_block(body)?;
                let orelse = self.build_block(orelse)?;
                out.push(Node::If {
                    test: Box::new(test),
                    body,
                    orelse,
                });
            }

            Stmt::For(stmt) => {
                out.push(self.build_for(stmt, span)?);
            }

            Stmt::While(ast::StmtWhile {
                test, body, orelse, ..
            }) => {
                if !orelse.is_empty() {
                    return Err(SimplifyError::unsupported(
                        kind,
                        span,
                        "while-else is not supported",
                    ));
                }
                let test = self.build_expr(test)?;
                let body = self.build_block(body)?;
                out.push(Node::While {
                    test: Box::new(test),
                    body,
                });
            }

            Stmt::Pass(_) => out.push(Reserved::Pass.into()),
            Stmt::Break(_) => out.push(Reserved::Break.into()),
            Stmt::Continue(_) => out.push(Reserved::Continue.into()),

            _ => return Err(SimplifyError::unsupported_kind(kind, span)),
        }
        Ok(())
    }

    // ── Assignments ───────────────────────────────────────────────

    /// `a = b = value` binds every target to the same reduced value, in
    /// source order of the targets.
    fn build_assign(&mut self, targets: &[Expr], value: &Expr, out: &mut Vec<Node>) -> Result<()> {
        let value = self.build_expr(value)?;
        let names = targets
            .iter()
            .map(|target| binding_name(target, Binding::Assign))
            .collect::<Result<Vec<_>>>()?;
        for name in names {
            out.push(Node::assignment(name, value.clone()));
        }
        Ok(())
    }

    /// `x op= value` desugars to `x = op(x, value)`.
    fn build_aug_assign(&mut self, target: &Expr, op: &Operator, value: &Expr) -> Result<Node> {
        let name = binding_name(target, Binding::AugAssign)?;
        let value = self.build_expr(value)?;
        let current = Node::reference(name);
        Ok(Node::assignment(
            name,
            Node::operation(binary_op(op), vec![current, value]),
        ))
    }

    // ── Loops ─────────────────────────────────────────────────────

    /// Target, then iterable, then body.
    fn build_for(&mut self, stmt: &ast::StmtFor, span: Span) -> Result<Node> {
        if !stmt.orelse.is_empty() {
            return Err(SimplifyError::unsupported(
                NodeKind::For,
                span,
                "for-else is not supported",
            ));
        }
        let target = binding_name(&stmt.target, Binding::ForLoop)?;
        let iter = self.build_expr(&stmt.iter)?;
        let body = self.build_block(&stmt.body)?;
        Ok(Node::For {
            target: target.to_owned(),
            iter: Box::new(iter),
            body,
        })
    }
}

/// The single name a binding target stands for.
fn binding_name(target: &Expr, binding: Binding) -> Result<&str> {
    let kind = NodeKind::of_expr(target);
    let span = Span::of(target);
    match target {
        Expr::Name(ast::ExprName { id, .. }) => checked_name(id.as_str(), kind, span),
        Expr::Tuple(_) | Expr::List(_) | Expr::Starred(_) => Err(SimplifyError::unsupported(
            kind,
            span,
            format!("destructuring {} target is not supported", binding.describe()),
        )),
        _ if binding == Binding::ForLoop => Err(SimplifyError::malformed(
            kind,
            span,
            "for-loop target must be a single name",
        )),
        _ => Err(SimplifyError::unsupported(
            kind,
            span,
            format!(
                "{} to {} is not supported",
                binding.describe(),
                kind.describe()
            ),
        )),
    }
}
