//! Expression reduction: build_expr, build_call, build_compare, build_dict.

use rustpython_parser::ast::{self, BoolOp, CmpOp, Constant, Expr, Operator, UnaryOp};

use super::{NodeKind, Result, SimplifyError, Simplifier};
use crate::ir::{Keyword, Literal, Node, Op, Reserved};
use crate::span::Span;

impl Simplifier {
    pub(crate) fn build_expr(&mut self, expr: &Expr) -> Result<Node> {
        let kind = NodeKind::of_expr(expr);
        let span = Span::of(expr);
        self.descend(kind, span, |this| this.reduce_expr(expr, kind, span))
    }

    /// Reduce a sequence of expressions, keeping source order.
    pub(crate) fn build_exprs(&mut self, exprs: &[Expr]) -> Result<Vec<Node>> {
        exprs.iter().map(|e| self.build_expr(e)).collect()
    }

    fn reduce_expr(&mut self, expr: &Expr, kind: NodeKind, span: Span) -> Result<Node> {
        match expr {
            Expr::Constant(ast::ExprConstant { value, .. }) => build_constant(value, span),

            Expr::Name(ast::ExprName { id, .. }) => {
                let name = checked_name(id.as_str(), kind, span)?;
                Ok(Node::reference(name))
            }

            Expr::BinOp(ast::ExprBinOp {
                left, op, right, ..
            }) => {
                let left = self.build_expr(left)?;
                let right = self.build_expr(right)?;
                Ok(Node::operation(binary_op(op), vec![left, right]))
            }

            Expr::UnaryOp(ast::ExprUnaryOp { op, operand, .. }) => {
                let operand = self.build_expr(operand)?;
                Ok(Node::operation(unary_op(op), vec![operand]))
            }

            Expr::BoolOp(ast::ExprBoolOp { op, values, .. }) => {
                if values.is_empty() {
                    return Err(SimplifyError::malformed(
                        kind,
                        span,
                        "boolean chain without operands",
                    ));
                }
                let args = self.build_exprs(values)?;
                Ok(Node::operation(bool_op(op), args))
            }

            Expr::Compare(ast::ExprCompare {
                left,
                ops,
                comparators,
                ..
            }) => self.build_compare(left, ops, comparators, span),

            Expr::Call(call) => self.build_call(call),

            Expr::Tuple(ast::ExprTuple { elts, .. }) => Ok(Node::Tuple(self.build_exprs(elts)?)),
            Expr::List(ast::ExprList { elts, .. }) => Ok(Node::List(self.build_exprs(elts)?)),
            Expr::Set(ast::ExprSet { elts, .. }) => {
                let elts = self.build_exprs(elts)?;
                Ok(Node::Set(elts.into_iter().collect()))
            }
            Expr::Dict(dict) => self.build_dict(dict, span),

            _ => Err(SimplifyError::unsupported_kind(kind, span)),
        }
    }

    // ── Comparisons ───────────────────────────────────────────────

    fn build_compare(
        &mut self,
        left: &Expr,
        ops: &[CmpOp],
        comparators: &[Expr],
        span: Span,
    ) -> Result<Node> {
        if ops.len() > 1 {
            return Err(SimplifyError::unsupported(
                NodeKind::Compare,
                span,
                "chained comparison is not supported",
            ));
        }
        let (Some(op), [right]) = (ops.first(), comparators) else {
            return Err(SimplifyError::malformed(
                NodeKind::Compare,
                span,
                format!(
                    "comparison with {} operators and {} comparators",
                    ops.len(),
                    comparators.len()
                ),
            ));
        };
        let left = self.build_expr(left)?;
        let right = self.build_expr(right)?;
        Ok(Node::operation(compare_op(op), vec![left, right]))
    }

    // ── Calls ─────────────────────────────────────────────────────

    /// Callee, then positional arguments, then keyword arguments.
    fn build_call(&mut self, call: &ast::ExprCall) -> Result<Node> {
        let callee = self.build_expr(&call.func)?;
        let args = self.build_exprs(&call.args)?;

        let mut kwargs = Vec::with_capacity(call.keywords.len());
        for keyword in &call.keywords {
            let Some(name) = &keyword.arg else {
                return Err(SimplifyError::unsupported(
                    NodeKind::Keyword,
                    Span::of(&keyword.value),
                    "keyword argument unpacking (`**`) is not supported",
                ));
            };
            let value = self.build_expr(&keyword.value)?;
            kwargs.push(Keyword {
                name: name.as_str().to_owned(),
                value,
            });
        }

        Ok(Node::Call {
            callee: Box::new(callee),
            args,
            kwargs,
        })
    }

    // ── Mappings ──────────────────────────────────────────────────

    /// All keys, then all values, paired positionally. Later duplicates of a
    /// key overwrite earlier ones.
    fn build_dict(&mut self, dict: &ast::ExprDict, span: Span) -> Result<Node> {
        if dict.keys.len() != dict.values.len() {
            return Err(SimplifyError::malformed(
                NodeKind::Dict,
                span,
                format!(
                    "mapping with {} keys and {} values",
                    dict.keys.len(),
                    dict.values.len()
                ),
            ));
        }

        let mut keys = Vec::with_capacity(dict.keys.len());
        for (key, value) in dict.keys.iter().zip(&dict.values) {
            let Some(key) = key else {
                return Err(SimplifyError::unsupported(
                    NodeKind::Dict,
                    Span::of(value),
                    "dictionary unpacking (`**`) is not supported",
                ));
            };
            keys.push(self.build_expr(key)?);
        }
        let values = self.build_exprs(&dict.values)?;

        Ok(Node::Mapping(keys.into_iter().zip(values).collect()))
    }
}

// ── Leaves ────────────────────────────────────────────────────────

/// Reject empty identifiers, which only hand-built trees can contain.
pub(crate) fn checked_name(name: &str, kind: NodeKind, span: Span) -> Result<&str> {
    if name.is_empty() {
        return Err(SimplifyError::malformed(kind, span, "empty identifier"));
    }
    Ok(name)
}

#[allow(unreachable_patterns)]
fn build_constant(value: &Constant, span: Span) -> Result<Node> {
    let unsupported = |what: &str| -> Result<Node> {
        Err(SimplifyError::unsupported(
            NodeKind::Constant,
            span,
            format!("{} is not supported", what),
        ))
    };
    match value {
        Constant::None => Ok(Reserved::None.into()),
        Constant::Bool(b) => Ok(Reserved::from_bool(*b).into()),
        Constant::Str(s) => Ok(Literal::Str(s.clone()).into()),
        Constant::Bytes(b) => Ok(Literal::Bytes(b.clone()).into()),
        Constant::Int(n) => {
            // The big-integer backend is a parser feature; go through text.
            let text = n.to_string();
            match text.parse::<i64>() {
                Ok(v) => Ok(Node::int(v)),
                Err(_) => unsupported(&format!("integer literal {} outside the 64-bit range", text)),
            }
        }
        Constant::Float(x) if !x.is_finite() => unsupported(&format!("float literal {} out of range", x)),
        Constant::Float(x) => Ok(Literal::Float(*x).into()),
        Constant::Complex { .. } => unsupported("complex literal"),
        Constant::Ellipsis => unsupported("`...`"),
        Constant::Tuple(_) => unsupported("constant tuple"),
        _ => unsupported("constant"),
    }
}

// ── Operator names ────────────────────────────────────────────────

pub(crate) fn binary_op(op: &Operator) -> Op {
    match op {
        Operator::Add => Op::Add,
        Operator::Sub => Op::Sub,
        Operator::Mult => Op::Mult,
        Operator::MatMult => Op::MatMult,
        Operator::Div => Op::Div,
        Operator::Mod => Op::Mod,
        Operator::Pow => Op::Pow,
        Operator::LShift => Op::LShift,
        Operator::RShift => Op::RShift,
        Operator::BitOr => Op::BitOr,
        Operator::BitXor => Op::BitXor,
        Operator::BitAnd => Op::BitAnd,
        Operator::FloorDiv => Op::FloorDiv,
    }
}

fn unary_op(op: &UnaryOp) -> Op {
    match op {
        UnaryOp::Invert => Op::Invert,
        UnaryOp::Not => Op::Not,
        UnaryOp::UAdd => Op::UAdd,
        UnaryOp::USub => Op::USub,
    }
}

fn compare_op(op: &CmpOp) -> Op {
    match op {
        CmpOp::Eq => Op::Eq,
        CmpOp::NotEq => Op::NotEq,
        CmpOp::Lt => Op::Lt,
        CmpOp::LtE => Op::LtE,
        CmpOp::Gt => Op::Gt,
        CmpOp::GtE => Op::GtE,
        CmpOp::Is => Op::Is,
        CmpOp::IsNot => Op::IsNot,
        CmpOp::In => Op::In,
        CmpOp::NotIn => Op::NotIn,
    }
}

fn bool_op(op: &BoolOp) -> Op {
    match op {
        BoolOp::And => Op::And,
        BoolOp::Or => Op::Or,
    }
}
