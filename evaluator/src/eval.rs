//! Allow-list walk over the expression tree.

use analyzer::Span;
use analyzer::ast::{Expr, ExprKind};

use crate::error::EvaluationError;
use crate::number::Number;
use crate::operators::{ArithOp, SignOp, apply_binary, apply_sign, ensure_finite};

/// Post-order evaluator. Operands are evaluated left before right.
///
/// `depth` counts nesting, not nodes: a left-associative chain is folded in a loop and costs one
/// level however long it is. Its leftmost operand, its right operands and unary operands
/// each cost one more.
pub(crate) struct Walker {
    max_depth: usize,
    depth: usize,
}

impl Walker {
    pub(crate) fn new(max_depth: usize) -> Self {
        Walker {
            max_depth,
            depth: 0,
        }
    }

    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> Result<Number, EvaluationError> {
        if self.depth >= self.max_depth {
            return Err(EvaluationError::TooDeep {
                depth: self.depth,
                max_depth: self.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;
        result
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> Result<Number, EvaluationError> {
        match &expr.kind {
            ExprKind::Number(text) => eval_literal(text, expr.span),
            ExprKind::Unary { op, expr: operand } => {
                let value = self.eval_expr(operand)?;
                Ok(apply_sign(SignOp::from(*op), value))
            }
            ExprKind::Binary { .. } => self.eval_chain(expr),
            ExprKind::Error => Err(EvaluationError::DisallowedConstruct {
                kind: expr.kind.name(),
                span: expr.span,
            }),
        }
    }

    fn eval_chain(&mut self, expr: &Expr) -> Result<Number, EvaluationError> {
        let (leftmost, links) = expr.left_spine();
        let mut acc = self.eval_expr(leftmost)?;
        for link in links {
            let rhs = self.eval_expr(link.right)?;
            acc = apply_binary(ArithOp::from(link.op.kind), acc, rhs, link.node.span)?;
        }
        Ok(acc)
    }
}

/// Literals without `.` or an exponent are integers; integers outside `i64` become floats.
fn eval_literal(text: &str, span: Span) -> Result<Number, EvaluationError> {
    let is_float = text.contains(['.', 'e', 'E']);
    if !is_float && let Ok(v) = text.parse::<i64>() {
        return Ok(Number::Int(v));
    }

    match text.parse::<f64>() {
        Ok(v) => ensure_finite(v, span).map(Number::Float),
        Err(_) => Err(EvaluationError::InvalidLiteral {
            text: text.to_string(),
            span,
        }),
    }
}
