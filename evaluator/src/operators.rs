//! Arithmetic operators and their numeric semantics.
//!
//! The evaluator owns its operator set; front-end operators convert into it with `From`.

use analyzer::Span;
use analyzer::ast::{BinOpKind, UnOp};

use crate::error::EvaluationError;
use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl From<BinOpKind> for ArithOp {
    fn from(op: BinOpKind) -> Self {
        match op {
            BinOpKind::Add => ArithOp::Add,
            BinOpKind::Sub => ArithOp::Sub,
            BinOpKind::Mul => ArithOp::Mul,
            BinOpKind::Div => ArithOp::Div,
            BinOpKind::Rem => ArithOp::Mod,
            BinOpKind::Caret | BinOpKind::StarStar => ArithOp::Pow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOp {
    Plus,
    Minus,
}

impl From<UnOp> for SignOp {
    fn from(op: UnOp) -> Self {
        match op {
            UnOp::Pos => SignOp::Plus,
            UnOp::Neg => SignOp::Minus,
        }
    }
}

/// Applies `op` to two finite operands.
///
/// Integer operands stay integers except for `/`, negative exponents, and results that do not
/// fit in `i64`, which fall back to floats.
pub(crate) fn apply_binary(
    op: ArithOp,
    left: Number,
    right: Number,
    span: Span,
) -> Result<Number, EvaluationError> {
    if matches!(op, ArithOp::Div | ArithOp::Mod) && right.is_zero() {
        return Err(EvaluationError::DivisionByZero { span });
    }

    if let (Number::Int(l), Number::Int(r)) = (left, right)
        && let Some(v) = int_binary(op, l, r)
    {
        return Ok(Number::Int(v));
    }

    float_binary(op, left.as_f64(), right.as_f64(), span).map(Number::Float)
}

/// Integer fast path. `None` means the float path decides the result.
fn int_binary(op: ArithOp, l: i64, r: i64) -> Option<i64> {
    match op {
        ArithOp::Add => l.checked_add(r),
        ArithOp::Sub => l.checked_sub(r),
        ArithOp::Mul => l.checked_mul(r),
        ArithOp::Div => None,
        ArithOp::Mod => {
            // `i64::MIN % -1` wraps to 0, which is also the floored result.
            let rem = l.wrapping_rem(r);
            Some(if rem != 0 && (rem < 0) != (r < 0) {
                rem + r
            } else {
                rem
            })
        }
        ArithOp::Pow => match (l, u32::try_from(r)) {
            (_, Ok(exp)) => l.checked_pow(exp),
            // Exponents past `u32` only have an integer result for these bases.
            (0 | 1, Err(_)) if r > 0 => Some(l),
            (-1, Err(_)) if r > 0 => Some(if r % 2 == 0 { 1 } else { -1 }),
            _ => None,
        },
    }
}

fn float_binary(op: ArithOp, l: f64, r: f64, span: Span) -> Result<f64, EvaluationError> {
    let value = match op {
        ArithOp::Add => l + r,
        ArithOp::Sub => l - r,
        ArithOp::Mul => l * r,
        ArithOp::Div => l / r,
        ArithOp::Mod => {
            let rem = l % r;
            if rem != 0.0 && (rem < 0.0) != (r < 0.0) {
                rem + r
            } else {
                rem
            }
        }
        ArithOp::Pow => {
            if l == 0.0 && r < 0.0 {
                return Err(EvaluationError::DivisionByZero { span });
            }
            l.powf(r)
        }
    };
    ensure_finite(value, span)
}

pub(crate) fn apply_sign(op: SignOp, value: Number) -> Number {
    match (op, value) {
        (SignOp::Plus, v) => v,
        (SignOp::Minus, Number::Int(v)) => match v.checked_neg() {
            Some(v) => Number::Int(v),
            None => Number::Float(-(v as f64)),
        },
        (SignOp::Minus, Number::Float(v)) => Number::Float(-v),
    }
}

pub(crate) fn ensure_finite(value: f64, span: Span) -> Result<f64, EvaluationError> {
    if value.is_nan() {
        Err(EvaluationError::NotReal { span })
    } else if value.is_infinite() {
        Err(EvaluationError::Overflow { span })
    } else {
        Ok(value)
    }
}
