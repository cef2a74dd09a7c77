//! Expression tree produced by the parser.

use crate::lexer::TokenKind;
use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

/// Parentheses have no node of their own: `(e)` is the node for `e` with its span widened
/// over the parentheses.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Numeric literal as written in the source.
    Number(String),
    Unary {
        op: UnOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Stand-in for a part of the input that failed to parse. Only appears alongside diagnostics.
    Error,
}

impl ExprKind {
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Number(_) => "number",
            ExprKind::Unary { .. } => "unary expression",
            ExprKind::Binary { .. } => "binary expression",
            ExprKind::Error => "invalid expression",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    /// `-`
    Neg,
    /// `+`
    Pos,
}

impl UnOp {
    /// Prefix operators bind tighter than every infix operator, so `-2 ^ 2` is `(-2) ^ 2`.
    pub const PRECEDENCE: u8 = 4;

    pub fn as_str(self) -> &'static str {
        match self {
            UnOp::Neg => "-",
            UnOp::Pos => "+",
        }
    }

    /// Minimum binding power of the operand.
    pub fn binding_power(self) -> u8 {
        2 * Self::PRECEDENCE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinOp {
    pub kind: BinOpKind,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `^`
    Caret,
    /// `**`, same meaning as `^`
    StarStar,
}

impl BinOpKind {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => BinOpKind::Add,
            TokenKind::Minus => BinOpKind::Sub,
            TokenKind::Star => BinOpKind::Mul,
            TokenKind::Slash => BinOpKind::Div,
            TokenKind::Percent => BinOpKind::Rem,
            TokenKind::Caret => BinOpKind::Caret,
            TokenKind::StarStar => BinOpKind::StarStar,
            TokenKind::Number | TokenKind::LParen | TokenKind::RParen | TokenKind::Eof => {
                return None;
            }
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Rem => "%",
            BinOpKind::Caret => "^",
            BinOpKind::StarStar => "**",
        }
    }

    /// 1 for `+ -`, 2 for `* / %`, 3 for powers.
    pub fn precedence(self) -> u8 {
        match self {
            BinOpKind::Add | BinOpKind::Sub => 1,
            BinOpKind::Mul | BinOpKind::Div | BinOpKind::Rem => 2,
            BinOpKind::Caret | BinOpKind::StarStar => 3,
        }
    }

    pub fn is_right_assoc(self) -> bool {
        matches!(self, BinOpKind::Caret | BinOpKind::StarStar)
    }

    /// Pratt `(left, right)` binding powers. The side with the lower power is the one that
    /// chains, so `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)` and `10 - 4 - 3` is `(10 - 4) - 3`.
    pub fn binding_power(self) -> (u8, u8) {
        let p = 2 * self.precedence();
        if self.is_right_assoc() {
            (p + 1, p)
        } else {
            (p, p + 1)
        }
    }
}

/// One binary node of a left spine, see [`Expr::left_spine`].
#[derive(Debug, Clone, Copy)]
pub struct SpineLink<'a> {
    pub node: &'a Expr,
    pub op: BinOp,
    pub right: &'a Expr,
}

impl Expr {
    /// Splits `((a op b) op c) op d` into its leftmost operand `a` and the binary nodes above
    /// it, innermost first.
    ///
    /// Left-associative chains are built by a loop in the parser, so their depth is not bounded
    /// by the nesting limit. Walking them through this keeps consumers off the call stack.
    pub fn left_spine(&self) -> (&Expr, Vec<SpineLink<'_>>) {
        let mut links = Vec::new();
        let mut cur = self;
        while let ExprKind::Binary { op, left, right } = &cur.kind {
            links.push(SpineLink {
                node: cur,
                op: *op,
                right: right.as_ref(),
            });
            cur = left.as_ref();
        }
        links.reverse();
        (cur, links)
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        // Detach children onto a heap stack so that dropping a long chain does not recurse.
        let mut pending = Vec::new();
        detach_children(&mut self.kind, &mut pending);
        while let Some(mut child) = pending.pop() {
            detach_children(&mut child.kind, &mut pending);
        }
    }
}

fn detach_children(kind: &mut ExprKind, pending: &mut Vec<Box<Expr>>) {
    match std::mem::replace(kind, ExprKind::Error) {
        ExprKind::Unary { expr, .. } => pending.push(expr),
        ExprKind::Binary { left, right, .. } => {
            pending.push(left);
            pending.push(right);
        }
        ExprKind::Number(_) | ExprKind::Error => {}
    }
}
