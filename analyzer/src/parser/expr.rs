use super::ast::{BinOp, BinOpKind, Expr, ExprKind, UnOp};
use super::{ParseOutput, Parser};
use crate::diagnostics::Diagnostic;
use crate::lexer::{Token, TokenKind};
use crate::span::Span;

impl Parser<'_> {
    /// Parses the whole token stream as one expression.
    ///
    /// ```text
    /// expr    := term (("+" | "-") term)*
    /// term    := factor (("*" | "/" | "%") factor)*
    /// factor  := unary (("^" | "**") factor)?
    /// unary   := ("+" | "-") unary | primary
    /// primary := NUMBER | "(" expr ")"
    /// ```
    pub(crate) fn parse(mut self) -> ParseOutput {
        let first = self.peek();
        let expr = if first.kind == TokenKind::Eof {
            self.report(Diagnostic::error(first.span, "empty expression"));
            self.node(first.span, ExprKind::Error)
        } else {
            self.expr_bp(0)
        };

        let trailing = self.peek();
        if trailing.kind != TokenKind::Eof {
            self.report(Diagnostic::error(
                trailing.span,
                format!("unexpected {} after expression", trailing.kind.describe()),
            ));
        }

        if !self.diagnostics.is_empty() {
            tracing::debug!(errors = self.diagnostics.len(), "parse failed");
        }
        ParseOutput {
            expr,
            diagnostics: self.diagnostics,
        }
    }

    /// Parses an operand, then folds in infix operators whose left binding power is at least
    /// `min_bp`.
    fn expr_bp(&mut self, min_bp: u8) -> Expr {
        if !self.descend() {
            let at = Span::at(self.peek().span.start);
            return self.node(at, ExprKind::Error);
        }

        let mut lhs = self.operand();
        while let Some(kind) = BinOpKind::from_token(self.peek().kind) {
            let (left_bp, right_bp) = kind.binding_power();
            if left_bp < min_bp {
                break;
            }
            let op_tok = self.advance();
            let rhs = if self.peek().kind.starts_expr() {
                self.expr_bp(right_bp)
            } else {
                self.missing_operand(op_tok, "")
            };
            let span = lhs.span.cover(rhs.span);
            let op = BinOp {
                kind,
                span: op_tok.span,
            };
            lhs = self.node(
                span,
                ExprKind::Binary {
                    op,
                    left: Box::new(lhs),
                    right: Box::new(rhs),
                },
            );
        }

        self.ascend();
        lhs
    }

    /// Operators and `)` are left in place: the caller's loop consumes operators and the
    /// enclosing group consumes `)`, so no token is skipped here.
    fn operand(&mut self) -> Expr {
        let tok = self.peek();
        match tok.kind {
            TokenKind::Number => {
                self.advance();
                let text = self.text(tok.span).to_string();
                self.node(tok.span, ExprKind::Number(text))
            }
            TokenKind::Plus | TokenKind::Minus => self.unary(),
            TokenKind::LParen => self.group(),
            _ => {
                self.report(Diagnostic::error(
                    tok.span,
                    format!("expected expression, found {}", tok.kind.describe()),
                ));
                self.node(tok.span, ExprKind::Error)
            }
        }
    }

    fn unary(&mut self) -> Expr {
        let op_tok = self.advance();
        let op = match op_tok.kind {
            TokenKind::Minus => UnOp::Neg,
            _ => UnOp::Pos,
        };
        let operand = if self.peek().kind.starts_expr() {
            self.expr_bp(op.binding_power())
        } else {
            self.missing_operand(op_tok, "unary ")
        };
        self.node(
            op_tok.span.cover(operand.span),
            ExprKind::Unary {
                op,
                expr: Box::new(operand),
            },
        )
    }

    /// `( expr )`. Returns the inner node with its span widened over the parentheses.
    fn group(&mut self) -> Expr {
        let open = self.advance();
        let mut inner = self.expr_bp(0);

        let close = self.peek();
        if close.kind == TokenKind::RParen {
            self.advance();
        } else {
            let at = match close.kind {
                TokenKind::Eof => Span::at(close.span.start),
                _ => close.span,
            };
            self.report(
                Diagnostic::error(at, format!("expected ')', found {}", close.kind.describe()))
                    .with_label(open.span, "this '(' is not closed"),
            );
            self.skip_past_close();
        }

        inner.span = Span::new(open.span.start, self.prev_end());
        inner
    }

    /// Skips to the `)` matching an already-open group and consumes it, if there is one.
    fn skip_past_close(&mut self) {
        let mut open = 0u32;
        loop {
            match self.peek().kind {
                TokenKind::Eof => return,
                TokenKind::LParen => open += 1,
                TokenKind::RParen if open == 0 => {
                    self.advance();
                    return;
                }
                TokenKind::RParen => open -= 1,
                _ => {}
            }
            self.advance();
        }
    }

    fn missing_operand(&mut self, op_tok: Token, which: &str) -> Expr {
        let symbol = op_tok.kind.symbol().unwrap_or_default();
        self.report(Diagnostic::error(
            op_tok.span,
            format!("expected expression after {which}'{symbol}'"),
        ));
        self.node(Span::at(op_tok.span.end), ExprKind::Error)
    }
}
