//! Pratt parser over the token stream produced by [`crate::lexer::lex`].
//!
//! The parser never fails outright: errors become [`Diagnostic`]s and the affected part of the
//! tree becomes an [`ExprKind::Error`] node.

pub mod ast;
mod expr;
mod pretty;

use crate::diagnostics::Diagnostic;
use crate::lexer::{Token, TokenKind};
use crate::span::Span;
use ast::{Expr, ExprKind};

/// Default cap on parser recursion: parentheses, prefix operators and `^` chains.
pub const DEFAULT_MAX_NESTING: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Deepest nesting the parser descends into before abandoning the rest of the input.
    pub max_nesting: u32,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

#[derive(Debug)]
pub struct ParseOutput {
    pub expr: Expr,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

pub(crate) struct Parser<'src> {
    src: &'src str,
    /// Never empty; the last token is `Eof` and `pos` never moves past it.
    tokens: Vec<Token>,
    pos: usize,
    config: ParseConfig,
    depth: u32,
    /// Set when the nesting limit is hit. Later errors are not reported.
    gave_up: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(src: &'src str, tokens: Vec<Token>, config: ParseConfig) -> Self {
        debug_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        Parser {
            src,
            tokens,
            pos: 0,
            config,
            depth: 0,
            gave_up: false,
            diagnostics: Vec::new(),
        }
    }

    fn peek(&self) -> Token {
        self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek();
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }

    /// End of the last consumed token.
    fn prev_end(&self) -> u32 {
        match self.pos {
            0 => 0,
            n => self.tokens[n - 1].span.end,
        }
    }

    fn text(&self, span: Span) -> &'src str {
        &self.src[span.range()]
    }

    fn node(&self, span: Span, kind: ExprKind) -> Expr {
        Expr { span, kind }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if !self.gave_up {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Enters one nesting level. On hitting the limit, reports once, skips to end of input and
    /// returns `false`.
    fn descend(&mut self) -> bool {
        if self.depth < self.config.max_nesting {
            self.depth += 1;
            return true;
        }
        let at = self.peek().span;
        self.report(Diagnostic::error(
            at,
            format!(
                "expression nested too deeply (limit {})",
                self.config.max_nesting
            ),
        ));
        self.gave_up = true;
        self.pos = self.tokens.len() - 1;
        false
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }
}
