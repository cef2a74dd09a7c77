//! Tokenizer for arithmetic expressions.
//!
//! The alphabet is decimal numbers, `+ - * ** / % ^`, parentheses and whitespace.
//! Numbers: `1`, `1.`, `1.5`, `.5`, each with an optional `e[+-]digits` exponent.
//! The first character outside the alphabet ends lexing with a diagnostic.

mod token;

pub use token::{Token, TokenKind};

use crate::diagnostics::Diagnostic;
use crate::span::Span;

pub struct LexOutput {
    /// Tokens read before lexing stopped, followed by [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn lex(src: &str) -> LexOutput {
    let mut lexer = Lexer {
        src,
        pos: 0,
        tokens: Vec::new(),
    };
    let diagnostics = match lexer.run() {
        Ok(()) => Vec::new(),
        Err(diagnostic) => vec![diagnostic],
    };

    let mut tokens = lexer.tokens;
    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::at(src.len() as u32),
    });
    tracing::trace!(
        tokens = tokens.len(),
        failed = !diagnostics.is_empty(),
        "lexed input"
    );
    LexOutput {
        tokens,
        diagnostics,
    }
}

struct Lexer<'src> {
    src: &'src str,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer<'_> {
    fn run(&mut self) -> Result<(), Diagnostic> {
        while let Some(c) = self.src[self.pos..].chars().next() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
                continue;
            }

            let rest = &self.src[self.pos..];
            let (kind, len) = match c {
                '0'..='9' | '.' => match number_len(rest.as_bytes()) {
                    0 => return Err(self.unexpected(c)),
                    len => (TokenKind::Number, len),
                },
                '*' if rest.starts_with("**") => (TokenKind::StarStar, 2),
                '*' => (TokenKind::Star, 1),
                '+' => (TokenKind::Plus, 1),
                '-' => (TokenKind::Minus, 1),
                '/' => (TokenKind::Slash, 1),
                '%' => (TokenKind::Percent, 1),
                '^' => (TokenKind::Caret, 1),
                '(' => (TokenKind::LParen, 1),
                ')' => (TokenKind::RParen, 1),
                _ => return Err(self.unexpected(c)),
            };

            let start = self.pos;
            self.pos += len;
            self.tokens.push(Token {
                kind,
                span: Span::new(start as u32, self.pos as u32),
            });
        }
        Ok(())
    }

    fn unexpected(&self, c: char) -> Diagnostic {
        let span = Span::new(self.pos as u32, (self.pos + c.len_utf8()) as u32);
        Diagnostic::error(span, format!("unexpected char '{c}'"))
    }
}

/// Length of the number literal at the start of `bytes`, or 0 when there is none (a lone `.`).
fn number_len(bytes: &[u8]) -> usize {
    let int_end = skip_digits(bytes, 0);
    let mut end = int_end;
    if bytes.get(end) == Some(&b'.') {
        end = skip_digits(bytes, end + 1);
        if int_end == 0 && end == 1 {
            return 0;
        }
    }

    // An exponent only counts when digits follow; `2e` lexes as `2` and then fails on `e`.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut digits_start = end + 1;
        if matches!(bytes.get(digits_start), Some(b'+' | b'-')) {
            digits_start += 1;
        }
        let exp_end = skip_digits(bytes, digits_start);
        if exp_end > digits_start {
            end = exp_end;
        }
    }
    end
}

fn skip_digits(bytes: &[u8], from: usize) -> usize {
    from + bytes[from.min(bytes.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}
