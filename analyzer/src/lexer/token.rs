use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Unsigned decimal literal. Its text is the source slice under the token's span.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `**`
    StarStar,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input, always the last token.
    Eof,
}

impl TokenKind {
    /// Source text of punctuation tokens.
    pub fn symbol(self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            Plus => "+",
            Minus => "-",
            Star => "*",
            StarStar => "**",
            Slash => "/",
            Percent => "%",
            Caret => "^",
            LParen => "(",
            RParen => ")",
            Number | Eof => return None,
        })
    }

    /// How the token is referred to in diagnostics: `` `)` ``, `number`, `end of input`.
    pub fn describe(self) -> String {
        match (self, self.symbol()) {
            (_, Some(sym)) => format!("`{sym}`"),
            (TokenKind::Number, None) => "number".to_string(),
            _ => "end of input".to_string(),
        }
    }

    pub fn starts_expr(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::LParen | TokenKind::Plus | TokenKind::Minus
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}
