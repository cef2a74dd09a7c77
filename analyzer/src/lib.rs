//! Front end for arithmetic expressions: lexer, Pratt parser and diagnostics.
//!
//! The accepted language is numbers, `+ - * / % ^ **`, unary `+`/`-` and parentheses.
//! Spans are byte offsets into the source text, half-open `[start, end)`.

mod diagnostics;
mod lexer;
mod parser;
mod source_map;
mod span;

pub use diagnostics::{Diagnostic, Label, format_diagnostics};
pub use lexer::{LexOutput, Token, TokenKind, lex};
pub use parser::ast;
pub use parser::{DEFAULT_MAX_NESTING, ParseConfig, ParseOutput};
pub use source_map::SourceMap;
pub use span::Span;

/// Lexes and parses `text` with the default [`ParseConfig`].
pub fn analyze_syntax(text: &str) -> ParseOutput {
    analyze_syntax_with(text, ParseConfig::default())
}

/// Lexes and parses `text`.
///
/// A lexer error is the only diagnostic reported for its input: the parser still runs over the
/// tokens read so far so a tree is always returned, but its complaints about the cut-off
/// stream are dropped.
pub fn analyze_syntax_with(text: &str, config: ParseConfig) -> ParseOutput {
    let LexOutput {
        tokens,
        diagnostics: lex_errors,
    } = lex(text);
    let mut out = parser::Parser::new(text, tokens, config).parse();
    if !lex_errors.is_empty() {
        out.diagnostics = lex_errors;
    }
    out
}
