//! Spanned error reports and their plain-text rendering.

use std::fmt::Write;

use crate::source_map::SourceMap;
use crate::span::Span;

/// An error located in the source text, optionally pointing at related locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub labels: Vec<Label>,
}

/// Secondary location attached to a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            span,
            labels: Vec::new(),
        }
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
        });
        self
    }

    fn write_to(&self, map: &SourceMap, out: &mut String) -> std::fmt::Result {
        let (line, col) = map.line_col(self.span.start);
        writeln!(out, "error: {}", self.message)?;
        writeln!(
            out,
            "  --> <input>:{line}:{col} [{}..{}]",
            self.span.start, self.span.end
        )?;
        for label in &self.labels {
            let (line, col) = map.line_col(label.span.start);
            writeln!(
                out,
                "  = label: {line}:{col} [{}..{}] {}",
                label.span.start, label.span.end, label.message
            )?;
        }
        Ok(())
    }
}

/// Renders `diagnostics` against `source`, ordered by position.
///
/// ```text
/// error: expected ')', found end of input
///   --> <input>:1:7 [6..6]
///   = label: 1:1 [0..1] this '(' is not closed
/// ```
pub fn format_diagnostics(source: &str, diagnostics: &[Diagnostic]) -> String {
    let map = SourceMap::new(source);
    let mut ordered: Vec<&Diagnostic> = diagnostics.iter().collect();
    ordered.sort_by(|a, b| {
        (a.span.start, a.span.end, &a.message).cmp(&(b.span.start, b.span.end, &b.message))
    });

    let mut out = String::new();
    for diagnostic in ordered {
        // Writing into a `String` cannot fail.
        let _ = diagnostic.write_to(&map, &mut out);
    }
    out
}
