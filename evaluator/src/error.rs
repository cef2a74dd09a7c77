//! Error types for parsing and evaluating arithmetic expressions.
//!
//! - [`SyntaxError`]: the text is not a well-formed expression.
//! - [`EvaluationError`]: the tree cannot be evaluated, or its value is undefined.
//! - [`EvaluationFailure`]: either of the above, as returned by
//!   [`evaluate_expression`](crate::evaluate_expression).

use analyzer::{Diagnostic, Span, format_diagnostics};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("syntax error: {}", first_message(.diagnostics))]
pub struct SyntaxError {
    pub diagnostics: Vec<Diagnostic>,
}

impl SyntaxError {
    /// Renders every diagnostic against `source`.
    pub fn render(&self, source: &str) -> String {
        format_diagnostics(source, &self.diagnostics)
    }
}

fn first_message(diagnostics: &[Diagnostic]) -> &str {
    diagnostics
        .first()
        .map(|d| d.message.as_str())
        .unwrap_or("invalid expression")
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// A node outside the arithmetic allow-list. Parsed trees only carry these where parsing
    /// failed, so this is reached by evaluating the tree of a rejected parse.
    #[error("{kind} cannot be evaluated")]
    DisallowedConstruct { kind: &'static str, span: Span },

    #[error("invalid number literal '{text}'")]
    InvalidLiteral { text: String, span: Span },

    #[error("division by zero")]
    DivisionByZero { span: Span },

    #[error("numeric result out of range")]
    Overflow { span: Span },

    #[error("result is not a real number")]
    NotReal { span: Span },

    #[error("expression nested too deeply (depth {depth}, limit {max_depth})")]
    TooDeep { depth: usize, max_depth: usize },
}

impl EvaluationError {
    /// Source span of the offending node, when the error has one.
    pub fn span(&self) -> Option<Span> {
        use EvaluationError::*;
        match self {
            DisallowedConstruct { span, .. }
            | InvalidLiteral { span, .. }
            | DivisionByZero { span }
            | Overflow { span }
            | NotReal { span } => Some(*span),
            TooDeep { .. } => None,
        }
    }

    /// Converts the error into a front-end diagnostic so both failure kinds render alike.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.span().unwrap_or_default(), self.to_string())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EvaluationFailure {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl EvaluationFailure {
    pub fn render(&self, source: &str) -> String {
        match self {
            EvaluationFailure::Syntax(err) => err.render(source),
            EvaluationFailure::Evaluation(err) => {
                format_diagnostics(source, &[err.to_diagnostic()])
            }
        }
    }
}
