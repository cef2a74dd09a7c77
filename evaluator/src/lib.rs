//! Restricted arithmetic evaluation.
//!
//! Pipeline: [`parse`] (the `analyzer` front end) → [`evaluate`] (allow-list walk) → [`Number`].
//! Anything outside numbers, unary `+`/`-`, the binary operators `+ - * / % ^ **` and
//! parentheses is a [`SyntaxError`]; the walk itself still rejects any node it does not
//! recognize.
use analyzer::analyze_syntax_with;
use analyzer::ast::Expr;

mod error;
mod eval;
mod number;
mod operators;
mod tests;

pub use analyzer::{ParseConfig, Span, ast};
pub use error::{EvaluationError, EvaluationFailure, SyntaxError};
pub use number::Number;
pub use operators::{ArithOp, SignOp};

/// Default cap on evaluator nesting. Trees from the parser stay within its own nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    pub parse: ParseConfig,
    /// Deepest tree the evaluator walks before failing with [`EvaluationError::TooDeep`].
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            parse: ParseConfig::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Evaluator { config }
    }

    /// Parses `text` into an expression tree. Any front-end diagnostic fails the parse.
    pub fn parse(&self, text: &str) -> Result<Expr, SyntaxError> {
        let out = analyze_syntax_with(text, self.config.parse);
        if out.has_errors() {
            tracing::debug!(
                diagnostics = out.diagnostics.len(),
                first = ?out.diagnostics.first().map(|d| d.message.as_str()),
                "rejected malformed expression"
            );
            return Err(SyntaxError {
                diagnostics: out.diagnostics,
            });
        }
        tracing::trace!(tree = %out.expr.pretty(), "parsed expression");
        Ok(out.expr)
    }

    /// Evaluates `expr` if it consists solely of allowed arithmetic constructs.
    pub fn evaluate(&self, expr: &Expr) -> Result<Number, EvaluationError> {
        let result = eval::Walker::new(self.config.max_depth).eval_expr(expr);
        if let Err(err) = &result {
            tracing::debug!(error = %err, span = ?err.span(), "evaluation failed");
        }
        result
    }

    #[tracing::instrument(skip(self))]
    pub fn evaluate_expression(&self, text: &str) -> Result<Number, EvaluationFailure> {
        let expr = self.parse(text)?;
        Ok(self.evaluate(&expr)?)
    }
}

/// [`Evaluator::parse`] with the default configuration.
pub fn parse(text: &str) -> Result<Expr, SyntaxError> {
    Evaluator::default().parse(text)
}

/// [`Evaluator::evaluate`] with the default configuration.
pub fn evaluate(expr: &Expr) -> Result<Number, EvaluationError> {
    Evaluator::default().evaluate(expr)
}

/// Parses and evaluates `text`.
///
/// ```
/// use evaluator::{Number, evaluate_expression};
///
/// assert_eq!(evaluate_expression("2+3*(4-1)/2").unwrap(), Number::Float(6.5));
/// assert!(evaluate_expression("10/0").is_err());
/// assert!(evaluate_expression("__import__('os')").is_err());
/// ```
pub fn evaluate_expression(text: &str) -> Result<Number, EvaluationFailure> {
    Evaluator::default().evaluate_expression(text)
}
