use crate::ast::Expr;
use crate::{ParseOutput, analyze_syntax};

/// Installs a test-scoped subscriber; `RUST_LOG=analyzer=trace` shows lexer and parser events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn parse_ok(src: &str) -> Expr {
    init_tracing();
    let out = analyze_syntax(src);
    assert!(
        out.diagnostics.is_empty(),
        "unexpected diagnostics for {src:?}: {:?}",
        out.diagnostics
    );
    out.expr
}

pub fn parse_err(src: &str) -> ParseOutput {
    init_tracing();
    let out = analyze_syntax(src);
    assert!(
        out.has_errors(),
        "expected diagnostics for {src:?}, got {}",
        out.expr.pretty()
    );
    out
}

pub fn messages(out: &ParseOutput) -> Vec<&str> {
    out.diagnostics.iter().map(|d| d.message.as_str()).collect()
}

/// Destructures a binary node with the given operator kind into `(left, right)`.
macro_rules! assert_bin {
    ($e:expr, $kind:pat) => {
        match &($e).kind {
            $crate::ast::ExprKind::Binary { op, left, right } if matches!(op.kind, $kind) => {
                (left.as_ref(), right.as_ref())
            }
            other => panic!("expected {} node, got {other:?}", stringify!($kind)),
        }
    };
}

macro_rules! assert_unary {
    ($e:expr, $op:pat) => {
        match &($e).kind {
            $crate::ast::ExprKind::Unary { op, expr } if matches!(op, $op) => expr.as_ref(),
            other => panic!("expected {} node, got {other:?}", stringify!($op)),
        }
    };
}

macro_rules! assert_num {
    ($e:expr, $text:expr) => {
        match &($e).kind {
            $crate::ast::ExprKind::Number(text) => assert_eq!(text, $text),
            other => panic!("expected number {:?}, got {other:?}", $text),
        }
    };
}

pub(crate) use {assert_bin, assert_num, assert_unary};
