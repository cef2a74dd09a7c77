use crate::{EvaluationError, EvaluationFailure, Number, evaluate_expression};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Evaluates `src` and asserts success.
pub fn eval_ok(src: &str) -> Number {
    init_tracing();
    match evaluate_expression(src) {
        Ok(n) => n,
        Err(err) => panic!("expected {src:?} to evaluate, got {err:?}"),
    }
}

/// Evaluates `src` and asserts that it parsed but failed in the evaluator.
pub fn eval_err(src: &str) -> EvaluationError {
    init_tracing();
    match evaluate_expression(src) {
        Err(EvaluationFailure::Evaluation(err)) => err,
        other => panic!("expected evaluation error for {src:?}, got {other:?}"),
    }
}
