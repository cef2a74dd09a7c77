use crate::ast::{BinOpKind, ExprKind};
use crate::span::Span;
use crate::tests::common::{assert_bin, init_tracing, messages, parse_err};
use crate::{ParseConfig, analyze_syntax, analyze_syntax_with};

#[test]
fn test_empty_input() {
    for src in ["", "   ", "\n\t"] {
        let out = parse_err(src);
        assert_eq!(messages(&out), vec!["empty expression"]);
        assert!(matches!(out.expr.kind, ExprKind::Error));
    }
}

#[test]
fn test_trailing_tokens() {
    assert_eq!(
        messages(&parse_err("1 2")),
        vec!["unexpected number after expression"]
    );
    assert_eq!(
        messages(&parse_err("1 + 2)")),
        vec!["unexpected `)` after expression"]
    );
    // No implicit multiplication.
    assert_eq!(
        messages(&parse_err("2(3)")),
        vec!["unexpected `(` after expression"]
    );
}

#[test]
fn test_unclosed_paren_points_at_open() {
    let out = parse_err("(1 + 2");
    assert_eq!(out.diagnostics.len(), 1);
    let diag = &out.diagnostics[0];
    assert_eq!(diag.message, "expected ')', found end of input");
    assert_eq!(diag.span, Span::at(6));
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.labels[0].span, Span::new(0, 1));
    assert_eq!(diag.labels[0].message, "this '(' is not closed");
}

#[test]
fn test_unclosed_paren_skips_to_matching_close() {
    let out = parse_err("(1 (2)) + 3");
    assert_eq!(messages(&out), vec!["expected ')', found `(`"]);
    assert_bin!(out.expr, BinOpKind::Add);
}

#[test]
fn test_dangling_operators() {
    assert_eq!(
        messages(&parse_err("1 +")),
        vec!["expected expression after '+'"]
    );
    assert_eq!(
        messages(&parse_err("2 **")),
        vec!["expected expression after '**'"]
    );
    assert_eq!(
        messages(&parse_err("-")),
        vec!["expected expression after unary '-'"]
    );
    assert_eq!(
        messages(&parse_err("* 2")),
        vec!["expected expression, found `*`"]
    );
}

#[test]
fn test_operator_after_operator_recovers() {
    let out = parse_err("1 + * 2");
    assert_eq!(messages(&out), vec!["expected expression after '+'"]);
    let (l, _) = assert_bin!(out.expr, BinOpKind::Mul);
    let (_, missing) = assert_bin!(l, BinOpKind::Add);
    assert!(matches!(missing.kind, ExprKind::Error));
    assert_eq!(missing.span, Span::at(3));
}

#[test]
fn test_empty_parens() {
    let out = parse_err("()");
    assert_eq!(messages(&out), vec!["expected expression, found `)`"]);
    assert!(matches!(out.expr.kind, ExprKind::Error));
    assert_eq!(out.expr.span, Span::new(0, 2));
}

#[test]
fn test_missing_operand_inside_parens() {
    let out = parse_err("(1 + ) 3");
    assert_eq!(
        messages(&out),
        vec![
            "expected expression after '+'",
            "unexpected number after expression"
        ]
    );
}

#[test]
fn test_lexer_error_replaces_parser_errors() {
    // The cut-off stream `1 +` would also be a parse error; only the lexer's is reported.
    let out = parse_err("1 + x");
    assert_eq!(messages(&out), vec!["unexpected char 'x'"]);

    let out = parse_err("__import__('os')");
    assert_eq!(messages(&out), vec!["unexpected char '_'"]);
}

#[test]
fn test_nesting_limit_reported_once() {
    init_tracing();
    let config = ParseConfig { max_nesting: 8 };
    let src = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    let out = analyze_syntax_with(&src, config);
    assert_eq!(
        messages(&out),
        vec!["expression nested too deeply (limit 8)"]
    );

    let src = format!("{}1{}", "(".repeat(6), ")".repeat(6));
    assert!(!analyze_syntax_with(&src, config).has_errors());
}

#[test]
fn test_long_sign_run_is_bounded() {
    init_tracing();
    let src = format!("{}1", "-".repeat(100_000));
    let out = analyze_syntax(&src);
    assert_eq!(
        messages(&out),
        vec!["expression nested too deeply (limit 256)"]
    );
    assert!(matches!(out.expr.kind, ExprKind::Unary { .. }));
}

#[test]
fn test_long_power_chain_is_bounded() {
    init_tracing();
    let src = vec!["2"; 10_000].join("^");
    let out = analyze_syntax(&src);
    assert_eq!(
        messages(&out),
        vec!["expression nested too deeply (limit 256)"]
    );
}
