use crate::ast::{BinOpKind, ExprKind, UnOp};
use crate::tests::common::{assert_bin, assert_num, assert_unary, parse_ok};

#[test]
fn test_multiplication_binds_tighter() {
    let expr = parse_ok("1 + 2 * 3");
    let (l, r) = assert_bin!(expr, BinOpKind::Add);
    assert_num!(l, "1");
    let (rl, rr) = assert_bin!(r, BinOpKind::Mul);
    assert_num!(rl, "2");
    assert_num!(rr, "3");

    let expr = parse_ok("7 % 3 - 1");
    let (l, _) = assert_bin!(expr, BinOpKind::Sub);
    assert_bin!(l, BinOpKind::Rem);
}

#[test]
fn test_left_associative() {
    let expr = parse_ok("10 - 4 - 3");
    let (l, r) = assert_bin!(expr, BinOpKind::Sub);
    assert_num!(r, "3");
    let (ll, lr) = assert_bin!(l, BinOpKind::Sub);
    assert_num!(ll, "10");
    assert_num!(lr, "4");

    let expr = parse_ok("8 / 2 * 4");
    let (l, _) = assert_bin!(expr, BinOpKind::Mul);
    assert_bin!(l, BinOpKind::Div);
}

#[test]
fn test_power_right_associative() {
    let expr = parse_ok("2 ^ 3 ^ 2");
    let (l, r) = assert_bin!(expr, BinOpKind::Caret);
    assert_num!(l, "2");
    assert_bin!(r, BinOpKind::Caret);

    let expr = parse_ok("2 ** 3 ^ 2");
    let (_, r) = assert_bin!(expr, BinOpKind::StarStar);
    assert_bin!(r, BinOpKind::Caret);
}

#[test]
fn test_prefix_binds_tighter_than_power() {
    let expr = parse_ok("-2 ^ 2");
    let (l, r) = assert_bin!(expr, BinOpKind::Caret);
    assert_num!(assert_unary!(l, UnOp::Neg), "2");
    assert_num!(r, "2");

    let expr = parse_ok("2 ^ -1");
    let (_, r) = assert_bin!(expr, BinOpKind::Caret);
    assert_unary!(r, UnOp::Neg);
}

#[test]
fn test_repeated_signs() {
    let expr = parse_ok("+-+5");
    let inner = assert_unary!(expr, UnOp::Pos);
    let inner = assert_unary!(inner, UnOp::Neg);
    let inner = assert_unary!(inner, UnOp::Pos);
    assert_num!(inner, "5");

    let expr = parse_ok("3 * -2");
    let (_, r) = assert_bin!(expr, BinOpKind::Mul);
    assert_unary!(r, UnOp::Neg);
}

#[test]
fn test_parentheses_make_no_node() {
    let expr = parse_ok("((42))");
    assert_num!(expr, "42");

    let expr = parse_ok("(1 + 2) * 3");
    let (l, _) = assert_bin!(expr, BinOpKind::Mul);
    assert_bin!(l, BinOpKind::Add);
}

#[test]
fn test_number_text_is_kept() {
    assert_num!(parse_ok("2.50"), "2.50");
    assert_num!(parse_ok(".5e-3"), ".5e-3");
}

#[test]
fn test_long_flat_chain_builds_and_drops() {
    // 200k terms in one left spine; dropping it must not recurse.
    let src = vec!["1"; 200_000].join("+");
    let expr = parse_ok(&src);
    let (leftmost, links) = expr.left_spine();
    assert_num!(leftmost, "1");
    assert_eq!(links.len(), 199_999);
    assert!(links.iter().all(|l| l.op.kind == BinOpKind::Add));
    assert!(matches!(expr.kind, ExprKind::Binary { .. }));
    drop(links);
    drop(expr);
}
