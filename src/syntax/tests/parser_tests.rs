use syntax::{
    ast::{BinaryOp, Expression, Number},
    parse, Error,
};

#[test]
fn literal() {
    let syntax = parse("123");
    assert!(matches!(syntax, Ok(Expression::Literal(_))));
}

#[test]
fn precedence_shapes_the_tree() {
    let syntax = parse("2 + 3 * 4").unwrap();
    match &syntax {
        Expression::Binary(b) => {
            assert_eq!(b.operator(), BinaryOp::Add);
            assert!(matches!(b.right(), Expression::Binary(inner)
                if inner.operator() == BinaryOp::Mul));
        }
        other => panic!("expected a binary expression, got {other:?}"),
    }
}

#[test]
fn parentheses_override_precedence() {
    let syntax = parse("(2 + 3) * 4").unwrap();
    match &syntax {
        Expression::Binary(b) => {
            assert_eq!(b.operator(), BinaryOp::Mul);
            assert!(matches!(b.left(), Expression::Binary(inner)
                if inner.operator() == BinaryOp::Add));
        }
        other => panic!("expected a binary expression, got {other:?}"),
    }
}

#[test]
fn subtraction_is_left_associative() {
    // (8 - 3) - 2, not 8 - (3 - 2).
    let syntax = parse("8 - 3 - 2").unwrap();
    match &syntax {
        Expression::Binary(b) => {
            assert_eq!(b.operator(), BinaryOp::Sub);
            assert!(matches!(b.left(), Expression::Binary(_)));
            assert!(matches!(b.right(), Expression::Literal(l)
                if l.value() == Number::Int(2)));
        }
        other => panic!("expected a binary expression, got {other:?}"),
    }
}

#[test]
fn unary_minus_nests() {
    let syntax = parse("--5").unwrap();
    assert!(matches!(&syntax, Expression::Unary(u)
        if matches!(u.operand(), Expression::Unary(_))));
}

#[test]
fn division_by_literal_zero_is_not_a_parse_error() {
    assert!(parse("1 / 0").is_ok());
}

#[test]
fn missing_operand_fails_past_the_operator() {
    let error = parse("2 + ").unwrap_err();
    match error {
        Error::Unexpected { span, .. } => {
            assert!(span.start().offset() >= 3);
        }
        other => panic!("expected an unexpected-token error, got {other:?}"),
    }
}

#[test]
fn unmatched_paren_fails_at_end_of_input() {
    let error = parse("(2 + 3").unwrap_err();
    match error {
        Error::UnmatchedParen { open, found } => {
            assert_eq!(open.byte_range(), 0..1);
            assert_eq!(found.start().offset(), 6);
        }
        other => panic!("expected an unmatched-paren error, got {other:?}"),
    }
}

#[test]
fn two_operators_in_a_row() {
    // `*` can't start a factor. (`-` could, so `2 + -3` is fine.)
    assert!(matches!(parse("2 + * 3"), Err(Error::Unexpected { .. })));
    assert!(parse("2 + -3").is_ok());
}

#[test]
fn empty_input() {
    assert!(matches!(parse(""), Err(Error::Unexpected { .. })));
}

#[test]
fn lexical_errors_surface_through_parse() {
    assert!(matches!(parse("2 @ 3"), Err(Error::Lexer(_))));
}

#[test]
fn parse_is_idempotent() {
    let first = parse("1 + 2 * -3").unwrap();
    let second = parse("1 + 2 * -3").unwrap();
    assert_eq!(first, second);
}

#[test]
fn round_trip_through_rendering() {
    for input in [
        "1",
        "2.5",
        "1 + 2",
        "2 + 3 * 4",
        "(2 + 3) * 4",
        "8 - 3 - 2",
        "8 / 4 / 2",
        "8 - (3 - 2)",
        "--5",
        "-2 * 3",
        "-(2 + 3)",
        "1 + 2 + 3 + 4",
        "((1.5))",
        "2 * (3 + 4) / -5",
    ] {
        let tree = parse(input).unwrap();
        let rendered = format!("{}", tree);
        let reparsed = parse(&rendered)
            .unwrap_or_else(|e| panic!("{rendered:?} failed to re-parse: {e}"));
        assert_eq!(tree, reparsed, "round trip failed for {input:?}");
    }
}
