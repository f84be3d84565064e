use mathline::{
    error::{ParseError, RuntimeError},
    eval_line,
    interpreter::evaluator::core::Interpreter,
    parse_line,
};

fn eval_fresh(src: &str) -> f32 {
    let mut interpreter = Interpreter::new();
    eval_line(&mut interpreter, src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn assert_result(src: &str, expected: f32) {
    let value = eval_fresh(src);
    assert_eq!(value, expected, "'{src}' evaluated to {value}, expected {expected}");
}

fn assert_session(lines: &[(&str, f32)]) {
    let mut interpreter = Interpreter::new();
    for (src, expected) in lines {
        let value = eval_line(&mut interpreter, src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"));
        assert_eq!(value, *expected, "'{src}' evaluated to {value}, expected {expected}");
    }
}

#[test]
fn precedence_orders_operations() {
    assert_result("2 + 3 * 4", 14.0);
    assert_result("(2 + 3) * 4", 20.0);
    assert_result("2 * 3 + 4", 10.0);
    assert_result("10 - 4 / 2", 8.0);
    assert_result("8 / 4 / 2", 1.0);
}

#[test]
fn unary_sign_composes() {
    assert_result("- - 5", 5.0);
    assert_result("-5 + 3", -2.0);
    assert_result("+5", 5.0);
    assert_result("-(2 + 3)", -5.0);
    assert_result("2 - -3", 5.0);
}

#[test]
fn decimal_literals() {
    assert_result("1.5 + 1.5", 3.0);
    assert_result("0.25 * 4", 1.0);
    // A trailing dot is accepted as written.
    assert_result("1. + 2", 3.0);
}

#[test]
fn assignment_is_an_expression_and_persists() {
    assert_session(&[("x = 5", 5.0), ("x + 1", 6.0)]);
    assert_session(&[("x = 2 + 3", 5.0), ("x * x", 25.0)]);
}

#[test]
fn chained_assignment_binds_both_names() {
    assert_session(&[("a = b = 3", 3.0), ("a", 3.0), ("b", 3.0)]);
}

#[test]
fn assignment_inside_grouping_takes_effect_left_to_right() {
    assert_result("(x = 2) + x", 4.0);
    assert_result("(x = 2) + (x = x + 1)", 5.0);
}

#[test]
fn reassignment_updates_in_place() {
    assert_session(&[("x = 1", 1.0), ("x = 2", 2.0), ("x", 2.0)]);
}

#[test]
fn prefix_names_do_not_collide() {
    assert_session(&[("a = 1", 1.0), ("ab = 2", 2.0), ("a", 1.0), ("ab", 2.0)]);
}

#[test]
fn identifiers_are_case_sensitive() {
    let mut interpreter = Interpreter::new();
    eval_line(&mut interpreter, "x = 1").unwrap();

    let ast = parse_line("X").unwrap();
    let result = interpreter.eval(ast.as_ref());
    assert!(matches!(result, Err(RuntimeError::UnknownVariable { ref name, .. }) if name == "X"));
}

#[test]
fn division_by_zero_is_error_and_session_survives() {
    let mut interpreter = Interpreter::new();

    let ast = parse_line("4 / 0").unwrap();
    let result = interpreter.eval(ast.as_ref());
    assert!(matches!(result, Err(RuntimeError::DivisionByZero { .. })));

    // The next line evaluates normally.
    assert_eq!(eval_line(&mut interpreter, "1 + 1").unwrap(), 2.0);
}

#[test]
fn unknown_variable_is_error_and_store_is_untouched() {
    let mut interpreter = Interpreter::new();

    let ast = parse_line("x + 1").unwrap();
    let result = interpreter.eval(ast.as_ref());
    assert!(matches!(result, Err(RuntimeError::UnknownVariable { ref name, .. }) if name == "x"));
    assert!(interpreter.bindings.is_empty());
}

#[test]
fn unknown_variable_aborts_before_assignment() {
    let mut interpreter = Interpreter::new();

    // The RHS fails, so 'y' must not be bound.
    let ast = parse_line("y = z + 1").unwrap();
    assert!(interpreter.eval(ast.as_ref()).is_err());
    assert!(interpreter.bindings.is_empty());
}

#[test]
fn unclosed_parenthesis_is_a_parse_error() {
    assert!(matches!(parse_line("(1 + 2"),
                     Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(parse_line("((1 + 2)"),
                     Err(ParseError::ExpectedClosingParen { .. })));
}

#[test]
fn assignment_to_non_variable_target_is_a_parse_error() {
    assert!(matches!(parse_line("1 + 2 = 3"),
                     Err(ParseError::ExpectedVariableName { .. })));
    assert!(matches!(parse_line("(x) = 2"),
                     Err(ParseError::ExpectedVariableName { .. })));
}

#[test]
fn trailing_tokens_are_a_parse_error() {
    assert!(matches!(parse_line("1 2"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(parse_line("1 + 2)"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn dangling_operator_is_a_parse_error() {
    assert!(matches!(parse_line("1 +"),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse_line("x ="),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn unrecognized_characters_are_errors() {
    assert!(matches!(parse_line("2 $ 2"),
                     Err(ParseError::UnrecognizedToken { .. })));
    // Tabs are not whitespace in this language.
    assert!(matches!(parse_line("\t1"),
                     Err(ParseError::UnrecognizedToken { .. })));
}

#[test]
fn blank_line_parses_to_none() {
    assert!(parse_line("").unwrap().is_none());
    assert!(parse_line("   ").unwrap().is_none());
    assert!(parse_line("\n").unwrap().is_none());
}

#[test]
fn line_is_truncated_at_newline() {
    // Only the first line is a unit; what follows belongs to the next read.
    assert_result("1 + 2\n3 +", 3.0);
}

#[test]
fn empty_ast_evaluation_is_an_error() {
    let mut interpreter = Interpreter::new();
    assert!(matches!(interpreter.eval(None),
                     Err(RuntimeError::NothingToInterpret)));
}

#[test]
fn idempotent_evaluation_of_pure_expressions() {
    let mut interpreter = Interpreter::new();
    eval_line(&mut interpreter, "x = 3").unwrap();

    let first = eval_line(&mut interpreter, "x * x + 1").unwrap();
    let second = eval_line(&mut interpreter, "x * x + 1").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, 10.0);
}
