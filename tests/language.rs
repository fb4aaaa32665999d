use std::fs::{self};

use quill::{
    error::{Error, ParseError, RuntimeError},
    get_result,
};
use walkdir::WalkDir;

#[test]
fn fixture_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("programs").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "ql"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        match get_result(&source) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?} differs"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in programs/");
}

fn assert_output(src: &str, expected: &str) {
    match get_result(src) {
        Ok(output) => assert_eq!(output, expected, "program:\n{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(output) => panic!("Script succeeded but was expected to fail, printed {output:?}"),
        Err(e) => e,
    }
}

fn parse_failure(src: &str) -> ParseError {
    match assert_failure(src) {
        Error::Parse(e) => e,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match assert_failure(src) {
        Error::Runtime(e) => e,
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

#[test]
fn declaration_and_basic_arithmetic() {
    assert_output("var x = 1 + 2; print(x);", "3\n");
    assert_output("var x = 7 * 9; print(x);", "63\n");
    assert_output("var x = 8 - 5; print(x);", "3\n");
    assert_output("var x = 10 / 4; print(x);", "2.5\n");
    assert_output("var x = 17 % 5; print(x);", "2\n");
    assert_output("var x = 7.5 % 2; print(x);", "1.5\n");
    assert_output("print(1 + 2 * 3 - 4 / 2);", "5\n");
    assert_output("print((1 + 2) * 3);", "9\n");
    assert_output("print(0.1 + 0.2);", "0.3\n");
}

#[test]
fn numeric_literals() {
    assert_output("print(2.);", "2\n");
    assert_output("print(.5);", "0.5\n");
    assert_output("print(1000000);", "1e+06\n");
    assert_output("print(123456);", "123456\n");
}

#[test]
fn declaration_without_initializer_is_zero() {
    assert_output("var x; print(x);", "0\n");
}

#[test]
fn exponent_is_right_associative() {
    assert_output("print(2 ** 3 ** 2);", "512\n");
    assert_output("print(2 ** 0.5 ** 2);", "1.18921\n");
}

#[test]
fn unary_operators() {
    assert_output("print(-3);", "-3\n");
    assert_output("print(--3);", "3\n");
    assert_output("print(!0);", "1\n");
    assert_output("print(!7);", "0\n");
    assert_output("print(!!7);", "1\n");
    assert_output("print(-2 ** 2);", "4\n");
    assert_output("var x = 4; print(-x * 2);", "-8\n");
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_output("print(2 < 3);", "1\n");
    assert_output("print(3 < 2);", "0\n");
    assert_output("print(2 <= 2);", "1\n");
    assert_output("print(3 >= 4);", "0\n");
    assert_output("print(2 == 2);", "1\n");
    assert_output("print(2 != 2);", "0\n");
    assert_output("print(1 + 1 == 2);", "1\n");
    assert_output("print(1 < 2 == 1);", "1\n");
}

#[test]
fn chained_comparisons_are_rejected() {
    assert!(matches!(parse_failure("print(1 < 2 < 3);"),
                     ParseError::ChainedComparison { line: 1 }));
    assert!(matches!(parse_failure("print(1 == 1 != 0);"),
                     ParseError::ChainedEquality { line: 1 }));
    assert_output("print((1 < 2) < 3);", "1\n");
}

#[test]
fn logical_operators_normalize() {
    assert_output("print(2 && 3);", "1\n");
    assert_output("print(0 && 3);", "0\n");
    assert_output("print(0 || 5);", "1\n");
    assert_output("print(0 || 0);", "0\n");
    assert_output("print(1 || 0 && 0);", "1\n");
}

#[test]
fn logical_operators_chain_left_to_right() {
    assert_output("print(0 || 0 || 1);", "1\n");
    assert_output("print(0 || 0 || 0);", "0\n");
    assert_output("print(1 && 1 && 0);", "0\n");
    assert_output("print(1 && 1 && 1);", "1\n");
    assert_output("var x = 0; var y = 1 || 0 || (x = 1); print(x);", "0\n");
    assert_output("var x = 0; var y = 0 && 1 && (x = 1); print(x);", "0\n");
    assert_output("var x = 0; var y = 0 || 0 || (x = 1); print(x); print(y);", "1\n1\n");
}

#[test]
fn deeply_nested_programs_are_rejected() {
    let source = format!("print({}1{});", "(".repeat(2000), ")".repeat(2000));
    assert!(matches!(parse_failure(&source), ParseError::NestingTooDeep { line: 1, .. }));
    assert_output(&format!("print({}1{});", "(".repeat(20), ")".repeat(20)), "1\n");
}

#[test]
fn logical_operators_short_circuit() {
    assert_output("var x = 0; var y = 0 && (x = 1); print(x);", "0\n");
    assert_output("var x = 0; var y = 1 || (x = 1); print(x);", "0\n");
    assert_output("var x = 0; var y = 1 && (x = 1); print(x);", "1\n");
    assert_output("var x = 0; var y = 0 || (x = 1); print(x);", "1\n");
}

#[test]
fn assignment_is_an_expression() {
    assert_output("var a; var b; a = b = 3; print(a); print(b);", "3\n3\n");
    assert_output("var a; print(a = 4);", "4\n");
    assert_output("var a; (a) = 5; print(a);", "5\n");
    assert!(matches!(parse_failure("var a; a + 1 = 2;"),
                     ParseError::InvalidAssignmentTarget { .. }));
    assert!(matches!(parse_failure("3 = 2;"), ParseError::InvalidAssignmentTarget { .. }));
}

#[test]
fn inner_scopes_shadow_outer_variables() {
    assert_output("var x = 1; { var x = 2; print(x); } print(x);", "2\n1\n");
    assert_output("var x = 1; { x = 2; } print(x);", "2\n");
    assert_output("var x = 1; { var x = x + 10; print(x); } print(x);", "11\n1\n");
}

#[test]
fn variables_are_not_visible_after_their_block() {
    assert!(matches!(parse_failure("{ var x = 1; } print(x);"),
                     ParseError::UndeclaredVariable { ref name, line: 1 } if name == "x"));
}

#[test]
fn redeclaration_in_same_scope_fails() {
    let err = parse_failure("var x = 1;\nvar x = 2;");
    assert!(matches!(err, ParseError::Redeclaration { ref name, line: 2 } if name == "x"));
    assert_output("var x = 1; { var x = 2; } { var x = 3; print(x); }", "3\n");
}

#[test]
fn if_and_else() {
    assert_output("if (1) print(1); else print(2);", "1\n");
    assert_output("if (0) print(1); else print(2);", "2\n");
    assert_output("if (0) print(1); print(3);", "3\n");
    assert_output("var x = 5; if (x > 3) { print(\"big\"); } else { print(\"small\"); }",
                  "big\n");
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    assert_output("if (1) if (0) print(1); else print(2);", "2\n");
    assert_output("if (0) if (1) print(1); else print(2);", "");
}

#[test]
fn while_loops() {
    assert_output("var i = 0; while (i < 3) { print(i); i = i + 1; }", "0\n1\n2\n");
    assert_output("var i = 0; while (i < 0) print(i);", "");
    assert_output("var i = 3; while ((i = i - 1) > 0); print(i);", "0\n");
}

#[test]
fn declaration_in_loop_body_resets() {
    assert_output("var i = 0; while (i < 2) { var n; n = n + 1; print(n); i = i + 1; }",
                  "1\n1\n");
}

#[test]
fn print_interpolation() {
    assert_output("var x = 5; print(\"value={x}\");", "value=5\n");
    assert_output("var x = 1.5; var y = 2; print(\"{x} and { y }\");", "1.5 and 2\n");
    assert_output("print(\"plain text\");", "plain text\n");
    assert_output("print(\"\");", "\n");
    assert_output("print(\"a } b\");", "a } b\n");
}

#[test]
fn print_interpolation_errors() {
    assert!(matches!(parse_failure("print(\"{missing}\");"),
                     ParseError::UndeclaredVariable { .. }));
    assert!(matches!(parse_failure("var x; print(\"{x\");"),
                     ParseError::MalformedInterpolation { .. }));
    assert!(matches!(parse_failure("var x; print(\"{x + 1}\");"),
                     ParseError::MalformedInterpolation { .. }));
}

#[test]
fn string_literal_outside_print_is_rejected() {
    assert!(matches!(parse_failure("var x = \"text\";"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("print(\"a\" + 1);"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn comments_are_ignored() {
    assert_output("// nothing here\nvar x = 2; // two\nprint(x); // done", "2\n");
}

#[test]
fn division_and_modulus_by_zero_fail() {
    assert!(matches!(runtime_failure("5 / 0;"), RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(runtime_failure("5 % 0;"), RuntimeError::ModulusByZero { line: 1 }));
    assert!(matches!(runtime_failure("var z = 0;\n\nprint(1 / z);"),
                     RuntimeError::DivisionByZero { line: 3 }));
}

#[test]
fn output_before_runtime_error_is_kept() {
    let mut out = Vec::new();
    let result = quill::run("print(1); print(1 / 0); print(2);", &mut out);
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert_eq!(out, b"1\n");
}

#[test]
fn parse_errors_prevent_any_output() {
    let mut out = Vec::new();
    assert!(quill::run("print(1);\nprint(2)", &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn syntax_errors_report_kinds_and_lines() {
    let err = parse_failure("var x = 1;\nprint(x)\n");
    assert!(matches!(err, ParseError::UnexpectedEndOfInput { ref expected, line: 2 }
                          if expected == "SEMICOLON"));

    let err = parse_failure("var x = 1;\nprint(x) x;");
    assert!(matches!(err, ParseError::UnexpectedToken { ref expected, ref found, line: 2 }
                          if expected == "SEMICOLON" && found == "IDENTIFIER"));

    let err = parse_failure("if 1 print(1);");
    assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == "INT"));

    let err = parse_failure("{ var x = 1;");
    assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));

    let err = parse_failure("var x = 1 @ 2;");
    assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == "'@'"));
}

#[test]
fn error_messages_name_the_line() {
    let err = assert_failure("var a = 1;\nvar a = 2;");
    assert_eq!(err.line(), Some(2));
    assert!(err.to_string().starts_with("Error on line 2:"), "{err}");

    let err = assert_failure("\n\n5 % 0;");
    assert_eq!(err.to_string(), "Error on line 3: Modulus by zero.");
}

#[test]
fn empty_program_prints_nothing() {
    assert_output("", "");
    assert_output("  // just a comment\n", "");
    assert_output(";;", "");
}
