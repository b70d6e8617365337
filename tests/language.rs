use std::fs;

use stagecalc::{
    ast::{Expr, Operator},
    calculate,
    error::{ArithError, CalcError, Stage},
    get_result,
    util::format::DisplayOptions,
};
use walkdir::WalkDir;

fn bare() -> DisplayOptions {
    DisplayOptions { precision: None,
                     prefix:    String::new(), }
}

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            let result = get_result(&expression, &bare());

            match (expected.strip_prefix("error "), result) {
                (None, Ok(text)) => {
                    assert_eq!(text, expected, "{expression:?} in {path:?}");
                },
                (Some(kind), Err(e)) => {
                    assert_eq!(error_kind(&e), kind, "{expression:?} in {path:?}: {e}");
                },
                (_, result) => {
                    panic!("{expression:?} in {path:?}: expected {expected}, got {result:?}")
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .filter_map(|line| line.rsplit_once("=>"))
           .map(|(expression, expected)| (expression.to_string(), expected.trim().to_string()))
           .collect()
}

const fn error_kind(e: &CalcError) -> &'static str {
    match e {
        CalcError::Lex(_) => "lex",
        CalcError::Parse(_) => "parse",
        CalcError::Arith(_) => "arith",
    }
}

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-12,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    calculate(src).expect_err("Expression succeeded but was expected to fail")
}

#[test]
fn multiplication_binds_tighter() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("1 + 6 / 3", 3.0);
    assert_value("20 - 6 / 2 * 3", 11.0);
}

#[test]
fn same_precedence_is_left_associative() {
    assert_value("10 - 3 - 2", 5.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("10 - 3 + 2", 9.0);
    assert_value("12 / 3 * 2", 8.0);
}

#[test]
fn decimals_and_whitespace() {
    assert_value("0.1 + 0.2", 0.1 + 0.2);
    assert_value("1.5*4", 6.0);
    assert_value("\t9 /   .5 ", 18.0);
}

#[test]
fn literal_zero_divisor_is_structural_error() {
    let e = assert_failure("5 / 0");
    assert!(matches!(&e, CalcError::Arith(ArithError::DivisionByZero { .. })));
    assert!(e.to_string().contains("5 / 0"), "{e}");

    let e = assert_failure("1 + 6 * 4 / 0");
    assert_eq!(e.to_string(), "Division by zero: 24 / 0");
}

#[test]
fn chained_division_names_the_reduced_dividend() {
    let e = assert_failure("10 / 2 / 0");
    assert_eq!(e.to_string(), "Division by zero: 5 / 0");

    let e = assert_failure("3 * 4 - 9 / 3 / 0");
    assert_eq!(e.to_string(), "Division by zero: 3 / 0");
}

#[test]
fn zero_dividend_is_fine() {
    assert_value("0 / 5", 0.0);
}

#[test]
fn malformed_chains_name_the_failing_pass() {
    let stage = |src: &str| match assert_failure(src) {
        CalcError::Parse(e) => e.stage(),
        e => panic!("{src:?} gave {e}, expected a parse error"),
    };

    assert_eq!(stage("3 + "), Stage::Additive);
    assert_eq!(stage("3 * "), Stage::Multiplicative);
    assert_eq!(stage("+ 3"), Stage::Final);
    assert_eq!(stage("3 3"), Stage::Final);
    assert_eq!(stage(""), Stage::Final);
    assert_eq!(stage("2 * 3 4"), Stage::Multiplicative);
}

#[test]
fn parse_errors_render_remaining_tokens() {
    let e = assert_failure("1 + 2 +");
    assert_eq!(e.to_string(),
               "Parse error in additive pass: Unexpected end of input after \"1 + 2 +\".");

    let e = assert_failure("4 * / 2");
    assert_eq!(e.to_string(),
               "Parse error in multiplicative pass: Unexpected token '/' in \"4 * / 2\".");
}

#[test]
fn unsupported_character_is_lexical_error() {
    let e = assert_failure("3 & 2");
    assert_eq!(e.to_string(),
               "Lexical error at position 2: Unexpected character '&'.");
    assert!(matches!(assert_failure("x + 1"), CalcError::Lex(_)));
}

#[test]
fn undefined_results_are_rejected_for_display() {
    let overflow = format!("9{} * 9{}", "9".repeat(200), "9".repeat(200));
    assert!(calculate(&overflow).is_ok_and(f64::is_infinite));

    let e = get_result(&overflow, &bare()).unwrap_err();
    assert!(matches!(e, CalcError::Arith(ArithError::UndefinedValue)));
    assert_eq!(e.to_string(), "Undefined value");
}

#[test]
fn display_options() {
    let rounded = DisplayOptions { precision: Some(2),
                                   prefix:    "= ".to_string(), };
    assert_eq!(get_result("1 / 3", &rounded).unwrap(), "= 0.33");
    assert_eq!(get_result("5 / 2", &rounded).unwrap(), "= 2.5");
    assert_eq!(get_result("1 - 1.001", &rounded).unwrap(), "= 0");
    assert_eq!(get_result("2 * 2", &DisplayOptions::default()).unwrap(), "=> 4");
}

#[test]
fn widest_precision_formats_without_panicking() {
    let widest = DisplayOptions { precision: Some(u16::MAX),
                                  prefix:    String::new(), };
    let text = get_result("1 / 3", &widest).unwrap();
    assert!(text.starts_with("0.3333"), "{text}");

    assert_eq!(get_result("6 / 4", &widest).unwrap(), "1.5");
}

fn tree(op: Operator, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right).unwrap()
}

#[test]
fn rendered_trees_reparse_to_the_same_value() {
    use Operator::{Add, Divide, Multiply, Subtract};
    let n = Expr::Number;

    let trees = [tree(Add, n(2.0), tree(Multiply, n(3.0), n(4.0))),
                 tree(Subtract, tree(Subtract, n(10.0), n(3.0)), n(2.0)),
                 tree(Divide,
                      tree(Multiply, n(8.0), n(2.5)),
                      n(4.0)),
                 tree(Subtract,
                      tree(Add, n(1.0), tree(Divide, n(9.0), n(3.0))),
                      tree(Multiply, n(0.5), n(6.0)))];

    for expr in trees {
        let text = expr.to_string();
        assert!(!text.contains('('), "{text} should need no parentheses");
        assert_value(&text, expr.eval());
    }
}

#[test]
fn rendering_parenthesizes_where_needed() {
    use Operator::{Add, Multiply, Subtract};
    let n = Expr::Number;

    let grouped = tree(Multiply, tree(Add, n(1.0), n(2.0)), n(3.0));
    assert_eq!(grouped.to_string(), "(1 + 2) * 3");

    let right_nested = tree(Subtract, n(10.0), tree(Subtract, n(3.0), n(2.0)));
    assert_eq!(right_nested.to_string(), "10 - (3 - 2)");
    assert!((right_nested.eval() - 9.0).abs() < f64::EPSILON);
}

#[test]
fn evaluation_is_repeatable() {
    let expr = tree(Operator::Divide,
                    tree(Operator::Add, Expr::Number(1.0), Expr::Number(2.0)),
                    Expr::Number(7.0));
    let first = expr.eval();
    let second = expr.eval();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn runtime_zero_divisor_is_not_structural() {
    let zero = tree(Operator::Subtract, Expr::Number(2.0), Expr::Number(2.0));
    let expr = tree(Operator::Divide, Expr::Number(1.0), zero);
    assert!(expr.eval().is_infinite());
}
