mod common;

use cellscheme::function::RuntimeError;
use cellscheme::parser::{parse_str, SyntaxErrorReason};
use cellscheme::sexp::serialize;
use cellscheme::token::LexErrorKind;
use cellscheme::Error;


#[test]
fn literal_round_trip() {
    let interpreter = common::setup();

    let atoms = ["42", "-7", "0", "#t", "#f", "car", "list-ref", "null?", "<="];
    assert_eq!(common::results(&interpreter, &atoms), atoms.to_vec());
}

#[test]
fn basic_arithmetic() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &["(+ 1 2 3)", "(- 10 1 2)", "(* )", "(+ )"],
    );
    assert_eq!(results, vec!["6", "7", "1", "0"]);

    let results = common::results(
        &interpreter,
        &["(* (+ 1 1) 3)", "(/ (- 9 1) 2)", "(abs (- 2 (max 3 4 (min 9 8))))"],
    );
    assert_eq!(results, vec!["6", "4", "6"]);
}

#[test]
fn comparison_chains() {
    let interpreter = common::setup();

    let results = common::results(&interpreter, &["(< 1 2 3)", "(< 1 3 2)", "(= )"]);
    assert_eq!(results, vec!["#t", "#f", "#t"]);
}

#[test]
fn list_construction_and_access() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &[
            "(car (cons 1 2))",
            "(cdr (cons 1 2))",
            "(list-ref (list 10 20 30) 1)",
            "(list-tail (list 10 20 30) 2)",
            "(cons (list 1 2) (list 3))",
        ],
    );
    assert_eq!(results, vec!["1", "2", "20", "(30)", "((1 2) 3)"]);
}

#[test]
fn predicates() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &[
            "(null? (quote ()))",
            "(pair? (cons 1 2))",
            "(list? (list 1 2 3))",
            "(list? (cons 1 2))",
            "(and (number? 1 2) (boolean? #f) (not #f))",
        ],
    );
    assert_eq!(results, vec!["#t", "#t", "#t", "#f", "#t"]);
}

#[test]
fn quote_short_circuit() {
    let interpreter = common::setup();

    let results = common::results(
        &interpreter,
        &["(quote (+ 1 2))", "'(+ 1 2)", "(car (quote ((+ 1 2) 3)))"],
    );
    assert_eq!(results, vec!["(+ 1 2)", "(+ 1 2)", "(+ 1 2)"]);
}

#[test]
fn out_of_range_index() {
    let interpreter = common::setup();

    assert_eq!(
        common::error(&interpreter, "(list-ref (list 1 2) 5)"),
        Error::Runtime(RuntimeError::IndexOutOfRange { index: 5 })
    );
}

#[test]
fn malformed_input() {
    let interpreter = common::setup();

    match common::error(&interpreter, "(1 . )") {
        Error::Syntax(err) => assert_eq!(*err.reason(), SyntaxErrorReason::UnexpectedClose),
        err => panic!("expected a syntax error, got {}", err),
    }
    match common::error(&interpreter, "@") {
        Error::Lex(err) => assert_eq!(*err.kind(), LexErrorKind::UnexpectedChar('@')),
        err => panic!("expected a lex error, got {}", err),
    }

    assert!(common::error(&interpreter, "(1 . 2 3)").is_syntax());
    assert!(common::error(&interpreter, "(+ 1 2").is_syntax());
    assert!(common::error(&interpreter, "(+ 1 2) (+ 3 4)").is_syntax());
}

#[test]
fn runtime_errors() {
    let interpreter = common::setup();

    for input in &["(/ 1 0)", "(car 1)", "(+ 1 #t)", "(not)", "(1 2)", "()"] {
        assert!(common::error(&interpreter, input).is_runtime(), "{}", input);
    }
}

#[test]
fn serialization_idempotence() {
    let interpreter = common::setup();

    for input in &[
        "(list 1 2 3)",
        "(list (list 1 (list 2)) (list) #t)",
        "(quote (a (b c) () #f))",
    ] {
        let first = interpreter.run(input).unwrap();
        let reparsed = parse_str(&first).unwrap();
        assert_eq!(serialize(reparsed.as_ref()), first);
    }
}

#[test]
fn crate_level_run() {
    assert_eq!(cellscheme::run("(list-tail (list 1 2 3) 1)").unwrap(), "(2 3)");
}
