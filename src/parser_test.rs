use super::*;

use crate::primitive::Primitive;
use crate::sexp::Cons;

fn parse(s: &str) -> Option<HeapSexp> {
    parse_str(s).unwrap()
}

fn reason(s: &str) -> SyntaxErrorReason {
    match parse_str(s) {
        Err(Error::Syntax(err)) => err.reason,
        other => panic!("expected syntax error for {:?}, got {:?}", s, other),
    }
}

fn num(n: i64) -> Option<HeapSexp> {
    Some(Primitive::Number(n).into())
}

fn cons(car: Option<HeapSexp>, cdr: Option<HeapSexp>) -> Option<HeapSexp> {
    Some(Cons::new(car, cdr).into())
}

#[test]
fn atoms() {
    assert_eq!(parse("42"), num(42));
    assert_eq!(parse("#f"), Some(Primitive::Boolean(false).into()));
    assert_eq!(parse("car").unwrap().to_string(), "car");
}

#[test]
fn proper_list() {
    assert_eq!(
        parse("(1 2 3)"),
        cons(num(1), cons(num(2), cons(num(3), None)))
    );
}

#[test]
fn empty_lists() {
    assert_eq!(parse("()"), None);
    assert_eq!(parse("(())"), cons(None, None));
    assert_eq!(parse("(() 1)"), cons(None, cons(num(1), None)));
}

#[test]
fn nested_list() {
    assert_eq!(
        parse("((1) 2)"),
        cons(cons(num(1), None), cons(num(2), None))
    );
}

#[test]
fn dotted() {
    assert_eq!(parse("(1 . 2)"), cons(num(1), num(2)));
    assert_eq!(parse("(1 2 . 3)"), cons(num(1), cons(num(2), num(3))));
    // An empty tail is just a proper list.
    assert_eq!(parse("(1 . ())"), cons(num(1), None));
}

#[test]
fn quote_shorthand() {
    let quote: Option<HeapSexp> = Some(Primitive::QuoteMarker.into());
    assert_eq!(parse("'1"), cons(quote.clone(), num(1)));
    assert_eq!(parse("'()"), cons(quote.clone(), None));
    assert_eq!(
        parse("'(1)"),
        cons(quote.clone(), cons(num(1), None))
    );
    assert_eq!(parse("''1"), cons(quote.clone(), cons(quote, num(1))));
}

#[test]
fn whitespace_tolerance() {
    assert_eq!(parse("\n ( 1\n 2 ) \n"), parse("(1 2)"));
}

#[test]
fn malformed() {
    assert_eq!(reason("(1 . )"), UnexpectedClose);
    assert_eq!(reason("(. 1)"), LeadingDot);
    assert_eq!(reason("."), UnexpectedDot);
    assert_eq!(reason(")"), UnexpectedClose);
    assert_eq!(reason(""), UnexpectedEnd);
    assert_eq!(reason("(1 2"), UnexpectedEnd);
    assert_eq!(reason("'"), UnexpectedEnd);
    assert_eq!(reason("1 2"), TrailingInput);
    assert_eq!(reason("(1))"), TrailingInput);
}

#[test]
fn dotted_tail_must_close() {
    assert_eq!(reason("(1 . 2 3)"), NotPenultimateDot);
    assert_eq!(reason("(1 . 2 . 3)"), NotPenultimateDot);
}

#[test]
fn lex_errors_pass_through() {
    assert!(parse_str("(1 @)").unwrap_err().is_lex());
}

#[test]
fn depth_overflow() {
    let deep = format!("{}{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    assert_eq!(reason(&deep), DepthOverflow);

    let ok = format!("{}{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert!(parse_str(&ok).is_ok());
}

#[test]
fn long_flat_list() {
    let input = format!("({})", vec!["7"; 10_000].join(" "));
    let list = parse(&input).unwrap();
    if let Sexp::Cons(cons) = list.as_ref() {
        assert_eq!(cons.iter().count(), 10_000);
    } else {
        panic!();
    }
}
