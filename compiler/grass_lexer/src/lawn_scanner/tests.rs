use super::*;
use pretty_assertions::assert_eq;

use crate::token::TokenKind::{Arity, Close, Colon, InvalidArity, InvalidRelative, Name, Open, Relative};

fn words(source: &str) -> Vec<(TokenKind, &str)> {
    scan(source)
        .iter()
        .map(|t| (t.kind, t.text(source)))
        .collect()
}

#[test]
fn definition_with_brackets() {
    assert_eq!(
        words("2 [ .2 .1 ]"),
        vec![
            (Arity(2), "2"),
            (Open, "["),
            (Name, ".2"),
            (Name, ".1"),
            (Close, "]"),
        ]
    );
}

#[test]
fn punctuation_splits_from_words() {
    assert_eq!(
        words("1[out .1]:print"),
        vec![
            (Arity(1), "1"),
            (Open, "["),
            (Name, "out"),
            (Name, ".1"),
            (Close, "]"),
            (Colon, ":"),
            (Name, "print"),
        ]
    );
}

#[test]
fn comments_are_dropped() {
    assert_eq!(
        words("1 # identity\nfunction # ]"),
        vec![(Arity(1), "1"), (Close, "]")]
    );
}

#[test]
fn unclosed_comment_runs_to_end() {
    assert_eq!(words("1 ] # trailing"), vec![(Arity(1), "1"), (Close, "]")]);
}

#[test]
fn relative_references() {
    assert_eq!(
        scan("' '3 '007").kinds(),
        vec![Relative(None), Relative(Some(3)), Relative(Some(7))]
    );
}

#[test]
fn malformed_relative_references() {
    assert_eq!(
        scan("'0 'x '' '+2").kinds(),
        vec![InvalidRelative, InvalidRelative, InvalidRelative, InvalidRelative]
    );
}

#[test]
fn zero_is_a_name_not_an_arity() {
    assert_eq!(scan("0 00 10").kinds(), vec![Name, Name, Arity(10)]);
}

#[test]
fn oversized_arity_is_flagged() {
    assert_eq!(scan("99999999999").kinds(), vec![InvalidArity]);
}

#[test]
fn names_may_contain_quotes_after_the_first_character() {
    assert_eq!(words("f' x.1"), vec![(Name, "f'"), (Name, "x.1")]);
}

#[test]
fn unicode_whitespace_separates_words() {
    assert_eq!(words("suc\u{3000}w"), vec![(Name, "suc"), (Name, "w")]);
}
