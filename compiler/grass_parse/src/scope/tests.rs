#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builtin_distances() {
    let table = NameTable::new();
    assert_eq!(table.depth(), 3);
    assert_eq!(table.distance("in"), Some(4));
    assert_eq!(table.distance("w"), Some(3));
    assert_eq!(table.distance("0"), Some(3));
    assert_eq!(table.distance("suc"), Some(2));
    assert_eq!(table.distance("out"), Some(1));
    assert_eq!(table.distance("nope"), None);
}

#[test]
fn distances_grow_with_each_slot() {
    let mut table = NameTable::new();
    table.advance();
    table.advance();
    assert_eq!(table.distance("out"), Some(3));
}

#[test]
fn arguments_resolve_inside_definition() {
    let mut table = NameTable::new();
    let start = table.open_definition(3);
    assert_eq!(table.distance(".3"), Some(1));
    assert_eq!(table.distance(".1"), Some(3));
    assert_eq!(table.distance("out"), Some(4));
    assert_eq!(table.distance(".4"), None);
    assert_eq!(table.distance(".01"), None);
    table.close_definition(start);
    assert_eq!(table.distance(".1"), None);
    assert_eq!(table.depth(), 4);
}

#[test]
fn locals_vanish_on_close() {
    let mut table = NameTable::new();
    let start = table.open_definition(1);
    table.advance();
    table.declare("x", true, Span::new(0, 1)).unwrap();
    assert_eq!(table.distance("x"), Some(1));
    table.close_definition(start);
    assert_eq!(table.distance("x"), None);
}

#[test]
fn globals_survive_close() {
    let mut table = NameTable::new();
    let start = table.open_definition(1);
    table.close_definition(start);
    table.declare("f", false, Span::new(4, 5)).unwrap();
    assert_eq!(table.distance("f"), Some(1));
    let start = table.open_definition(2);
    assert_eq!(table.distance("f"), Some(3));
    table.close_definition(start);
    assert_eq!(table.distance("f"), Some(2));
}

#[test]
fn redeclaration_reports_previous_site() {
    let mut table = NameTable::new();
    table.declare("x", false, Span::new(2, 3)).unwrap();
    assert_eq!(table.declare("x", false, Span::new(8, 9)), Err(Some(Span::new(2, 3))));
    assert_eq!(table.declare("out", false, Span::new(8, 11)), Err(None));
    assert_eq!(table.len(), 6);
}

#[test]
fn reserved_names() {
    for name in [".1", ".010", ".1.2", "'", "''", "'3", "'1'", "'0002"] {
        assert!(is_reserved_name(name), "{name} should be reserved");
    }
    for name in [".0", "..1", ".", ".1.", ".1a", "x", "'0", "a.1", "0"] {
        assert!(!is_reserved_name(name), "{name} should be allowed");
    }
}
