use super::*;
use crate::rules::testutil::apply;

#[test]
fn ternary_colon_is_spaced() {
    assert_eq!(apply(space_around_operators, "a ? b:c"), "a ? b : c");
}

#[test]
fn optional_chain_is_untouched() {
    let source = "x?.y";
    assert_eq!(apply(space_around_operators, source), source);
}

#[test]
fn annotation_colon_hugs_its_name() {
    assert_eq!(apply(space_around_operators, "let x : Int"), "let x: Int");
    assert_eq!(apply(space_around_operators, "let x:Int"), "let x: Int");
}

#[test]
fn dictionary_colon_hugs_its_key() {
    assert_eq!(apply(space_around_operators, "[a : b]"), "[a: b]");
}

#[test]
fn selector_reference_is_untouched() {
    let source = "#selector(foo(bar:baz:))";
    assert_eq!(apply(space_around_operators, source), source);
}

#[test]
fn comma_takes_space_after_only() {
    assert_eq!(apply(space_around_operators, "f(a ,b)"), "f(a, b)");
}

#[test]
fn comma_at_end_of_line_is_untouched() {
    let source = "f(a,\n  b)";
    assert_eq!(apply(space_around_operators, source), source);
}

#[test]
fn ternary_inside_call_does_not_leak() {
    assert_eq!(
        apply(space_around_operators, "f(a ? b:c, d:e)"),
        "f(a ? b : c, d: e)"
    );
}

#[test]
fn as_try_space_their_postfix_mark() {
    assert_eq!(apply(space_around_operators, "x as?Int"), "x as? Int");
    assert_eq!(apply(space_around_operators, "try!foo()"), "try! foo()");
}

#[test]
fn member_dot_binds_tightly() {
    assert_eq!(apply(space_around_operators, "foo . bar"), "foo.bar");
    assert_eq!(apply(space_around_operators, "foo .bar"), "foo.bar");
}

#[test]
fn leading_dot_keeps_its_indent() {
    let source = "foo\n    .bar";
    assert_eq!(apply(space_around_operators, source), source);
}

#[test]
fn enum_shorthand_dot_stays_detached() {
    let source = "switch x {\ncase .a:\n    return .b\n}";
    assert_eq!(apply(space_around_operators, source), source);
}

#[test]
fn detached_unwrap_chain_reattaches() {
    assert_eq!(apply(space_around_operators, "x? .y"), "x?.y");
}

#[test]
fn dot_after_infix_operator_is_spaced() {
    assert_eq!(apply(space_around_operators, "a ??.foo"), "a ?? .foo");
    assert_eq!(apply(space_around_operators, "x =.foo"), "x = .foo");
}

#[test]
fn arrow_is_spaced_on_both_sides() {
    assert_eq!(apply(space_around_operators, "() ->Void"), "() -> Void");
    assert_eq!(apply(space_around_operators, "()->Void"), "() -> Void");
}

#[test]
fn infix_operators_are_spaced() {
    assert_eq!(apply(space_around_operators, "a+b"), "a + b");
    assert_eq!(apply(space_around_operators, "x==y"), "x == y");
    assert_eq!(apply(space_around_operators, "n%2"), "n % 2");
}

#[test]
fn prefix_operators_stay_attached() {
    let source = "foo(-x)";
    assert_eq!(apply(space_around_operators, source), source);
    let source = "return -x";
    assert_eq!(apply(space_around_operators, source), source);
}

#[test]
fn attached_comment_gains_separation() {
    assert_eq!(apply(space_around_comments, "foo()// call\n"), "foo() // call\n");
    assert_eq!(apply(space_around_comments, "a/* b */c"), "a /* b */ c");
}

#[test]
fn comment_padding_is_inserted() {
    assert_eq!(apply(space_inside_comments, "//comment\n"), "// comment\n");
    assert_eq!(apply(space_inside_comments, "/*comment*/"), "/* comment */");
}

#[test]
fn doc_comment_markers_are_untouched() {
    for source in ["///doc\n", "//!bang\n", "//: playground\n", "/**doc*/"] {
        assert_eq!(apply(space_inside_comments, source), source);
    }
}
