use super::*;
use crate::options::FormatOptions;
use crate::rules::testutil::{apply, apply_with};

fn allman() -> FormatOptions {
    FormatOptions {
        allman_braces: true,
        ..FormatOptions::default()
    }
}

#[test]
fn knr_pulls_brace_onto_previous_line() {
    assert_eq!(
        apply(braces, "if x\n{\n    foo()\n}"),
        "if x {\n    foo()\n}"
    );
}

#[test]
fn knr_preserves_comments_between() {
    assert_eq!(
        apply(braces, "if x // why\n{\n    foo()\n}"),
        "if x { // why\n    foo()\n}"
    );
}

#[test]
fn knr_leaves_well_placed_braces() {
    let source = "if x {\n    foo()\n}";
    assert_eq!(apply(braces, source), source);
}

#[test]
fn knr_attaches_to_closing_paren() {
    assert_eq!(
        apply(braces, "func f()\n{\n    foo()\n}"),
        "func f() {\n    foo()\n}"
    );
}

#[test]
fn allman_pushes_brace_onto_its_own_line() {
    assert_eq!(
        apply_with(&[braces], "if x {\n    foo()\n}", allman()),
        "if x\n{\n    foo()\n}"
    );
}

#[test]
fn allman_keeps_single_line_blocks_inline() {
    let source = "let f = { x in x }";
    assert_eq!(apply_with(&[braces], source, allman()), source);
}

#[test]
fn allman_preserves_existing_placement() {
    let source = "if x\n{\n    foo()\n}";
    assert_eq!(apply_with(&[braces], source, allman()), source);
}

#[test]
fn dangling_else_joins_the_brace() {
    assert_eq!(
        apply(else_on_same_line, "if x {\n    a()\n}\nelse {\n    b()\n}"),
        "if x {\n    a()\n} else {\n    b()\n}"
    );
}

#[test]
fn dangling_catch_joins_the_brace() {
    assert_eq!(
        apply(else_on_same_line, "do {\n    try a()\n}\ncatch {\n}"),
        "do {\n    try a()\n} catch {\n}"
    );
}

#[test]
fn repeat_while_joins_the_brace() {
    assert_eq!(
        apply(else_on_same_line, "repeat {\n    a()\n}\nwhile x"),
        "repeat {\n    a()\n} while x"
    );
}

#[test]
fn free_standing_while_stays_on_its_line() {
    let source = "if x {\n    a()\n}\nwhile y {\n    b()\n}";
    assert_eq!(apply(else_on_same_line, source), source);
}

#[test]
fn guard_else_is_untouched() {
    let source = "guard x else {\n    return\n}";
    assert_eq!(apply(else_on_same_line, source), source);
}

#[test]
fn allman_splits_joined_else() {
    assert_eq!(
        apply_with(
            &[else_on_same_line],
            "if x\n{\n    a()\n} else\n{\n    b()\n}",
            allman()
        ),
        "if x\n{\n    a()\n}\nelse\n{\n    b()\n}"
    );
}

#[test]
fn mid_line_brace_is_not_joined() {
    let source = "let x = foo { $0 } else";
    assert_eq!(apply(else_on_same_line, source), source);
}
