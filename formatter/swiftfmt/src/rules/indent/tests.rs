use super::*;
use crate::options::FormatOptions;
use crate::rules::testutil::{apply, apply_with};

#[test]
fn bodies_indent_one_level() {
    assert_eq!(
        apply(indent, "func f() {\nreturn 1\n}"),
        "func f() {\n    return 1\n}"
    );
}

#[test]
fn nested_bodies_indent_per_level() {
    assert_eq!(
        apply(indent, "class A {\nfunc f() {\nfoo()\n}\n}"),
        "class A {\n    func f() {\n        foo()\n    }\n}"
    );
}

#[test]
fn closing_brace_returns_to_outer_level() {
    assert_eq!(
        apply(indent, "if x {\n        foo()\n    }"),
        "if x {\n    foo()\n}"
    );
}

#[test]
fn call_arguments_align_with_the_first() {
    assert_eq!(apply(indent, "foo(a,\nb,\nc)"), "foo(a,\n    b,\n    c)");
}

#[test]
fn wide_call_alignment_counts_all_columns() {
    assert_eq!(
        apply(indent, "longName(a,\nb)"),
        "longName(a,\n         b)"
    );
}

#[test]
fn trailing_opener_indents_one_unit() {
    assert_eq!(
        apply(indent, "foo(\na,\nb\n)"),
        "foo(\n    a,\n    b\n)"
    );
}

#[test]
fn openers_sharing_a_line_indent_once() {
    assert_eq!(
        apply(indent, "foo(bar {\nbaz()\n})"),
        "foo(bar {\n    baz()\n})"
    );
}

#[test]
fn continuation_lines_get_one_extra_unit() {
    assert_eq!(
        apply(indent, "let x = a +\nb"),
        "let x = a +\n    b"
    );
    assert_eq!(
        apply(indent, "let x = foo\n.bar\n.baz"),
        "let x = foo\n    .bar\n    .baz"
    );
}

#[test]
fn continuation_ends_with_the_statement() {
    assert_eq!(
        apply(indent, "let x = a +\nb\nfoo()"),
        "let x = a +\n    b\nfoo()"
    );
}

#[test]
fn body_brace_ends_a_continuation() {
    assert_eq!(
        apply(indent, "class A: B,\nC {\nfoo()\n}"),
        "class A: B,\n    C {\n    foo()\n}"
    );
}

#[test]
fn switch_labels_sit_at_switch_level() {
    assert_eq!(
        apply(indent, "switch x {\ncase 1:\nfoo()\ndefault:\nbar()\n}"),
        "switch x {\ncase 1:\n    foo()\ndefault:\n    bar()\n}"
    );
}

#[test]
fn nested_switch_indents_cleanly() {
    assert_eq!(
        apply(
            indent,
            "switch x {\ncase .a:\nswitch y {\ncase .b:\nfoo()\n}\ndefault:\nbar()\n}"
        ),
        "switch x {\ncase .a:\n    switch y {\n    case .b:\n        foo()\n    }\ndefault:\n    bar()\n}"
    );
}

#[test]
fn blank_lines_are_truncated_by_default() {
    assert_eq!(
        apply(indent, "func f() {\n\nfoo()\n}"),
        "func f() {\n\n    foo()\n}"
    );
}

#[test]
fn blank_lines_keep_indent_when_asked() {
    let options = FormatOptions {
        truncate_blank_lines: false,
        ..FormatOptions::default()
    };
    assert_eq!(
        apply_with(&[indent], "func f() {\n\nfoo()\n}", options),
        "func f() {\n    \n    foo()\n}"
    );
}

#[test]
fn block_comment_interiors_indent_by_one_space() {
    assert_eq!(
        apply(indent, "/* one\ntwo */\nfoo()"),
        "/* one\n two */\nfoo()"
    );
}

#[test]
fn comment_interiors_are_left_alone_when_asked() {
    let options = FormatOptions {
        indent_comments: false,
        ..FormatOptions::default()
    };
    let source = "/* one\n      two */\nfoo()";
    assert_eq!(apply_with(&[indent], source, options), source);
}

#[test]
fn conditional_compilation_bodies_indent() {
    assert_eq!(
        apply(indent, "#if DEBUG\nfoo()\n#else\nbar()\n#endif"),
        "#if DEBUG\n    foo()\n#else\n    bar()\n#endif"
    );
}

#[test]
fn fragment_keeps_its_base_indent() {
    let options = FormatOptions {
        fragment: true,
        ..FormatOptions::default()
    };
    assert_eq!(
        apply_with(&[indent], "    foo()\n    bar()", options),
        "    foo()\n    bar()"
    );
}

#[test]
fn non_fragment_loses_leading_indent() {
    assert_eq!(apply(indent, "    foo()"), "foo()");
}

#[test]
fn over_terminated_fragment_is_tolerated() {
    let options = FormatOptions {
        fragment: true,
        ..FormatOptions::default()
    };
    let source = "bar()\n    }";
    assert_eq!(apply_with(&[indent], source, options), source);
}

#[test]
fn indent_runs_standalone() {
    // no other rule is required for the indenter to be correct
    assert_eq!(
        apply(indent, "if a {\nif b {\nfoo()\n}\n}"),
        "if a {\n    if b {\n        foo()\n    }\n}"
    );
}
