use super::*;
use crate::options::FormatOptions;
use crate::rules::testutil::{apply, apply_with};

#[test]
fn linebreaks_are_canonicalized() {
    assert_eq!(apply(linebreaks, "a\r\nb\rc\n"), "a\nb\nc\n");
    let crlf = FormatOptions {
        linebreak: "\r\n".to_string(),
        ..FormatOptions::default()
    };
    assert_eq!(apply_with(&[linebreaks], "a\nb\n", crlf), "a\r\nb\r\n");
}

#[test]
fn semicolon_at_end_of_line_is_removed() {
    assert_eq!(apply(semicolons, "foo();\nbar();\n"), "foo()\nbar()\n");
}

#[test]
fn semicolon_at_end_of_file_is_removed() {
    assert_eq!(apply(semicolons, "foo();"), "foo()");
}

#[test]
fn semicolon_before_closing_brace_is_removed() {
    assert_eq!(apply(semicolons, "{ foo(); }"), "{ foo() }");
}

#[test]
fn inline_semicolon_is_kept_by_default() {
    assert_eq!(apply(semicolons, "foo(); bar()"), "foo(); bar()");
}

#[test]
fn inline_semicolon_becomes_linebreak_when_disallowed() {
    let options = FormatOptions {
        allow_inline_semicolons: false,
        ..FormatOptions::default()
    };
    assert_eq!(
        apply_with(&[semicolons], "    foo(); bar()", options),
        "    foo()\n    bar()"
    );
}

#[test]
fn semicolon_after_return_survives() {
    assert_eq!(apply(semicolons, "return;\nfoo()"), "return;\nfoo()");
}

#[test]
fn semicolon_inside_parens_survives() {
    let source = "for (i = 0; i < 5; i++) {}";
    assert_eq!(apply(semicolons, source), source);
}

#[test]
fn specifiers_are_reordered() {
    assert_eq!(
        apply(specifiers, "override public final func f() {}"),
        "public final override func f() {}"
    );
}

#[test]
fn ordered_specifiers_are_untouched() {
    let source = "public final override func f() {}";
    assert_eq!(apply(specifiers, source), source);
}

#[test]
fn setter_access_sorts_before_getter_access() {
    assert_eq!(
        apply(specifiers, "public private(set) var x = 1"),
        "private(set) public var x = 1"
    );
}

#[test]
fn specifier_comments_travel_with_their_word() {
    assert_eq!(
        apply(specifiers, "lazy /* note */ public var x = 1"),
        "public lazy /* note */ var x = 1"
    );
}

#[test]
fn condition_parens_are_removed() {
    assert_eq!(apply(redundant_parens, "if (x) {}"), "if x {}");
    assert_eq!(apply(redundant_parens, "while (a.b) {}"), "while a.b {}");
}

#[test]
fn switch_tuple_parens_survive() {
    let source = "switch (a, b) {}";
    assert_eq!(apply(redundant_parens, source), source);
}

#[test]
fn nested_call_parens_survive() {
    assert_eq!(apply(redundant_parens, "if (foo(x)) {}"), "if foo(x) {}");
}

#[test]
fn empty_tuple_return_becomes_void() {
    assert_eq!(apply(void, "func f() -> ()"), "func f() -> Void");
    assert_eq!(apply(void, "func f() -> ( )"), "func f() -> Void");
}

#[test]
fn non_return_tuple_is_untouched() {
    let source = "let x: Void = ()";
    assert_eq!(apply(void, source), source);
}

#[test]
fn void_parameter_list_unwraps() {
    assert_eq!(apply(void, "let f: (Void) -> Void"), "let f: () -> Void");
}

#[test]
fn curried_parameter_list_survives() {
    let source = "func f() -> () -> Void";
    assert_eq!(apply(void, source), source);
}

#[test]
fn void_after_dot_or_typealias_is_untouched() {
    let no_void = FormatOptions {
        use_void: false,
        ..FormatOptions::default()
    };
    assert_eq!(
        apply_with(&[void], "Swift.Void -> Int", no_void.clone()),
        "Swift.Void -> Int"
    );
    assert_eq!(
        apply_with(&[void], "typealias Void = MyVoid", no_void),
        "typealias Void = MyVoid"
    );
}

#[test]
fn bare_void_becomes_tuple_when_disabled() {
    let no_void = FormatOptions {
        use_void: false,
        ..FormatOptions::default()
    };
    assert_eq!(
        apply_with(&[void], "func f() -> Void", no_void),
        "func f() -> ()"
    );
}

#[test]
fn ranges_gain_spaces_when_enabled() {
    assert_eq!(apply(ranges, "for i in 0..<5 {}"), "for i in 0 ..< 5 {}");
    assert_eq!(apply(ranges, "let r = a...b"), "let r = a ... b");
}

#[test]
fn ranges_lose_spaces_when_disabled() {
    let tight = FormatOptions {
        space_around_range_operators: false,
        ..FormatOptions::default()
    };
    assert_eq!(
        apply_with(&[ranges], "for i in 0 ..< 5 {}", tight),
        "for i in 0..<5 {}"
    );
}

#[test]
fn argument_default_range_is_untouched() {
    assert_eq!(apply(ranges, "foo(range: 0...)"), "foo(range: 0...)");
    assert_eq!(apply(ranges, "foo(0..., x)"), "foo(0..., x)");
}

#[test]
fn trailing_comma_is_inserted_in_multiline_literal() {
    assert_eq!(
        apply(trailing_commas, "let x = [\n    1,\n    2\n]"),
        "let x = [\n    1,\n    2,\n]"
    );
}

#[test]
fn trailing_comma_is_removed_when_disabled() {
    let strip = FormatOptions {
        trailing_commas: false,
        ..FormatOptions::default()
    };
    assert_eq!(
        apply_with(&[trailing_commas], "let x = [\n    1,\n    2,\n]", strip),
        "let x = [\n    1,\n    2\n]"
    );
}

#[test]
fn inline_literal_is_untouched() {
    let source = "let x = [1, 2]";
    assert_eq!(apply(trailing_commas, source), source);
}

#[test]
fn empty_multiline_literal_is_untouched() {
    let source = "let x: [Int] = [\n]";
    assert_eq!(apply(trailing_commas, source), source);
}

#[test]
fn todo_tags_are_normalized() {
    assert_eq!(apply(todos, "// TODO fix this\n"), "// TODO: fix this\n");
    assert_eq!(apply(todos, "// MARK:- section\n"), "// MARK: - section\n");
    assert_eq!(apply(todos, "// FIXME:broken\n"), "// FIXME: broken\n");
}

#[test]
fn todo_like_identifiers_are_untouched() {
    let source = "// TODOS for the week\n";
    assert_eq!(apply(todos, source), source);
}

#[test]
fn string_contents_are_never_rewritten() {
    let source = "let s = \"TODO fix\"";
    assert_eq!(apply(todos, source), source);
}
