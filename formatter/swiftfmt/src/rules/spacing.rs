//! Scope-boundary spacing.
//!
//! Every rule here inserts or removes a single whitespace token directly
//! against a scope delimiter. Shared contracts: never insert where a line
//! break sits, never touch comment or string interiors, and leave run
//! coalescing to [`consecutive_spaces`].

use crate::state::Formatter;
use swiftfmt_tokens::Token;

fn space() -> Token {
    Token::Whitespace(" ".to_string())
}

/// Whether a keyword is followed by a space when it directly precedes `(`.
///
/// Access modifiers with argument lists (`private(set)`), `init`,
/// `subscript`, and `@`/`#` attribute keywords bind tightly; `@escaping`,
/// `@noescape`, and `@autoclosure` space their parenthesized type — except
/// `@autoclosure(escaping)`, where the paren is the attribute's argument.
fn keyword_spaces_paren(f: &Formatter, kw_index: usize, keyword: &str) -> bool {
    match keyword {
        "@autoclosure" => {
            if let Some(n) = f.index_of_next(kw_index, |t| !t.is_whitespace()) {
                if f.tokens()[n] == Token::StartOfScope("(".to_string())
                    && matches!(
                        f.next_significant(n),
                        Some(Token::Identifier(arg)) if arg == "escaping"
                    )
                {
                    return false;
                }
            }
            true
        }
        "@escaping" | "@noescape" => true,
        "private" | "fileprivate" | "internal" | "init" | "subscript" => false,
        _ => !keyword.starts_with('@') && !keyword.starts_with('#'),
    }
}

/// `]` that closes a closure capture list: its `[` directly follows a `{`.
fn closes_capture_list(f: &Formatter, close: usize) -> bool {
    let Some(open) = f.index_of_matching_open(close) else {
        return false;
    };
    matches!(
        f.previous_significant(open),
        Some(Token::StartOfScope(s)) if s == "{"
    )
}

/// `)` that closes an attribute's argument list, as in `@convention(block)`.
fn closes_attribute_arguments(f: &Formatter, close: usize) -> bool {
    let Some(open) = f.index_of_matching_open(close) else {
        return false;
    };
    matches!(
        f.previous_significant(open),
        Some(Token::Keyword(k)) if k.starts_with('@')
    )
}

pub fn space_around_parens(f: &mut Formatter) {
    f.for_each_token(Token::StartOfScope("(".to_string()), |f, i, _| {
        if i == 0 {
            return;
        }
        let prev = f.tokens()[i - 1].clone();
        match prev {
            Token::Keyword(k) => {
                if keyword_spaces_paren(f, i - 1, &k) {
                    f.insert(i, space());
                }
            }
            Token::EndOfScope(s) if s == "]" => {
                if closes_capture_list(f, i - 1) {
                    f.insert(i, space());
                }
            }
            Token::EndOfScope(s) if s == ")" => {
                if closes_attribute_arguments(f, i - 1) {
                    f.insert(i, space());
                }
            }
            Token::Whitespace(_) if i >= 2 => {
                let unwanted = match &f.tokens()[i - 2] {
                    Token::Keyword(k) => !keyword_spaces_paren(f, i - 2, k),
                    Token::Identifier(_) => true,
                    Token::EndOfScope(s) => match s.as_str() {
                        "}" | ">" => true,
                        "]" => !closes_capture_list(f, i - 2),
                        ")" => !closes_attribute_arguments(f, i - 2),
                        _ => false,
                    },
                    _ => false,
                };
                if unwanted {
                    f.remove(i - 1);
                }
            }
            _ => {}
        }
    });
    f.for_each_token(Token::EndOfScope(")".to_string()), |f, i, _| {
        let Some(next) = f.token_at(i + 1).cloned() else {
            return;
        };
        match next {
            Token::Identifier(_) | Token::Keyword(_) => f.insert(i + 1, space()),
            Token::StartOfScope(s) if s == "{" => f.insert(i + 1, space()),
            Token::Whitespace(_) => {
                if f.token_at(i + 2) == Some(&Token::StartOfScope("[".to_string())) {
                    f.remove(i + 1);
                }
            }
            _ => {}
        }
    });
}

/// Remove padding just inside a bracket pair unless the far side of the
/// padding is a line break (multi-line layouts keep their indent).
fn space_inside(f: &mut Formatter, open: &str, close: &str) {
    f.for_each_token(Token::StartOfScope(open.to_string()), |f, i, _| {
        if f.token_at(i + 1).is_some_and(Token::is_whitespace)
            && f.token_at(i + 2).map_or(true, |t| !t.is_linebreak())
        {
            f.remove(i + 1);
        }
    });
    f.for_each_token(Token::EndOfScope(close.to_string()), |f, i, _| {
        if i >= 2 && f.tokens()[i - 1].is_whitespace() && !f.tokens()[i - 2].is_linebreak() {
            f.remove(i - 1);
        }
    });
}

pub fn space_inside_parens(f: &mut Formatter) {
    space_inside(f, "(", ")");
}

pub fn space_inside_brackets(f: &mut Formatter) {
    space_inside(f, "[", "]");
}

pub fn space_inside_generics(f: &mut Formatter) {
    space_inside(f, "<", ">");
}

pub fn space_around_brackets(f: &mut Formatter) {
    f.for_each_token(Token::StartOfScope("[".to_string()), |f, i, _| {
        if i == 0 {
            return;
        }
        let prev = f.tokens()[i - 1].clone();
        match prev {
            Token::Keyword(_) => f.insert(i, space()),
            Token::Whitespace(_) if i >= 2 => {
                // `as [Int]` keeps its space; `foo [0]` and `bar() [0]` do not
                let unwanted = matches!(&f.tokens()[i - 2], Token::Identifier(_))
                    || matches!(
                        &f.tokens()[i - 2],
                        Token::EndOfScope(s) if s == "]" || s == ")"
                    );
                if unwanted {
                    f.remove(i - 1);
                }
            }
            _ => {}
        }
    });
    f.for_each_token(Token::EndOfScope("]".to_string()), |f, i, _| {
        let Some(next) = f.token_at(i + 1).cloned() else {
            return;
        };
        match next {
            Token::Identifier(_) | Token::Keyword(_) => f.insert(i + 1, space()),
            Token::StartOfScope(s) if s == "{" => f.insert(i + 1, space()),
            Token::Whitespace(_) => {
                if f.token_at(i + 2) == Some(&Token::StartOfScope("[".to_string())) {
                    f.remove(i + 1);
                }
            }
            _ => {}
        }
    });
}

pub fn space_around_braces(f: &mut Formatter) {
    f.for_each_token(Token::StartOfScope("{".to_string()), |f, i, _| {
        if i == 0 {
            return;
        }
        let prev = f.tokens()[i - 1].clone();
        match prev {
            Token::Whitespace(_) | Token::Linebreak(_) => {}
            Token::StartOfScope(s) if s != "\"" => {}
            _ => f.insert(i, space()),
        }
    });
    f.for_each_token(Token::EndOfScope("}".to_string()), |f, i, _| {
        if matches!(
            f.token_at(i + 1),
            Some(Token::Identifier(_) | Token::Keyword(_))
        ) {
            f.insert(i + 1, space());
        }
    });
}

pub fn space_inside_braces(f: &mut Formatter) {
    f.for_each_token(Token::StartOfScope("{".to_string()), |f, i, _| {
        let Some(next) = f.token_at(i + 1).cloned() else {
            return;
        };
        match next {
            Token::Whitespace(_) => {
                if f.token_at(i + 2) == Some(&Token::EndOfScope("}".to_string())) {
                    // `{ }` → `{}`
                    f.remove(i + 1);
                }
            }
            Token::Linebreak(_) => {}
            Token::EndOfScope(s) if s == "}" => {}
            _ => f.insert(i + 1, space()),
        }
    });
    f.for_each_token(Token::EndOfScope("}".to_string()), |f, i, _| {
        if i == 0 {
            return;
        }
        let prev = f.tokens()[i - 1].clone();
        if !prev.is_whitespace_or_linebreak() && prev != Token::StartOfScope("{".to_string()) {
            f.insert(i, space());
        }
    });
}

/// No space between a type name and its generic argument list.
pub fn space_around_generics(f: &mut Formatter) {
    f.for_each_token(Token::StartOfScope("<".to_string()), |f, i, _| {
        if i >= 2
            && f.tokens()[i - 1].is_whitespace()
            && f.tokens()[i - 2].is_identifier_or_keyword()
        {
            f.remove(i - 1);
        }
    });
}

/// Collapse mid-line whitespace runs to one space. Leading indentation is
/// the indenter's business, and comment interiors are left alone.
pub fn consecutive_spaces(f: &mut Formatter) {
    f.for_each(
        |t| t.is_whitespace(),
        |f, i, t| {
            if i == 0 || f.tokens()[i - 1].is_linebreak() || t.text() == " " {
                return;
            }
            let in_comment = matches!(
                f.scope_at(i),
                Some(Token::StartOfScope(s)) if s == "/*" || s == "//"
            );
            if !in_comment {
                f.replace(i, Token::Whitespace(" ".to_string()));
            }
        },
    );
}
