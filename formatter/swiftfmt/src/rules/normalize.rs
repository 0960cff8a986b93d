//! Syntactic normalizations.
//!
//! Everything here changes tokens rather than just spacing: canonical line
//! endings, semicolon removal, declaration-specifier order, redundant
//! condition parens, `Void` vs `()`, range-operator spacing, trailing
//! commas, and `TODO:`-style comment tags.

use crate::state::Formatter;
use swiftfmt_tokens::Token;

/// After removing the token at `i`, collapse the whitespace pair the
/// removal may have joined.
fn mend_whitespace_at(f: &mut Formatter, i: usize) {
    if i > 0
        && i < f.len()
        && f.tokens()[i - 1].is_whitespace()
        && f.tokens()[i].is_whitespace()
    {
        f.remove(i);
    }
}

/// Rewrite every line break to the configured canonical sequence.
pub fn linebreaks(f: &mut Formatter) {
    let canonical = f.options().linebreak.clone();
    f.for_each(
        |t| t.is_linebreak(),
        |f, i, t| {
            if t.text() != canonical {
                f.replace(i, Token::Linebreak(canonical.clone()));
            }
        },
    );
}

/// Remove semicolons that terminate a line, scope, or file. A semicolon
/// after `return` or inside a `(` scope (C-style `for`) is never touched;
/// other inline semicolons become line breaks when the option forbids them.
pub fn semicolons(f: &mut Formatter) {
    let allow_inline = f.options().allow_inline_semicolons;
    let linebreak = f.options().linebreak.clone();
    f.for_each_token(Token::Symbol(";".to_string()), |f, i, _| {
        let Some(next) = f.index_of_next_significant(i) else {
            // end of file
            f.remove(i);
            return;
        };
        let prev = f.index_of_previous_significant(i);
        if prev.is_none() || f.tokens()[next] == Token::EndOfScope("}".to_string()) {
            // not separating anything
            f.remove(i);
            mend_whitespace_at(f, i);
            return;
        }
        let after_return =
            matches!(&f.tokens()[prev.unwrap_or(0)], Token::Keyword(k) if k == "return");
        let in_parens = matches!(f.scope_at(i), Some(Token::StartOfScope(s)) if s == "(");
        if after_return || in_parens {
            return;
        }
        if f.next_non_whitespace(i).map_or(true, |t| t.is_linebreak()) {
            // end of line
            f.remove(i);
        } else if !allow_inline {
            if f.token_at(i + 1).is_some_and(Token::is_whitespace) {
                f.remove(i + 1);
            }
            let indent = f.indent_for_line(i);
            f.replace(i, Token::Linebreak(linebreak.clone()));
            if let Some(indent) = indent {
                if !indent.is_empty() {
                    f.insert(i + 1, Token::Whitespace(indent));
                }
            }
        }
    });
}

/// Canonical declaration-specifier order, most significant first.
const SPECIFIER_ORDER: &[&str] = &[
    "private(set)",
    "fileprivate(set)",
    "internal(set)",
    "public(set)",
    "private",
    "fileprivate",
    "internal",
    "public",
    "open",
    "final",
    "dynamic",
    "optional",
    "required",
    "convenience",
    "override",
    "lazy",
    "weak",
    "unowned",
    "static",
    "class",
    "mutating",
    "nonmutating",
    "prefix",
    "postfix",
];

fn specifier_rank(name: &str) -> Option<usize> {
    SPECIFIER_ORDER.iter().position(|s| *s == name)
}

/// Reorder the run of specifiers before each declaration keyword into the
/// canonical order. Each specifier keeps its own trailing trivia, so
/// comments and spacing travel with the word they annotate.
pub fn specifiers(f: &mut Formatter) {
    f.for_each(
        |t| {
            matches!(t, Token::Keyword(k) if matches!(
                k.as_str(),
                "let" | "func" | "var" | "class" | "extension" | "init" | "enum" | "struct"
                    | "typealias" | "subscript" | "associatedtype" | "protocol"
            ))
        },
        |f, i, _| reorder_specifiers(f, i),
    );
}

fn reorder_specifiers(f: &mut Formatter, decl: usize) {
    // Collect (rank, token range) groups walking backward from the keyword.
    let mut groups: Vec<(usize, std::ops::Range<usize>)> = Vec::new();
    let mut group_end = decl;
    loop {
        let Some(p) = f.index_of_previous_significant(group_end) else {
            break;
        };
        let (name, start) = match &f.tokens()[p] {
            Token::EndOfScope(s) if s == ")" => {
                // `private(set)` and friends
                let Some((name, start)) = match_setter_group(f, p) else {
                    break;
                };
                (name, start)
            }
            Token::Identifier(s) | Token::Keyword(s) => (s.clone(), p),
            _ => break,
        };
        let Some(rank) = specifier_rank(&name) else {
            break;
        };
        groups.push((rank, start..group_end));
        group_end = start;
    }
    if groups.len() < 2 {
        return;
    }
    groups.reverse(); // into source order
    if groups.windows(2).all(|w| w[0].0 <= w[1].0) {
        return;
    }
    let full_start = groups[0].1.start;
    let mut sorted = groups.clone();
    sorted.sort_by_key(|g| g.0);
    let mut replacement = Vec::new();
    for (_, range) in &sorted {
        replacement.extend_from_slice(&f.tokens()[range.clone()]);
    }
    f.replace_range(full_start..decl, replacement);
}

/// Match the `name(set)` shape ending at the `)` at index `close`.
fn match_setter_group(f: &Formatter, close: usize) -> Option<(String, usize)> {
    let set = f.index_of_previous_significant(close)?;
    if !matches!(&f.tokens()[set], Token::Identifier(s) if s == "set") {
        return None;
    }
    let open = f.index_of_previous_significant(set)?;
    if f.tokens()[open] != Token::StartOfScope("(".to_string()) {
        return None;
    }
    let name = f.index_of_previous_significant(open)?;
    match &f.tokens()[name] {
        Token::Identifier(s) | Token::Keyword(s) => Some((format!("{s}(set)"), name)),
        _ => None,
    }
}

/// Strip the parens around `if` / `while` / `switch` conditions when the
/// closing paren directly precedes the `{`. A comma inside a `switch`
/// condition may be a tuple, so those parens stay.
pub fn redundant_parens(f: &mut Formatter) {
    f.for_each(
        |t| matches!(t, Token::Keyword(k) if matches!(k.as_str(), "if" | "while" | "switch")),
        |f, i, t| {
            let Some(open) = f.index_of_next_significant(i) else {
                return;
            };
            if f.tokens()[open] != Token::StartOfScope("(".to_string()) {
                return;
            }
            let Some(close) = f.index_of_matching_close(open) else {
                return;
            };
            let Some(brace) = f.index_of_next_significant(close) else {
                return;
            };
            if f.tokens()[brace] != Token::StartOfScope("{".to_string()) {
                return;
            }
            if t.text() == "switch" && paren_contains_top_level_comma(f, open, close) {
                return;
            }
            f.remove(close);
            mend_whitespace_at(f, close);
            f.remove(open);
            mend_whitespace_at(f, open);
            if open == i + 1 {
                f.insert(open, Token::Whitespace(" ".to_string()));
            }
        },
    );
}

fn paren_contains_top_level_comma(f: &Formatter, open: usize, close: usize) -> bool {
    let mut depth = 0usize;
    for j in open + 1..close {
        match &f.tokens()[j] {
            Token::StartOfScope(s) if s == "(" => depth += 1,
            Token::EndOfScope(s) if s == ")" => depth = depth.saturating_sub(1),
            Token::Symbol(s) if s == "," && depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Normalize the empty tuple in function-type positions: `-> ()` becomes
/// `-> Void` (or the reverse), and a `(Void)` parameter list becomes `()`.
/// `Void` after `.` or `typealias` is never touched.
pub fn void(f: &mut Formatter) {
    let use_void = f.options().use_void;
    f.for_each_token(Token::Identifier("Void".to_string()), |f, i, _| {
        if let Some(p) = f.index_of_previous_significant(i) {
            match &f.tokens()[p] {
                Token::Symbol(s) if s == "." => return,
                Token::Keyword(k) if k == "typealias" => return,
                _ => {}
            }
        }
        let prev = f.index_of_previous(i, |t| !t.is_whitespace_or_linebreak());
        let next = f.index_of_next(i, |t| !t.is_whitespace_or_linebreak());
        if let (Some(p), Some(n)) = (prev, next) {
            if f.tokens()[p] == Token::StartOfScope("(".to_string())
                && f.tokens()[n] == Token::EndOfScope(")".to_string())
            {
                let after_close = f.next_significant(n).cloned();
                let argument_position = matches!(
                    &after_close,
                    Some(Token::Symbol(s)) if s == "->"
                ) || matches!(
                    &after_close,
                    Some(Token::Keyword(k)) if k == "throws" || k == "rethrows"
                );
                if argument_position {
                    // `(Void)` parameter list → `()`
                    f.replace_range(
                        p..n + 1,
                        vec![
                            Token::StartOfScope("(".to_string()),
                            Token::EndOfScope(")".to_string()),
                        ],
                    );
                } else if use_void
                    && matches!(
                        f.index_of_previous_significant(p).map(|j| &f.tokens()[j]),
                        Some(Token::Symbol(s)) if s == "->"
                    )
                {
                    // `-> (Void)` → `-> Void`
                    f.replace_range(p..n + 1, vec![Token::Identifier("Void".to_string())]);
                }
                return;
            }
        }
        if !use_void {
            let in_return = matches!(
                f.previous_significant(i),
                Some(Token::Symbol(s)) if s == "->"
            );
            let before_arrow = matches!(
                f.next_significant(i),
                Some(Token::Symbol(s)) if s == "->"
            ) || matches!(
                f.next_significant(i),
                Some(Token::Keyword(k)) if k == "throws" || k == "rethrows"
            );
            if in_return || before_arrow {
                f.replace_range(
                    i..i + 1,
                    vec![
                        Token::StartOfScope("(".to_string()),
                        Token::EndOfScope(")".to_string()),
                    ],
                );
            }
        }
    });
    if use_void {
        f.for_each_token(Token::StartOfScope("(".to_string()), |f, i, _| {
            if !matches!(f.previous_significant(i), Some(Token::Symbol(s)) if s == "->") {
                return;
            }
            let Some(n) = f.index_of_next(i, |t| !t.is_whitespace_or_linebreak()) else {
                return;
            };
            if f.tokens()[n] != Token::EndOfScope(")".to_string()) {
                return;
            }
            if matches!(f.next_significant(n), Some(Token::Symbol(s)) if s == "->") {
                // `-> () -> T`: the `()` is a parameter list, not a return type
                return;
            }
            f.replace_range(i..n + 1, vec![Token::Identifier("Void".to_string())]);
        });
    }
}

/// Space (or unspace) the range operators, leaving argument-default forms
/// like `foo(range: 0...)` alone.
pub fn ranges(f: &mut Formatter) {
    let spaced = f.options().space_around_range_operators;
    f.for_each(
        |t| matches!(t, Token::Symbol(s) if s == "..." || s == "..<"),
        |f, i, _| {
            if !spaced {
                if f.token_at(i + 1).is_some_and(Token::is_whitespace) {
                    f.remove(i + 1);
                }
                if i > 0 && f.tokens()[i - 1].is_whitespace() {
                    f.remove(i - 1);
                }
            } else {
                match f.next_non_whitespace(i) {
                    Some(Token::EndOfScope(s)) if s == ")" => return,
                    Some(Token::Symbol(s)) if s == "," => return,
                    _ => {}
                }
                if f.token_at(i + 1)
                    .is_some_and(|t| !t.is_whitespace_or_linebreak())
                {
                    f.insert(i + 1, Token::Whitespace(" ".to_string()));
                }
                if i > 0 && !f.tokens()[i - 1].is_whitespace_or_linebreak() {
                    f.insert(i, Token::Whitespace(" ".to_string()));
                }
            }
        },
    );
}

/// Enforce or strip the trailing comma in multi-line `[...]` literals.
pub fn trailing_commas(f: &mut Formatter) {
    let want = f.options().trailing_commas;
    f.for_each_token(Token::EndOfScope("]".to_string()), |f, i, _| {
        let Some(before) = f.index_of_previous(i, |t| !t.is_whitespace_or_comment()) else {
            return;
        };
        if !f.tokens()[before].is_linebreak() {
            return;
        }
        let Some(prev) = f.index_of_previous_significant(i) else {
            return;
        };
        match &f.tokens()[prev] {
            Token::StartOfScope(s) if s == "[" => {}
            Token::Symbol(s) if s == ":" => {}
            Token::Symbol(s) if s == "," => {
                if !want {
                    f.remove(prev);
                }
            }
            _ => {
                if want {
                    f.insert(prev + 1, Token::Symbol(",".to_string()));
                }
            }
        }
    });
}

/// Normalize `TODO` / `MARK` / `FIXME` comment tags to `TAG: text`.
pub fn todos(f: &mut Formatter) {
    f.for_each(
        |t| matches!(t, Token::CommentBody(_)),
        |f, i, t| {
            let body = t.text();
            for tag in ["MARK", "TODO", "FIXME"] {
                let Some(rest) = body.strip_prefix(tag) else {
                    continue;
                };
                if let Some(first) = rest.chars().next() {
                    if first != ':' && first != ' ' {
                        // an identifier like `TODOS`, not a tag
                        return;
                    }
                }
                let text = rest.trim_start_matches([':', ' ']);
                let replacement = if text.is_empty() {
                    format!("{tag}:")
                } else {
                    format!("{tag}: {text}")
                };
                if replacement != body {
                    f.replace(i, Token::CommentBody(replacement));
                }
                return;
            }
        },
    );
}

#[cfg(test)]
mod tests;
