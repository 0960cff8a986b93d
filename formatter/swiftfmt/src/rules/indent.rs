//! The indenter.
//!
//! A single left-to-right pass over the buffer maintaining parallel stacks
//! keyed by scope depth:
//!
//! - `scope_index_stack` — token indices of the active openers (including
//!   the synthetic `case` pseudo-scopes)
//! - `indent_stack` — the indent string in force at each depth
//! - `indent_counts` — how many openers share the scope's source line
//! - `linewrap_stack` — whether the depth currently carries a continuation
//!   indent
//! - `scope_start_lines` — the line on which each scope opened
//!
//! Openers push, matching closers pop and re-indent their own line to the
//! outer level, and every line break decides whether the next line is a
//! continuation (one extra `indent` unit for its duration). `case` /
//! `default` labels replace the brace (or previous label) scope with their
//! own body scope, which is how switch labels sit at the switch's level
//! while their bodies indent once.

use crate::state::Formatter;
use swiftfmt_tokens::Token;

pub fn indent(f: &mut Formatter) {
    let options = f.options().clone();
    let mut scope_index_stack: Vec<usize> = Vec::new();
    let mut scope_start_lines: Vec<usize> = Vec::new();
    let mut indent_stack: Vec<String> = vec![String::new()];
    let mut indent_counts: Vec<usize> = vec![1];
    let mut linewrap_stack: Vec<bool> = vec![false];
    let mut line_index = 0usize;
    let mut last_significant: Option<usize> = None;

    if options.fragment {
        if let Some(Token::Whitespace(w)) = f.token_at(0) {
            indent_stack[0] = w.clone();
        }
    } else if matches!(f.token_at(0), Some(Token::Whitespace(_))) {
        f.replace(0, Token::Whitespace(String::new()));
    }

    let mut i = 0;
    while i < f.len() {
        let token = f.tokens()[i].clone();
        match &token {
            Token::Keyword(k) if k == "#else" || k == "#elseif" => {
                // conditional-compilation branches sit at the `#if`'s level
                if indent_stack.len() >= 2 {
                    let outer = indent_stack[indent_stack.len() - 2].clone();
                    i += reindent_line_at(f, i, &outer);
                }
            }
            Token::StartOfScope(s) => {
                if s == "{" && !is_start_of_closure(f, i) {
                    // the body brace terminates a multi-line continuation
                    if let Some(wrapped @ true) = linewrap_stack.last_mut() {
                        *wrapped = false;
                        indent_stack.pop();
                    }
                }
                let indent_count = if scope_start_lines.last() == Some(&line_index) {
                    indent_counts.last().copied().unwrap_or(0) + 1
                } else {
                    1
                };
                let base = indent_stack.len().saturating_sub(indent_count);
                let mut scope_indent = indent_stack.get(base).cloned().unwrap_or_default();
                match s.as_str() {
                    "/*" => scope_indent.push(' '),
                    "(" | "[" if has_code_after_on_line(f, i) => {
                        // align continuation lines with the first argument
                        let start = f.start_of_line(i);
                        let width: usize = f.tokens()[start..=i]
                            .iter()
                            .map(|t| t.text().chars().count())
                            .sum();
                        scope_indent = " ".repeat(width);
                    }
                    _ => scope_indent.push_str(&options.indent),
                }
                scope_index_stack.push(i);
                indent_counts.push(indent_count);
                indent_stack.push(scope_indent);
                scope_start_lines.push(line_index);
                linewrap_stack.push(false);
            }
            Token::Linebreak(_) => {
                // `//` comments and unterminated strings end with the line
                while scope_index_stack
                    .last()
                    .is_some_and(|&si| token.closes_scope(&f.tokens()[si]))
                {
                    pop_scope(
                        &mut scope_index_stack,
                        &mut scope_start_lines,
                        &mut indent_stack,
                        &mut indent_counts,
                        &mut linewrap_stack,
                    );
                }
                line_index += 1;
                let scope_index = scope_index_stack.last().copied();
                let next_sig = f.index_of_next_significant(i);
                let ends = last_significant
                    .map_or(true, |j| token_ends_statement(f, j, scope_index));
                let starts = next_sig
                    .map_or(true, |n| token_starts_statement(f, n, scope_index));
                let linewrapped = !ends || !starts;
                if linewrapped {
                    if let Some(wrapped @ false) = linewrap_stack.last_mut() {
                        *wrapped = true;
                        let current = indent_stack.last().cloned().unwrap_or_default();
                        // a method chain hanging off a dangling closer stays
                        // at the closer's level
                        let chained_off_closer = matches!(
                            next_sig.map(|n| &f.tokens()[n]),
                            Some(Token::Symbol(d)) if d == "."
                        ) && last_significant.is_some_and(|j| {
                            matches!(
                                &f.tokens()[j],
                                Token::EndOfScope(c) if matches!(c.as_str(), ")" | "]" | "}" | ">")
                            ) && starts_own_line(f, j)
                        });
                        let wrapped_indent = if chained_off_closer {
                            current
                        } else {
                            format!("{current}{}", options.indent)
                        };
                        indent_stack.push(wrapped_indent);
                    }
                } else if let Some(wrapped @ true) = linewrap_stack.last_mut() {
                    *wrapped = false;
                    indent_stack.pop();
                }
                let indent = indent_stack.last().cloned().unwrap_or_default();
                if let Some(n) = f.index_of_next(i, |t| !t.is_whitespace()) {
                    let next = f.tokens()[n].clone();
                    if next.is_linebreak() {
                        let blank_indent =
                            if options.truncate_blank_lines { "" } else { indent.as_str() };
                        i += insert_whitespace(f, i + 1, blank_indent);
                    } else if matches!(next, Token::CommentBody(_))
                        || next == Token::EndOfScope("*/".to_string())
                    {
                        if options.indent_comments {
                            i += insert_whitespace(f, i + 1, &indent);
                        }
                    } else if next.is_error() {
                        // leave malformed lines alone; a stray closer may
                        // still define a fragment's base indent
                    } else {
                        i += insert_whitespace(f, i + 1, &indent);
                    }
                }
            }
            Token::EndOfScope(s) => {
                let closes = scope_index_stack
                    .last()
                    .is_some_and(|&si| token.closes_scope(&f.tokens()[si]));
                if closes {
                    // when several openers shared the scope's source line,
                    // the closer lines up with that line's base indent
                    let popped_count = indent_counts.last().copied().unwrap_or(1);
                    pop_scope(
                        &mut scope_index_stack,
                        &mut scope_start_lines,
                        &mut indent_stack,
                        &mut indent_counts,
                        &mut linewrap_stack,
                    );
                    let base = indent_stack.len().saturating_sub(popped_count);
                    let outer = indent_stack.get(base).cloned().unwrap_or_default();
                    i += reindent_line_at(f, i, &outer);
                }
                if s == "case" || s == "default" {
                    let parent = indent_stack.last().cloned().unwrap_or_default();
                    let mut body_indent = parent;
                    if label_shares_line_with_code(f, i) {
                        // align with the code after `case `
                        for _ in 0..s.chars().count() + 1 {
                            body_indent.push(' ');
                        }
                    } else {
                        body_indent.push_str(&options.indent);
                    }
                    scope_index_stack.push(i);
                    indent_counts.push(1);
                    indent_stack.push(body_indent);
                    scope_start_lines.push(line_index);
                    linewrap_stack.push(false);
                }
            }
            Token::Error(e) if matches!(e.as_str(), "}" | "]" | ")" | ">") => {
                // over-terminated fragment: adopt its indent as the base
                if scope_index_stack.is_empty()
                    && i > 0
                    && f.tokens()[i - 1].is_whitespace()
                    && (i < 2 || f.tokens()[i - 2].is_linebreak())
                {
                    indent_stack[0] = f.tokens()[i - 1].text().to_string();
                }
            }
            _ => {}
        }
        let current = &f.tokens()[i];
        if !current.is_whitespace_or_comment_or_linebreak() {
            last_significant = Some(i);
        }
        i += 1;
    }

    // drop the zero-width whitespace left behind by replacements
    let mut j = 0;
    while j < f.len() {
        if f.tokens()[j] == Token::Whitespace(String::new()) {
            f.remove(j);
        } else {
            j += 1;
        }
    }
}

fn pop_scope(
    scope_index_stack: &mut Vec<usize>,
    scope_start_lines: &mut Vec<usize>,
    indent_stack: &mut Vec<String>,
    indent_counts: &mut Vec<usize>,
    linewrap_stack: &mut Vec<bool>,
) {
    if linewrap_stack.pop().unwrap_or(false) {
        indent_stack.pop();
    }
    scope_index_stack.pop();
    scope_start_lines.pop();
    indent_stack.pop();
    indent_counts.pop();
}

/// Replace (or insert) the whitespace at `at`; returns how many tokens were
/// added so the caller can keep its cursor on the same token.
fn insert_whitespace(f: &mut Formatter, at: usize, indent: &str) -> usize {
    if matches!(f.token_at(at), Some(Token::Whitespace(_))) {
        f.replace(at, Token::Whitespace(indent.to_string()));
        0
    } else if indent.is_empty() {
        0
    } else {
        f.insert(at, Token::Whitespace(indent.to_string()));
        1
    }
}

/// If the token at `i` begins its line (modulo indent), rewrite that indent.
/// Returns the number of tokens inserted before `i`.
fn reindent_line_at(f: &mut Formatter, i: usize, indent: &str) -> usize {
    if i == 0 {
        return 0;
    }
    if f.tokens()[i - 1].is_whitespace() && (i < 2 || f.tokens()[i - 2].is_linebreak()) {
        f.replace(i - 1, Token::Whitespace(indent.to_string()));
        0
    } else if f.tokens()[i - 1].is_linebreak() && !indent.is_empty() {
        f.insert(i, Token::Whitespace(indent.to_string()));
        1
    } else {
        0
    }
}

fn starts_own_line(f: &Formatter, i: usize) -> bool {
    if i == 0 {
        return true;
    }
    if f.tokens()[i - 1].is_linebreak() {
        return true;
    }
    f.tokens()[i - 1].is_whitespace() && (i < 2 || f.tokens()[i - 2].is_linebreak())
}

/// More tokens (of any kind) between the opener and its line's end?
fn has_code_after_on_line(f: &Formatter, i: usize) -> bool {
    match f.index_of_next(i, |t| !t.is_whitespace()) {
        Some(n) => !f.tokens()[n].is_linebreak(),
        None => false,
    }
}

/// Does code follow the label's `:` on the same line (`case .a: return x`)?
fn label_shares_line_with_code(f: &Formatter, label: usize) -> bool {
    let mut colon: Option<usize> = None;
    let mut k = label + 1;
    while k < f.len() && !f.tokens()[k].is_linebreak() {
        if f.tokens()[k] == Token::Symbol(":".to_string()) {
            colon = Some(k);
        }
        k += 1;
    }
    match colon {
        Some(c) => f.tokens()[c + 1..k]
            .iter()
            .any(|t| !t.is_whitespace_or_comment()),
        None => false,
    }
}

/// Whether the significant token at `i` can end a statement. `scope_index`
/// is the innermost open scope, used for the comma rule: inside `<`, `[`,
/// `(`, or a `case` body the scope itself indents items, so a trailing
/// comma does not linewrap.
fn token_ends_statement(f: &Formatter, i: usize, scope_index: Option<usize>) -> bool {
    match &f.tokens()[i] {
        Token::Keyword(k) => match k.as_str() {
            "let" | "func" | "var" | "if" | "as" | "import" | "try" | "guard" | "case" | "for"
            | "init" | "switch" | "throw" | "where" | "subscript" | "is" | "while"
            | "associatedtype" | "inout" => false,
            "return" => match f.next_significant(i) {
                None => true,
                Some(Token::Keyword(_)) => true,
                Some(Token::EndOfScope(s)) if s == "case" || s == "default" => true,
                Some(_) => false,
            },
            _ => true,
        },
        Token::Symbol(s) => match s.as_str() {
            "." | ":" => false,
            "," => {
                let scope = scope_index.map(|si| f.tokens()[si].text());
                matches!(scope, Some("<" | "[" | "(" | "case"))
            }
            _ => {
                // a trailing infix operator continues the expression
                if i > 0 && f.tokens()[i - 1].is_whitespace_or_linebreak() {
                    false
                } else {
                    !(i > 0
                        && matches!(
                            &f.tokens()[i - 1],
                            Token::Keyword(k) if k == "as" || k == "try"
                        ))
                }
            }
        },
        _ => true,
    }
}

/// Whether the significant token at `i` can start a statement.
fn token_starts_statement(f: &Formatter, i: usize, scope_index: Option<usize>) -> bool {
    let scope = scope_index.map(|si| f.tokens()[si].text());
    match &f.tokens()[i] {
        Token::Keyword(k) => !matches!(
            k.as_str(),
            "as" | "is" | "where" | "dynamicType" | "rethrows" | "throws"
        ),
        Token::Symbol(s) => match s.as_str() {
            "," => matches!(scope, Some("<" | "[" | "(" | "case")),
            "." => {
                // a leading dot is a fresh item only directly inside a
                // collection, argument list, or case pattern
                if matches!(scope, Some("<" | "[" | "(" | "case")) {
                    match f.index_of_previous_significant(i) {
                        Some(p) => {
                            Some(p) == scope_index
                                || matches!(
                                    &f.tokens()[p],
                                    Token::Symbol(prev) if prev == "," || prev == ":"
                                )
                        }
                        None => true,
                    }
                } else {
                    false
                }
            }
            _ => !(i > 0 && f.tokens()[i - 1].is_whitespace_or_linebreak()),
        },
        _ => true,
    }
}

/// Heuristic: is the `{` at `i` a closure literal rather than a declaration
/// or control-flow body?
///
/// The walk runs backward over the introducing statement, skipping balanced
/// `()`/`[]`/`<>` groups. It stops with "body" on the fixed keyword set
/// `class struct enum protocol extension let var func init subscript if
/// switch guard else for while repeat do catch` and on a preceding `}` or
/// label; it stops with "closure" on `=`, `;`, `return`, `throw`, `in`-less
/// statement boundaries, or when it reaches an enclosing expression scope.
/// Trailing-closure arguments after custom operators can be misclassified;
/// the set is fixed on purpose.
fn is_start_of_closure(f: &Formatter, i: usize) -> bool {
    let mut j = i;
    loop {
        let Some(p) = f.index_of_previous_significant(j) else {
            return false;
        };
        // crossing a statement boundary means the brace opens a bare
        // closure expression
        if f.tokens()[p + 1..j].iter().any(Token::is_linebreak)
            && token_ends_statement(f, p, None)
        {
            return true;
        }
        match &f.tokens()[p] {
            Token::Keyword(k) => match k.as_str() {
                "class" | "struct" | "enum" | "protocol" | "extension" | "let" | "var" | "func"
                | "init" | "subscript" | "if" | "switch" | "guard" | "else" | "for" | "while"
                | "repeat" | "do" | "catch" => return false,
                "return" | "throw" => return true,
                _ => j = p,
            },
            Token::EndOfScope(sc) => match sc.as_str() {
                ")" | "]" | ">" => match f.index_of_matching_open(p) {
                    Some(open) => j = open,
                    None => return false,
                },
                _ => return false,
            },
            Token::StartOfScope(_) => return true,
            Token::Symbol(sym) => match sym.as_str() {
                "=" | ";" => return true,
                _ => j = p,
            },
            _ => j = p,
        }
    }
}

#[cfg(test)]
mod tests;
