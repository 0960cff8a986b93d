//! Vertical whitespace.
//!
//! Blank-line management after the indenter has run, trailing-whitespace
//! removal, the final newline, and header stripping.

use crate::state::Formatter;
use swiftfmt_tokens::Token;

/// Drop blank lines that sit directly before a closing bracket standing at
/// the end of its line, keeping exactly one line break.
pub fn blank_lines_at_end_of_scope(f: &mut Formatter) {
    if !f.options().remove_blank_lines {
        return;
    }
    f.for_each(
        |t| matches!(t, Token::EndOfScope(s) if matches!(s.as_str(), "}" | ")" | "]" | ">")),
        |f, i, _| {
            if f.next_non_whitespace(i).is_some_and(|t| !t.is_linebreak()) {
                return;
            }
            let mut first = None;
            let mut last = None;
            let mut j = i;
            while j > 0 {
                j -= 1;
                match &f.tokens()[j] {
                    Token::Linebreak(_) => {
                        first = Some(j);
                        if last.is_none() {
                            last = Some(j);
                        }
                    }
                    Token::Whitespace(_) => {}
                    _ => break,
                }
            }
            if let (Some(first), Some(last)) = (first, last) {
                if first != last {
                    f.remove_range(first..last);
                }
            }
        },
    );
}

/// Ensure a blank line separates the closing brace of a `class` / `struct` /
/// `extension` / `enum` body from whatever construct follows it. Joined
/// continuations (`else`, `catch`, a `repeat`'s `while`, closers, member
/// punctuation) and inline braces are left alone; `func` and `var` bodies
/// are not spaceable.
pub fn blank_lines_between_scopes(f: &mut Formatter) {
    if !f.options().insert_blank_lines {
        return;
    }
    let mut spaceable_stack: Vec<bool> = Vec::new();
    let mut pending_spaceable = false;
    let mut i = 0;
    while i < f.len() {
        match &f.tokens()[i] {
            Token::Keyword(k) => match k.as_str() {
                "class" | "struct" | "extension" | "enum" => pending_spaceable = true,
                "func" | "var" => pending_spaceable = false,
                _ => {}
            },
            Token::StartOfScope(s) if s == "{" => {
                spaceable_stack.push(pending_spaceable);
                pending_spaceable = false;
            }
            Token::EndOfScope(s) if s == "}" => {
                if spaceable_stack.pop() == Some(true) {
                    space_after_scope(f, i);
                }
            }
            _ => {}
        }
        i += 1;
    }
}

fn space_after_scope(f: &mut Formatter, close: usize) {
    let Some(next) = f.index_of_next_significant(close) else {
        return;
    };
    match &f.tokens()[next] {
        Token::EndOfScope(_) => return,
        Token::Symbol(s) if matches!(s.as_str(), "." | "," | ":") => return,
        Token::Keyword(k) if k == "else" || k == "catch" => return,
        Token::Keyword(k) if k == "while" && closes_repeat(f, close) => return,
        _ => {}
    }
    let linebreaks: Vec<usize> = (close + 1..next)
        .filter(|&j| f.tokens()[j].is_linebreak())
        .collect();
    // same line: an inline use; two or more: already spaced
    if linebreaks.len() != 1 {
        return;
    }
    f.insert(
        linebreaks[0] + 1,
        Token::Linebreak(f.options().linebreak.clone()),
    );
}

fn closes_repeat(f: &Formatter, close: usize) -> bool {
    let Some(open) = f.index_of_matching_open(close) else {
        return false;
    };
    matches!(
        f.previous_significant(open),
        Some(Token::Keyword(k)) if k == "repeat"
    )
}

/// Collapse runs of three or more line breaks to two (one blank line), and
/// trailing blank lines to a single final newline.
pub fn consecutive_blank_lines(f: &mut Formatter) {
    let fragment = f.options().fragment;
    let mut count = 0usize;
    let mut i = 0;
    while i < f.len() {
        let token = &f.tokens()[i];
        if token.is_linebreak() {
            count += 1;
            if count > 2 {
                f.remove(i);
                continue;
            }
        } else if !token.is_whitespace() {
            count = 0;
        }
        i += 1;
    }
    if !fragment && count > 1 {
        if let Some(j) = f.index_of_previous(f.len(), |t| t.is_linebreak()) {
            f.remove(j);
        }
    }
}

/// Remove whitespace that directly precedes a line break, and any at the
/// very end of the file. A blank line's indent survives when
/// `truncate_blank_lines` is off.
pub fn trailing_whitespace(f: &mut Formatter) {
    let truncate = f.options().truncate_blank_lines;
    f.for_each(
        |t| t.is_linebreak(),
        |f, i, _| {
            if i == 0 || !f.tokens()[i - 1].is_whitespace() {
                return;
            }
            let blank_line = i < 2 || f.tokens()[i - 2].is_linebreak();
            if !truncate && blank_line {
                return;
            }
            f.remove(i - 1);
        },
    );
    if f.tokens().last().is_some_and(Token::is_whitespace) {
        f.remove_last();
    }
}

/// Unless formatting a fragment, make sure the file ends with a line break.
pub fn linebreak_at_end_of_file(f: &mut Formatter) {
    if f.options().fragment || f.is_empty() {
        return;
    }
    let last = f.index_of_previous(f.len(), |t| !t.is_whitespace() && !t.is_error());
    if !matches!(last, Some(j) if f.tokens()[j].is_linebreak()) {
        let linebreak = Token::Linebreak(f.options().linebreak.clone());
        let len = f.len();
        f.insert(len, linebreak);
    }
}

/// Remove a leading `//` comment block (plus one trailing blank line).
/// `/*` headers are left alone.
pub fn strip_header(f: &mut Formatter) {
    if !f.options().strip_header || f.options().fragment {
        return;
    }
    if f.token_at(0) != Some(&Token::StartOfScope("//".to_string())) {
        return;
    }
    let mut end;
    let mut i = 0;
    loop {
        let Some(lb) = f.index_of_next(i, Token::is_linebreak) else {
            end = f.len();
            break;
        };
        end = lb + 1;
        match f.token_at(lb + 1) {
            Some(Token::StartOfScope(s)) if s == "//" => i = lb + 1,
            Some(t) if t.is_linebreak() => {
                end = lb + 2;
                break;
            }
            _ => break,
        }
    }
    f.remove_range(0..end);
}
