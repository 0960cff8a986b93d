//! Operator and comment spacing.
//!
//! `space_around_operators` keeps a private scope stack so that a ternary
//! `?` (one with whitespace on both sides) opens a scope that the next
//! top-level `:` closes — the only way to tell a ternary colon from label,
//! dictionary, and type-annotation colons without an AST.

use crate::state::Formatter;
use swiftfmt_tokens::Token;

fn space() -> Token {
    Token::Whitespace(" ".to_string())
}

/// Identifier-like token that can end an operand.
fn is_lvalue(token: &Token) -> bool {
    match token {
        Token::Identifier(_) | Token::Number(_) | Token::EndOfScope(_) => true,
        Token::Symbol(s) => is_unwrap_run(s),
        _ => false,
    }
}

/// Token that can begin an operand.
fn is_rvalue(token: &Token) -> bool {
    matches!(
        token,
        Token::Identifier(_) | Token::Number(_) | Token::StartOfScope(_)
    )
}

/// A run of `?` / `!` — postfix unwraps that bind to their operand.
fn is_unwrap_run(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c == '?' || c == '!')
}

pub fn space_around_operators(f: &mut Formatter) {
    let mut scope_stack: Vec<Token> = Vec::new();
    let mut i = 0;
    while i < f.len() {
        let token = f.tokens()[i].clone();
        match &token {
            Token::StartOfScope(_) => scope_stack.push(token.clone()),
            Token::EndOfScope(s) => {
                if scope_stack
                    .last()
                    .is_some_and(|open| token.closes_scope(open))
                {
                    scope_stack.pop();
                }
                if s == "case" || s == "default" {
                    scope_stack.push(token.clone());
                }
            }
            Token::Linebreak(_) => {
                if scope_stack
                    .last()
                    .is_some_and(|open| token.closes_scope(open))
                {
                    scope_stack.pop();
                }
            }
            Token::Symbol(s) => i = space_symbol(f, i, s, &mut scope_stack),
            _ => {}
        }
        i += 1;
    }
}

/// Apply spacing around the symbol at `i`; returns its (possibly shifted)
/// index.
fn space_symbol(f: &mut Formatter, mut i: usize, s: &str, scope_stack: &mut Vec<Token>) -> usize {
    match s {
        ":" | "," | ";" => {
            let closes_ternary =
                s == ":" && scope_stack.last() == Some(&Token::Symbol("?".to_string()));
            if closes_ternary {
                scope_stack.pop();
                if i > 0 && !f.tokens()[i - 1].is_whitespace_or_linebreak() {
                    f.insert(i, space());
                    i += 1;
                }
            } else if i > 0
                && f.tokens()[i - 1].is_whitespace()
                && (i < 2 || !f.tokens()[i - 2].is_linebreak())
            {
                // no space before a separator mid-line
                f.remove(i - 1);
                i -= 1;
            }
            let selector = s == ":"
                && matches!(f.token_at(i + 1), Some(Token::Identifier(_)))
                && f.token_at(i + 2) == Some(&Token::Symbol(":".to_string()));
            let wanted = match f.token_at(i + 1) {
                None => false,
                Some(t) if t.is_whitespace_or_linebreak() => false,
                Some(Token::EndOfScope(_)) => false,
                _ => !selector,
            };
            if wanted {
                f.insert(i + 1, space());
            }
        }
        "?" => {
            let prev_open = i == 0 || f.tokens()[i - 1].is_whitespace_or_linebreak();
            let next_open = f
                .token_at(i + 1)
                .is_some_and(Token::is_whitespace_or_linebreak);
            if prev_open && next_open {
                // ternary: scope until the matching `:`
                scope_stack.push(Token::Symbol("?".to_string()));
            } else if !next_open
                && i > 0
                && matches!(&f.tokens()[i - 1], Token::Keyword(k) if k == "as" || k == "try")
            {
                f.insert(i + 1, space());
            }
        }
        "!" => {
            if i > 0
                && matches!(&f.tokens()[i - 1], Token::Keyword(k) if k == "as" || k == "try")
                && f.token_at(i + 1)
                    .is_some_and(|t| !t.is_whitespace_or_linebreak())
            {
                f.insert(i + 1, space());
            }
        }
        "." => {
            if f.token_at(i + 1).is_some_and(Token::is_whitespace) {
                f.remove(i + 1);
            }
            let Some(p) = f.index_of_previous(i, |t| !t.is_whitespace()) else {
                return i;
            };
            let infix_before = match &f.tokens()[p] {
                Token::Symbol(op) if is_unwrap_run(op) => {
                    // attached (`x?.y`) binds; a detached run (`a ?? .b`)
                    // is an infix operator
                    p > 0 && f.tokens()[p - 1].is_whitespace_or_linebreak()
                }
                Token::Symbol(_) => true,
                _ => false,
            };
            // only a completed operand pulls the dot against it; keywords
            // and labels keep their enum-shorthand dot detached
            let operand_before = match &f.tokens()[p] {
                Token::Identifier(_) | Token::Number(_) => true,
                Token::EndOfScope(c) => matches!(c.as_str(), ")" | "]" | ">" | "\""),
                Token::Symbol(op) if is_unwrap_run(op) => {
                    p == 0 || !f.tokens()[p - 1].is_whitespace_or_linebreak()
                }
                _ => false,
            };
            if infix_before {
                if p == i - 1 {
                    f.insert(i, space());
                    i += 1;
                }
            } else if operand_before && f.tokens()[i - 1].is_whitespace() {
                f.remove(i - 1);
                i -= 1;
            }
        }
        "->" => {
            if f.token_at(i + 1)
                .is_some_and(|t| !t.is_whitespace_or_linebreak())
            {
                f.insert(i + 1, space());
            }
            if i > 0 && !f.tokens()[i - 1].is_whitespace_or_linebreak() {
                f.insert(i, space());
                i += 1;
            }
        }
        "..." | "..<" => {} // the ranges rule owns these
        _ => {
            let infix = i > 0
                && is_lvalue(&f.tokens()[i - 1])
                && f.token_at(i + 1).is_some_and(is_rvalue);
            if infix {
                f.insert(i + 1, space());
                f.insert(i, space());
                i += 1;
            }
        }
    }
    i
}

/// A comment attached to code gets one space of separation.
pub fn space_around_comments(f: &mut Formatter) {
    f.for_each(
        |t| matches!(t, Token::StartOfScope(s) if s == "//" || s == "/*"),
        |f, i, _| {
            if i > 0 && !f.tokens()[i - 1].is_whitespace_or_linebreak() {
                f.insert(i, space());
            }
        },
    );
    f.for_each_token(Token::EndOfScope("*/".to_string()), |f, i, _| {
        if f.token_at(i + 1)
            .is_some_and(|t| !t.is_whitespace_or_linebreak())
        {
            f.insert(i + 1, space());
        }
    });
}

/// One space of padding inside comment delimiters, except doc and
/// playground markers (`///`, `//!`, `//:`, `/**`, `/*!`, `/*:`).
pub fn space_inside_comments(f: &mut Formatter) {
    f.for_each_token(Token::StartOfScope("/*".to_string()), |f, i, _| {
        let Some(Token::CommentBody(body)) = f.token_at(i + 1).cloned() else {
            return;
        };
        if body.starts_with(['*', '!', ':']) {
            return;
        }
        f.insert(i + 1, space());
    });
    f.for_each_token(Token::StartOfScope("//".to_string()), |f, i, _| {
        let Some(Token::CommentBody(body)) = f.token_at(i + 1).cloned() else {
            return;
        };
        if body.starts_with(['/', '!', ':']) {
            return;
        }
        f.insert(i + 1, space());
    });
    f.for_each_token(Token::EndOfScope("*/".to_string()), |f, i, _| {
        if i == 0 {
            return;
        }
        let prev = f.tokens()[i - 1].clone();
        if let Token::CommentBody(body) = prev {
            if !body.starts_with(['*', '!', ':']) && !body.ends_with([' ', '\t', '*']) {
                f.insert(i, space());
            }
        }
    });
}

#[cfg(test)]
mod tests;
