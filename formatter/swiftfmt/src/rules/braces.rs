//! Brace placement.
//!
//! `braces` moves the opening brace of a multi-line block onto the previous
//! line (K&R) or onto its own line (Allman). `else_on_same_line` joins a
//! dangling `}` with the `else` / `catch` / `repeat`-closing `while` that
//! follows it, or splits them in Allman mode.

use crate::state::Formatter;
use swiftfmt_tokens::Token;

pub fn braces(f: &mut Formatter) {
    if f.options().allman_braces {
        allman_braces(f);
    } else {
        knr_braces(f);
    }
}

/// Pull a `{` that starts its own line up to the preceding identifier,
/// keyword, or closing bracket. Comments between stay on their lines.
fn knr_braces(f: &mut Formatter) {
    f.for_each_token(Token::StartOfScope("{".to_string()), |f, i, _| {
        let Some(prev) = f.index_of_previous(i, |t| !t.is_whitespace()) else {
            return;
        };
        if !f.tokens()[prev].is_linebreak() {
            return;
        }
        let Some(attach) = f.index_of_previous_significant(i) else {
            return;
        };
        let target = &f.tokens()[attach];
        if !(target.is_identifier_or_keyword() || target.is_end_of_scope()) {
            return;
        }
        // Take the brace, its leading indent, and the line break it replaces;
        // comment lines between stay where they are (a trailing comment on
        // the attach line ends up after the brace).
        f.remove(i);
        let mut j = i;
        if j > 0 && f.tokens()[j - 1].is_whitespace() {
            f.remove(j - 1);
            j -= 1;
        }
        if j > 0 && f.tokens()[j - 1].is_linebreak() {
            f.remove(j - 1);
        }
        f.insert(attach + 1, Token::StartOfScope("{".to_string()));
        f.insert(attach + 1, Token::Whitespace(" ".to_string()));
    });
}

/// Push the `{` of a multi-line block onto its own line, indented like the
/// line it came from.
fn allman_braces(f: &mut Formatter) {
    let linebreak = f.options().linebreak.clone();
    f.for_each_token(Token::StartOfScope("{".to_string()), |f, i, _| {
        let Some(prev) = f.index_of_previous(i, |t| !t.is_whitespace()) else {
            return;
        };
        if f.tokens()[prev].is_linebreak() {
            return; // already there
        }
        let multiline = f
            .next_non_whitespace(i)
            .is_some_and(Token::is_linebreak);
        if !multiline {
            return;
        }
        let indent = f.indent_for_line(i).unwrap_or_default();
        let mut brace = i;
        if f.tokens()[brace - 1].is_whitespace() {
            f.remove(brace - 1);
            brace -= 1;
        }
        f.insert(brace, Token::Linebreak(linebreak.clone()));
        if !indent.is_empty() {
            f.insert(brace + 1, Token::Whitespace(indent));
        }
    });
}

/// Join (K&R) or split (Allman) the keyword that continues a closed block:
/// `else`, `catch`, or the `while` of a `repeat` loop. A `guard`'s `else`
/// precedes its block and is naturally unaffected.
pub fn else_on_same_line(f: &mut Formatter) {
    let allman = f.options().allman_braces;
    let linebreak = f.options().linebreak.clone();
    f.for_each(
        |t| matches!(t, Token::Keyword(k) if matches!(k.as_str(), "else" | "catch" | "while")),
        |f, i, t| {
            let Some(close) = f.index_of_previous_significant(i) else {
                return;
            };
            if f.tokens()[close] != Token::EndOfScope("}".to_string()) {
                return;
            }
            if t.text() == "while" && !closes_repeat(f, close) {
                return;
            }
            // the `}` must begin its own line
            let dangling = f
                .index_of_previous(close, |t| !t.is_whitespace())
                .map_or(true, |p| f.tokens()[p].is_linebreak());
            if !dangling {
                return;
            }
            let has_linebreak = f.tokens()[close + 1..i].iter().any(Token::is_linebreak);
            if allman {
                if !has_linebreak {
                    let indent = f.indent_for_line(close).unwrap_or_default();
                    let mut replacement = vec![Token::Linebreak(linebreak.clone())];
                    if !indent.is_empty() {
                        replacement.push(Token::Whitespace(indent));
                    }
                    f.replace_range(close + 1..i, replacement);
                }
            } else if has_linebreak {
                f.replace_range(close + 1..i, vec![Token::Whitespace(" ".to_string())]);
            }
        },
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

#[cfg(test)]
mod tests;
