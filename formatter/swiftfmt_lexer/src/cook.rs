//! Token cooking layer.
//!
//! Transforms raw logos tokens into the formatter's token stream:
//!
//! - identifiers resolve against the keyword table
//! - comments split into scope delimiters, per-line leading whitespace, and
//!   body text, so the indenter can re-indent comment interiors
//! - string literals split into `"` scopes around an opaque body
//! - unlexable byte runs coalesce into single `Error` tokens
//!
//! Scope classification that needs lookahead or nesting context (generic
//! angle brackets, switch-case labels, operator-run merging) happens
//! afterwards in [`crate::scopes`].

use logos::Logos;
use swiftfmt_tokens::Token;

use crate::keywords;
use crate::raw::RawToken;

/// Scan `source` into cooked (but not yet scope-classified) tokens.
pub(crate) fn cook(source: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut lexer = RawToken::lexer(source);
    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(raw) => convert(raw, slice, &mut out),
            Err(()) => {
                // Coalesce runs of unlexable bytes into one error token.
                if let Some(Token::Error(prev)) = out.last_mut() {
                    prev.push_str(slice);
                } else {
                    out.push(Token::Error(slice.to_string()));
                }
            }
        }
    }
    out
}

fn convert(raw: RawToken, slice: &str, out: &mut Vec<Token>) {
    let token = match raw {
        RawToken::Space => Token::Whitespace(slice.to_string()),
        RawToken::Newline => Token::Linebreak(slice.to_string()),
        RawToken::LineComment => {
            out.push(Token::StartOfScope("//".to_string()));
            push_split_line(&slice[2..], out);
            return;
        }
        RawToken::BlockComment => {
            out.push(Token::StartOfScope("/*".to_string()));
            let terminated = slice.len() >= 4 && slice.ends_with("*/");
            let interior = if terminated {
                &slice[2..slice.len() - 2]
            } else {
                &slice[2..]
            };
            push_comment_interior(interior, out);
            if terminated {
                out.push(Token::EndOfScope("*/".to_string()));
            }
            return;
        }
        RawToken::StringLit => {
            out.push(Token::StartOfScope("\"".to_string()));
            let interior = &slice[1..slice.len() - 1];
            if !interior.is_empty() {
                out.push(Token::StringBody(interior.to_string()));
            }
            out.push(Token::EndOfScope("\"".to_string()));
            return;
        }
        RawToken::UnterminatedString => {
            // The linebreak that follows closes the scope.
            out.push(Token::StartOfScope("\"".to_string()));
            if slice.len() > 1 {
                out.push(Token::StringBody(slice[1..].to_string()));
            }
            return;
        }
        RawToken::Float
        | RawToken::Int
        | RawToken::HexInt
        | RawToken::BinInt
        | RawToken::OctInt => Token::Number(slice.to_string()),
        RawToken::Ident => {
            if keywords::is_keyword(slice) {
                Token::Keyword(slice.to_string())
            } else {
                Token::Identifier(slice.to_string())
            }
        }
        RawToken::BacktickIdent | RawToken::AnonArg => Token::Identifier(slice.to_string()),
        RawToken::DirectiveOrAttribute => match slice {
            "#if" => Token::StartOfScope(slice.to_string()),
            "#endif" => Token::EndOfScope(slice.to_string()),
            _ => Token::Keyword(slice.to_string()),
        },
        RawToken::LParen => Token::StartOfScope("(".to_string()),
        RawToken::RParen => Token::EndOfScope(")".to_string()),
        RawToken::LBracket => Token::StartOfScope("[".to_string()),
        RawToken::RBracket => Token::EndOfScope("]".to_string()),
        RawToken::LBrace => Token::StartOfScope("{".to_string()),
        RawToken::RBrace => Token::EndOfScope("}".to_string()),
        RawToken::Comma
        | RawToken::Semicolon
        | RawToken::Colon
        | RawToken::Lt
        | RawToken::Gt
        | RawToken::Arrow
        | RawToken::HalfOpenRange
        | RawToken::Dots
        | RawToken::Operator => Token::Symbol(slice.to_string()),
    };
    out.push(token);
}

/// Split a single-line text into leading whitespace plus body.
fn push_split_line(text: &str, out: &mut Vec<Token>) {
    let trimmed = text.trim_start_matches([' ', '\t']);
    let ws_len = text.len() - trimmed.len();
    if ws_len > 0 {
        out.push(Token::Whitespace(text[..ws_len].to_string()));
    }
    if !trimmed.is_empty() {
        out.push(Token::CommentBody(trimmed.to_string()));
    }
}

/// Split a block-comment interior into linebreak / whitespace / body tokens.
///
/// Nested `/* */` markers stay inside the body text; only the outermost
/// delimiters are scope tokens, which keeps `scope_at` balanced while the
/// payload round-trips verbatim.
fn push_comment_interior(text: &str, out: &mut Vec<Token>) {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' || bytes[i] == b'\r' {
            let len = if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                2
            } else {
                1
            };
            out.push(Token::Linebreak(text[i..i + len].to_string()));
            i += len;
            continue;
        }
        let seg_start = i;
        while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
            i += 1;
        }
        push_split_line(&text[seg_start..i], out);
    }
}
