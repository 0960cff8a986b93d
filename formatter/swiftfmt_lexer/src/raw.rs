//! Raw token definition.
//!
//! The logos-derived scanner output before classification. Unlike a compiler
//! lexer, nothing is skipped: whitespace runs, newlines, and comments are
//! tokens, because the formatter must reproduce the input byte-for-byte when
//! no rule changes anything.

use logos::{Lexer, Logos};

/// Raw token from logos (before cooking).
///
/// Note that `<` and `>` are always scanned as single characters. Generic
/// argument lists are recognized in a later pass over the cooked stream, and
/// leftover angles re-merge with adjacent operator runs (`<=`, `<<`, `>>`).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t]+")]
    Space,

    #[regex(r"\r\n|\n|\r")]
    Newline,

    #[regex(r"//[^\n\r]*", priority = 20)]
    LineComment,

    // The callback consumes the comment body, honoring nested `/* */` pairs.
    #[token("/*", lex_block_comment, priority = 20)]
    BlockComment,

    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*""#)]
    StringLit,

    // Missing closing quote: consumed to end of line, reported as a string
    // that the following linebreak closes.
    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*"#)]
    UnterminatedString,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?")]
    Float,

    #[regex(r"[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?")]
    Int,

    #[regex(r"0x[0-9a-fA-F][0-9a-fA-F_]*([pP][+-]?[0-9]+)?")]
    HexInt,

    #[regex(r"0b[01][01_]*")]
    BinInt,

    #[regex(r"0o[0-7][0-7_]*")]
    OctInt,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"`[a-zA-Z_][a-zA-Z0-9_]*`")]
    BacktickIdent,

    #[regex(r"\$[0-9]+")]
    AnonArg,

    // `@escaping`, `#if`, `#selector`, ...
    #[regex(r"[@#][a-zA-Z_][a-zA-Z0-9_]*")]
    DirectiveOrAttribute,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token("->", priority = 10)]
    Arrow,

    #[token("..<", priority = 10)]
    HalfOpenRange,

    #[regex(r"\.+")]
    Dots,

    // Operator-character runs. Excludes `.` (dot runs are separate so that
    // `?.` chains keep the `.` as its own token) and `<`/`>` (see above).
    #[regex(r"[-+*/%=!&|^~?]+")]
    Operator,
}

fn lex_block_comment(lex: &mut Lexer<RawToken>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                depth += 1;
                i += 2;
            }
            b'*' if bytes.get(i + 1) == Some(&b'/') => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    lex.bump(i);
                    return true;
                }
            }
            _ => i += 1,
        }
    }
    // Unterminated: consume the rest of the file.
    lex.bump(bytes.len());
    true
}
